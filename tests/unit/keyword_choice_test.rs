//! Keyword choice marking.

use std::cell::RefCell;
use std::rc::Rc;

use avsin::contract::{KeywordChoiceObserver, KeywordChoiceUi};
use avsin::coordinator::PresentationCoordinator;

fn ui() -> KeywordChoiceUi {
    KeywordChoiceUi::new(&PresentationCoordinator::new())
}

fn flags(ui: &KeywordChoiceUi) -> [bool; 3] {
    [
        ui.first_keyword_correct(),
        ui.second_keyword_correct(),
        ui.third_keyword_correct(),
    ]
}

#[test]
fn test_mark_first_correct_touches_only_first() {
    for initial in [[false, false, false], [false, true, false], [true, true, true]] {
        let ui = ui();
        if initial[1] {
            ui.mark_second_keyword_correct();
        }
        if initial[2] {
            ui.mark_third_keyword_correct();
        }
        ui.mark_first_keyword_correct();
        assert_eq!(flags(&ui), [true, initial[1], initial[2]]);
    }
}

#[test]
fn test_reset_from_any_state() {
    let ui = ui();
    ui.mark_first_keyword_correct();
    ui.mark_third_keyword_correct();
    ui.set_flagged(true);

    ui.reset();
    assert_eq!(flags(&ui), [false, false, false]);
    assert!(!ui.flagged());

    ui.reset();
    assert_eq!(flags(&ui), [false, false, false]);
}

#[test]
fn test_all_wrong_regardless_of_prior_state() {
    let ui = ui();
    ui.all_wrong();
    assert_eq!(flags(&ui), [false, false, false]);

    ui.mark_first_keyword_correct();
    ui.mark_second_keyword_correct();
    ui.mark_third_keyword_correct();
    ui.all_wrong();
    assert_eq!(flags(&ui), [false, false, false]);
}

#[test]
fn test_mark_incorrect() {
    let ui = ui();
    ui.mark_first_keyword_correct();
    ui.mark_second_keyword_correct();
    ui.mark_second_keyword_incorrect();
    assert_eq!(flags(&ui), [true, false, false]);
}

#[derive(Default)]
struct Clicks(RefCell<Vec<&'static str>>);

impl KeywordChoiceObserver for Clicks {
    fn notify_first_keyword_button_clicked(&self) {
        self.0.borrow_mut().push("first");
    }
    fn notify_second_keyword_button_clicked(&self) {
        self.0.borrow_mut().push("second");
    }
    fn notify_third_keyword_button_clicked(&self) {
        self.0.borrow_mut().push("third");
    }
    fn notify_all_wrong_button_clicked(&self) {
        self.0.borrow_mut().push("all_wrong");
    }
    fn notify_reset_button_clicked(&self) {
        self.0.borrow_mut().push("reset");
    }
    fn notify_submit_clicked(&self) {
        self.0.borrow_mut().push("submit");
    }
}

#[test]
fn test_gestures_in_user_order() {
    let clicks = Rc::new(Clicks::default());
    let observer: Rc<dyn KeywordChoiceObserver> = clicks.clone();
    let ui = ui().with_observer(&observer);

    ui.notify_third_keyword_button_clicked();
    ui.notify_first_keyword_button_clicked();
    ui.notify_reset_button_clicked();
    ui.notify_second_keyword_button_clicked();
    ui.notify_all_wrong_button_clicked();
    ui.notify_submit_clicked();

    assert_eq!(
        *clicks.0.borrow(),
        vec!["third", "first", "reset", "second", "all_wrong", "submit"]
    );
    assert_eq!(flags(&ui), [false, false, false]);
}
