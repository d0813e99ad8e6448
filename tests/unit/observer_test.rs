//! Observer attachment, replacement and dropped gestures.

use std::cell::RefCell;
use std::rc::Rc;

use avsin::contract::{FreeResponseObserver, FreeResponseUi, PassFailObserver, PassFailUi};
use avsin::coordinator::PresentationCoordinator;

#[derive(Default)]
struct Log(RefCell<Vec<String>>);

struct Named {
    name: &'static str,
    log: Rc<Log>,
}

impl PassFailObserver for Named {
    fn notify_correct_clicked(&self) {
        self.log.0.borrow_mut().push(format!("{}:correct", self.name));
    }

    fn notify_incorrect_clicked(&self) {
        self.log.0.borrow_mut().push(format!("{}:incorrect", self.name));
    }
}

fn observer(name: &'static str, log: &Rc<Log>) -> Rc<dyn PassFailObserver> {
    Rc::new(Named {
        name,
        log: Rc::clone(log),
    })
}

#[test]
fn test_second_attach_replaces_first() {
    let log = Rc::new(Log::default());
    let first = observer("first", &log);
    let second = observer("second", &log);
    let ui = PassFailUi::new(&PresentationCoordinator::new());

    ui.attach(&first);
    ui.notify_correct_clicked();
    ui.attach(&second);
    ui.notify_incorrect_clicked();
    ui.notify_correct_clicked();

    assert_eq!(
        *log.0.borrow(),
        vec!["first:correct", "second:incorrect", "second:correct"]
    );
}

#[test]
fn test_gestures_before_attach_are_dropped() {
    let log = Rc::new(Log::default());
    let ui = PassFailUi::new(&PresentationCoordinator::new());

    ui.notify_correct_clicked();
    ui.notify_incorrect_clicked();

    let late = observer("late", &log);
    ui.attach(&late);
    assert!(log.0.borrow().is_empty());
}

#[test]
fn test_detach_drops_gestures() {
    let log = Rc::new(Log::default());
    let only = observer("only", &log);
    let ui = PassFailUi::new(&PresentationCoordinator::new()).with_observer(&only);

    ui.notify_correct_clicked();
    ui.detach();
    ui.notify_correct_clicked();
    assert_eq!(*log.0.borrow(), vec!["only:correct"]);
}

/// Re-attaches a different observer from inside its own callback.
struct Handoff {
    ui: Rc<FreeResponseUi>,
    next: Rc<dyn FreeResponseObserver>,
    calls: RefCell<u32>,
}

impl FreeResponseObserver for Handoff {
    fn notify_submit_clicked(&self) {
        *self.calls.borrow_mut() += 1;
        self.ui.clear_free_response();
        self.ui.attach(&self.next);
    }
}

#[derive(Default)]
struct Counter(RefCell<u32>);

impl FreeResponseObserver for Counter {
    fn notify_submit_clicked(&self) {
        *self.0.borrow_mut() += 1;
    }
}

#[test]
fn test_observer_may_reenter_contract() {
    let ui = Rc::new(FreeResponseUi::new(&PresentationCoordinator::new()));
    let counter = Rc::new(Counter::default());
    let next: Rc<dyn FreeResponseObserver> = counter.clone();
    let handoff = Rc::new(Handoff {
        ui: Rc::clone(&ui),
        next,
        calls: RefCell::new(0),
    });
    let first: Rc<dyn FreeResponseObserver> = handoff.clone();
    ui.attach(&first);

    ui.set_free_response("a big cat");
    ui.notify_submit_clicked();
    ui.notify_submit_clicked();

    assert_eq!(*handoff.calls.borrow(), 1);
    assert_eq!(*counter.0.borrow(), 1);
    assert_eq!(ui.free_response(), "");
}
