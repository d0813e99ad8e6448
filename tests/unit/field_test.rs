//! Observable fields and collections.

use avsin::state::{ObservableField, SelectableCollection, SelectionError, StringField};

#[test]
fn test_write_then_read() {
    let field = StringField::default();
    for value in ["", "S01", "  spaced  ", "-10", ""] {
        field.set(value);
        assert_eq!(field.get(), value);
    }
}

#[test]
fn test_subscribers_see_every_write_in_order() {
    let field: ObservableField<bool> = ObservableField::default();
    let rx = field.subscribe();

    field.set(true);
    field.set(false);
    field.set(true);

    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![true, false, true]);
    assert_eq!(field.revision(), 3);
}

#[test]
fn test_dropped_subscriber_does_not_block_writes() {
    let field = StringField::default();
    let rx = field.subscribe();
    drop(rx);
    field.set("still fine");
    assert_eq!(field.get(), "still fine");
}

#[test]
fn test_selection_must_be_an_option() {
    let transducers = SelectableCollection::with_options(["headphone", "1 speaker"]);
    assert_eq!(transducers.selection(), None);

    assert_eq!(
        transducers.select("2 speakers"),
        Err(SelectionError::NotAnOption("2 speakers".to_string()))
    );
    assert_eq!(transducers.selected(), "");

    transducers.populate(["2 speakers", "headphone"]);
    assert_eq!(transducers.options(), vec!["headphone", "1 speaker", "2 speakers"]);
    transducers.select("2 speakers").unwrap();
    assert_eq!(transducers.selection().as_deref(), Some("2 speakers"));
}

#[test]
fn test_selection_subscription() {
    let devices = SelectableCollection::with_options(["Built-in Output", "RME Fireface"]);
    let rx = devices.subscribe_selection();
    devices.select("RME Fireface").unwrap();
    devices.clear_selection();
    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec!["RME Fireface".to_string(), String::new()]
    );
}
