mod common;

use calcfold::{brain, CalculatorState, Error, Event, History, NumberFormat};
use common::keys;

#[test]
fn test_builder_defaults() {
    let history = History::builder().build().unwrap();
    assert!(history.is_empty());
    assert_eq!(history.current_output(), "0");
    assert_eq!(*history.format(), NumberFormat::default());
}

#[test]
fn test_builder_seeds_events() {
    let history = History::builder()
        .events(keys("1 2 + 8 ="))
        .build()
        .unwrap();
    assert_eq!(history.current_output(), "20");
    assert_eq!(history.cursor(), 5);
    assert_eq!(history.total_count(), 5);
}

#[test]
fn test_builder_events_accumulate() {
    let history = History::builder()
        .events(keys("1 2"))
        .events(keys("+ 8 ="))
        .build()
        .unwrap();
    assert_eq!(history.history_description(), "12+8=");
}

#[test]
fn test_builder_cursor() {
    let history = History::builder()
        .events(keys("1 2 + 8 ="))
        .cursor(3)
        .build()
        .unwrap();
    assert_eq!(history.current_output(), "12");
    assert_eq!(history.pending_redo(), keys("8 =").as_slice());
    assert_eq!(history.total_count(), 5);
}

#[test]
fn test_builder_cursor_out_of_range() {
    let err = History::builder()
        .events(keys("1 2"))
        .cursor(3)
        .build()
        .unwrap_err();
    assert_eq!(err, Error::OutOfRange { index: 3, total: 2 });
}

#[test]
fn test_builder_format() {
    let mut history = History::builder()
        .format(
            NumberFormat::default()
                .with_grouping(true)
                .with_max_fraction_digits(2)
                .with_error_text("E"),
        )
        .build()
        .unwrap();
    for event in keys("1 2 3 4 5 6 7 . 8 9 1") {
        history.apply(event);
    }
    assert_eq!(history.current_output(), "1,234,567.89");

    for event in keys("÷ 0 =") {
        history.apply(event);
    }
    assert_eq!(history.current_output(), "E");
}

fn ignore_percent(state: CalculatorState, event: &Event) -> CalculatorState {
    match event {
        Event::Command(calcfold::Command::Percent) => state,
        _ => brain::apply(state, event),
    }
}

#[test]
fn test_builder_custom_reducer_used_for_apply_and_scrub() {
    let mut history = History::builder().reducer(ignore_percent).build().unwrap();
    for event in keys("5 0 % % +") {
        history.apply(event);
    }
    assert_eq!(history.current_output(), "50");

    history.scrub(3).unwrap();
    assert_eq!(history.current_output(), "50");
    assert_eq!(history.total_count(), 5);
}

#[test]
fn test_builder_chaining() {
    let history = History::builder()
        .format(NumberFormat::default())
        .reducer(brain::apply)
        .events([Event::Digit(4), Event::Digit(2)])
        .cursor(1)
        .build()
        .unwrap();
    assert_eq!(history.current_output(), "4");
    assert_eq!(history.snapshot().redo_len(), 1);
}
