#![allow(dead_code)]

use calcfold::{Event, History};

/// Parse a space-separated key sequence such as `"1 2 + 8 ="`.
pub fn keys(input: &str) -> Vec<Event> {
    input
        .split_whitespace()
        .map(|label| label.parse().unwrap())
        .collect()
}

/// A fresh history with every key of `input` applied.
pub fn history_of(input: &str) -> History {
    let mut history = History::new();
    for event in keys(input) {
        history.apply(event);
    }
    history
}

/// The first scenario: `12 + 8 =`.
pub fn twelve_plus_eight() -> History {
    history_of("1 2 + 8 =")
}
