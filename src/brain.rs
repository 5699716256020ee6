//! The calculator brain: a pure fold from key presses to calculator state.

use crate::event::{Command, Event, Operator};
use crate::format::{self, NumberFormat};
use serde::{Deserialize, Serialize};

/// A pure function that folds one event into the calculator state.
///
/// [`apply`] is the standard reducer. [`History`](crate::History) can be
/// built with another one through [`HistoryBuilder::reducer`](crate::HistoryBuilder::reducer),
/// as long as it stays pure: scrubbing replays it from scratch.
///
/// # Examples
///
/// ```
/// use calcfold::brain::{self, ReduceFn};
///
/// let reducer: ReduceFn = brain::apply;
/// ```
pub type ReduceFn = fn(CalculatorState, &Event) -> CalculatorState;

/// Where the fold currently stands.
///
/// Operand texts are kept exactly as typed (`"12."`, `"0.50"`) or, after a
/// computation, in canonical form. Formatting for the screen happens only in
/// [`output`](CalculatorState::output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculatorState {
    /// Only a left operand so far.
    LeftOnly { left: String },
    /// A left operand and a pending operator, waiting for the right operand.
    LeftOperatorPending { left: String, op: Operator },
    /// Left operand, operator and the right operand being typed.
    LeftOperatorRight {
        left: String,
        op: Operator,
        right: String,
    },
    /// An invalid computation happened. Only `AC` leaves this state.
    Error,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::LeftOnly {
            left: "0".to_string(),
        }
    }
}

impl CalculatorState {
    /// Fold one event into this state. Same as [`apply`].
    pub fn apply(self, event: &Event) -> Self {
        apply(self, event)
    }

    /// Display text with the default [`NumberFormat`].
    ///
    /// ```
    /// use calcfold::{brain, Event, Operator};
    ///
    /// let state = brain::fold(&[Event::Digit(5), Operator::Divide.into(), Event::Digit(0), Operator::Equal.into()]);
    /// assert_eq!(state.output(), "Error");
    /// ```
    pub fn output(&self) -> String {
        self.output_with(&NumberFormat::default())
    }

    /// Display text: the active operand, formatted, or the error text.
    pub fn output_with(&self, format: &NumberFormat) -> String {
        match self.active_operand() {
            Some(text) => format.format(text),
            None => format.error_text.clone(),
        }
    }

    /// The operand text the display is showing. `None` in the error state.
    ///
    /// While an operator is pending this is still the left operand.
    pub fn active_operand(&self) -> Option<&str> {
        match self {
            CalculatorState::LeftOnly { left } => Some(left),
            CalculatorState::LeftOperatorPending { left, .. } => Some(left),
            CalculatorState::LeftOperatorRight { right, .. } => Some(right),
            CalculatorState::Error => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CalculatorState::Error)
    }

    /// Replace the active operand text. The error state is left untouched.
    fn map_active(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            CalculatorState::LeftOnly { left } => CalculatorState::LeftOnly { left: f(left) },
            CalculatorState::LeftOperatorPending { left, op } => {
                CalculatorState::LeftOperatorPending { left: f(left), op }
            }
            CalculatorState::LeftOperatorRight { left, op, right } => {
                CalculatorState::LeftOperatorRight {
                    left,
                    op,
                    right: f(right),
                }
            }
            CalculatorState::Error => CalculatorState::Error,
        }
    }
}

/// Fold one event into the state.
///
/// Total and pure: never panics, never fails. Invalid arithmetic produces
/// [`CalculatorState::Error`], which absorbs every event except `AC`.
///
/// # Examples
///
/// ```
/// use calcfold::{brain, CalculatorState, Event, Operator};
///
/// let state = brain::apply(CalculatorState::default(), &Event::Digit(4));
/// let state = brain::apply(state, &Operator::Multiply.into());
/// assert_eq!(state.output(), "4");
/// ```
pub fn apply(state: CalculatorState, event: &Event) -> CalculatorState {
    match (state, *event) {
        (_, Event::Command(Command::Clear)) => CalculatorState::default(),
        (CalculatorState::Error, _) => CalculatorState::Error,
        (state, Event::Digit(d)) => apply_digit(state, d),
        (state, Event::DecimalPoint) => apply_dot(state),
        (state, Event::Operator(op)) => apply_operator(state, op),
        (state, Event::Command(Command::ToggleSign)) => state.map_active(toggle_sign),
        (state, Event::Command(Command::Percent)) => state.map_active(percent),
    }
}

/// Fold a whole event sequence, starting from `LeftOnly("0")`.
///
/// ```
/// use calcfold::{brain, Event, Operator};
///
/// let events = [Event::Digit(1), Event::Digit(2), Operator::Add.into(), Event::Digit(8), Operator::Equal.into()];
/// assert_eq!(brain::fold(&events).output(), "20");
/// ```
pub fn fold<'a>(events: impl IntoIterator<Item = &'a Event>) -> CalculatorState {
    fold_with(apply, events)
}

/// Fold a sequence with an arbitrary reducer.
pub fn fold_with<'a>(
    reducer: ReduceFn,
    events: impl IntoIterator<Item = &'a Event>,
) -> CalculatorState {
    events
        .into_iter()
        .fold(CalculatorState::default(), |state, event| reducer(state, event))
}

fn apply_digit(state: CalculatorState, d: u8) -> CalculatorState {
    if d > 9 {
        return state;
    }
    match state {
        CalculatorState::LeftOperatorPending { left, op } => CalculatorState::LeftOperatorRight {
            left,
            op,
            right: d.to_string(),
        },
        state => state.map_active(|text| push_digit(text, d)),
    }
}

fn push_digit(mut text: String, d: u8) -> String {
    if text == "0" {
        return d.to_string();
    }
    text.push(char::from(b'0' + d));
    text
}

fn apply_dot(state: CalculatorState) -> CalculatorState {
    match state {
        CalculatorState::LeftOperatorPending { left, op } => CalculatorState::LeftOperatorRight {
            left,
            op,
            right: "0.".to_string(),
        },
        state => state.map_active(|mut text| {
            if !text.contains('.') {
                text.push('.');
            }
            text
        }),
    }
}

fn apply_operator(state: CalculatorState, next: Operator) -> CalculatorState {
    match (state, next) {
        (CalculatorState::LeftOperatorRight { left, op, right }, Operator::Equal) => {
            match compute(&left, op, &right) {
                Some(result) => CalculatorState::LeftOnly { left: result },
                None => CalculatorState::Error,
            }
        }
        (state, Operator::Equal) => state,
        (CalculatorState::LeftOnly { left }, op) => {
            CalculatorState::LeftOperatorPending { left, op }
        }
        // Last operator wins; nothing to compute yet.
        (CalculatorState::LeftOperatorPending { left, .. }, op) => {
            CalculatorState::LeftOperatorPending { left, op }
        }
        (CalculatorState::LeftOperatorRight { left, op, right }, next) => {
            match compute(&left, op, &right) {
                Some(result) => CalculatorState::LeftOperatorPending {
                    left: result,
                    op: next,
                },
                None => CalculatorState::Error,
            }
        }
        (CalculatorState::Error, _) => CalculatorState::Error,
    }
}

fn compute(left: &str, op: Operator, right: &str) -> Option<String> {
    let value = op.eval(format::parse(left)?, format::parse(right)?)?;
    Some(format::canonical(value))
}

fn toggle_sign(text: String) -> String {
    if format::parse(&text).is_none_or(|v| v == 0.0) {
        return text;
    }
    match text.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{text}"),
    }
}

fn percent(text: String) -> String {
    match format::parse(&text) {
        Some(value) => format::canonical(value / 100.0),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(text: &str) -> CalculatorState {
        CalculatorState::LeftOnly {
            left: text.to_string(),
        }
    }

    #[test]
    fn leading_zero_is_replaced() {
        assert_eq!(apply(left("0"), &Event::Digit(0)), left("0"));
        assert_eq!(apply(left("0"), &Event::Digit(3)), left("3"));
        assert_eq!(apply(left("0."), &Event::Digit(0)), left("0.0"));
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        assert_eq!(apply(left("12"), &Event::Digit(10)), left("12"));
    }

    #[test]
    fn toggle_sign_is_textual() {
        assert_eq!(toggle_sign("1.".to_string()), "-1.");
        assert_eq!(toggle_sign("-2.5".to_string()), "2.5");
        assert_eq!(toggle_sign("0".to_string()), "0");
        assert_eq!(toggle_sign("0.00".to_string()), "0.00");
    }

    #[test]
    fn percent_divides_by_hundred() {
        assert_eq!(percent("50".to_string()), "0.5");
        assert_eq!(percent("-5".to_string()), "-0.05");
        assert_eq!(percent("0".to_string()), "0");
    }

    #[test]
    fn compute_rejects_division_by_zero() {
        assert_eq!(compute("5", Operator::Divide, "0"), None);
        assert_eq!(compute("5", Operator::Divide, "0.0"), None);
        assert_eq!(compute("5", Operator::Divide, "2"), Some("2.5".to_string()));
    }

    #[test]
    fn compute_rejects_overflow() {
        assert_eq!(compute("1e308", Operator::Multiply, "10"), None);
    }
}
