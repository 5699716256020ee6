use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An arithmetic operator key.
///
/// `Equal` is grouped with the operators because it shares their key row
/// and, like them, closes the operand being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
}

impl Operator {
    /// The key label, as rendered in the history description.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Equal => "=",
        }
    }

    /// Apply a binary operator to two values.
    ///
    /// Returns `None` when the result is not a finite number (division by
    /// zero, overflow) and for `Equal`, which has no arithmetic of its own.
    pub fn eval(self, left: f64, right: f64) -> Option<f64> {
        let value = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide if right == 0.0 => return None,
            Operator::Divide => left / right,
            Operator::Equal => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// A command key: editing actions that do not start a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Clear,
    ToggleSign,
    Percent,
}

impl Command {
    /// The key label, as rendered in the history description.
    pub fn label(self) -> &'static str {
        match self {
            Command::Clear => "AC",
            Command::ToggleSign => "+/-",
            Command::Percent => "%",
        }
    }
}

/// One key press. Immutable, compared by value.
///
/// Events are the only input of the calculator: the state is always the
/// fold of [`brain::apply`](crate::brain::apply) over the committed events.
///
/// # Examples
///
/// ```
/// use calcfold::{Event, Operator};
///
/// let plus: Event = "+".parse().unwrap();
/// assert_eq!(plus, Event::Operator(Operator::Add));
/// assert_eq!(Event::Digit(7).label(), "7");
/// assert_eq!(Event::digit(12), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// A digit key, `0..=9`. Use [`Event::digit`] for a checked constructor;
    /// the brain ignores payloads above 9.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Command(Command),
}

impl Event {
    /// The calculator keypad, row by row, top to bottom.
    pub const KEYPAD: [&'static [Event]; 5] = [
        &[
            Event::Command(Command::Clear),
            Event::Command(Command::ToggleSign),
            Event::Command(Command::Percent),
            Event::Operator(Operator::Divide),
        ],
        &[
            Event::Digit(7),
            Event::Digit(8),
            Event::Digit(9),
            Event::Operator(Operator::Multiply),
        ],
        &[
            Event::Digit(4),
            Event::Digit(5),
            Event::Digit(6),
            Event::Operator(Operator::Subtract),
        ],
        &[
            Event::Digit(1),
            Event::Digit(2),
            Event::Digit(3),
            Event::Operator(Operator::Add),
        ],
        &[
            Event::Digit(0),
            Event::DecimalPoint,
            Event::Operator(Operator::Equal),
        ],
    ];

    /// Checked digit constructor. Returns `None` for anything above 9.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Event::Digit(d))
    }

    /// The fixed display label of this key.
    ///
    /// Labels are what [`History::history_description`](crate::History::history_description)
    /// concatenates.
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Event::Digit(d) => DIGITS.get(usize::from(*d)).copied().unwrap_or("?"),
            Event::DecimalPoint => ".",
            Event::Operator(op) => op.label(),
            Event::Command(cmd) => cmd.label(),
        }
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Event::Operator(op)
    }
}

impl From<Command> for Event {
    fn from(cmd: Command) -> Self {
        Event::Command(cmd)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Event {
    type Err = Error;

    /// Parse a key label. Besides the exact labels, accepts the ASCII
    /// spellings `*`, `x`, `/`, `C` and `±`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let event = match s.trim() {
            "." | "," => Event::DecimalPoint,
            "+" => Operator::Add.into(),
            "-" | "−" => Operator::Subtract.into(),
            "×" | "*" | "x" => Operator::Multiply.into(),
            "÷" | "/" => Operator::Divide.into(),
            "=" => Operator::Equal.into(),
            "AC" | "C" | "ac" | "c" => Command::Clear.into(),
            "+/-" | "±" => Command::ToggleSign.into(),
            "%" => Command::Percent.into(),
            other => match other.as_bytes() {
                [b @ b'0'..=b'9'] => Event::Digit(b - b'0'),
                _ => return Err(Error::UnknownLabel(s.to_string())),
            },
        };
        Ok(event)
    }
}
