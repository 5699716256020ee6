pub mod brain;
mod error;
mod event;
mod format;
mod history;
mod snapshot;

pub use brain::{CalculatorState, ReduceFn};
pub use error::{Error, Result};
pub use event::{Command, Event, Operator};
pub use format::NumberFormat;
pub use history::{History, HistoryBuilder};
pub use snapshot::Snapshot;
