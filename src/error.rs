//! Crate-level error type.
//!
//! Arithmetic failures never show up here: dividing by zero is a state of
//! the calculator ([`CalculatorState::Error`](crate::CalculatorState::Error)),
//! not an error of the API. What remains are caller contract violations.

/// Error returned by the history controller and by event parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A scrub target lies past the end of the event log.
    ///
    /// Valid targets are `0..=total`. The caller is expected to clamp its
    /// slider range before scrubbing.
    #[error("scrub index {index} out of range (log holds {total} events)")]
    OutOfRange {
        /// The requested cursor position.
        index: usize,
        /// Total events in the log at the time of the call.
        total: usize,
    },

    /// A slider position that cannot be rounded to a log index
    /// (negative, NaN or infinite).
    #[error("invalid slider position {0}")]
    InvalidPosition(f64),

    /// Text that is not the label of any calculator key.
    #[error("unknown key label: {0:?}")]
    UnknownLabel(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
