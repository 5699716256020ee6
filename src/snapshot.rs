//! Read-only projections handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Everything a front end needs to redraw after a mutation.
///
/// Returned by [`History::apply`](crate::History::apply) and
/// [`History::scrub`](crate::History::scrub), so callers never have to
/// observe the controller for changes. Serializes to flat JSON:
///
/// ```text
/// {
///   "output": "12",
///   "history": "12+",
///   "total_count": 5,
///   "cursor": 3,
///   "is_error": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Snapshot {
    /// The formatted display text.
    pub output: String,

    /// Labels of the committed events, concatenated in order.
    pub history: String,

    /// Committed plus pending-redo events; the slider's upper bound.
    pub total_count: usize,

    /// Number of committed events; the slider's position.
    pub cursor: usize,

    /// Whether the calculator is in the error state.
    pub is_error: bool,
}

impl Snapshot {
    /// Create a new snapshot.
    pub fn new(
        output: String,
        history: String,
        total_count: usize,
        cursor: usize,
        is_error: bool,
    ) -> Self {
        Snapshot {
            output,
            history,
            total_count,
            cursor,
            is_error,
        }
    }

    /// Events available to scrub forward to.
    pub fn redo_len(&self) -> usize {
        self.total_count - self.cursor
    }
}
