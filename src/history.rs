use crate::brain::{self, CalculatorState, ReduceFn};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::format::NumberFormat;
use crate::snapshot::Snapshot;

/// The history controller: an in-memory event log split at a cursor.
///
/// Events before the cursor are *committed* and define the current state.
/// Events after it are kept for redo: they survive scrubbing back and forth
/// and are dropped the moment a new event is applied.
///
/// # Examples
///
/// ```
/// use calcfold::{Event, History, Operator};
///
/// let mut history = History::new();
/// for event in [Event::Digit(1), Event::Digit(2), Operator::Add.into(), Event::Digit(8), Operator::Equal.into()] {
///     history.apply(event);
/// }
/// assert_eq!(history.current_output(), "20");
///
/// let snap = history.scrub(3).unwrap();
/// assert_eq!(snap.output, "12");
/// assert_eq!(snap.history, "12+");
/// assert_eq!(snap.total_count, 5);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    committed: Vec<Event>,
    redo: Vec<Event>,
    state: CalculatorState,
    reducer: ReduceFn,
    format: NumberFormat,
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

impl History {
    /// An empty log: cursor at 0, state `LeftOnly("0")`.
    pub fn new() -> Self {
        History {
            committed: Vec::new(),
            redo: Vec::new(),
            state: CalculatorState::default(),
            reducer: brain::apply,
            format: NumberFormat::default(),
        }
    }

    /// Create a builder for configuring the display format, the reducer,
    /// or a pre-recorded log.
    pub fn builder() -> HistoryBuilder {
        HistoryBuilder::new()
    }

    /// Record a key press.
    ///
    /// Drops any pending-redo events, appends `event` to the committed
    /// segment and folds it onto the current state. Never fails.
    pub fn apply(&mut self, event: Event) -> Snapshot {
        if !self.redo.is_empty() {
            log::debug!(
                "discarding {} redo events at cursor {}",
                self.redo.len(),
                self.committed.len()
            );
            self.redo.clear();
        }
        let state = std::mem::take(&mut self.state);
        self.state = (self.reducer)(state, &event);
        self.committed.push(event);
        log::trace!("applied {event} -> {:?}", self.state);
        self.snapshot()
    }

    /// Move the cursor to `index`, keeping every event.
    ///
    /// The state is rebuilt by replaying the new committed segment from
    /// `LeftOnly("0")`; transitions cannot be undone step by step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > total_count()`.
    pub fn scrub(&mut self, index: usize) -> Result<Snapshot> {
        let total = self.total_count();
        if index > total {
            log::warn!("rejected scrub to {index}, log holds {total} events");
            return Err(Error::OutOfRange { index, total });
        }

        let cursor = self.committed.len();
        if index < cursor {
            let mut moved = self.committed.split_off(index);
            moved.append(&mut self.redo);
            self.redo = moved;
        } else if index > cursor {
            let moved: Vec<Event> = self.redo.drain(..index - cursor).collect();
            self.committed.extend(moved);
        }

        self.state = brain::fold_with(self.reducer, &self.committed);
        log::debug!("scrubbed from {cursor} to {index}, replayed {index} events");
        Ok(self.snapshot())
    }

    /// Scrub to a continuous slider position, rounded to the nearest event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] for negative, NaN or infinite
    /// positions and [`Error::OutOfRange`] past the end of the log.
    pub fn slide(&mut self, position: f64) -> Result<Snapshot> {
        let rounded = position.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return Err(Error::InvalidPosition(position));
        }
        let index = if rounded > usize::MAX as f64 {
            usize::MAX
        } else {
            rounded as usize
        };
        self.scrub(index)
    }

    /// The formatted display text.
    pub fn current_output(&self) -> String {
        self.state.output_with(&self.format)
    }

    /// Labels of the committed events, concatenated in order.
    pub fn history_description(&self) -> String {
        self.committed.iter().map(Event::label).collect()
    }

    /// Committed plus pending-redo events.
    pub fn total_count(&self) -> usize {
        self.committed.len() + self.redo.len()
    }

    /// The cursor position, equal to the number of committed events.
    pub fn cursor(&self) -> usize {
        self.committed.len()
    }

    /// Events that define the current state.
    pub fn committed(&self) -> &[Event] {
        &self.committed
    }

    /// Events after the cursor, kept for scrubbing forward.
    pub fn pending_redo(&self) -> &[Event] {
        &self.redo
    }

    /// The whole log in order, committed then pending-redo.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.committed.iter().chain(self.redo.iter())
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// True when no event was ever recorded (or all were discarded).
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// All projections at once.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.current_output(),
            self.history_description(),
            self.total_count(),
            self.cursor(),
            self.state.is_error(),
        )
    }
}

/// Builder for configuring a [`History`].
///
/// # Examples
///
/// ```
/// use calcfold::{Event, History, NumberFormat};
///
/// let history = History::builder()
///     .format(NumberFormat::default().with_grouping(true))
///     .events([Event::Digit(1), Event::Digit(0), Event::Digit(0), Event::Digit(0)])
///     .cursor(4)
///     .build()
///     .unwrap();
/// assert_eq!(history.current_output(), "1,000");
/// ```
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    format: NumberFormat,
    reducer: ReduceFn,
    events: Vec<Event>,
    cursor: Option<usize>,
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        HistoryBuilder::new()
    }
}

impl HistoryBuilder {
    pub fn new() -> Self {
        HistoryBuilder {
            format: NumberFormat::default(),
            reducer: brain::apply,
            events: Vec::new(),
            cursor: None,
        }
    }

    /// Display format for [`History::current_output`].
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the reducer. It must be pure; see [`ReduceFn`].
    pub fn reducer(mut self, reducer: ReduceFn) -> Self {
        self.reducer = reducer;
        self
    }

    /// Seed the log with recorded events. Appends to anything added before.
    pub fn events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    /// Start with the cursor at `index` instead of the end of the log.
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }

    /// Build the history, replaying the seeded events up to the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the cursor lies past the seeded
    /// events.
    pub fn build(self) -> Result<History> {
        let total = self.events.len();
        let mut history = History {
            committed: self.events,
            redo: Vec::new(),
            state: CalculatorState::default(),
            reducer: self.reducer,
            format: self.format,
        };
        history.scrub(self.cursor.unwrap_or(total))?;
        Ok(history)
    }
}
