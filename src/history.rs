//! Bounded linear undo/redo.
//!
//! [`History`] owns the live value together with two stacks of full copies:
//! `past` (oldest first) and `future` (nearest-undone first). The live value
//! is never a member of either stack.
//!
//! Callers checkpoint *before* mutating:
//!
//! ```
//! use pagesmith::history::History;
//!
//! let mut history = History::new(vec![1, 2]);
//! history.record_checkpoint();
//! history.live_mut().push(3);
//!
//! assert!(history.undo());
//! assert_eq!(history.current(), &vec![1, 2]);
//! assert!(history.redo());
//! assert_eq!(history.current(), &vec![1, 2, 3]);
//! ```

use std::collections::VecDeque;

/// Maximum number of entries kept in `past`.
pub const HISTORY_LIMIT: usize = 30;

/// Undo/redo container around a live value.
#[derive(Debug, Clone)]
pub struct History<T> {
    /// The currently active value
    live: T,
    /// Earlier values, oldest at the front
    past: VecDeque<T>,
    /// Undone values, nearest at the front
    future: VecDeque<T>,
    /// Maximum length of `past`
    limit: usize,
}

impl<T: Clone> History<T> {
    /// Creates a history with [`HISTORY_LIMIT`] entries of undo.
    pub fn new(live: T) -> Self {
        Self::with_limit(live, HISTORY_LIMIT)
    }

    /// Creates a history with a custom undo depth (at least one entry).
    pub fn with_limit(live: T, limit: usize) -> Self {
        Self {
            live,
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// The live value.
    pub const fn current(&self) -> &T {
        &self.live
    }

    /// Mutable access to the live value.
    ///
    /// Does not checkpoint. Call [`History::record_checkpoint`] first if the
    /// change should be undoable.
    pub fn live_mut(&mut self) -> &mut T {
        &mut self.live
    }

    /// Replaces the live value without touching either stack.
    pub fn replace_live(&mut self, value: T) {
        self.live = value;
    }

    /// Copies the live value onto `past` and discards the redo branch.
    pub fn record_checkpoint(&mut self) {
        self.push_past(self.live.clone());
        self.future.clear();
    }

    /// Steps back one entry. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };

        let current = std::mem::replace(&mut self.live, previous);
        self.future.push_front(current);
        true
    }

    /// Steps forward one entry. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };

        let current = std::mem::replace(&mut self.live, next);
        self.push_past(current);
        true
    }

    /// Returns true if [`History::undo`] would change the live value.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if [`History::redo`] would change the live value.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Entries available to undo, oldest first.
    pub fn past(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.past.iter()
    }

    /// Entries available to redo, nearest first.
    pub fn future(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.future.iter()
    }

    /// Number of undo steps available.
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available.
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Maximum number of undo steps kept.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Drops both stacks, keeping the live value.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Appends to `past`, evicting from the front once over the limit.
    fn push_past(&mut self, value: T) {
        self.past.push_back(value);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
