//! Cursor state machine over an immutable part sequence

use super::GuessOutcome;
use crate::core::Part;
use crate::segmenter::insignificant_run_len;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Reveal state of one puzzle
///
/// The cursor counts how many parts are revealed as a prefix of the sequence.
/// It starts past any leading filler, only moves forward, and ends at
/// `parts.len()`.
pub struct GuessSequencer<'a> {
    parts: &'a [Part],
    cursor: usize,
    consumed: FxHashSet<usize>,
    completion_signaled: bool,
}

impl<'a> GuessSequencer<'a> {
    /// Start a sequencer with leading filler already revealed
    ///
    /// # Examples
    /// ```
    /// use reveal_puzzle::core::Part;
    /// use reveal_puzzle::sequencer::GuessSequencer;
    ///
    /// let parts = [
    ///     Part::text_part("、", false),
    ///     Part::text_part("A", true),
    ///     Part::text_part("B", true),
    /// ];
    /// let sequencer = GuessSequencer::new(&parts);
    /// assert_eq!(sequencer.cursor(), 1);
    /// ```
    #[must_use]
    pub fn new(parts: &'a [Part]) -> Self {
        Self {
            parts,
            cursor: insignificant_run_len(parts, 0),
            consumed: FxHashSet::default(),
            completion_signaled: false,
        }
    }

    /// Try to reveal the next part with the part at `candidate`
    ///
    /// The guess is accepted when `candidate` is an unused significant part
    /// whose text equals the text of the part at the cursor. Any part with the
    /// same text will do, not only the one at the cursor itself.
    ///
    /// On acceptance the candidate is marked consumed and the cursor moves past
    /// the target and any filler directly after it. On rejection nothing
    /// changes.
    ///
    /// # Examples
    /// ```
    /// use reveal_puzzle::core::Part;
    /// use reveal_puzzle::sequencer::{GuessOutcome, GuessSequencer};
    ///
    /// let parts = [
    ///     Part::text_part("A", true),
    ///     Part::text_part(" ", false),
    ///     Part::text_part("B", true),
    /// ];
    /// let mut sequencer = GuessSequencer::new(&parts);
    ///
    /// assert_eq!(sequencer.attempt_guess(2), GuessOutcome::Rejected);
    /// assert_eq!(sequencer.attempt_guess(0), GuessOutcome::Accepted { cursor: 2 });
    /// assert_eq!(sequencer.attempt_guess(2), GuessOutcome::Completed);
    /// ```
    pub fn attempt_guess(&mut self, candidate: usize) -> GuessOutcome {
        let Some(target) = self.target() else {
            return GuessOutcome::Rejected;
        };
        let Some(guess) = self.parts.get(candidate) else {
            return GuessOutcome::Rejected;
        };

        if !guess.is_significant() || self.consumed.contains(&candidate) || !guess.matches(target)
        {
            debug!(candidate, cursor = self.cursor, "guess rejected");
            return GuessOutcome::Rejected;
        }

        self.consumed.insert(candidate);
        let next = self.cursor + 1;
        self.cursor = next + insignificant_run_len(self.parts, next);
        debug!(candidate, cursor = self.cursor, "guess accepted");

        if self.is_complete() && !self.completion_signaled {
            self.completion_signaled = true;
            return GuessOutcome::Completed;
        }

        GuessOutcome::Accepted {
            cursor: self.cursor,
        }
    }

    /// Number of parts revealed so far
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every part is revealed
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.cursor >= self.parts.len()
    }

    /// Whether the part at `index` was already used for a correct guess
    #[inline]
    #[must_use]
    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.contains(&index)
    }

    /// Whether the part at `index` is currently visible
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self, index: usize) -> bool {
        index < self.cursor
    }

    /// The part the next guess has to match
    #[must_use]
    pub fn target(&self) -> Option<&'a Part> {
        self.parts.get(self.cursor)
    }

    /// The part sequence this sequencer walks
    #[inline]
    #[must_use]
    pub const fn parts(&self) -> &'a [Part] {
        self.parts
    }

    /// Count of significant parts not yet revealed
    #[must_use]
    pub fn remaining_significant(&self) -> usize {
        self.parts
            .get(self.cursor..)
            .map_or(0, |rest| rest.iter().filter(|p| p.is_significant()).count())
    }
}
