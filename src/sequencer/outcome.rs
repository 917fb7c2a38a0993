//! Result of a single guess

/// What happened when a guess was attempted
///
/// A wrong guess is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess did not match; nothing changed
    Rejected,
    /// The guess matched and the cursor moved to `cursor`
    Accepted { cursor: usize },
    /// The guess matched and revealed the last part
    ///
    /// Reported once per puzzle.
    Completed,
}

impl GuessOutcome {
    /// Whether the guess changed the puzzle state
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Whether this guess finished the puzzle
    #[inline]
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
