//! Puzzle facade
//!
//! Ties together the part sequence, the button layout, the guess sequencer and
//! the completion hook. Renderers only read from it; every player action goes
//! through [`Puzzle::press`].

use crate::completion::CompletionHook;
use crate::core::Part;
use crate::presentation::ButtonLayout;
use crate::sequencer::{GuessOutcome, GuessSequencer};
use tracing::info;

/// One puzzle being played
pub struct Puzzle<'a> {
    parts: &'a [Part],
    layout: ButtonLayout,
    sequencer: GuessSequencer<'a>,
    hook: Box<dyn CompletionHook + 'a>,
}

/// A button as the renderer should show it
#[derive(Debug, Clone, Copy)]
pub struct ButtonView<'a> {
    pub button: usize,
    pub part_index: usize,
    pub part: &'a Part,
    pub enabled: bool,
}

/// A part as the renderer should show it
#[derive(Debug, Clone, Copy)]
pub struct PartView<'a> {
    pub index: usize,
    pub part: &'a Part,
    pub visible: bool,
}

impl<'a> Puzzle<'a> {
    /// Build a puzzle from segmented parts
    ///
    /// # Examples
    /// ```
    /// use reveal_puzzle::completion::CompletionFlag;
    /// use reveal_puzzle::core::ContentNode;
    /// use reveal_puzzle::game::Puzzle;
    /// use reveal_puzzle::presentation::ButtonLayout;
    /// use reveal_puzzle::segmenter::segment;
    ///
    /// let parts = segment(&[ContentNode::text("hi!")]);
    /// let done = CompletionFlag::new();
    /// let mut puzzle = Puzzle::new(&parts, ButtonLayout::in_order(&parts), Box::new(done.clone()));
    ///
    /// for button in 0..3 {
    ///     puzzle.press(button);
    /// }
    /// assert!(puzzle.is_complete());
    /// assert!(done.is_set());
    /// ```
    #[must_use]
    pub fn new(
        parts: &'a [Part],
        layout: ButtonLayout,
        hook: Box<dyn CompletionHook + 'a>,
    ) -> Self {
        Self {
            parts,
            layout,
            sequencer: GuessSequencer::new(parts),
            hook,
        }
    }

    /// Press the button at position `button` in the layout
    ///
    /// Unknown buttons are rejected like any wrong guess.
    pub fn press(&mut self, button: usize) -> GuessOutcome {
        match self.layout.part_at(button) {
            Some(part_index) => self.guess(part_index),
            None => GuessOutcome::Rejected,
        }
    }

    /// Guess with the part at `part_index` directly
    ///
    /// Fires the completion hook when this guess solves the puzzle.
    pub fn guess(&mut self, part_index: usize) -> GuessOutcome {
        let outcome = self.sequencer.attempt_guess(part_index);

        if outcome.is_completed() {
            info!(parts = self.parts.len(), "puzzle solved");
            self.hook.notify_complete();
        }

        outcome
    }

    /// Buttons in presentation order
    pub fn buttons(&self) -> impl Iterator<Item = ButtonView<'a>> + '_ {
        let parts = self.parts;
        let sequencer = &self.sequencer;

        self.layout
            .iter()
            .enumerate()
            .map(move |(button, part_index)| ButtonView {
                button,
                part_index,
                part: &parts[part_index],
                enabled: !sequencer.is_consumed(part_index),
            })
    }

    /// Parts in reading order with their visibility
    pub fn revealed_parts(&self) -> impl Iterator<Item = PartView<'a>> + '_ {
        let sequencer = &self.sequencer;

        self.parts
            .iter()
            .enumerate()
            .map(move |(index, part)| PartView {
                index,
                part,
                visible: sequencer.is_revealed(index),
            })
    }

    /// Text revealed so far
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.parts[..self.sequencer.cursor()]
            .iter()
            .map(Part::text)
            .collect()
    }

    /// (revealed parts, total parts)
    #[must_use]
    pub const fn progress(&self) -> (usize, usize) {
        (self.sequencer.cursor(), self.parts.len())
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    #[inline]
    #[must_use]
    pub const fn sequencer(&self) -> &GuessSequencer<'a> {
        &self.sequencer
    }

    #[inline]
    #[must_use]
    pub const fn layout(&self) -> &ButtonLayout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub const fn parts(&self) -> &'a [Part] {
        self.parts
    }

    /// Number of buttons
    #[inline]
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.layout.len()
    }
}
