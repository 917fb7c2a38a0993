//! Puzzle parts
//!
//! A part is the atomic unit of the puzzle: either a piece of text or a whole
//! markup element, tagged significant (must be guessed) or not (filler).

use super::Element;
use std::fmt;

/// Content carried by a part
///
/// Markup content is an owned deep copy of the source element, so renderers
/// can consume it without touching the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    Text(String),
    Markup(Element),
}

/// An ordered unit of puzzle content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    significant: bool,
    content: PartContent,
    text: String,
}

impl Part {
    /// Create a text part
    #[must_use]
    pub fn text_part(text: impl Into<String>, significant: bool) -> Self {
        let text = text.into();
        Self {
            significant,
            content: PartContent::Text(text.clone()),
            text,
        }
    }

    /// Create a markup part from an element
    #[must_use]
    pub fn markup_part(element: Element, significant: bool) -> Self {
        let text = element.text_content();
        Self {
            significant,
            content: PartContent::Markup(element),
            text,
        }
    }

    /// Whether the player has to guess this part
    #[inline]
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        self.significant
    }

    /// The part's content
    #[inline]
    #[must_use]
    pub const fn content(&self) -> &PartContent {
        &self.content
    }

    /// Rendered text of the part
    ///
    /// This is what guesses are compared by.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether two parts would be accepted for each other as a guess
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.text == other.text
    }

    /// The element, for markup parts
    #[must_use]
    pub const fn element(&self) -> Option<&Element> {
        match &self.content {
            PartContent::Markup(element) => Some(element),
            PartContent::Text(_) => None,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
