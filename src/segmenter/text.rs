//! Character-level splitting of text runs

use crate::core::{Part, is_significant_char};

/// Buffer of characters sharing one significance
///
/// A significant buffer never grows past one character, so every significant
/// character becomes its own part while filler runs collapse into one.
#[derive(Default)]
struct Accumulator {
    text: String,
    significant: bool,
}

impl Accumulator {
    fn push(&mut self, ch: char, parts: &mut Vec<Part>) {
        let significant = is_significant_char(ch);

        if !self.text.is_empty() && (self.significant != significant || self.significant) {
            self.flush(parts);
        }

        self.text.push(ch);
        self.significant = significant;
    }

    fn flush(&mut self, parts: &mut Vec<Part>) {
        if self.text.is_empty() {
            return;
        }
        parts.push(Part::text_part(std::mem::take(&mut self.text), self.significant));
    }
}

/// Split one text run into parts, appending them to `parts`
///
/// Accumulation never crosses the end of `text`.
///
/// # Examples
/// ```
/// use reveal_puzzle::segmenter::segment_text;
///
/// let mut parts = Vec::new();
/// segment_text("ab  c", &mut parts);
/// let texts: Vec<&str> = parts.iter().map(|p| p.text()).collect();
/// assert_eq!(texts, ["a", "b", "  ", "c"]);
/// ```
pub fn segment_text(text: &str, parts: &mut Vec<Part>) {
    let mut acc = Accumulator::default();

    for ch in text.chars() {
        acc.push(ch, parts);
    }

    acc.flush(parts);
}
