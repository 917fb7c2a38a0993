//! Formatting utilities for terminal output

use crate::core::Part;
use crate::game::Puzzle;
use unicode_width::UnicodeWidthStr;

/// Collapse whitespace runs to a single space, as HTML rendering does
///
/// # Examples
/// ```
/// use reveal_puzzle::output::formatters::display_text;
///
/// assert_eq!(display_text("a \n\t b"), "a b");
/// assert_eq!(display_text("「x」"), "「x」");
/// ```
#[must_use]
pub fn display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;

    for ch in text.chars() {
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }

    out
}

/// A blank of the same display width as `text`
///
/// Hidden parts keep their space in the answer line so the layout does not
/// shift as parts are revealed.
#[must_use]
pub fn placeholder(text: &str, fill: char) -> String {
    let width = display_text(text).width();
    std::iter::repeat_n(fill, width).collect()
}

/// Label for a part on a button
#[must_use]
pub fn button_label(part: &Part) -> String {
    let text = display_text(part.text());
    if text.trim().is_empty() {
        format!("{:?}", part.text())
    } else {
        text
    }
}

/// Render the answer line for the simple CLI mode
///
/// Line breaks always break the line; hidden significant parts are drawn with
/// `fill`, hidden filler as blanks.
#[must_use]
pub fn answer_line(puzzle: &Puzzle, fill: char) -> String {
    let mut line = String::new();

    for view in puzzle.revealed_parts() {
        let part = view.part;
        if part.element().is_some_and(crate::core::Element::is_line_break) {
            line.push_str("\n  ");
        } else if view.visible {
            line.push_str(&display_text(part.text()));
        } else if part.is_significant() {
            line.push_str(&placeholder(part.text(), fill));
        } else {
            line.push_str(&placeholder(part.text(), ' '));
        }
    }

    line
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "█".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionFlag;
    use crate::core::{ContentNode, Element};
    use crate::presentation::ButtonLayout;
    use crate::segmenter::segment;

    #[test]
    fn placeholder_matches_display_width() {
        assert_eq!(placeholder("a", '_'), "_");
        assert_eq!(placeholder("猫", '_'), "__");
        assert_eq!(placeholder(" \n ", ' '), " ");
    }

    #[test]
    fn button_label_shows_invisible_text_quoted() {
        assert_eq!(button_label(&Part::text_part("x", true)), "x");
        assert_eq!(button_label(&Part::text_part(" ", true)), "\" \"");
    }

    #[test]
    fn answer_line_hides_unrevealed_parts() {
        let parts = segment(&[
            ContentNode::text("「ab」"),
            ContentNode::Element(Element::new("br")),
            ContentNode::text("c"),
        ]);
        let mut puzzle = Puzzle::new(
            &parts,
            ButtonLayout::in_order(&parts),
            Box::new(CompletionFlag::new()),
        );

        assert_eq!(answer_line(&puzzle, '_'), "「__  \n  _");
        puzzle.press(0);
        assert_eq!(answer_line(&puzzle, '_'), "「a_  \n  _");
        puzzle.press(1);
        assert_eq!(answer_line(&puzzle, '_'), "「ab」\n  _");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_is_full() {
        assert_eq!(create_progress_bar(0.0, 0.0, 3), "███");
    }
}
