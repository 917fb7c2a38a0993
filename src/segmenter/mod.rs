//! Segmentation of source content into puzzle parts
//!
//! Elements become single atomic parts; text runs are split character by
//! character, with runs of filler characters merged into one part.

mod text;

pub use text::segment_text;

use crate::core::{ContentNode, Part};
use tracing::debug;

/// Split a sequence of content nodes into ordered parts
///
/// Parts come out in reading order and concatenating their text reproduces the
/// text of `nodes` exactly.
///
/// # Examples
/// ```
/// use reveal_puzzle::core::ContentNode;
/// use reveal_puzzle::segmenter::segment;
///
/// let parts = segment(&[ContentNode::text("a, b")]);
/// let texts: Vec<&str> = parts.iter().map(|p| p.text()).collect();
/// assert_eq!(texts, ["a", ",", " ", "b"]);
/// ```
#[must_use]
pub fn segment(nodes: &[ContentNode]) -> Vec<Part> {
    let mut parts = Vec::new();

    for node in nodes {
        match node {
            ContentNode::Element(element) => {
                let significant = !element.is_line_break();
                parts.push(Part::markup_part(element.clone(), significant));
            }
            ContentNode::Text(text) => segment_text(text, &mut parts),
        }
    }

    debug!(
        nodes = nodes.len(),
        parts = parts.len(),
        significant = parts.iter().filter(|p| p.is_significant()).count(),
        "segmented source content"
    );

    parts
}

/// Count consecutive insignificant parts starting at `from`
///
/// Returns 0 when `from` is past the end.
///
/// # Examples
/// ```
/// use reveal_puzzle::core::Part;
/// use reveal_puzzle::segmenter::insignificant_run_len;
///
/// let parts = [
///     Part::text_part("、", false),
///     Part::text_part("A", true),
///     Part::text_part(" ", false),
/// ];
/// assert_eq!(insignificant_run_len(&parts, 0), 1);
/// assert_eq!(insignificant_run_len(&parts, 1), 0);
/// assert_eq!(insignificant_run_len(&parts, 2), 1);
/// assert_eq!(insignificant_run_len(&parts, 5), 0);
/// ```
#[must_use]
pub fn insignificant_run_len(parts: &[Part], from: usize) -> usize {
    parts
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|p| !p.is_significant()).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    fn texts(parts: &[Part]) -> Vec<&str> {
        parts.iter().map(Part::text).collect()
    }

    fn concat(parts: &[Part]) -> String {
        parts.iter().map(Part::text).collect()
    }

    #[test]
    fn element_is_one_atomic_part() {
        let em = Element::new("em").with_child(ContentNode::text("two words"));
        let parts = segment(&[ContentNode::Element(em)]);

        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_significant());
        assert_eq!(parts[0].text(), "two words");
    }

    #[test]
    fn line_break_is_filler() {
        let parts = segment(&[ContentNode::Element(Element::new("br"))]);

        assert_eq!(parts.len(), 1);
        assert!(!parts[0].is_significant());
    }

    #[test]
    fn no_merge_across_element_boundary() {
        let nodes = [
            ContentNode::text("  "),
            ContentNode::Element(Element::new("br")),
            ContentNode::text(" "),
        ];
        let parts = segment(&nodes);

        // Filler on both sides of the <br> stays separate
        assert_eq!(texts(&parts), ["  ", "", " "]);
        assert!(parts.iter().all(|p| !p.is_significant()));
    }

    #[test]
    fn mixed_markup_and_text_is_lossless() {
        let nodes = [
            ContentNode::text("「"),
            ContentNode::Element(
                Element::new("ruby")
                    .with_child(ContentNode::text("漢"))
                    .with_child(ContentNode::Element(
                        Element::new("rt").with_child(ContentNode::text("かん")),
                    )),
            ),
            ContentNode::text("字」です。"),
            ContentNode::Element(Element::new("br")),
            ContentNode::text("(kanji)"),
        ];
        let expected: String = nodes.iter().map(ContentNode::text_content).collect();
        let parts = segment(&nodes);

        assert_eq!(concat(&parts), expected);
        assert_eq!(
            texts(&parts),
            ["「", "漢かん", "字", "」", "で", "す", "。", "", "(", "k", "a", "n", "j", "i", ")"]
        );
    }

    #[test]
    fn markup_part_is_a_copy() {
        let source = ContentNode::Element(Element::new("b").with_child(ContentNode::text("x")));
        let parts = segment(std::slice::from_ref(&source));

        assert_eq!(parts[0].element(), source.as_element());
    }

    #[test]
    fn empty_input_yields_no_parts() {
        assert!(segment(&[]).is_empty());
        assert!(segment(&[ContentNode::text("")]).is_empty());
    }

    #[test]
    fn run_len_counts_only_leading_filler() {
        let parts = segment(&[ContentNode::text(" [a] b")]);
        // " [" | "a" | "] " | "b"
        assert_eq!(texts(&parts), [" [", "a", "] ", "b"]);
        assert_eq!(insignificant_run_len(&parts, 0), 1);
        assert_eq!(insignificant_run_len(&parts, 2), 1);
        assert_eq!(insignificant_run_len(&parts, 3), 0);
        assert_eq!(insignificant_run_len(&parts, 4), 0);
    }

    #[test]
    fn run_len_spans_consecutive_filler_parts() {
        let nodes = [
            ContentNode::text("A "),
            ContentNode::Element(Element::new("br")),
            ContentNode::text("\n"),
            ContentNode::text("B"),
        ];
        let parts = segment(&nodes);
        assert_eq!(insignificant_run_len(&parts, 1), 3);
    }
}
