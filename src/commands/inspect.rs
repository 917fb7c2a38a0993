//! Segmentation inspection command
//!
//! Shows how source content was split into parts and checks that nothing was
//! lost on the way.

use crate::core::{ContentNode, Part, PartContent};

/// What a part was made from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartKind {
    Text,
    Markup(String),
}

/// One row of the inspection table
#[derive(Debug, Clone)]
pub struct PartRow {
    pub index: usize,
    pub significant: bool,
    pub kind: PartKind,
    pub text: String,
}

/// Result of inspecting a segmentation
pub struct InspectResult {
    pub rows: Vec<PartRow>,
    pub significant: usize,
    pub filler: usize,
    pub leading_filler: usize,
    pub source_text: String,
    pub lossless: bool,
}

/// Describe the parts produced from `content`
#[must_use]
pub fn inspect_parts(content: &[ContentNode], parts: &[Part]) -> InspectResult {
    let rows: Vec<PartRow> = parts
        .iter()
        .enumerate()
        .map(|(index, part)| PartRow {
            index,
            significant: part.is_significant(),
            kind: match part.content() {
                PartContent::Text(_) => PartKind::Text,
                PartContent::Markup(element) => PartKind::Markup(element.name().to_string()),
            },
            text: part.text().to_string(),
        })
        .collect();

    let significant = rows.iter().filter(|row| row.significant).count();
    let source_text: String = content.iter().map(ContentNode::text_content).collect();
    let rebuilt: String = parts.iter().map(Part::text).collect();

    InspectResult {
        significant,
        filler: rows.len() - significant,
        leading_filler: crate::segmenter::insignificant_run_len(parts, 0),
        lossless: rebuilt == source_text,
        source_text,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;
    use crate::segmenter::segment;

    #[test]
    fn inspect_counts_and_kinds() {
        let content = [
            ContentNode::text(" x"),
            ContentNode::Element(Element::new("br")),
            ContentNode::Element(Element::new("em").with_child(ContentNode::text("yz"))),
        ];
        let parts = segment(&content);
        let result = inspect_parts(&content, &parts);

        assert_eq!(result.rows.len(), 4);
        assert_eq!(result.significant, 2);
        assert_eq!(result.filler, 2);
        assert_eq!(result.leading_filler, 1);
        assert_eq!(result.rows[2].kind, PartKind::Markup("br".to_string()));
        assert_eq!(result.rows[3].text, "yz");
        assert_eq!(result.source_text, " xyz");
        assert!(result.lossless);
    }

    #[test]
    fn inspect_detects_loss() {
        let content = [ContentNode::text("ab")];
        let parts = vec![Part::text_part("a", true)];
        assert!(!inspect_parts(&content, &parts).lossless);
    }
}
