//! Tolerant HTML fragment parser
//!
//! Produces a [`ContentNode`] tree close to what a browser exposes as
//! `childNodes`: comments and doctypes are dropped, `script`/`style` bodies are
//! skipped, void elements never take children, and stray end tags are ignored.
//! A self-closing slash only ends void elements; `<b/>` opens a `b` as `<b>`
//! would. Line endings are normalised to `\n` before tokenising. Adjacent text
//! separated by a comment stays as two text nodes.

use crate::core::{ContentNode, Element};
use std::borrow::Cow;

/// Elements that never have children
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose body is raw text and never puzzle content
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Parse an HTML fragment or page into a content tree
///
/// # Examples
/// ```
/// use reveal_puzzle::core::ContentNode;
/// use reveal_puzzle::source::markup::parse_fragment;
///
/// let nodes = parse_fragment("a<br>b &amp; <i>c</i>");
/// assert_eq!(nodes.len(), 4);
/// assert_eq!(nodes[2], ContentNode::text("b & "));
/// ```
#[must_use]
pub fn parse_fragment(input: &str) -> Vec<ContentNode> {
    let input = normalize_newlines(input);
    let mut parser = Parser {
        input: &input,
        pos: 0,
        root: Vec::new(),
        open: Vec::new(),
    };
    parser.run();
    parser.root
}

/// `\r\n` and lone `\r` become `\n`, as in the HTML input stream
fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

struct Parser<'s> {
    input: &'s str,
    pos: usize,
    root: Vec<ContentNode>,
    open: Vec<Element>,
}

impl Parser<'_> {
    fn run(&mut self) {
        let mut text = String::new();

        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            let Some(offset) = rest.find('<') else {
                text.push_str(rest);
                self.pos = self.input.len();
                break;
            };
            text.push_str(&rest[..offset]);
            self.pos += offset;

            let rest = &self.input[self.pos..];
            let next = rest[1..].chars().next();

            if rest.starts_with("<!--") {
                self.flush_text(&mut text);
                self.skip_past("-->");
            } else if rest.starts_with("</") && rest[2..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                self.flush_text(&mut text);
                self.end_tag();
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.flush_text(&mut text);
                self.skip_past(">");
            } else if next.is_some_and(|c| c.is_ascii_alphabetic()) {
                self.flush_text(&mut text);
                self.start_tag();
            } else {
                // A lone '<' is ordinary text
                text.push('<');
                self.pos += 1;
            }
        }

        self.flush_text(&mut text);
        self.close_to(0);
    }

    fn append(&mut self, node: ContentNode) {
        if let Some(parent) = self.open.last_mut() {
            parent.push_child(node);
        } else {
            self.root.push(node);
        }
    }

    fn flush_text(&mut self, text: &mut String) {
        if text.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(text.as_str()).into_owned();
        text.clear();
        self.append(ContentNode::Text(decoded));
    }

    fn skip_past(&mut self, terminator: &str) {
        self.pos = self.input[self.pos..]
            .find(terminator)
            .map_or(self.input.len(), |offset| self.pos + offset + terminator.len());
    }

    fn start_tag(&mut self) {
        let rest = &self.input[self.pos + 1..];
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .unwrap_or(rest.len());
        let mut element = Element::new(&rest[..name_len]);
        let mut cursor = self.pos + 1 + name_len;

        loop {
            let rest = &self.input[cursor..];
            let trimmed = rest.trim_start();
            cursor += rest.len() - trimmed.len();

            if trimmed.is_empty() {
                break;
            }
            if trimmed.starts_with('>') {
                cursor += 1;
                break;
            }
            if trimmed.starts_with("/>") {
                cursor += 2;
                break;
            }
            if trimmed.starts_with('/') || trimmed.starts_with('=') {
                cursor += 1;
                continue;
            }

            let (name, value, used) = parse_attribute(trimmed);
            element.push_attribute(name, value);
            cursor += used;
        }

        self.pos = cursor;

        if RAW_TEXT_ELEMENTS.contains(&element.name()) {
            self.skip_raw_text(element.name());
            return;
        }

        // `/>` on a non-void element is ignored
        if VOID_ELEMENTS.contains(&element.name()) {
            self.append(ContentNode::Element(element));
        } else {
            self.open.push(element);
        }
    }

    fn skip_raw_text(&mut self, name: &str) {
        // ASCII lowercasing keeps byte offsets intact
        let haystack = self.input[self.pos..].to_ascii_lowercase();
        let closing = format!("</{name}");
        match haystack.find(&closing) {
            Some(offset) => {
                self.pos += offset;
                self.skip_past(">");
            }
            None => self.pos = self.input.len(),
        }
    }

    fn end_tag(&mut self) {
        let rest = &self.input[self.pos + 2..];
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(rest.len());
        let name = rest[..name_len].to_ascii_lowercase();
        self.skip_past(">");

        if let Some(depth) = self.open.iter().rposition(|e| e.name() == name) {
            self.close_to(depth);
        }
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(element) = self.open.pop() {
                self.append(ContentNode::Element(element));
            }
        }
    }
}

/// Parse one `name`, `name=value`, `name="value"` or `name='value'`
///
/// Returns the name, the decoded value and the number of bytes consumed.
fn parse_attribute(input: &str) -> (String, String, usize) {
    let name_len = input
        .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
        .unwrap_or(input.len());
    let name = input[..name_len].to_ascii_lowercase();

    let after_name = &input[name_len..];
    let trimmed = after_name.trim_start();
    let Some(after_eq) = trimmed.strip_prefix('=') else {
        return (name, String::new(), name_len);
    };

    let value_area = after_eq.trim_start();
    let mut used = input.len() - value_area.len();

    let raw = if let Some(quote) = value_area.chars().next().filter(|&c| c == '"' || c == '\'') {
        let body = &value_area[1..];
        match body.find(quote) {
            Some(end) => {
                used += end + 2;
                &body[..end]
            }
            None => {
                used += value_area.len();
                body
            }
        }
    } else {
        let end = value_area
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(value_area.len());
        used += end;
        &value_area[..end]
    };

    let value = html_escape::decode_html_entities(raw).into_owned();
    (name, value, used)
}
