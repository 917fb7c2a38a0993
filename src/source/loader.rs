//! Locating the puzzle container
//!
//! The puzzle content is the children of the element whose `id` matches the
//! configured container id. A missing container is fatal: there is no sensible
//! empty puzzle to fall back to.

use super::markup::parse_fragment;
use super::{DEMO_SOURCE, SourceError};
use crate::core::{ContentNode, Element};
use std::fs;
use std::path::Path;
use tracing::info;

/// Container id used when none is configured
pub const DEFAULT_CONTAINER_ID: &str = "buttons_source";

/// Children of the element with the given `id`
///
/// # Errors
///
/// Returns `SourceError::ContainerNotFound` if no element has the given id.
///
/// # Examples
/// ```
/// use reveal_puzzle::core::ContentNode;
/// use reveal_puzzle::source::find_container;
/// use reveal_puzzle::source::markup::parse_fragment;
///
/// let nodes = parse_fragment(r#"<body><div id="q">text</div></body>"#);
/// let content = find_container(&nodes, "q").unwrap();
/// assert_eq!(content, [ContentNode::text("text")]);
/// assert!(find_container(&nodes, "missing").is_err());
/// ```
pub fn find_container<'n>(nodes: &'n [ContentNode], id: &str) -> Result<&'n [ContentNode], SourceError> {
    find_element(nodes, id)
        .map(Element::children)
        .ok_or_else(|| SourceError::ContainerNotFound(id.to_string()))
}

/// Depth-first search in document order
fn find_element<'n>(nodes: &'n [ContentNode], id: &str) -> Option<&'n Element> {
    nodes.iter().find_map(|node| {
        let element = node.as_element()?;
        if element.attribute("id") == Some(id) {
            Some(element)
        } else {
            find_element(element.children(), id)
        }
    })
}

/// Parse `html` and return the children of the container element
///
/// # Errors
///
/// Returns `SourceError::ContainerNotFound` if no element has the given id.
pub fn container_content(html: &str, id: &str) -> Result<Vec<ContentNode>, SourceError> {
    let nodes = parse_fragment(html);
    Ok(find_container(&nodes, id)?.to_vec())
}

/// Load puzzle content from an HTML file
///
/// # Errors
///
/// Returns `SourceError::Io` if the file cannot be read, or
/// `SourceError::ContainerNotFound` if it has no element with the given id.
pub fn load_source<P: AsRef<Path>>(path: P, id: &str) -> Result<Vec<ContentNode>, SourceError> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let content = container_content(&html, id)?;
    info!(path = %path.display(), id, nodes = content.len(), "loaded puzzle source");
    Ok(content)
}

/// Load puzzle content from the embedded demo page
///
/// # Errors
///
/// Returns `SourceError::ContainerNotFound` if the demo page has no element
/// with the given id.
pub fn load_embedded(id: &str) -> Result<Vec<ContentNode>, SourceError> {
    let content = container_content(DEMO_SOURCE, id)?;
    info!(id, nodes = content.len(), "loaded embedded demo puzzle");
    Ok(content)
}
