//! Puzzle source loading
//!
//! Reads an HTML page, parses it into a content tree and locates the container
//! element whose children make up the puzzle.

mod embedded;
mod error;
pub mod loader;
pub mod markup;

pub use embedded::DEMO_SOURCE;
pub use error::SourceError;
pub use loader::{DEFAULT_CONTAINER_ID, find_container, load_embedded, load_source};
