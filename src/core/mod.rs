//! Core domain types for the reveal puzzle
//!
//! This module contains the content tree, the part type and the character
//! significance table. Everything here is pure data with no I/O.

mod node;
mod part;
mod significance;

pub use node::{ContentNode, Element};
pub use part::{Part, PartContent};
pub use significance::{INSIGNIFICANT_CHARS, is_significant_char};
