//! Embedded demo puzzle
//!
//! Compiled into the binary so the game runs without a source file.

/// Demo page with a `buttons_source` container
pub const DEMO_SOURCE: &str = include_str!("../../data/demo.html");
