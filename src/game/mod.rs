//! A playable puzzle instance

mod puzzle;

pub use puzzle::{ButtonView, PartView, Puzzle};
