//! Guess sequencing
//!
//! Tracks how far the player has revealed the part sequence and validates
//! guesses against the next hidden part.

mod engine;
mod outcome;

pub use engine::GuessSequencer;
pub use outcome::GuessOutcome;
