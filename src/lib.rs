//! Reveal Puzzle
//!
//! A reveal-by-guessing text puzzle. A sentence is split into parts; the
//! significant ones hide behind shuffled buttons and have to be pressed in
//! reading order, while filler (spaces, brackets, punctuation) reveals itself.
//!
//! # Quick Start
//!
//! ```rust
//! use reveal_puzzle::completion::CompletionFlag;
//! use reveal_puzzle::game::Puzzle;
//! use reveal_puzzle::presentation::ButtonLayout;
//! use reveal_puzzle::segmenter::segment;
//! use reveal_puzzle::source::loader::container_content;
//!
//! let content = container_content(r#"<div id="buttons_source">a, b</div>"#, "buttons_source").unwrap();
//! let parts = segment(&content);
//! assert_eq!(parts.len(), 4); // "a" "," " " "b"
//!
//! let solved = CompletionFlag::new();
//! let mut puzzle = Puzzle::new(&parts, ButtonLayout::in_order(&parts), Box::new(solved.clone()));
//! for button in 0..puzzle.button_count() {
//!     puzzle.press(button);
//! }
//! assert!(solved.is_set());
//! ```

// Core domain types
pub mod core;

// Source content to parts
pub mod segmenter;

// Cursor state machine
pub mod sequencer;

// Button order
pub mod presentation;

// Completion notification
pub mod completion;

// Playable puzzle facade
pub mod game;

// HTML source loading
pub mod source;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
