//! Button presentation order
//!
//! Significant parts are offered as buttons in a random order that is fixed
//! for the lifetime of a puzzle and unrelated to the guessing order.

mod layout;
mod permutation;

pub use layout::ButtonLayout;
pub use permutation::random_permutation;
