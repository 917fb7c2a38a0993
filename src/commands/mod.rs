//! Command implementations

pub mod inspect;
pub mod simple;
pub mod solve;

pub use inspect::{InspectResult, PartKind, PartRow, inspect_parts};
pub use simple::run_simple;
pub use solve::{SolveResult, SolveStep, run_solve, solve_puzzle};
