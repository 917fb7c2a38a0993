//! Completion notification
//!
//! The puzzle calls exactly one [`CompletionHook`] when it is solved. Hooks are
//! registered in preference order and resolved once when the puzzle is built.

mod hooks;
mod registry;

pub use hooks::{CommandHook, CompletionFlag, NoticeHook};
pub use registry::HookRegistry;

/// Something to notify when the puzzle is solved
pub trait CompletionHook {
    /// Called once, synchronously, when the last part is revealed
    fn notify_complete(&mut self);
}

impl<F: FnMut()> CompletionHook for F {
    fn notify_complete(&mut self) {
        self();
    }
}
