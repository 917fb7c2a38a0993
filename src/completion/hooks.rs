//! Built-in completion hooks

use super::CompletionHook;
use colored::Colorize;
use std::cell::Cell;
use std::process::{Command, Stdio};
use std::rc::Rc;
use tracing::{info, warn};

/// Run an external program when the puzzle is solved
///
/// Failures are logged and otherwise ignored; a broken hook must not take the
/// puzzle down with it.
pub struct CommandHook {
    program: String,
    args: Vec<String>,
}

impl CommandHook {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CompletionHook for CommandHook {
    fn notify_complete(&mut self) {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => info!(program = %self.program, "completion hook ran"),
            Ok(status) => warn!(program = %self.program, %status, "completion hook failed"),
            Err(e) => warn!(program = %self.program, error = %e, "completion hook could not start"),
        }
    }
}

/// Print a plain "completed" notice
#[derive(Default)]
pub struct NoticeHook;

impl CompletionHook for NoticeHook {
    fn notify_complete(&mut self) {
        println!("\n{}", "✅ Completed!".green().bold());
    }
}

/// Shared flag set when the puzzle is solved
///
/// Clones share the same flag, so one copy can be handed to the puzzle and
/// another kept by whoever wants to observe completion.
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag(Rc<Cell<bool>>);

impl CompletionFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the hook has fired
    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl CompletionHook for CompletionFlag {
    fn notify_complete(&mut self) {
        self.0.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_clones_share_state() {
        let flag = CompletionFlag::new();
        let mut hook = flag.clone();
        assert!(!flag.is_set());

        hook.notify_complete();
        assert!(flag.is_set());
    }

    #[test]
    fn closure_is_a_hook() {
        let mut calls = 0;
        {
            let mut hook = || calls += 1;
            hook.notify_complete();
            hook.notify_complete();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn missing_program_does_not_panic() {
        let mut hook = CommandHook::new("definitely-not-a-real-program-4711", vec![]);
        hook.notify_complete();
        assert_eq!(hook.program(), "definitely-not-a-real-program-4711");
    }
}
