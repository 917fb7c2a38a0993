//! Auto-solve command
//!
//! Plays a puzzle to the end by always pressing a button that matches the
//! current target, recording the reveal path.

use crate::completion::{CompletionFlag, CompletionHook};
use crate::game::Puzzle;
use crate::output::print_solve_result;

/// A single accepted press in the solution
pub struct SolveStep {
    pub button: usize,
    pub part_index: usize,
    pub text: String,
    pub cursor_before: usize,
    pub cursor_after: usize,
}

impl SolveStep {
    /// Number of filler parts revealed along with this press
    #[must_use]
    pub const fn filler_revealed(&self) -> usize {
        self.cursor_after - self.cursor_before - 1
    }
}

/// Result of auto-solving a puzzle
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub initial_cursor: usize,
    pub total_parts: usize,
    pub revealed: String,
}

/// Solve `puzzle` by pressing the first enabled button matching the target
///
/// # Errors
///
/// Returns an error if no enabled button matches the current target. That
/// cannot happen for a puzzle built from its own parts, since every accepted
/// press uses up exactly one button of the revealed text.
pub fn solve_puzzle(puzzle: &mut Puzzle) -> Result<SolveResult, String> {
    let initial_cursor = puzzle.progress().0;
    let mut steps = Vec::new();

    while let Some(target) = puzzle.sequencer().target() {
        let cursor_before = puzzle.progress().0;

        let Some(view) = puzzle
            .buttons()
            .find(|b| b.enabled && b.part.matches(target))
        else {
            return Err(format!(
                "No button left for part {cursor_before} ({:?})",
                target.text()
            ));
        };

        if !puzzle.press(view.button).is_accepted() {
            return Err(format!("Button {} was not accepted", view.button + 1));
        }

        steps.push(SolveStep {
            button: view.button,
            part_index: view.part_index,
            text: view.part.text().to_string(),
            cursor_before,
            cursor_after: puzzle.progress().0,
        });
    }

    Ok(SolveResult {
        success: puzzle.is_complete(),
        steps,
        initial_cursor,
        total_parts: puzzle.progress().1,
        revealed: puzzle.revealed_text(),
    })
}

/// Solve `puzzle`, print the path, then announce completion
///
/// `completion` is the flag the puzzle's fallback hook sets; `notice` runs
/// after the path is printed, and only when that fallback fired.
///
/// # Errors
///
/// Propagates errors from [`solve_puzzle`].
pub fn run_solve(
    puzzle: &mut Puzzle,
    completion: &CompletionFlag,
    notice: &mut dyn CompletionHook,
    verbose: bool,
) -> Result<SolveResult, String> {
    let result = solve_puzzle(puzzle)?;
    print_solve_result(&result, verbose);

    if completion.is_set() {
        notice.notify_complete();
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionFlag;
    use crate::core::ContentNode;
    use crate::presentation::ButtonLayout;
    use crate::segmenter::segment;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_reveals_everything() {
        let parts = segment(&[ContentNode::text("「a b」a")]);
        let flag = CompletionFlag::new();
        let mut puzzle = Puzzle::new(
            &parts,
            ButtonLayout::shuffled(&parts, &mut StdRng::seed_from_u64(8)),
            Box::new(flag.clone()),
        );

        let result = solve_puzzle(&mut puzzle).unwrap();

        assert!(result.success);
        assert!(flag.is_set());
        assert_eq!(result.initial_cursor, 1);
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.revealed, "「a b」a");
        assert_eq!(result.total_parts, parts.len());
    }

    #[test]
    fn notice_follows_the_finished_solve() {
        use std::cell::Cell;

        let parts = segment(&[ContentNode::text("ab")]);
        let flag = CompletionFlag::new();
        let mut puzzle = Puzzle::new(&parts, ButtonLayout::in_order(&parts), Box::new(flag.clone()));

        let notices = Cell::new(0);
        let mut notice = || {
            assert!(flag.is_set());
            notices.set(notices.get() + 1);
        };

        let result = run_solve(&mut puzzle, &flag, &mut notice, false).unwrap();
        assert!(result.success);
        assert_eq!(notices.get(), 1);
    }

    #[test]
    fn notice_is_skipped_when_another_hook_handled_completion() {
        let parts = segment(&[ContentNode::text("ab")]);
        let flag = CompletionFlag::new();
        let mut puzzle = Puzzle::new(&parts, ButtonLayout::in_order(&parts), Box::new(|| {}));

        let mut notified = false;
        let mut notice = || notified = true;
        run_solve(&mut puzzle, &flag, &mut notice, true).unwrap();

        assert!(!notified);
    }

    #[test]
    fn steps_record_filler_skips() {
        // a | " " | b | 」
        let parts = segment(&[ContentNode::text("a b」")]);
        let mut puzzle = Puzzle::new(
            &parts,
            ButtonLayout::in_order(&parts),
            Box::new(CompletionFlag::new()),
        );

        let result = solve_puzzle(&mut puzzle).unwrap();
        let skipped: Vec<usize> = result.steps.iter().map(SolveStep::filler_revealed).collect();
        assert_eq!(skipped, [1, 1]);
        assert_eq!(result.steps[0].text, "a");
        assert_eq!(result.steps[1].cursor_after, 4);
    }

    #[test]
    fn already_complete_puzzle_has_no_steps() {
        let parts = segment(&[ContentNode::text(" 。")]);
        let mut puzzle = Puzzle::new(
            &parts,
            ButtonLayout::in_order(&parts),
            Box::new(CompletionFlag::new()),
        );

        let result = solve_puzzle(&mut puzzle).unwrap();
        assert!(result.success);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn duplicate_texts_are_solvable_in_any_layout() {
        let parts = segment(&[ContentNode::text("ababab")]);
        for seed in 0..10 {
            let mut puzzle = Puzzle::new(
                &parts,
                ButtonLayout::shuffled(&parts, &mut StdRng::seed_from_u64(seed)),
                Box::new(CompletionFlag::new()),
            );
            let result = solve_puzzle(&mut puzzle).unwrap();
            assert!(result.success);
            assert_eq!(result.steps.len(), 6);
        }
    }
}
