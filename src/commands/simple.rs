//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: the answer so far is printed with hidden
//! parts blanked out, buttons are listed by number, and the player types the
//! number of the next button.

use crate::game::Puzzle;
use crate::output::formatters::{answer_line, button_label, create_progress_bar};
use crate::sequencer::GuessOutcome;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(puzzle: &mut Puzzle) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Reveal Puzzle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Press the buttons in reading order to rebuild the text.");
    println!("Spaces, brackets and punctuation fill themselves in.\n");
    println!("Commands: a button number, or 'quit' to exit\n");

    if puzzle.is_complete() {
        println!("{}", answer_line(puzzle, '_'));
        println!("\nNothing to guess in this puzzle.\n");
        return Ok(());
    }

    loop {
        print_board(puzzle);

        let input = get_user_input("Button")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        let Some(button) = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            println!("{}\n", "❌ Enter a button number".red());
            continue;
        };

        if button >= puzzle.button_count() {
            println!(
                "{}\n",
                format!("❌ There are only {} buttons", puzzle.button_count()).red()
            );
            continue;
        }

        match puzzle.press(button) {
            GuessOutcome::Rejected => println!("{}\n", "✗ Not yet".yellow()),
            GuessOutcome::Accepted { .. } => println!("{}\n", "✓ Correct".green()),
            GuessOutcome::Completed => {
                println!("\n{}", "═".repeat(64).bright_cyan());
                println!("{}", answer_line(puzzle, '_').bright_white().bold());
                println!("{}\n", "═".repeat(64).bright_cyan());
                return Ok(());
            }
        }
    }
}

fn print_board(puzzle: &Puzzle) {
    let (revealed, total) = puzzle.progress();

    println!("────────────────────────────────────────────────────────────");
    println!(
        "{} {revealed}/{total}",
        create_progress_bar(revealed as f64, total as f64, 30).cyan()
    );
    println!("────────────────────────────────────────────────────────────");
    println!("\n  {}\n", answer_line(puzzle, '_'));

    let labels: Vec<String> = puzzle
        .buttons()
        .map(|view| {
            let label = format!("[{}] {}", view.button + 1, button_label(view.part));
            if view.enabled {
                label.bright_white().bold().to_string()
            } else {
                label.bright_black().strikethrough().to_string()
            }
        })
        .collect();

    for row in labels.chunks(8) {
        println!("  {}", row.join("  "));
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input ends the session
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
