//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{InspectResult, PartKind, SolveResult};
use colored::Colorize;

/// Print the segmentation of a puzzle
///
/// Filler rows are only listed when `show_filler` is set.
pub fn print_inspect_result(result: &InspectResult, show_filler: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE PARTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📄 Source text:\n   {:?}", result.source_text);

    println!("\n📊 {}", "Segmentation:".bright_cyan().bold());
    println!("   Parts:           {}", result.rows.len());
    println!(
        "   Buttons:         {}",
        result.significant.to_string().bright_yellow().bold()
    );
    println!("   Filler parts:    {}", result.filler);
    println!("   Leading filler:  {}", result.leading_filler);
    println!(
        "   Lossless:        {}",
        if result.lossless {
            "yes".green().bold()
        } else {
            "NO".red().bold()
        }
    );

    println!("\n🧩 {}", "Parts:".bright_cyan().bold());
    for row in &result.rows {
        if !row.significant && !show_filler {
            continue;
        }

        let kind = match &row.kind {
            PartKind::Text => "text".to_string(),
            PartKind::Markup(name) => format!("<{name}>"),
        };
        let line = format!("   {:4}  {:<8} {:?}", row.index, kind, row.text);

        if row.significant {
            println!("{}", line.bright_white());
        } else {
            println!("{}", line.bright_black());
        }
    }
    println!();
}

/// Print the result of auto-solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Solving puzzle".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.initial_cursor > 0 {
        println!(
            "\n{} leading filler part(s) revealed at start",
            result.initial_cursor
        );
    }

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nStep {}: button {} → {:?}",
            i + 1,
            (step.button + 1).to_string().bright_cyan(),
            step.text
        );

        if verbose {
            println!(
                "  Cursor:  {} → {}  [{}]",
                step.cursor_before,
                step.cursor_after,
                create_progress_bar(
                    step.cursor_after as f64,
                    result.total_parts as f64,
                    20
                )
            );
            if step.filler_revealed() > 0 {
                println!("  Filler:  {} part(s) revealed", step.filler_revealed());
            }
        }
    }

    println!("\n{:?}\n", result.revealed);
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} presses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Stopped after {} presses", result.steps.len())
                .red()
                .bold()
        );
    }
}
