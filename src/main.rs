//! Reveal Puzzle - CLI
//!
//! Reveal-by-guessing text puzzle with TUI and CLI modes. The puzzle is read
//! from the `buttons_source` element of an HTML page (or the built-in demo).

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reveal_puzzle::{
    commands::{inspect_parts, run_simple, run_solve},
    completion::{CommandHook, CompletionFlag, CompletionHook, HookRegistry, NoticeHook},
    core::{ContentNode, Part},
    game::Puzzle,
    output::print_inspect_result,
    presentation::ButtonLayout,
    segmenter::segment,
    source::{DEFAULT_CONTAINER_ID, load_embedded, load_source},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reveal_puzzle",
    about = "Rebuild a sentence by pressing shuffled buttons in reading order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// HTML page containing the puzzle (default: built-in demo)
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// ID of the element whose children form the puzzle
    #[arg(short = 'i', long, global = true, default_value = DEFAULT_CONTAINER_ID)]
    container_id: String,

    /// Seed for the button order (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Program to run when the puzzle is solved
    #[arg(long, global = true)]
    on_complete: Option<String>,

    /// Argument passed to the --on-complete program (repeatable)
    #[arg(long = "on-complete-arg", global = true, requires = "on_complete")]
    on_complete_args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (numbered buttons, no TUI)
    Simple,

    /// Show how the source is split into parts
    Inspect {
        /// Also list filler parts
        #[arg(short = 'f', long)]
        show_filler: bool,
    },

    /// Solve the puzzle automatically and show the reveal path
    Solve {
        /// Show cursor movement for each step
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the container content selected by --source / --container-id
fn load_content(cli: &Cli) -> Result<Vec<ContentNode>> {
    let content = match &cli.source {
        Some(path) => load_source(path, &cli.container_id)?,
        None => load_embedded(&cli.container_id)?,
    };
    Ok(content)
}

/// Button order for this run, reproducible when --seed is given
fn button_layout(parts: &[Part], seed: Option<u64>) -> ButtonLayout {
    match seed {
        Some(seed) => ButtonLayout::shuffled(parts, &mut StdRng::seed_from_u64(seed)),
        None => ButtonLayout::shuffled(parts, &mut rand::rng()),
    }
}

/// Resolve the completion hook: --on-complete if given, else `fallback`
fn completion_hook<'a>(cli: &Cli, fallback: impl CompletionHook + 'a) -> Box<dyn CompletionHook + 'a> {
    let command = cli
        .on_complete
        .as_ref()
        .map(|program| CommandHook::new(program.clone(), cli.on_complete_args.clone()));

    HookRegistry::new()
        .with_optional("on-complete", command)
        .resolve(fallback)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // A missing container is fatal before any puzzle state exists
    let content = load_content(&cli)?;
    let parts = segment(&content);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &parts),
        Commands::Simple => run_simple_command(&cli, &parts),
        Commands::Inspect { show_filler } => {
            print_inspect_result(&inspect_parts(&content, &parts), *show_filler);
            Ok(())
        }
        Commands::Solve { verbose } => run_solve_command(&cli, &parts, *verbose),
    }
}

fn run_play_command(cli: &Cli, parts: &[Part]) -> Result<()> {
    use reveal_puzzle::interactive::{App, run_tui};

    let completion = CompletionFlag::new();
    let puzzle = Puzzle::new(
        parts,
        button_layout(parts, cli.seed),
        completion_hook(cli, completion.clone()),
    );

    run_tui(App::new(puzzle, completion))
}

fn run_simple_command(cli: &Cli, parts: &[Part]) -> Result<()> {
    let mut puzzle = Puzzle::new(
        parts,
        button_layout(parts, cli.seed),
        completion_hook(cli, NoticeHook),
    );

    run_simple(&mut puzzle).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(cli: &Cli, parts: &[Part], verbose: bool) -> Result<()> {
    // The notice is held back until the reveal path has been printed
    let completion = CompletionFlag::new();
    let mut puzzle = Puzzle::new(
        parts,
        button_layout(parts, cli.seed),
        completion_hook(cli, completion.clone()),
    );

    run_solve(&mut puzzle, &completion, &mut NoticeHook, verbose).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
