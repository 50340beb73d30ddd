//! Hangman - CLI
//!
//! Interactive terminal hangman with tiered word banks. Flags pre-answer the
//! setup prompts; with none given the game walks through the full dialogue.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{inspect_bank, run_play},
    output::print_bank_report,
    wordbank::{Tier, WordBank},
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with tiered word banks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file, or 'builtin' for the embedded bank (skips the path prompt)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Difficulty tier: 1/easy, 2/medium, 3/hard (skips the difficulty prompt)
    #[arg(short, long, global = true)]
    difficulty: Option<Tier>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Validate a word bank file and show per-tier statistics
    Inspect {
        /// Bank file to inspect
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(cli.words.as_deref(), cli.difficulty),
        Commands::Inspect { path } => run_inspect_command(&path),
    }
}

fn run_inspect_command(path: &Path) -> Result<()> {
    let bank = WordBank::load_from_file(path)?;
    let report = inspect_bank(&bank);
    print_bank_report(&report);
    Ok(())
}
