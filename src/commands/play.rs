//! Interactive game mode
//!
//! The setup dialogue (word bank path, difficulty) and the turn-by-turn
//! guessing loop.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::core::{GameOutcome, GameSession, GuessOutcome, MAX_TRIES};
use crate::output::display;
use crate::wordbank::{Tier, WordBank};

/// `--words` value selecting the embedded bank instead of a file
pub const BUILTIN_BANK: &str = "builtin";

/// Run an interactive game
///
/// `words` and `difficulty` pre-answer the corresponding prompts; whatever
/// is missing is asked for interactively, re-prompting until the answer is
/// usable.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven, the input stream
/// closes, or a named bank file is unreadable or malformed.
pub fn run_play(words: Option<&Path>, difficulty: Option<Tier>) -> Result<()> {
    display::print_welcome()?;

    let bank = match words {
        Some(path) => resolve_bank_arg(path)?,
        None => prompt_for_bank()?,
    };
    let tier = match difficulty {
        Some(tier) => tier,
        None => prompt_for_tier()?,
    };

    let mut rng = rand::rng();
    let secret = bank
        .choose(tier, &mut rng)
        .context("word bank tier is empty")?
        .clone();

    let mut session = GameSession::new(secret);

    loop {
        display::print_gallows(session.misses());
        println!("{}", session.reveal());

        let guess = get_user_input("\nGuess a letter")?;
        if session.apply(&guess) == GuessOutcome::Rejected {
            display::print_rejection(session.guessed());
            continue;
        }

        match session.outcome() {
            Some(GameOutcome::Won) => {
                display::print_victory(&session.reveal());
                break;
            }
            Some(GameOutcome::Lost) => {
                display::print_gallows(MAX_TRIES);
                display::print_defeat(session.secret());
                break;
            }
            None => {}
        }
    }

    Ok(())
}

/// Resolve the `--words` flag without prompting
///
/// A bad flag value is fatal, unlike the interactive path prompt.
fn resolve_bank_arg(path: &Path) -> Result<WordBank> {
    if path.as_os_str() == BUILTIN_BANK {
        return Ok(WordBank::embedded());
    }
    let bank = WordBank::load_from_file(path)
        .with_context(|| format!("could not load word bank {}", path.display()))?;
    Ok(bank)
}

/// Ask for a bank file path until an existing file is given
///
/// An empty line selects the embedded bank. The existence check happens
/// here; a file that turns unreadable or malformed afterwards is fatal.
fn prompt_for_bank() -> Result<WordBank> {
    let mut prompt = "\nEnter word bank path (blank for the built-in bank)";
    loop {
        let input = get_user_input(prompt)?;
        if input.is_empty() {
            return Ok(WordBank::embedded());
        }

        let path = Path::new(&input);
        if path.is_file() {
            let bank = WordBank::load_from_file(path)
                .with_context(|| format!("could not load word bank {}", path.display()))?;
            return Ok(bank);
        }
        prompt = "Invalid file path. Please enter a valid file path";
    }
}

/// Ask for a difficulty until one of the three tiers is given
fn prompt_for_tier() -> Result<Tier> {
    let mut prompt = "Choose difficulty level (1: Easy, 2: Medium, 3: Hard)";
    loop {
        let input = get_user_input(prompt)?;
        if let Ok(tier) = input.parse::<Tier>() {
            return Ok(tier);
        }
        prompt = "Invalid difficulty level. Please choose 1, 2, or 3";
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        bail!("input stream closed");
    }

    Ok(input.trim().to_string())
}
