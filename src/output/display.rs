//! Display functions for the terminal
//!
//! Everything the player sees: the welcome screen, gallows frames, guess
//! feedback, and the end-of-game banners.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::commands::BankReport;
use crate::core::{GuessedLetters, SecretWord};
use crate::output::art::{GALLOWS, LOGO};

/// Clear the terminal and move the cursor home
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Clear the screen and print the welcome banner
pub fn print_welcome() -> io::Result<()> {
    clear_screen()?;
    println!("Welcome to the Hangman game!");
    println!("{}", LOGO.bright_cyan());
    io::stdout().flush()
}

/// Print the gallows frame for the given miss count
///
/// `misses` must be in `0..=MAX_TRIES`; the session keeps it there.
pub fn print_gallows(misses: usize) {
    println!();
    println!("{}", GALLOWS[misses]);
}

/// Print the rejection marker and a recap of the letters guessed so far
pub fn print_rejection(guessed: &GuessedLetters) {
    println!("{}", "X".bright_red().bold());
    println!("{}", guessed.recap());
}

/// Print the fully revealed word and the victory banner
pub fn print_victory(reveal: &str) {
    println!("\n {reveal}");
    println!("{}", "You won!".bright_green().bold());
}

/// Print the defeat banner and disclose the secret word
pub fn print_defeat(secret: &SecretWord) {
    println!("{}", "You lost!".bright_red().bold());
    println!("Hidden word: {secret}");
}

/// Print per-tier statistics for an inspected bank
pub fn print_bank_report(report: &BankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD BANK REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for tier in &report.tiers {
        println!("\n{}", tier.tier.name().bright_yellow().bold());
        println!("   Words:       {}", tier.word_count);
        println!("   Shortest:    {} characters", tier.shortest);
        println!("   Longest:     {} characters", tier.longest);
        println!("   Multi-word:  {}", tier.multi_word);
        if tier.duplicates > 0 {
            println!(
                "   Duplicates:  {}",
                tier.duplicates.to_string().yellow()
            );
        } else {
            println!("   Duplicates:  0");
        }
    }
    println!();
}
