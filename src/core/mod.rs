//! Core domain types for hangman
//!
//! This module contains the fundamental game types with no I/O concerns.
//! All types here are pure, testable, and own their state explicitly.

mod guesses;
mod session;
mod word;

pub use guesses::GuessedLetters;
pub use session::{GameOutcome, GameSession, GuessOutcome, MAX_TRIES};
pub use word::{PLACEHOLDER, SecretWord, WordError};
