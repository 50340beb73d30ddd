//! Hangman
//!
//! A terminal word-guessing game: uncover a hidden word one letter at a
//! time before the gallows illustration completes at six wrong guesses.
//! Words are sampled from three-tier, pipe-delimited word banks.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GuessOutcome, SecretWord};
//!
//! let secret = SecretWord::new("cat").unwrap();
//! let mut session = GameSession::new(secret);
//!
//! assert_eq!(session.apply("c"), GuessOutcome::Hit);
//! assert_eq!(session.reveal(), "c _ _");
//! ```

// Core domain types
pub mod core;

// Word banks
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
