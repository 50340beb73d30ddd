//! Word banks for hangman
//!
//! Provides the pipe-delimited bank loader and a default bank embedded into
//! the binary for play without any file.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use loader::{BankError, TIER_COUNT, Tier, WordBank};
