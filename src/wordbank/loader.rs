//! Word bank parsing and selection
//!
//! A bank file holds three difficulty tiers separated by `|`, each tier a
//! comma-separated list of candidate words.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::{SecretWord, WordError};
use crate::wordbank::{EASY, HARD, MEDIUM};

/// Number of difficulty tiers in a bank
pub const TIER_COUNT: usize = 3;

/// Difficulty tier selecting which bank segment to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// All tiers, in bank-segment order
    pub const ALL: [Self; TIER_COUNT] = [Self::Easy, Self::Medium, Self::Hard];

    /// Zero-based segment index into a bank
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    /// Parse a tier from its digit (`1`/`2`/`3`) or name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "easy" => Ok(Self::Easy),
            "2" | "medium" => Ok(Self::Medium),
            "3" | "hard" => Ok(Self::Hard),
            other => Err(format!(
                "Invalid difficulty {other:?}: expected 1, 2, 3, easy, medium, or hard"
            )),
        }
    }
}

/// Error type for unreadable or malformed bank files
#[derive(Debug)]
pub enum BankError {
    Io(io::Error),
    TierCount(usize),
    EmptyTier(Tier),
    BadWord {
        tier: Tier,
        word: String,
        source: WordError,
    },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word bank: {e}"),
            Self::TierCount(n) => write!(
                f,
                "Word bank must contain exactly {TIER_COUNT} tiers separated by '|', got {n}"
            ),
            Self::EmptyTier(tier) => write!(f, "Word bank tier {tier} has no words"),
            Self::BadWord { tier, word, source } => {
                write!(f, "Word bank tier {tier} has an invalid word {word:?}: {source}")
            }
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BadWord { source, .. } => Some(source),
            Self::TierCount(_) | Self::EmptyTier(_) => None,
        }
    }
}

impl From<io::Error> for BankError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A parsed three-tier word bank
#[derive(Debug, Clone)]
pub struct WordBank {
    tiers: [Vec<SecretWord>; TIER_COUNT],
}

impl WordBank {
    /// Parse bank text in the pipe-delimited format
    ///
    /// Candidates are trimmed and lowercased; empty entries (for example
    /// around line breaks) are skipped.
    ///
    /// # Errors
    /// Returns `BankError` if the text does not split into exactly three
    /// tiers, a tier ends up with no usable word, or a candidate is not
    /// letters-and-spaces.
    pub fn parse(content: &str) -> Result<Self, BankError> {
        let sections: Vec<&str> = content.split('|').collect();
        if sections.len() != TIER_COUNT {
            return Err(BankError::TierCount(sections.len()));
        }

        let mut tiers: [Vec<SecretWord>; TIER_COUNT] = Default::default();
        for (tier, section) in Tier::ALL.into_iter().zip(&sections) {
            let words = &mut tiers[tier.index()];

            for raw in section.split(',') {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let word = SecretWord::new(trimmed).map_err(|source| BankError::BadWord {
                    tier,
                    word: trimmed.to_string(),
                    source,
                })?;
                words.push(word);
            }

            if words.is_empty() {
                return Err(BankError::EmptyTier(tier));
            }
        }

        Ok(Self { tiers })
    }

    /// Load and parse a bank file
    ///
    /// # Errors
    /// Returns `BankError::Io` if the file cannot be read, or any
    /// [`WordBank::parse`] error for malformed content.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The bank compiled into the binary from `data/words.txt`
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            tiers: [
                tier_from_slice(EASY),
                tier_from_slice(MEDIUM),
                tier_from_slice(HARD),
            ],
        }
    }

    /// Words of one tier
    #[inline]
    #[must_use]
    pub fn tier_words(&self, tier: Tier) -> &[SecretWord] {
        &self.tiers[tier.index()]
    }

    /// Pick one word from a tier uniformly at random
    ///
    /// Returns `None` only for an empty tier, which [`WordBank::parse`]
    /// never produces.
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Option<&SecretWord> {
        self.tiers[tier.index()].choose(rng)
    }
}

/// Convert embedded string slice to validated words, skipping invalid entries
fn tier_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}
