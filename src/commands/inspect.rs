//! Word bank inspection command
//!
//! Builds per-tier statistics for a parsed bank, reusing the same parser the
//! game plays from.

use rustc_hash::FxHashSet;

use crate::wordbank::{Tier, WordBank};

/// Statistics for a single tier
pub struct TierReport {
    pub tier: Tier,
    pub word_count: usize,
    pub shortest: usize,
    pub longest: usize,
    pub multi_word: usize,
    pub duplicates: usize,
}

/// Result of inspecting a bank
pub struct BankReport {
    pub tiers: Vec<TierReport>,
}

/// Build per-tier statistics for a bank
#[must_use]
pub fn inspect_bank(bank: &WordBank) -> BankReport {
    let tiers = Tier::ALL
        .into_iter()
        .map(|tier| {
            let words = bank.tier_words(tier);

            let distinct: FxHashSet<&str> = words.iter().map(|w| w.text()).collect();

            TierReport {
                tier,
                word_count: words.len(),
                shortest: words.iter().map(|w| w.char_count()).min().unwrap_or(0),
                longest: words.iter().map(|w| w.char_count()).max().unwrap_or(0),
                multi_word: words.iter().filter(|w| w.text().contains(' ')).count(),
                duplicates: words.len() - distinct.len(),
            }
        })
        .collect();

    BankReport { tiers }
}
