//! Command implementations

pub mod inspect;
pub mod play;

pub use inspect::{BankReport, TierReport, inspect_bank};
pub use play::{BUILTIN_BANK, run_play};
