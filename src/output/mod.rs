//! Terminal output formatting

pub mod art;
pub mod display;

pub use art::{GALLOWS, LOGO};
pub use display::{
    print_bank_report, print_defeat, print_gallows, print_rejection, print_victory, print_welcome,
};
