//! Build script to generate the embedded word bank
//!
//! Reads the default bank file and generates Rust source code with one const
//! array per difficulty tier.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const BANK_PATH: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string(BANK_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {BANK_PATH}: {e}"));

    // Same pipe-delimited format the runtime loader accepts
    let sections: Vec<&str> = content.split('|').collect();
    assert_eq!(
        sections.len(),
        3,
        "{BANK_PATH} must contain exactly three tiers separated by '|', got {}",
        sections.len()
    );

    let names = ["EASY", "MEDIUM", "HARD"];
    let docs = [
        "Easy-tier words of the embedded bank",
        "Medium-tier words of the embedded bank",
        "Hard-tier words of the embedded bank",
    ];

    let output_path = Path::new(&out_dir).join("bank.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output).unwrap();

    for (section, (const_name, doc_comment)) in sections.iter().zip(names.iter().zip(docs)) {
        let words: Vec<String> = section
            .split(',')
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        assert!(
            !words.is_empty(),
            "{BANK_PATH}: {const_name} tier has no words"
        );

        let count = words.len();

        writeln!(output, "/// {doc_comment}").unwrap();
        writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
        for word in &words {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
                "{BANK_PATH}: {const_name} word {word:?} has characters outside a-z and space"
            );
            writeln!(output, "    \"{word}\",").unwrap();
        }
        writeln!(output, "];").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "/// Number of words in {const_name}").unwrap();
        writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
        writeln!(output).unwrap();
    }

    println!("cargo:rerun-if-changed={BANK_PATH}");
}
