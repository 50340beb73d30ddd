//! Guessed-letter tracking
//!
//! Validates candidate guesses and accumulates the accepted ones.

use rustc_hash::FxHashSet;

/// Separator used when recapping the guessed letters for the player
const RECAP_SEPARATOR: &str = " -> ";

/// The set of letters guessed so far in a session
///
/// Grows monotonically; letters are stored lowercase and never removed.
/// [`GuessedLetters::try_insert`] is the only mutation point.
#[derive(Debug, Clone, Default)]
pub struct GuessedLetters {
    letters: FxHashSet<char>,
}

impl GuessedLetters {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a candidate is an admissible new guess
    ///
    /// A candidate is valid iff it is exactly one character, that character
    /// is an ASCII letter, and its lowercase form has not been guessed
    /// before. No side effects.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessedLetters;
    ///
    /// let mut guessed = GuessedLetters::new();
    /// assert!(guessed.is_valid("a"));
    /// assert!(!guessed.is_valid("ab"));
    /// assert!(!guessed.is_valid("7"));
    ///
    /// guessed.try_insert("a");
    /// assert!(!guessed.is_valid("A"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return false;
        };

        letter.is_ascii_alphabetic() && !self.contains(letter)
    }

    /// Record a candidate guess
    ///
    /// Validates via [`GuessedLetters::is_valid`]; on failure returns `false`
    /// without mutating the set. On success inserts the lowercase form and
    /// returns `true`.
    pub fn try_insert(&mut self, candidate: &str) -> bool {
        if !self.is_valid(candidate) {
            return false;
        }

        // is_valid guarantees exactly one character
        let letter = candidate
            .chars()
            .next()
            .expect("validated single character")
            .to_ascii_lowercase();
        self.letters.insert(letter);
        true
    }

    /// Check membership, case-insensitively
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    /// The guessed letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Human-readable recap of the guesses so far, e.g. `a -> c -> t`
    #[must_use]
    pub fn recap(&self) -> String {
        let letters: Vec<String> = self.sorted().iter().map(char::to_string).collect();
        letters.join(RECAP_SEPARATOR)
    }

    /// Number of letters guessed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True iff nothing has been guessed yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_letters() {
        let guessed = GuessedLetters::new();
        assert!(guessed.is_valid("a"));
        assert!(guessed.is_valid("Z"));
    }

    #[test]
    fn rejects_multi_character_input() {
        let guessed = GuessedLetters::new();
        assert!(!guessed.is_valid("ab"));
        assert!(!guessed.is_valid("cat"));
        assert!(!guessed.is_valid(" a"));
    }

    #[test]
    fn rejects_empty_and_space() {
        let guessed = GuessedLetters::new();
        assert!(!guessed.is_valid(""));
        assert!(!guessed.is_valid(" "));
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        let guessed = GuessedLetters::new();
        assert!(!guessed.is_valid("7"));
        assert!(!guessed.is_valid("!"));
        assert!(!guessed.is_valid("_"));
    }

    #[test]
    fn rejects_non_ascii_letters() {
        let guessed = GuessedLetters::new();
        assert!(!guessed.is_valid("é"));
    }

    #[test]
    fn rejects_repeats_case_insensitively() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.try_insert("a"));

        assert!(!guessed.is_valid("a"));
        assert!(!guessed.is_valid("A"));
        assert!(guessed.is_valid("b"));
    }

    #[test]
    fn try_insert_stores_lowercase() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.try_insert("Q"));

        assert!(guessed.contains('q'));
        assert!(guessed.contains('Q'));
        assert_eq!(guessed.sorted(), vec!['q']);
    }

    #[test]
    fn try_insert_rejection_leaves_set_untouched() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.try_insert("a"));

        assert!(!guessed.try_insert("a"));
        assert!(!guessed.try_insert("ab"));
        assert!(!guessed.try_insert("4"));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn sorted_is_alphabetical() {
        let mut guessed = GuessedLetters::new();
        for letter in ["t", "a", "c"] {
            assert!(guessed.try_insert(letter));
        }

        assert_eq!(guessed.sorted(), vec!['a', 'c', 't']);
    }

    #[test]
    fn recap_joins_with_arrows() {
        let mut guessed = GuessedLetters::new();
        assert_eq!(guessed.recap(), "");

        assert!(guessed.try_insert("t"));
        assert_eq!(guessed.recap(), "t");

        assert!(guessed.try_insert("a"));
        assert!(guessed.try_insert("c"));
        assert_eq!(guessed.recap(), "a -> c -> t");
    }

    #[test]
    fn len_and_is_empty() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.is_empty());
        assert_eq!(guessed.len(), 0);

        assert!(guessed.try_insert("x"));
        assert!(!guessed.is_empty());
        assert_eq!(guessed.len(), 1);
    }
}
