//! Property tests for the core game rules

use hangman::core::{GameOutcome, GameSession, GuessOutcome, GuessedLetters, MAX_TRIES, PLACEHOLDER, SecretWord};
use proptest::prelude::*;

/// Secrets of one to three lowercase words
fn secret_words() -> impl Strategy<Value = SecretWord> {
    "[a-z]{1,12}( [a-z]{1,12}){0,2}".prop_map(|s| SecretWord::new(s).expect("generated from the valid alphabet"))
}

/// Arbitrary letters to feed into the guessed set
fn letters() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..20)
}

fn guessed_from(letters: &[char]) -> GuessedLetters {
    let mut guessed = GuessedLetters::new();
    for &letter in letters {
        // Repeats are rejected; that is fine here
        let _ = guessed.try_insert(&letter.to_string());
    }
    guessed
}

proptest! {
    #[test]
    fn reveal_renders_one_token_per_position(secret in secret_words(), guesses in letters()) {
        let guessed = guessed_from(&guesses);
        let reveal = secret.reveal(&guessed);

        // One character per position plus a single-space separator between positions
        prop_assert_eq!(reveal.chars().count(), 2 * secret.char_count() - 1);
    }

    #[test]
    fn reveal_masks_exactly_the_unguessed_letters(secret in secret_words(), guesses in letters()) {
        let guessed = guessed_from(&guesses);
        let reveal = secret.reveal(&guessed);

        // Even positions carry the tokens, odd positions the separators
        let tokens: Vec<char> = reveal.chars().step_by(2).collect();
        prop_assert_eq!(tokens.len(), secret.char_count());

        for (token, original) in tokens.into_iter().zip(secret.text().chars()) {
            if original == ' ' || guessed.contains(original) {
                prop_assert_eq!(token, original);
            } else {
                prop_assert_eq!(token, PLACEHOLDER);
            }
        }

        for separator in reveal.chars().skip(1).step_by(2) {
            prop_assert_eq!(separator, ' ');
        }
    }

    #[test]
    fn win_iff_reveal_is_placeholder_free(secret in secret_words(), guesses in letters()) {
        let guessed = guessed_from(&guesses);

        prop_assert_eq!(
            secret.is_revealed_by(&guessed),
            !secret.reveal(&guessed).contains(PLACEHOLDER)
        );
    }

    #[test]
    fn misses_count_accepted_absent_letters_only(secret in secret_words(), guesses in letters()) {
        let mut session = GameSession::new(secret.clone());

        for letter in guesses {
            let before = session.misses();
            let outcome = session.apply(&letter.to_string());

            match outcome {
                GuessOutcome::Hit => {
                    prop_assert!(secret.contains(letter));
                    prop_assert_eq!(session.misses(), before);
                }
                GuessOutcome::Miss => {
                    prop_assert!(!secret.contains(letter));
                    prop_assert_eq!(session.misses(), before + 1);
                }
                GuessOutcome::Rejected => {
                    prop_assert_eq!(session.misses(), before);
                }
            }

            prop_assert!(session.misses() <= MAX_TRIES);
        }
    }

    #[test]
    fn terminal_states_are_consistent(secret in secret_words(), guesses in letters()) {
        let mut session = GameSession::new(secret.clone());

        for letter in guesses {
            session.apply(&letter.to_string());
        }

        match session.outcome() {
            Some(GameOutcome::Won) => {
                prop_assert!(secret.is_revealed_by(session.guessed()));
                prop_assert!(session.misses() < MAX_TRIES);
            }
            Some(GameOutcome::Lost) => {
                prop_assert_eq!(session.misses(), MAX_TRIES);
                prop_assert!(!secret.is_revealed_by(session.guessed()));
            }
            None => {
                prop_assert!(session.misses() < MAX_TRIES);
                prop_assert!(!secret.is_revealed_by(session.guessed()));
            }
        }
    }
}
