use std::collections::BTreeSet;

use crate::error::domain_error::DomainError;
use crate::hangman::{Difficulty, MistakeTracker};

const PLACEHOLDER: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// One play-through: the secret word, the letters guessed so far and the
/// mistake budget. A fresh `Round` is created for every replay.
#[derive(Debug, Clone)]
pub struct Round {
    secret_word: String,
    correct_letters: BTreeSet<char>,
    guessed_letters: BTreeSet<char>,
    mistakes: MistakeTracker,
}

impl Round {
    pub fn new(secret_word: &str, difficulty: Difficulty) -> Self {
        Round::with_tracker(secret_word, MistakeTracker::from(difficulty))
    }

    /// `secret_word` must not be empty; the dictionary only hands out words
    /// of at least three letters.
    pub fn with_tracker(secret_word: &str, mistakes: MistakeTracker) -> Self {
        debug_assert!(!secret_word.is_empty(), "a round needs a secret word");
        Round {
            secret_word: secret_word.to_lowercase(),
            correct_letters: BTreeSet::new(),
            guessed_letters: BTreeSet::new(),
            mistakes,
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn mistakes(&self) -> &MistakeTracker {
        &self.mistakes
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&normalize(letter))
    }

    /// The game rejects repeated letters before calling this, so a
    /// `DuplicateGuess` here means the caller skipped that check.
    pub fn submit_letter(&mut self, letter: char) -> Result<GuessOutcome, DomainError> {
        let letter = normalize(letter);
        if self.guessed_letters.contains(&letter) {
            return Err(DomainError::DuplicateGuess(letter));
        }

        let outcome = if self.secret_word.contains(letter) {
            self.correct_letters.insert(letter);
            GuessOutcome::Correct
        } else {
            self.mistakes.increment();
            GuessOutcome::Incorrect
        };

        self.guessed_letters.insert(letter);
        Ok(outcome)
    }

    pub fn is_word_fully_revealed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|letter| self.correct_letters.contains(&letter))
    }

    pub fn masked_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|letter| {
                if self.correct_letters.contains(&letter) {
                    letter
                } else {
                    PLACEHOLDER
                }
            })
            .map(String::from)
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.mistakes.remaining()
    }

    pub fn is_over(&self) -> bool {
        self.is_word_fully_revealed() || self.mistakes.is_exhausted()
    }

    pub fn guessed_letters_display(&self) -> String {
        self.guessed_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

pub(crate) fn normalize(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
