//! A single game of Wordle against a known secret.

use crate::config::MAX_GUESSES;
use crate::error::WordleError;
use crate::feedback::{evaluate, FeedbackPattern};
use crate::word::{Dictionary, Word};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    history: Vec<(Word, FeedbackPattern)>,
    max_guesses: usize,
    won: bool,
    given_up: bool,
}

impl<'a> Game<'a> {
    pub fn new(dictionary: &'a Dictionary, secret: Word) -> Self {
        Self {
            dictionary,
            secret,
            history: Vec::new(),
            max_guesses: MAX_GUESSES,
            won: false,
            given_up: false,
        }
    }

    /// A game with a secret drawn from the dictionary, if it has any words.
    pub fn random<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Option<Self> {
        dictionary
            .random_word(rng)
            .map(|secret| Self::new(dictionary, secret))
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Parse, validate and submit a guess typed by a player.
    pub fn submit_guess(&mut self, guess: &str) -> Result<FeedbackPattern, WordleError> {
        let word = self.dictionary.lookup(guess)?;
        self.submit(word)
    }

    pub fn submit(&mut self, guess: Word) -> Result<FeedbackPattern, WordleError> {
        if !self.dictionary.is_valid_word(&guess) {
            return Err(WordleError::InvalidGuess {
                guess: guess.to_string(),
            });
        }
        if !self.is_running() {
            return Err(WordleError::GameOver {
                guesses: self.history.len(),
            });
        }

        let feedback = evaluate(guess, self.secret);
        self.won = feedback.is_win();
        self.history.push((guess, feedback));
        Ok(feedback)
    }

    pub fn is_running(&self) -> bool {
        !self.won && !self.given_up && self.history.len() < self.max_guesses
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// End the game without winning and reveal the secret.
    pub fn give_up(&mut self) -> Word {
        self.given_up = true;
        self.secret
    }

    pub fn secret(&self) -> Word {
        self.secret
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }
}
