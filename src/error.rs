//! Error taxonomy shared by the game session, the filters and the search tree.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// Guess is not five letters or not in the dictionary.
    #[error("invalid word: {guess}")]
    InvalidGuess { guess: String },
    /// Guess submitted after the session concluded.
    #[error("game over after {guesses} guesses")]
    GameOver { guesses: usize },
    /// No candidate is consistent with the feedback seen so far.
    #[error("no candidate word is consistent with the feedback after {depth} guesses")]
    Contradiction { depth: usize },
    /// Feedback string that is not five symbols long.
    #[error("invalid feedback pattern: {pattern} (expected 5 symbols)")]
    InvalidPattern { pattern: String },
    /// Letter position outside the word.
    #[error("letter position {index} is outside a 5 letter word")]
    InvalidPosition { index: usize },
    #[error("unknown feedback symbol {symbol:?}")]
    UnknownFeedbackSymbol { symbol: char },
}

pub type Result<T> = std::result::Result<T, WordleError>;
