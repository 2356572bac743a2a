//! Narrowing a candidate set from observed feedback.
//!
//! The three predicates each return a fresh set. [`Constraints`] buckets the
//! letters of every observed guess and applies the predicates in the order
//! absent, placed, displaced; absence usually removes the most words.

use crate::error::WordleError;
use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Keep words containing none of `letters`.
pub fn omit_letters(letters: &[u8], words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| letters.iter().all(|&letter| !word.contains(letter)))
        .copied()
        .collect()
}

/// Keep words with `letter` at `index` for every pair. An index past the
/// end of the word matches nothing.
pub fn with_letters_at_positions(positions: &[(u8, usize)], words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| {
            positions
                .iter()
                .all(|&(letter, index)| word.letters().get(index) == Some(&letter))
        })
        .copied()
        .collect()
}

/// Keep words that contain `letter` somewhere, but not at `index`, for every pair.
pub fn with_letters_not_at_positions(positions: &[(u8, usize)], words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| {
            positions
                .iter()
                .all(|&(letter, index)| {
                    word.contains(letter) && word.letters().get(index) != Some(&letter)
                })
        })
        .copied()
        .collect()
}

/// Accumulated letter constraints from a history of guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    misses: Vec<u8>,
    hits: Vec<(u8, usize)>,
    closes: Vec<(u8, usize)>,
    observed: usize,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guesses recorded so far.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn is_empty(&self) -> bool {
        self.misses.is_empty() && self.hits.is_empty() && self.closes.is_empty()
    }

    /// Require `letter` at `index` regardless of any guess.
    pub fn require_at(&mut self, letter: u8, index: usize) -> Result<(), WordleError> {
        if index >= WORD_LENGTH {
            return Err(WordleError::InvalidPosition { index });
        }
        push_unique(&mut self.hits, (letter.to_ascii_lowercase(), index));
        Ok(())
    }

    /// Fold one guess and its feedback into the constraints.
    ///
    /// A letter marked miss is only omitted globally when the same guess does
    /// not also mark it hit or close; otherwise it only rules out that position.
    pub fn record(&mut self, guess: Word, pattern: FeedbackPattern) {
        let feedbacks = pattern.feedbacks();
        let present = |letter: u8| {
            feedbacks
                .iter()
                .enumerate()
                .any(|(i, &fb)| fb != Feedback::Miss && guess.letter(i) == letter)
        };
        for (index, &fb) in feedbacks.iter().enumerate() {
            let letter = guess.letter(index);
            match fb {
                Feedback::Hit => push_unique(&mut self.hits, (letter, index)),
                Feedback::Close => push_unique(&mut self.closes, (letter, index)),
                Feedback::Miss if present(letter) => {
                    push_unique(&mut self.closes, (letter, index))
                }
                Feedback::Miss => {
                    if !self.misses.contains(&letter) {
                        self.misses.push(letter);
                    }
                }
            }
        }
        self.observed += 1;
    }

    pub fn matches(&self, word: &Word) -> bool {
        !self.apply_unchecked(std::slice::from_ref(word)).is_empty()
    }

    /// Filter `words`, failing with [`WordleError::Contradiction`] when nothing survives.
    pub fn apply(&self, words: &[Word]) -> Result<Vec<Word>, WordleError> {
        let remaining = self.apply_unchecked(words);
        if remaining.is_empty() {
            return Err(WordleError::Contradiction {
                depth: self.observed,
            });
        }
        Ok(remaining)
    }

    fn apply_unchecked(&self, words: &[Word]) -> Vec<Word> {
        let words = omit_letters(&self.misses, words);
        let words = with_letters_at_positions(&self.hits, &words);
        with_letters_not_at_positions(&self.closes, &words)
    }
}

fn push_unique(pairs: &mut Vec<(u8, usize)>, pair: (u8, usize)) {
    if !pairs.contains(&pair) {
        pairs.push(pair);
    }
}

/// Apply a single guess's feedback to `words`.
pub fn apply_feedback(
    guess: Word,
    pattern: FeedbackPattern,
    words: &[Word],
) -> Result<Vec<Word>, WordleError> {
    let mut constraints = Constraints::new();
    constraints.record(guess, pattern);
    constraints.apply(words)
}
