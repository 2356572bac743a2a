//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (hit/close/miss)
//! for a guess against a secret word.

use crate::error::WordleError;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Hit,
    /// Letter appears elsewhere in the secret (yellow)
    Close,
    /// Letter not in the secret (gray)
    Miss,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '🟩',
            Feedback::Close => '🟨',
            Feedback::Miss => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray, or h/c/m).
    /// Digits follow [`Feedback::from_code`].
    pub fn from_char(c: char) -> Result<Self, WordleError> {
        match c.to_ascii_lowercase() {
            'g' | 'h' => Ok(Feedback::Hit),
            'y' | 'c' => Ok(Feedback::Close),
            'b' | 'm' | 'x' => Ok(Feedback::Miss),
            digit @ '0'..='9' => Self::from_code(digit as u8 - b'0'),
            _ => Err(WordleError::UnknownFeedbackSymbol { symbol: c }),
        }
    }

    /// Numeric symbols: 0 = hit, 1 = close, 2 = miss.
    pub fn from_code(code: u8) -> Result<Self, WordleError> {
        match code {
            0 => Ok(Feedback::Hit),
            1 => Ok(Feedback::Close),
            2 => Ok(Feedback::Miss),
            _ => Err(WordleError::UnknownFeedbackSymbol {
                symbol: char::from_digit(code as u32, 10).unwrap_or(char::REPLACEMENT_CHARACTER),
            }),
        }
    }

    fn digit(self) -> usize {
        match self {
            Feedback::Miss => 0,
            Feedback::Close => 1,
            Feedback::Hit => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
///
/// A plain array of symbols, usable as a map key. [`FeedbackPattern::index`]
/// packs it into `0..243` for counting tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(pub [Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_HIT: Self = Self([Feedback::Hit; WORD_LENGTH]);

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedbacks)
    }

    /// Base-3 packing: p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4 with miss=0, close=1, hit=2.
    pub fn index(self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, fb| acc * 3 + fb.digit())
    }

    pub fn feedbacks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse a pattern from a string like "gybbb", "hcmmm" or "01222"
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        let feedbacks = s
            .trim()
            .chars()
            .map(Feedback::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        let arr: [Feedback; WORD_LENGTH] =
            feedbacks
                .try_into()
                .map_err(|_| WordleError::InvalidPattern {
                    pattern: s.to_string(),
                })?;
        Ok(Self(arr))
    }

    /// Build from numeric symbols (0 = hit, 1 = close, 2 = miss).
    pub fn from_codes(codes: [u8; WORD_LENGTH]) -> Result<Self, WordleError> {
        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for (slot, code) in feedbacks.iter_mut().zip(codes) {
            *slot = Feedback::from_code(code)?;
        }
        Ok(Self(feedbacks))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Calculate the feedback pattern for a guess against a secret word.
///
/// Each position is judged on its own:
/// - Hit: same letter at the same position
/// - Close: the letter occurs anywhere in the secret
/// - Miss: the letter does not occur in the secret
///
/// Repeated guess letters do not consume occurrences in the secret, so a
/// letter guessed twice against a secret holding it once is marked close
/// at both positions.
pub fn evaluate(guess: Word, secret: Word) -> FeedbackPattern {
    let mut feedback = [Feedback::Miss; WORD_LENGTH];
    for (i, slot) in feedback.iter_mut().enumerate() {
        let letter = guess.letter(i);
        *slot = if letter == secret.letter(i) {
            Feedback::Hit
        } else if secret.contains(letter) {
            Feedback::Close
        } else {
            Feedback::Miss
        };
    }
    FeedbackPattern(feedback)
}
