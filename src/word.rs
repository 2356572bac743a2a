//! Words and the dictionary they come from.
//!
//! A [`Word`] is a fixed-size array of lowercase ASCII letters, so it is `Copy`
//! and can be used as a map key. The [`Dictionary`] is loaded once and then
//! only ever borrowed.

use crate::error::WordleError;
use crate::WORD_LENGTH;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A five letter word over `a..=z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    pub fn to_uppercase(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    /// Case-insensitive; anything other than five ASCII letters is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WordleError::InvalidGuess {
            guess: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid());
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

/// Ordered, deduplicated list of valid words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries, keeping the first occurrence of
    /// each valid word and silently skipping everything else.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for entry in entries {
            if let Ok(word) = entry.as_ref().parse::<Word>() {
                if index.insert(word) {
                    words.push(word);
                }
            }
        }
        Self { words, index }
    }

    /// One word per line.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let dictionary = Self::parse(&text);
        log::info!(
            "{:<32}{:<32}",
            "loaded dictionary",
            format!("{} ({} words)", path.display(), dictionary.len())
        );
        Ok(dictionary)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_valid_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Parse and check membership in one step.
    pub fn lookup(&self, s: &str) -> Result<Word, WordleError> {
        let word: Word = s.parse()?;
        if self.is_valid_word(&word) {
            Ok(word)
        } else {
            Err(WordleError::InvalidGuess {
                guess: s.to_string(),
            })
        }
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.words.choose(rng).copied()
    }
}
