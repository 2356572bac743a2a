//! Guessing policies.
//!
//! A [`Strategy`] proposes the next guess for a turn and is told the feedback
//! the game returned. It never touches the game itself; the driver in
//! [`crate::batch`] submits the guess.

use crate::config::{SolverConfig, DEFAULT_OPENERS, FREQUENCY_FOLLOWUP_TOP, FREQUENCY_OPENING_TOP};
use crate::error::WordleError;
use crate::feedback::FeedbackPattern;
use crate::filter::Constraints;
use crate::tree::{NodeId, SearchTree};
use crate::word::{Dictionary, Word};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

pub trait Strategy {
    fn name(&self) -> &'static str;
    /// Guess for turn `turn` (0-based).
    fn next_guess(&mut self, turn: usize) -> Result<Word, WordleError>;
    fn observe(&mut self, guess: Word, feedback: FeedbackPattern) -> Result<(), WordleError>;
    /// Candidates still consistent with everything observed.
    fn remaining(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Highest summed letter frequency among the remaining candidates.
    MaxFrequency,
    /// Two fixed openers, then a random pick among the top entropy guesses.
    FixedOpening,
    /// Highest entropy guess every turn.
    MaxEntropy,
}

impl StrategyKind {
    pub fn build<'a>(
        self,
        dictionary: &'a Dictionary,
        config: &SolverConfig,
        rng: SmallRng,
    ) -> Result<Box<dyn Strategy + 'a>, WordleError> {
        match self {
            StrategyKind::MaxFrequency => Ok(Box::new(FrequencyStrategy::new(dictionary, rng))),
            StrategyKind::FixedOpening | StrategyKind::MaxEntropy => {
                let mut tree = SearchTree::new(dictionary)
                    .with_probes(config.probes)
                    .with_max_nodes(config.max_nodes);
                if let Some(depth) = config.populate_depth {
                    let root = tree.root();
                    let created = tree.populate(root, depth)?;
                    log::debug!("{:<32}{:<32}", "populated search tree", created);
                }
                let strategy = EntropyStrategy::from_tree(tree, rng);
                Ok(Box::new(match self {
                    StrategyKind::FixedOpening if config.openers.is_empty() => strategy
                        .with_openers(DEFAULT_OPENERS)
                        .with_top_n(config.top_n),
                    StrategyKind::FixedOpening => strategy
                        .with_openers(&config.openers)
                        .with_top_n(config.top_n),
                    _ => strategy.with_first_guesses(&config.openers),
                }))
            }
        }
    }
}

/// Count, for each letter, how many words contain it.
pub fn letter_frequencies(words: &[Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in words {
        let mut seen = [false; 26];
        for &letter in word.letters() {
            let idx = (letter - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                counts[idx] += 1;
            }
        }
    }
    counts
}

/// Words scored by the summed frequency of their distinct letters, best first.
pub fn rank_by_frequency(words: &[Word]) -> Vec<(Word, usize)> {
    let counts = letter_frequencies(words);
    let mut ranked: Vec<(Word, usize)> = words
        .iter()
        .map(|&word| {
            let mut seen = [false; 26];
            let score = word
                .letters()
                .iter()
                .map(|&letter| (letter - b'a') as usize)
                .filter(|&idx| !std::mem::replace(&mut seen[idx], true))
                .map(|idx| counts[idx])
                .sum();
            (word, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Filters candidates turn by turn and guesses by letter frequency.
pub struct FrequencyStrategy {
    candidates: Vec<Word>,
    constraints: Constraints,
    rng: SmallRng,
}

impl FrequencyStrategy {
    pub fn new(dictionary: &Dictionary, rng: SmallRng) -> Self {
        Self {
            candidates: dictionary.words().to_vec(),
            constraints: Constraints::new(),
            rng,
        }
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "max-frequency"
    }

    fn next_guess(&mut self, turn: usize) -> Result<Word, WordleError> {
        let top = if turn == 0 {
            FREQUENCY_OPENING_TOP
        } else {
            FREQUENCY_FOLLOWUP_TOP
        };
        let ranked = rank_by_frequency(&self.candidates);
        ranked[..top.min(ranked.len())]
            .choose(&mut self.rng)
            .map(|&(word, _)| word)
            .ok_or(WordleError::Contradiction {
                depth: self.constraints.observed(),
            })
    }

    fn observe(&mut self, guess: Word, feedback: FeedbackPattern) -> Result<(), WordleError> {
        self.constraints.record(guess, feedback);
        self.candidates = self.constraints.apply(&self.candidates)?;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

/// Walks a [`SearchTree`], guessing by entropy after optional fixed openers.
pub struct EntropyStrategy<'a> {
    tree: SearchTree<'a>,
    node: NodeId,
    openers: Vec<Word>,
    fixed_opening: bool,
    top_n: usize,
    rng: SmallRng,
}

impl<'a> EntropyStrategy<'a> {
    pub fn new(dictionary: &'a Dictionary, rng: SmallRng) -> Self {
        Self::from_tree(SearchTree::new(dictionary), rng)
    }

    /// Start from an existing, possibly populated, tree at its root.
    pub fn from_tree(tree: SearchTree<'a>, rng: SmallRng) -> Self {
        Self {
            node: tree.root(),
            tree,
            openers: Vec::new(),
            fixed_opening: false,
            top_n: 1,
            rng,
        }
    }

    /// Play as a fixed-opening strategy with these openers.
    pub fn with_openers<I, S>(self, openers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut strategy = self.with_first_guesses(openers);
        strategy.fixed_opening = !strategy.openers.is_empty();
        strategy
    }

    /// Guesses for the first turns that leave the strategy's name alone.
    /// Openers that are not valid words are dropped with a warning.
    pub fn with_first_guesses<I, S>(mut self, openers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.openers = openers
            .into_iter()
            .filter_map(|s| {
                let s = s.as_ref();
                let word = s
                    .parse::<Word>()
                    .ok()
                    .filter(|w| self.tree.dictionary().is_valid_word(w));
                if word.is_none() {
                    log::warn!("{:<32}{:<32}", "ignoring unknown opener", s);
                }
                word
            })
            .collect();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub fn openers(&self) -> &[Word] {
        &self.openers
    }

    pub fn tree(&self) -> &SearchTree<'a> {
        &self.tree
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl Strategy for EntropyStrategy<'_> {
    fn name(&self) -> &'static str {
        if self.fixed_opening {
            "fixed-opening"
        } else {
            "max-entropy"
        }
    }

    fn next_guess(&mut self, turn: usize) -> Result<Word, WordleError> {
        let node = self.tree.node(self.node);
        match node.candidates() {
            [] => {
                return Err(WordleError::Contradiction {
                    depth: node.depth(),
                })
            }
            [first] | [first, _] => return Ok(*first),
            _ => {}
        }
        if let Some(&opener) = self.openers.get(turn) {
            return Ok(opener);
        }

        let top = self.tree.max_entropy_guesses(self.node, self.top_n)?;
        top.choose(&mut self.rng)
            .map(|analysis| analysis.word)
            .ok_or(WordleError::Contradiction {
                depth: self.tree.node(self.node).depth(),
            })
    }

    fn observe(&mut self, guess: Word, feedback: FeedbackPattern) -> Result<(), WordleError> {
        self.node = self.tree.descend(self.node, guess, feedback)?;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.tree.size(self.node)
    }
}
