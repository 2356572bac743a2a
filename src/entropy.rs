//! Entropy scoring of guesses.
//!
//! A guess is worth the Shannon entropy of the partition it induces on the
//! candidate pool: the more evenly it splits the pool, the more it tells us.
//! Natural logarithms are used unless a base is given.

use crate::partition::{pattern_counts, Partition};
use crate::word::Word;
use rayon::prelude::*;
use std::collections::HashSet;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Entropy of a distribution given by bucket sizes. Empty buckets are ignored.
pub fn entropy<I>(sizes: I, base: Option<f64>) -> f64
where
    I: IntoIterator<Item = usize>,
{
    // sorted so equal multisets of sizes give bit-identical sums
    let mut sizes: Vec<usize> = sizes.into_iter().filter(|&n| n > 0).collect();
    sizes.sort_unstable();
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let nats = sizes
        .iter()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.ln()
        })
        .sum::<f64>();
    match base {
        Some(base) => nats / base.ln(),
        None => nats,
    }
}

pub fn score(partition: &Partition) -> f64 {
    entropy(partition.sizes(), None)
}

/// Guesses ordered by descending entropy, ties kept in probe order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<GuessAnalysis>,
}

impl Ranking {
    pub fn top_n(&self, n: usize) -> &[GuessAnalysis] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn best(&self) -> Option<&GuessAnalysis> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessAnalysis> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<GuessAnalysis> {
        self.entries
    }
}

/// Score every word in `probes` against `pool`.
///
/// `probes` may be larger than `pool`: a word that cannot be the answer can
/// still be the most informative guess.
pub fn rank_guesses(pool: &[Word], probes: &[Word]) -> Ranking {
    let n = pool.len() as f64;
    let possible: HashSet<&Word> = pool.iter().collect();

    let mut entries: Vec<GuessAnalysis> = probes
        .par_iter()
        .map(|&word| {
            let counts = pattern_counts(word, pool);
            let entropy = entropy(counts.iter().map(|&c| c as usize), None);
            GuessAnalysis {
                word,
                entropy,
                expected_remaining: n / entropy.exp(),
                is_candidate: possible.contains(&word),
            }
        })
        .collect();

    // stable: equal scores keep probe order
    entries.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    Ranking { entries }
}

/// First `n` entries of a ranking.
pub fn top_n(ranking: &Ranking, n: usize) -> &[GuessAnalysis] {
    ranking.top_n(n)
}
