//! Grouping candidates by the feedback a guess would produce.

use crate::feedback::{evaluate, FeedbackPattern};
use crate::word::Word;
use std::collections::HashMap;

/// Candidates bucketed by the feedback they give against one guess.
///
/// Only patterns that actually occur get a bucket, so no bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    buckets: HashMap<FeedbackPattern, Vec<Word>>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of candidates across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn get(&self, pattern: &FeedbackPattern) -> Option<&[Word]> {
        self.buckets.get(pattern).map(Vec::as_slice)
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.values().map(Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeedbackPattern, &[Word])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_buckets(self) -> HashMap<FeedbackPattern, Vec<Word>> {
        self.buckets
    }
}

pub fn partition(guess: Word, candidates: &[Word]) -> Partition {
    let mut buckets: HashMap<FeedbackPattern, Vec<Word>> = HashMap::new();
    for &candidate in candidates {
        buckets
            .entry(evaluate(guess, candidate))
            .or_default()
            .push(candidate);
    }
    Partition { buckets }
}

/// Bucket sizes only, indexed by [`FeedbackPattern::index`].
pub(crate) fn pattern_counts(guess: Word, candidates: &[Word]) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &candidate in candidates {
        counts[evaluate(guess, candidate).index()] += 1;
    }
    counts
}
