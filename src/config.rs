//! Solver settings shared by the library and the command line.

use crate::tree::ProbeUniverse;

/// Guesses allowed per game.
pub const MAX_GUESSES: usize = 6;
/// Default ceiling on search tree nodes created by `populate`.
pub const MAX_NODES: usize = 200_000;
/// Frequency strategy picks among this many on the first turn...
pub const FREQUENCY_OPENING_TOP: usize = 40;
/// ...and among this many afterwards.
pub const FREQUENCY_FOLLOWUP_TOP: usize = 4;

/// Openers of the fixed-opening strategy when none are configured.
pub const DEFAULT_OPENERS: [&str; 2] = ["raise", "clout"];

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub max_guesses: usize,
    /// Random choice among this many top-entropy guesses (fixed-opening strategy).
    pub top_n: usize,
    /// Played verbatim on the first turns. Empty means [`DEFAULT_OPENERS`]
    /// for fixed-opening and no openers for max-entropy.
    pub openers: Vec<String>,
    pub probes: ProbeUniverse,
    /// Eagerly expand the search tree to this depth before playing.
    pub populate_depth: Option<usize>,
    pub max_nodes: usize,
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            top_n: 3,
            openers: Vec::new(),
            probes: ProbeUniverse::Candidates,
            populate_depth: None,
            max_nodes: MAX_NODES,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// The configured seed, or a fresh one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
