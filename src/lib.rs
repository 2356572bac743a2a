//! # Wordle Tree
//!
//! A Wordle solver built around feedback partitions.
//!
//! A guess splits the remaining candidates into buckets by the feedback each
//! candidate would produce. Guesses are ranked by the entropy of that split,
//! and a memoized search tree keeps the buckets around from turn to turn.

pub mod batch;
pub mod config;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game;
pub mod partition;
pub mod render;
pub mod strategy;
pub mod tree;
pub mod word;

pub use batch::{run_batch, solve, RunOutcome, Stats};
pub use config::SolverConfig;
pub use entropy::{entropy, rank_guesses, score, GuessAnalysis, Ranking};
pub use error::WordleError;
pub use feedback::{evaluate, Feedback, FeedbackPattern};
pub use filter::{apply_feedback, Constraints};
pub use game::Game;
pub use partition::{partition, Partition};
pub use strategy::{EntropyStrategy, FrequencyStrategy, Strategy, StrategyKind};
pub use tree::{NodeId, ProbeUniverse, SearchTree};
pub use word::{Dictionary, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Terminal logging for the command line tool.
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
