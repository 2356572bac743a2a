//! Driving strategies through games, one at a time or in parallel batches.

use crate::config::SolverConfig;
use crate::error::WordleError;
use crate::game::Game;
use crate::render::render_line;
use crate::strategy::{Strategy, StrategyKind};
use crate::tree::SearchTree;
use crate::word::{Dictionary, Word};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub secret: Word,
    pub guesses: usize,
    pub won: bool,
}

/// Play `game` to completion with `strategy`.
pub fn solve(game: &mut Game<'_>, strategy: &mut dyn Strategy) -> Result<RunOutcome, WordleError> {
    while game.is_running() {
        let turn = game.guesses_made();
        log::debug!(
            "--- round {}: {} words remaining ---",
            turn + 1,
            strategy.remaining()
        );
        let guess = strategy.next_guess(turn)?;
        let feedback = game.submit(guess)?;
        log::debug!("    {}", render_line(guess, feedback));
        if feedback.is_win() {
            break;
        }
        strategy.observe(guess, feedback)?;
    }
    Ok(RunOutcome {
        secret: game.secret(),
        guesses: game.guesses_made(),
        won: game.is_won(),
    })
}

/// Build a fresh strategy and play one game against `secret`.
pub fn run_one(
    dictionary: &Dictionary,
    kind: StrategyKind,
    config: &SolverConfig,
    secret: Word,
    rng: SmallRng,
) -> Result<RunOutcome, WordleError> {
    let mut game = Game::new(dictionary, secret).with_max_guesses(config.max_guesses);
    let mut strategy = kind.build(dictionary, config, rng)?;
    solve(&mut game, strategy.as_mut())
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RunOutcome>,
    /// Runs stopped by an error, typically a contradiction.
    pub aborted: usize,
}

impl BatchReport {
    pub fn stats(&self) -> Stats {
        Stats::new(&self.outcomes, self.aborted)
    }
}

/// Play `runs` independent games in parallel. Run `i` is seeded with
/// `seed + i`, so a batch is reproducible whatever the thread count.
pub fn run_batch(
    dictionary: &Dictionary,
    kind: StrategyKind,
    config: &SolverConfig,
    runs: usize,
) -> Result<BatchReport, WordleError> {
    if dictionary.is_empty() {
        return Err(WordleError::Contradiction { depth: 0 });
    }
    let seed = config.seed();
    log::info!("{:<32}{:<32}", "batch seed", seed);
    let config = &precompute_opener(dictionary, kind, config)?;

    let results: Vec<Result<RunOutcome, WordleError>> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let secret = dictionary
                .random_word(&mut rng)
                .ok_or(WordleError::Contradiction { depth: 0 })?;
            run_one(dictionary, kind, config, secret, rng)
        })
        .collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(e) => {
                log::warn!("{:<32}{:<32}", "aborted run", e);
                report.aborted += 1;
            }
        }
    }
    Ok(report)
}

/// The unseeded max-entropy opener is the same for every run, so rank the
/// root once instead of once per run.
fn precompute_opener(
    dictionary: &Dictionary,
    kind: StrategyKind,
    config: &SolverConfig,
) -> Result<SolverConfig, WordleError> {
    let mut config = config.clone();
    if kind == StrategyKind::MaxEntropy && config.openers.is_empty() {
        let tree = SearchTree::new(dictionary).with_probes(config.probes);
        if let Some(best) = tree.max_entropy_guesses(tree.root(), 1)?.first() {
            log::info!("{:<32}{:<32}", "max entropy opener", best.word);
            config.openers = vec![best.word.to_string()];
        }
    }
    Ok(config)
}

/// Summary of a batch; guess-count figures cover won games only.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub runs: usize,
    pub wins: usize,
    pub losses: usize,
    pub aborted: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<usize>,
}

impl Stats {
    pub fn new(outcomes: &[RunOutcome], aborted: usize) -> Self {
        let mut wins: Vec<usize> = outcomes
            .iter()
            .filter(|o| o.won)
            .map(|o| o.guesses)
            .collect();
        wins.sort_unstable();

        let mean = (!wins.is_empty()).then(|| wins.iter().sum::<usize>() as f64 / wins.len() as f64);
        let median = match wins.len() {
            0 => None,
            n if n % 2 == 1 => Some(wins[n / 2] as f64),
            n => Some((wins[n / 2 - 1] + wins[n / 2]) as f64 / 2.0),
        };
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &g in &wins {
            *counts.entry(g).or_default() += 1;
        }
        // smallest guess count among the most frequent
        let mode = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&g, _)| g);

        Self {
            runs: outcomes.len() + aborted,
            wins: wins.len(),
            losses: outcomes.len() - wins.len(),
            aborted,
            mean,
            median,
            mode,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.wins as f64 / self.runs as f64
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: usize| {
            if self.runs == 0 {
                0.0
            } else {
                100.0 * n as f64 / self.runs as f64
            }
        };
        let show = |v: Option<f64>| v.map_or("-".to_string(), |v| format!("{:.3}", v));
        writeln!(f, "Runs: {}", self.runs)?;
        writeln!(
            f,
            "Wins: {} ({:.1}%)    Losses: {} ({:.1}%)    Aborted: {}",
            self.wins,
            pct(self.wins),
            self.losses,
            pct(self.losses),
            self.aborted
        )?;
        writeln!(f, "Num Guesses")?;
        writeln!(f, "    Mean:   {}", show(self.mean))?;
        writeln!(f, "    Median: {}", show(self.median))?;
        write!(
            f,
            "    Mode:   {}",
            self.mode.map_or("-".to_string(), |m| m.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn precomputed_opener_keeps_max_entropy_name() {
        let dictionary = Dictionary::from_words(["crane", "slate", "trace", "toast", "beast"]);
        let config = precompute_opener(&dictionary, StrategyKind::MaxEntropy, &SolverConfig::default())
            .unwrap();
        assert_eq!(config.openers.len(), 1);

        let mut strategy = StrategyKind::MaxEntropy
            .build(&dictionary, &config, SmallRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(strategy.name(), "max-entropy");
        assert_eq!(strategy.next_guess(0).unwrap().to_string(), config.openers[0]);
    }
}
