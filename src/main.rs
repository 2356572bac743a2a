//! Wordle Tree CLI
//!
//! Play Wordle, watch the solver play it, or use the solver as an assistant
//! for a game running elsewhere.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordle_tree::batch::run_batch;
use wordle_tree::render::render_guess;
use wordle_tree::{
    Dictionary, FeedbackPattern, Game, NodeId, ProbeUniverse, SearchTree, SolverConfig,
    StrategyKind, Word, WordleError,
};

#[derive(Parser)]
#[command(name = "wordle-tree")]
#[command(about = "Entropy driven Wordle solver")]
#[command(version)]
struct Cli {
    /// Word list, one word per line
    #[arg(short = 'w', long = "words", default_value = "data/words.txt")]
    words: PathBuf,

    /// Verbose output - log every round
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct SolverArgs {
    #[arg(long, value_enum, default_value_t = StrategyKind::MaxEntropy, global = true)]
    strategy: StrategyKind,

    /// Fixed opening guess; repeat for several turns
    #[arg(long = "opener", global = true)]
    openers: Vec<String>,

    /// Random pick among this many best guesses (fixed-opening)
    #[arg(long, default_value_t = 3, global = true)]
    top_n: usize,

    /// Score every dictionary word as a probe, not just remaining candidates
    #[arg(long, global = true)]
    probe_dictionary: bool,

    /// Expand the search tree to this depth before playing
    #[arg(long, global = true)]
    populate_depth: Option<usize>,

    /// Upper bound on search tree nodes
    #[arg(long, default_value_t = wordle_tree::config::MAX_NODES, global = true)]
    max_nodes: usize,

    #[arg(long, default_value_t = wordle_tree::config::MAX_GUESSES, global = true)]
    max_guesses: usize,

    /// Seed for every random choice
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl From<&SolverArgs> for SolverConfig {
    fn from(args: &SolverArgs) -> Self {
        Self {
            max_guesses: args.max_guesses,
            top_n: args.top_n,
            openers: args.openers.clone(),
            probes: if args.probe_dictionary {
                ProbeUniverse::Dictionary
            } else {
                ProbeUniverse::Candidates
            },
            populate_depth: args.populate_depth,
            max_nodes: args.max_nodes,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Play a game yourself
    Play {
        /// Secret word (random if omitted)
        #[arg(long)]
        word: Option<String>,
    },
    /// Let the solver play a single game
    Solve {
        /// Secret word (random if omitted)
        #[arg(long)]
        word: Option<String>,
    },
    /// Run many games and report statistics
    Batch {
        #[arg(short = 's', long, default_value_t = 500)]
        batch_size: usize,
    },
    /// Show the best opening guesses
    Suggest {
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,
    },
    /// Interactive assistant for a game played elsewhere
    Assist,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wordle_tree::log(cli.verbose);

    let dictionary = Dictionary::load(&cli.words)
        .with_context(|| format!("reading word list {}", cli.words.display()))?;
    anyhow::ensure!(!dictionary.is_empty(), "word list {} has no usable words", cli.words.display());
    let config = SolverConfig::from(&cli.solver);

    match cli.command.unwrap_or(Command::Assist) {
        Command::Play { word } => play(&dictionary, &config, word.as_deref()),
        Command::Solve { word } => solve(&dictionary, &config, cli.solver.strategy, word.as_deref()),
        Command::Batch { batch_size } => {
            let report = run_batch(&dictionary, cli.solver.strategy, &config, batch_size)?;
            println!("{}", report.stats());
            Ok(())
        }
        Command::Suggest { top } => suggest(&dictionary, &config, top),
        Command::Assist => assist(&dictionary, &config),
    }
}

fn secret(dictionary: &Dictionary, word: Option<&str>, rng: &mut SmallRng) -> anyhow::Result<Word> {
    match word {
        Some(word) => Ok(dictionary.lookup(word)?),
        None => dictionary
            .random_word(rng)
            .context("dictionary is empty"),
    }
}

fn play(dictionary: &Dictionary, config: &SolverConfig, word: Option<&str>) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(config.seed());
    let mut game = Game::new(dictionary, secret(dictionary, word, &mut rng)?)
        .with_max_guesses(config.max_guesses);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    while game.is_running() {
        for &(guess, feedback) in game.history() {
            println!("       {}", render_guess(guess, feedback));
        }
        print!("{}", "Guess> ".bright_blue().bold());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match game.submit_guess(line.trim()) {
            Ok(_) => {}
            Err(e @ WordleError::InvalidGuess { .. }) => println!("       {}", e.to_string().red().bold()),
            Err(e) => return Err(e.into()),
        }
    }

    for &(guess, feedback) in game.history() {
        println!("       {}", render_guess(guess, feedback));
    }
    let secret = game.secret().to_uppercase();
    if game.is_won() {
        println!(
            "{} You found the word {} in {} tries!!",
            "Congratulations!".bright_blue().bold(),
            secret.green().bold(),
            game.guesses_made().to_string().green().bold()
        );
    } else {
        println!(
            "{} The word you were looking for is {}",
            "Game over!".bright_red().bold(),
            secret.green().bold()
        );
    }
    Ok(())
}

fn solve(
    dictionary: &Dictionary,
    config: &SolverConfig,
    kind: StrategyKind,
    word: Option<&str>,
) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(config.seed());
    let secret = secret(dictionary, word, &mut rng)?;
    println!("Solving for: {}", secret.to_uppercase().bold());
    println!();

    let mut game = Game::new(dictionary, secret).with_max_guesses(config.max_guesses);
    let mut strategy = kind.build(dictionary, config, rng)?;
    let outcome = wordle_tree::solve(&mut game, strategy.as_mut())?;

    for (i, &(guess, pattern)) in game.history().iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, render_guess(guess, pattern), pattern);
    }
    println!();
    if outcome.won {
        println!("✓ Solved in {} guesses with {}.", outcome.guesses, strategy.name());
    } else {
        println!("✗ Failed to solve within {} guesses.", config.max_guesses);
    }
    Ok(())
}

fn suggest(dictionary: &Dictionary, config: &SolverConfig, top: usize) -> anyhow::Result<()> {
    let tree = SearchTree::new(dictionary).with_probes(config.probes);
    for (i, analysis) in tree.max_entropy_guesses(tree.root(), top)?.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} nats {:>10.1} expected remaining",
            i + 1,
            analysis.word.to_uppercase(),
            analysis.entropy,
            analysis.expected_remaining
        );
    }
    Ok(())
}

fn print_assist_help() {
    println!("Commands:");
    println!("  suggest | s               best guess for the current position");
    println!("  top [n] | t [n]           n best guesses (default 5)");
    println!("  feedback <word> <pattern> record a guess, e.g. feedback crane gybbb");
    println!("  remaining | r             list remaining candidates");
    println!("  back                      undo the last feedback");
    println!("  reset                     start over (cached work is kept)");
    println!("  quit | q");
}

fn assist(dictionary: &Dictionary, config: &SolverConfig) -> anyhow::Result<()> {
    let mut tree = SearchTree::new(dictionary)
        .with_probes(config.probes)
        .with_max_nodes(config.max_nodes);
    if let Some(depth) = config.populate_depth {
        let root = tree.root();
        tree.populate(root, depth)?;
    }
    let mut path: Vec<NodeId> = vec![tree.root()];
    println!("Loaded {} words. Type 'help' for commands.", dictionary.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };
        let command = command.to_lowercase();
        let node = *path.last().unwrap_or(&tree.root());

        match command.as_str() {
            "help" | "h" | "?" => print_assist_help(),
            "quit" | "exit" | "q" => break,
            "suggest" | "s" | "top" | "t" => {
                let n = match command.as_str() {
                    "suggest" | "s" => 1,
                    _ => parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5),
                };
                match tree.max_entropy_guesses(node, n) {
                    Ok(top) => {
                        println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
                        println!("{}", "-".repeat(50));
                        for (i, analysis) in top.iter().enumerate() {
                            println!(
                                "{:>4} {:>8} {:>8.3} {:>12.1} {}",
                                i + 1,
                                analysis.word.to_uppercase(),
                                analysis.entropy,
                                analysis.expected_remaining,
                                if analysis.is_candidate { "✓" } else { "" }
                            );
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "feedback" | "f" | "fb" => {
                let (Some(word), Some(pattern)) = (parts.get(1), parts.get(2)) else {
                    println!("Usage: feedback <word> <pattern>");
                    continue;
                };
                let step = word
                    .parse::<Word>()
                    .and_then(|word| Ok((word, FeedbackPattern::parse(pattern)?)));
                let (word, pattern) = match step {
                    Ok(step) => step,
                    Err(e) => {
                        println!("{}", e);
                        println!("Use g=hit, y=close, b=miss or 0=hit, 1=close, 2=miss (5 characters)");
                        continue;
                    }
                };
                let before = tree.size(node);
                match tree.descend(node, word, pattern) {
                    Ok(next) => {
                        path.push(next);
                        println!("{}  {} → {} words", render_guess(word, pattern), before, tree.size(next));
                        if pattern.is_win() {
                            println!("🎉 Solved!");
                        }
                    }
                    Err(e) => {
                        println!("⚠️  {}", e);
                        println!("Check the feedback, or use 'back' / 'reset'.");
                    }
                }
            }
            "remaining" | "r" | "left" => {
                let remaining = tree.node(node).candidates();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 50 {
                    for chunk in remaining.chunks(10) {
                        let row: Vec<String> = chunk.iter().map(|w| format!("{:>8}", w.to_uppercase())).collect();
                        println!("{}", row.concat());
                    }
                }
            }
            "back" => {
                if path.len() > 1 {
                    path.pop();
                }
            }
            "reset" => {
                path.truncate(1);
                println!("Reset. {} words available, {} nodes cached.", dictionary.len(), tree.len());
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}
