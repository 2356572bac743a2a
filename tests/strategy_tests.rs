use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordle_tree::strategy::{letter_frequencies, rank_by_frequency};
use wordle_tree::{
    evaluate, solve, Dictionary, EntropyStrategy, FeedbackPattern, FrequencyStrategy, Game,
    SolverConfig, Strategy, StrategyKind, Word, WordleError,
};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn get_test_dictionary() -> Dictionary {
    Dictionary::from_words([
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

fn load_dictionary() -> Dictionary {
    Dictionary::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")).unwrap()
}

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn test_letter_frequencies() {
    let dictionary = get_test_dictionary();
    let counts = letter_frequencies(dictionary.words());
    assert_eq!(counts[(b'a' - b'a') as usize], 10);
    assert_eq!(counts[(b'e' - b'a') as usize], 8);
    assert_eq!(counts[(b'b' - b'a') as usize], 1);
    assert_eq!(counts[(b'z' - b'a') as usize], 0);
}

#[test]
fn test_rank_by_frequency() {
    let dictionary = get_test_dictionary();
    let ranked = rank_by_frequency(dictionary.words());
    assert_eq!(ranked[0], (word("stare"), 39));
    // trace and crate tie; dictionary order is kept
    assert_eq!(ranked[1], (word("trace"), 35));
    assert_eq!(ranked[2], (word("crate"), 35));
    assert_eq!(ranked.last(), Some(&(word("toast"), 26)));
}

#[test]
fn test_frequency_strategy_narrows() {
    let dictionary = get_test_dictionary();
    let secret = word("beast");
    let mut strategy = FrequencyStrategy::new(&dictionary, rng(7));

    let guess = strategy.next_guess(0).unwrap();
    assert!(dictionary.is_valid_word(&guess));
    strategy.observe(guess, evaluate(guess, secret)).unwrap();

    assert!(strategy.remaining() < dictionary.len());
    assert!(strategy.candidates().contains(&secret));
    if guess != secret {
        assert!(!strategy.candidates().contains(&guess));
    }
}

#[test]
fn test_frequency_strategy_contradiction() {
    let dictionary = get_test_dictionary();
    let mut strategy = FrequencyStrategy::new(&dictionary, rng(7));
    let result = strategy.observe(word("crane"), FeedbackPattern::parse("bbbbb").unwrap());
    assert_eq!(result, Err(WordleError::Contradiction { depth: 1 }));
}

#[test]
fn test_frequency_strategy_plays_to_the_end() {
    let dictionary = get_test_dictionary();
    for (i, &secret) in dictionary.words().iter().enumerate() {
        let mut game = Game::new(&dictionary, secret);
        let mut strategy = FrequencyStrategy::new(&dictionary, rng(i as u64));
        let outcome = solve(&mut game, &mut strategy).unwrap();
        assert!(outcome.guesses <= 6);
        assert!(!game.is_running());
        if outcome.won {
            assert_eq!(game.history().last().unwrap().0, secret);
        }
    }
}

#[test]
fn test_max_entropy_solves_every_word() {
    let dictionary = get_test_dictionary();
    for &secret in dictionary.words() {
        let mut game = Game::new(&dictionary, secret);
        let mut strategy = EntropyStrategy::new(&dictionary, rng(0));
        let outcome = solve(&mut game, &mut strategy).unwrap();

        assert!(outcome.won, "didn't win for {}", secret);
        assert!(outcome.guesses <= 2, "too many guesses for {}", secret);
        assert_eq!(game.history()[0].0, word("crane"));
    }
}

#[test]
fn test_fixed_opening_plays_openers_first() {
    let dictionary = load_dictionary();
    let secret = word("fuzzy");
    let mut game = Game::new(&dictionary, secret);
    let mut strategy = EntropyStrategy::new(&dictionary, rng(0))
        .with_openers(["raise", "clout"])
        .with_top_n(1);
    assert_eq!(strategy.name(), "fixed-opening");

    let outcome = solve(&mut game, &mut strategy).unwrap();
    let guesses: Vec<Word> = game.history().iter().map(|&(g, _)| g).collect();
    assert_eq!(guesses, vec![word("raise"), word("clout"), word("funny"), word("fuzzy")]);
    assert!(outcome.won);
    assert_eq!(outcome.guesses, 4);
}

#[test]
fn test_unknown_openers_are_dropped() {
    let dictionary = get_test_dictionary();
    let strategy = EntropyStrategy::new(&dictionary, rng(0)).with_openers(["crane", "zzzzz", "toolong"]);
    assert_eq!(strategy.openers(), &[word("crane")]);
}

#[test]
fn test_fixed_opening_is_reproducible() {
    let dictionary = load_dictionary();
    let config = SolverConfig::default();
    let play = |seed: u64| {
        let mut game = Game::new(&dictionary, word("youth"));
        let mut strategy = StrategyKind::FixedOpening
            .build(&dictionary, &config, rng(seed))
            .unwrap();
        solve(&mut game, strategy.as_mut()).unwrap();
        game.history().to_vec()
    };
    let first = play(42);
    assert_eq!(first, play(42));
    assert_eq!(first[0].0, word("raise"));
    assert_eq!(first[1].0, word("clout"));
}

#[test]
fn test_entropy_strategy_contradiction() {
    let dictionary = get_test_dictionary();
    let mut strategy = EntropyStrategy::new(&dictionary, rng(0));
    let result = strategy.observe(word("crane"), FeedbackPattern::parse("bbbbb").unwrap());
    assert_eq!(result, Err(WordleError::Contradiction { depth: 1 }));
}

#[test]
fn test_entropy_strategy_reuses_tree() {
    let dictionary = get_test_dictionary();
    let mut strategy = EntropyStrategy::new(&dictionary, rng(0));
    let guess = strategy.next_guess(0).unwrap();
    strategy.observe(guess, evaluate(guess, word("toast"))).unwrap();

    assert_eq!(strategy.tree().partitions_computed(), 1);
    assert_eq!(strategy.remaining(), 1);
    assert_eq!(strategy.next_guess(1).unwrap(), word("toast"));
}

#[test]
fn test_strategy_kinds_build() {
    let dictionary = get_test_dictionary();
    let config = SolverConfig {
        populate_depth: Some(2),
        ..SolverConfig::default()
    };
    for kind in [StrategyKind::MaxFrequency, StrategyKind::FixedOpening, StrategyKind::MaxEntropy] {
        let strategy = kind.build(&dictionary, &config, rng(1)).unwrap();
        assert_eq!(strategy.remaining(), dictionary.len());
    }
    // raise is the only default opener in this dictionary
    let strategy = StrategyKind::FixedOpening
        .build(&dictionary, &config, rng(1))
        .unwrap();
    assert_eq!(strategy.name(), "fixed-opening");
    let strategy = StrategyKind::MaxEntropy
        .build(&dictionary, &config, rng(1))
        .unwrap();
    assert_eq!(strategy.name(), "max-entropy");
}

#[test]
fn test_max_entropy_keeps_its_name_with_first_guesses() {
    let dictionary = get_test_dictionary();
    let config = SolverConfig {
        openers: vec!["toast".to_string()],
        ..SolverConfig::default()
    };
    let mut strategy = StrategyKind::MaxEntropy
        .build(&dictionary, &config, rng(1))
        .unwrap();
    assert_eq!(strategy.name(), "max-entropy");
    assert_eq!(strategy.next_guess(0).unwrap(), word("toast"));

    let strategy = EntropyStrategy::new(&dictionary, rng(0)).with_first_guesses(["toast"]);
    assert_eq!(strategy.openers(), &[word("toast")]);
    assert_eq!(strategy.name(), "max-entropy");
}
