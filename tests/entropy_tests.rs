use wordle_tree::entropy::top_n;
use wordle_tree::{entropy, evaluate, partition, rank_guesses, score, FeedbackPattern, Word};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

fn get_test_words() -> Vec<Word> {
    words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_single_bucket_has_no_entropy() {
    assert_close(entropy([7], None), 0.0);
    assert_close(entropy(Vec::new(), None), 0.0);
}

#[test]
fn test_singletons_give_log_n() {
    assert_close(entropy([1; 4], None), 4f64.ln());
    assert_close(entropy([1; 10], None), 10f64.ln());
    assert_close(entropy([1; 4], Some(2.0)), 2.0);
}

#[test]
fn test_empty_buckets_are_ignored() {
    assert_close(entropy([2, 0, 2], None), entropy([2, 2], None));
}

#[test]
fn test_partition_is_exact() {
    let pool = get_test_words();
    for &guess in &pool {
        let partition = partition(guess, &pool);
        assert_eq!(partition.total(), pool.len());

        let mut seen: Vec<Word> = partition.iter().flat_map(|(_, ws)| ws.to_vec()).collect();
        seen.sort();
        let mut expected = pool.clone();
        expected.sort();
        assert_eq!(seen, expected);

        for (pattern, bucket) in partition.iter() {
            assert!(!bucket.is_empty());
            assert!(bucket.iter().all(|&w| evaluate(guess, w) == *pattern));
        }
    }
}

#[test]
fn test_partition_isolates_guess() {
    let pool = words(&["abide", "abode", "abuse"]);
    let partition = partition(word("abide"), &pool);

    assert_eq!(partition.get(&FeedbackPattern::ALL_HIT), Some(&[word("abide")][..]));
    assert_eq!(partition.sizes().sum::<usize>(), 3);
    assert_eq!(partition.len(), 3);
    assert_close(score(&partition), 3f64.ln());
}

#[test]
fn test_score_of_uninformative_guess() {
    let pool = words(&["abide", "abode"]);
    // fuzzy shares no letter with either word
    let partition = partition(word("fuzzy"), &pool);
    assert_eq!(partition.len(), 1);
    assert_close(score(&partition), 0.0);
}

#[test]
fn test_rank_is_descending_and_stable() {
    let pool = words(&["abide", "abode", "abuse"]);
    let ranking = rank_guesses(&pool, &pool);
    let order: Vec<Word> = ranking.iter().map(|a| a.word).collect();
    // abide and abode tie; probe order is kept
    assert_eq!(order, words(&["abide", "abode", "abuse"]));
    assert_close(ranking.iter().next().unwrap().entropy, 3f64.ln());
    assert!(ranking.iter().all(|a| a.is_candidate));
}

#[test]
fn test_rank_full_pool() {
    let pool = get_test_words();
    let ranking = rank_guesses(&pool, &pool);
    assert_eq!(ranking.len(), pool.len());

    let entries: Vec<_> = ranking.iter().collect();
    for pair in entries.windows(2) {
        assert!(pair[0].entropy >= pair[1].entropy);
    }
    let best = ranking.best().unwrap();
    assert_eq!(best.word, word("crane"));
    assert_close(best.entropy, 10f64.ln());
    assert_close(best.expected_remaining, 1.0);
}

#[test]
fn test_probes_outside_pool() {
    let pool = words(&["abide", "abode"]);
    let probes = words(&["fuzzy", "abide"]);
    let ranking = rank_guesses(&pool, &probes);

    let best = ranking.best().unwrap();
    assert_eq!(best.word, word("abide"));
    assert!(best.is_candidate);

    let worst = &ranking.top_n(2)[1];
    assert_eq!(worst.word, word("fuzzy"));
    assert!(!worst.is_candidate);
    assert_close(worst.expected_remaining, 2.0);
}

#[test]
fn test_top_n() {
    let pool = get_test_words();
    let ranking = rank_guesses(&pool, &pool);
    assert_eq!(top_n(&ranking, 3).len(), 3);
    assert_eq!(top_n(&ranking, 3)[0].word, word("crane"));
    assert_eq!(ranking.top_n(100).len(), pool.len());
    assert!(ranking.top_n(0).is_empty());
}
