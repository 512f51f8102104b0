//! Integration tests for vocabulary building and vectorization

use spam_rs::features::{
    build_dictionary, count_words, featurize, select_top, CombineMode, FeatureDictionary,
    WordCounts,
};
use spam_rs::SpamError;

fn lists(messages: &[&[&str]]) -> Vec<Vec<String>> {
    messages
        .iter()
        .map(|m| m.iter().map(|w| w.to_string()).collect())
        .collect()
}

fn sample_counts() -> WordCounts {
    count_words(
        &lists(&[
            &["free", "money", "win", "free"],
            &["free", "win", "prize"],
            &["win", "cash", "free", "now"],
            &["money", "now"],
        ]),
        true,
    )
}

fn assert_contiguous(dict: &FeatureDictionary) {
    let mut indices: Vec<usize> = dict.iter().map(|(i, _)| i).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..dict.len()).collect::<Vec<_>>());
    for (i, word) in dict.iter() {
        assert_eq!(dict.get(word), Some(i));
    }
}

#[test]
fn test_spam_ham_example() {
    let dict = build_dictionary(&["free", "win"], &["win", "meeting"], "spam-ham").unwrap();
    assert_eq!(dict.words(), &["free"]);
}

#[test]
fn test_symmetric_difference_example() {
    let dict =
        build_dictionary(&["free", "win"], &["win", "meeting"], "symmetric difference").unwrap();
    assert_eq!(dict.words(), &["free", "meeting"]);
}

#[test]
fn test_spam_only_keeps_spam_order() {
    let dict = build_dictionary(&["win", "free"], &["win", "meeting"], "spam only").unwrap();
    assert_eq!(dict.get("win"), Some(0));
    assert_eq!(dict.get("free"), Some(1));
    assert!(!dict.contains("meeting"));
}

#[test]
fn test_unknown_mode() {
    let err = build_dictionary(&["free"], &["win"], "ham only").unwrap_err();
    assert!(matches!(err, SpamError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("ham only"));
}

#[test]
fn test_size_bound() {
    let counts = sample_counts();
    for maximum in 1..=6 {
        assert!(select_top(&counts, 0, maximum).len() <= maximum);
    }
    assert_eq!(select_top(&counts, 0, 2), vec!["free", "win"]);
}

#[test]
fn test_threshold_is_strict() {
    let counts = sample_counts();
    for threshold in 0..4 {
        let top = select_top(&counts, threshold, 0);
        assert!(top.iter().all(|w| counts.get(w) > threshold));
        for (word, count) in counts.iter() {
            if count <= threshold {
                assert!(!top.iter().any(|w| w == word));
            }
        }
    }
    // free and win appear in 3 messages each
    assert_eq!(select_top(&counts, 2, 0), vec!["free", "win"]);
    assert!(select_top(&counts, 3, 0).is_empty());
}

#[test]
fn test_indices_are_contiguous_in_every_mode() {
    let spam = ["free", "win", "cash", "now", "prize"];
    let ham = ["win", "meeting", "now", "lunch"];
    for mode in [
        CombineMode::SpamOnly,
        CombineMode::SpamMinusHam,
        CombineMode::SymmetricDifference,
    ] {
        let dict = FeatureDictionary::combine(&spam, &ham, mode);
        assert_contiguous(&dict);
    }
}

#[test]
fn test_set_modes_are_reproducible() {
    let spam = ["zeta", "alpha", "mid", "win"];
    let ham = ["win", "omega", "beta"];
    let first = FeatureDictionary::combine(&spam, &ham, CombineMode::SymmetricDifference);
    let second = FeatureDictionary::combine(&spam, &ham, CombineMode::SymmetricDifference);
    assert_eq!(first, second);
    assert_eq!(first.words(), &["alpha", "beta", "mid", "omega", "zeta"]);
}

#[test]
fn test_featurize_bounds() {
    let dict = FeatureDictionary::from_words(["free", "money", "win"]);

    let vector = featurize(&["win", "win", "unknown", "free"], &dict);
    assert_eq!(vector.len(), dict.len());
    assert!(vector.as_slice().iter().all(|v| *v <= 1));
    assert_eq!(vector.as_slice(), &[1, 0, 1]);

    let empty: [&str; 0] = [];
    assert_eq!(featurize(&empty, &dict).count_active(), 0);
    assert_eq!(featurize(&["nothing", "here"], &dict).count_active(), 0);
    assert_eq!(featurize(&["nothing"], &dict).len(), 3);
}

#[test]
fn test_dictionary_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.json");

    let dict = build_dictionary(&["free", "win"], &["win", "meeting"], "symmetric difference")
        .unwrap();
    dict.save(&path).unwrap();

    let loaded = FeatureDictionary::load(&path).unwrap();
    assert_eq!(loaded, dict);
    assert_eq!(loaded.get("meeting"), Some(1));
}

#[test]
fn test_dictionary_rejects_gaps() {
    let err = FeatureDictionary::from_json(r#"{"free": 0, "win": 2}"#).unwrap_err();
    assert!(matches!(err, SpamError::InvalidDictionary(_)));

    let err = FeatureDictionary::from_json(r#"{"free": 0, "win": 0}"#).unwrap_err();
    assert!(matches!(err, SpamError::InvalidDictionary(_)));
}
