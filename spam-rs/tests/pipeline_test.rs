//! Integration tests for corpus loading and end-to-end data preparation

use spam_rs::classifier::{BernoulliNaiveBayes, Classifier};
use spam_rs::corpus::{load_corpus, rng_from_seed};
use spam_rs::features::Label;
use spam_rs::metrics::accuracy;
use spam_rs::pipeline::FeaturePipeline;
use spam_rs::{Config, SpamError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

const SPAMS: [&str; 4] = [
    "Subject: act now\n\nWin FREE money now! Claim at http://win.example.com",
    "Subject: prize\n\nYou win a free prize worth $1000, reply to claim@win.example.com",
    "Subject: cash\n\nFree cash bonus, win big today <b>click</b>",
    "Subject: offer\n\nFree money offer, win win win",
];

const HAMS: [&str; 4] = [
    "Subject: standup\n\nMeeting notes from the standup are attached",
    "Subject: lunch\n\nLunch after the meeting tomorrow?",
    "Subject: review\n\nPlease review the meeting agenda before friday",
    "Subject: notes\n\nNotes for the project meeting, see you there",
];

fn write_dir(dir: &Path, emails: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for (i, email) in emails.iter().enumerate() {
        fs::write(dir.join(format!("{:04}.eml", i)), email).unwrap();
    }
}

fn write_mbox(path: &Path, emails: &[&str]) {
    let mut file = fs::File::create(path).unwrap();
    for email in emails {
        writeln!(file, "From sender@example.com Wed Dec 25 12:00:00 2024").unwrap();
        writeln!(file, "{}", email).unwrap();
        writeln!(file).unwrap();
    }
}

fn corpus() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_dir(&dir.path().join("spam"), &SPAMS);
    write_mbox(&dir.path().join("ham.mbox"), &HAMS);
    dir
}

fn config_for(dir: &Path, mode: &str) -> Config {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[corpus]
spam_path = "{}"
ham_path = "{}"

[vocabulary]
threshold = 1
mode = "{}"

[split]
train = 1.0
cv = 0.0
seed = 42
"#,
        dir.join("spam").display(),
        dir.join("ham.mbox").display(),
        mode
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    config.validate().unwrap();
    config
}

#[test]
fn test_load_dir_sorted_and_capped() {
    let dir = corpus();
    let spam_dir = dir.path().join("spam");
    fs::write(spam_dir.join(".hidden"), "ignored").unwrap();
    fs::create_dir(spam_dir.join("nested")).unwrap();

    let emails = load_corpus(&spam_dir, 0).unwrap();
    assert_eq!(emails, SPAMS.to_vec());

    let emails = load_corpus(&spam_dir, 2).unwrap();
    assert_eq!(emails, SPAMS[..2].to_vec());
}

#[test]
fn test_load_mbox() {
    let dir = corpus();
    let emails = load_corpus(dir.path().join("ham.mbox"), 0).unwrap();
    assert_eq!(emails.len(), HAMS.len());
    assert!(emails[0].starts_with("Subject: standup\n\n"));
    assert_eq!(emails[3].trim_end(), HAMS[3]);
}

#[test]
fn test_missing_corpus_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_corpus(dir.path().join("nope"), 0).unwrap_err();
    assert!(matches!(err, SpamError::Io(_)));
}

#[test]
fn test_empty_corpus_gives_empty_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let pipeline = FeaturePipeline::from_config(&config).unwrap();

    let emails = load_corpus(dir.path(), 0).unwrap();
    assert!(emails.is_empty());

    let dict = pipeline.dictionary_from_emails(&emails, &emails);
    assert!(dict.is_empty());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = corpus();
    let config = config_for(dir.path(), "spam-ham");
    assert_eq!(config.vocabulary.threshold, 1);
    assert_eq!(config.split.seed, Some(42));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_bad_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[vocabulary]\nthreshold = \"lots\"\n").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, SpamError::Config(_)));
}

#[test]
fn test_spam_ham_dictionary_from_disk() {
    let dir = corpus();
    let config = config_for(dir.path(), "spam-ham");
    let pipeline = FeaturePipeline::from_config(&config).unwrap();

    let spams = load_corpus(&config.corpus.spam_path, 0).unwrap();
    let hams = load_corpus(&config.corpus.ham_path, 0).unwrap();
    let dict = pipeline.dictionary_from_emails(&spams, &hams);

    assert_eq!(dict.words(), &["free", "money", "win"]);
}

#[test]
fn test_prepare_and_train() {
    let dir = corpus();
    let config = config_for(dir.path(), "symmetric difference");
    let pipeline = FeaturePipeline::from_config(&config).unwrap();

    let spams = load_corpus(&config.corpus.spam_path, 0).unwrap();
    let hams = load_corpus(&config.corpus.ham_path, 0).unwrap();
    let data = pipeline.prepare(&spams, &hams, &mut rng_from_seed(config.split.seed));

    assert_eq!(data.train.len(), 8);
    assert_eq!(data.train.spam_count(), 4);
    assert!(data.cv.is_empty() && data.test.is_empty());
    assert!(data.dictionary.contains("meet"));

    let mut clf = BernoulliNaiveBayes::new();
    clf.fit(&data.train.x, &data.train.y).unwrap();
    let predictions = clf.predict(&data.train.x);
    assert_eq!(accuracy(&data.train.y, &predictions), 1.0);
    assert_eq!(predictions[0], Label::Spam);
}

#[test]
fn test_same_seed_same_split() {
    let mut config = Config::default();
    config.vocabulary.threshold = 0;
    let pipeline = FeaturePipeline::from_config(&config).unwrap();

    let a = pipeline.prepare(&SPAMS, &HAMS, &mut rng_from_seed(Some(9)));
    let b = pipeline.prepare(&SPAMS, &HAMS, &mut rng_from_seed(Some(9)));

    assert_eq!(a.dictionary, b.dictionary);
    assert_eq!(a.train, b.train);
    assert_eq!(a.cv, b.cv);
    assert_eq!(a.test, b.test);
    assert_eq!(a.train.len() + a.cv.len() + a.test.len(), 8);
}
