//! End-to-end feature preparation
//!
//! Raw spam and ham messages go in; a feature dictionary and labelled
//! train / cv / test matrices come out. The dictionary is built from the
//! whole corpus before partitioning, and every partition is vectorized
//! against that same dictionary.

use rand::Rng;
use std::time::Instant;
use tracing::info;

use crate::config::{Config, SplitConfig, VocabularyConfig};
use crate::corpus::make_sets;
use crate::error::Result;
use crate::features::{
    count_words, featurize_batch, make_arrays, select_top, CombineMode, FeatureDictionary,
    LabeledSet,
};
use crate::preprocess::{Normalizer, TokenList};

/// Output of [`FeaturePipeline::prepare`]
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub dictionary: FeatureDictionary,
    pub train: LabeledSet,
    pub cv: LabeledSet,
    pub test: LabeledSet,
}

/// Normalizer plus vocabulary and split settings
#[derive(Clone)]
pub struct FeaturePipeline {
    normalizer: Normalizer,
    vocabulary: VocabularyConfig,
    mode: CombineMode,
    split: SplitConfig,
}

impl FeaturePipeline {
    /// Fails with `InvalidConfiguration` for an unknown vocabulary mode
    pub fn new(normalizer: Normalizer, config: &Config) -> Result<Self> {
        Ok(Self {
            normalizer,
            mode: config.vocabulary.combine_mode()?,
            vocabulary: config.vocabulary.clone(),
            split: config.split.clone(),
        })
    }

    /// Pipeline with the Snowball English normalizer
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(Normalizer::english()?, config)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    /// Select top spam and ham words and combine them
    pub fn build_dictionary(
        &self,
        spam_lists: &[TokenList],
        ham_lists: &[TokenList],
    ) -> FeatureDictionary {
        let vocab = &self.vocabulary;

        let spam_counts = count_words(spam_lists, vocab.deduplicate);
        let ham_counts = count_words(ham_lists, vocab.deduplicate);

        let spam_words = select_top(&spam_counts, vocab.threshold, vocab.maximum);
        let ham_words = select_top(&ham_counts, vocab.threshold, vocab.maximum);

        FeatureDictionary::combine(&spam_words, &ham_words, self.mode)
    }

    /// Dictionary straight from raw messages
    pub fn dictionary_from_emails<T: AsRef<str>>(
        &self,
        spams: &[T],
        hams: &[T],
    ) -> FeatureDictionary {
        let spam_lists = self.normalizer.normalize_batch(spams);
        let ham_lists = self.normalizer.normalize_batch(hams);
        self.build_dictionary(&spam_lists, &ham_lists)
    }

    /// Normalize, build the dictionary, vectorize and partition.
    ///
    /// Infallible: the mode was validated when the pipeline was built.
    pub fn prepare<T, R>(&self, spams: &[T], hams: &[T], rng: &mut R) -> PreparedData
    where
        T: AsRef<str>,
        R: Rng + ?Sized,
    {
        let t = Instant::now();
        info!(spam = spams.len(), "Preprocessing spam");
        let spam_lists = self.normalizer.normalize_batch(spams);
        let t = log_time(t);

        info!(ham = hams.len(), "Preprocessing ham");
        let ham_lists = self.normalizer.normalize_batch(hams);
        let t = log_time(t);

        info!(mode = %self.mode, "Making feature lists");
        let dictionary = self.build_dictionary(&spam_lists, &ham_lists);
        info!(words = dictionary.len(), "Feature dictionary ready");
        let t = log_time(t);

        info!("Building data");
        let spam_data = featurize_batch(&spam_lists, &dictionary);
        let ham_data = featurize_batch(&ham_lists, &dictionary);
        let sets = make_sets(spam_data, ham_data, self.split.train, self.split.cv, rng);

        let prepared = PreparedData {
            train: make_arrays(sets.train.spam, sets.train.ham),
            cv: make_arrays(sets.cv.spam, sets.cv.ham),
            test: make_arrays(sets.test.spam, sets.test.ham),
            dictionary,
        };
        log_time(t);

        info!(
            train = prepared.train.len(),
            cv = prepared.cv.len(),
            test = prepared.test.len(),
            features = prepared.dictionary.len(),
            "Prepared data"
        );

        prepared
    }
}

fn log_time(start: Instant) -> Instant {
    info!(elapsed = ?start.elapsed(), "Stage finished");
    Instant::now()
}
