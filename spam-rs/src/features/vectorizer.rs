//! Token list -> presence vector

use tracing::debug;

use super::dictionary::FeatureDictionary;
use super::types::{FeatureVector, Label};

/// Presence vector of `tokens` over `dict`.
///
/// Out-of-vocabulary tokens are ignored; repeats change nothing.
pub fn featurize<S: AsRef<str>>(tokens: &[S], dict: &FeatureDictionary) -> FeatureVector {
    let mut vector = FeatureVector::zeros(dict.len());
    for token in tokens {
        if let Some(i) = dict.get(token.as_ref()) {
            vector.set(i);
        }
    }
    vector
}

/// Featurize many token lists against one dictionary
pub fn featurize_batch<L: AsRef<[String]>>(
    token_lists: &[L],
    dict: &FeatureDictionary,
) -> Vec<FeatureVector> {
    token_lists
        .iter()
        .map(|tokens| featurize(tokens.as_ref(), dict))
        .collect()
}

/// Stacked feature vectors with their labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledSet {
    pub x: Vec<FeatureVector>,
    pub y: Vec<Label>,
}

impl LabeledSet {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Rows picked by index, in the given order
    pub fn select(&self, rows: &[usize]) -> LabeledSet {
        LabeledSet {
            x: rows.iter().map(|&r| self.x[r].clone()).collect(),
            y: rows.iter().map(|&r| self.y[r]).collect(),
        }
    }

    pub fn spam_count(&self) -> usize {
        self.y.iter().filter(|l| l.is_spam()).count()
    }
}

/// Stack spam rows then ham rows, labelled 1 and 0
pub fn make_arrays(spam: Vec<FeatureVector>, ham: Vec<FeatureVector>) -> LabeledSet {
    let mut y = Vec::with_capacity(spam.len() + ham.len());
    y.extend(std::iter::repeat(Label::Spam).take(spam.len()));
    y.extend(std::iter::repeat(Label::Ham).take(ham.len()));

    let mut x = spam;
    x.extend(ham);

    debug!(rows = x.len(), "Stacked labeled feature vectors");

    LabeledSet { x, y }
}
