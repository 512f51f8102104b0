//! Feature dictionary: the word -> index mapping behind every feature vector
//!
//! Indices are contiguous from 0 and never change once built. A dictionary
//! serializes as a JSON object whose entries appear in index order, and
//! loading one rejects gaps or repeated indices.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use super::types::CombineMode;
use crate::error::{Result, SpamError};

/// Immutable word -> index mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, usize>")]
pub struct FeatureDictionary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureDictionary {
    /// Assign indices in iteration order; a repeated word keeps its first index
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.into();
            if dict.index.contains_key(&word) {
                continue;
            }
            dict.index.insert(word.clone(), dict.words.len());
            dict.words.push(word);
        }
        dict
    }

    /// Combine spam and ham top-word lists.
    ///
    /// Set-based modes index their words in lexicographic order.
    pub fn combine<S: AsRef<str>>(spam_words: &[S], ham_words: &[S], mode: CombineMode) -> Self {
        let dict = match mode {
            CombineMode::SpamOnly => Self::from_words(spam_words.iter().map(|w| w.as_ref())),
            CombineMode::SpamMinusHam => {
                let spam: BTreeSet<&str> = spam_words.iter().map(|w| w.as_ref()).collect();
                let ham: BTreeSet<&str> = ham_words.iter().map(|w| w.as_ref()).collect();
                Self::from_words(spam.difference(&ham).copied())
            }
            CombineMode::SymmetricDifference => {
                let spam: BTreeSet<&str> = spam_words.iter().map(|w| w.as_ref()).collect();
                let ham: BTreeSet<&str> = ham_words.iter().map(|w| w.as_ref()).collect();
                Self::from_words(spam.symmetric_difference(&ham).copied())
            }
        };

        debug!(
            mode = %mode,
            spam_words = spam_words.len(),
            ham_words = ham_words.len(),
            vocabulary = dict.len(),
            "Built feature dictionary"
        );

        dict
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of a word
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Word at an index
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Words in index order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// (index, word) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.words.iter().enumerate().map(|(i, w)| (i, w.as_str()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let map: HashMap<String, usize> = serde_json::from_str(json)?;
        Self::try_from(map)
    }

    /// Write the dictionary as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.to_json()?)?;
        info!(
            path = %path.as_ref().display(),
            words = self.len(),
            "Saved feature dictionary"
        );
        Ok(())
    }

    /// Read a dictionary written by [`FeatureDictionary::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let dict = Self::from_json(&content)?;
        info!(
            path = %path.as_ref().display(),
            words = dict.len(),
            "Loaded feature dictionary"
        );
        Ok(dict)
    }
}

impl Serialize for FeatureDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.words.iter().enumerate().map(|(i, w)| (w, i)))
    }
}

impl TryFrom<HashMap<String, usize>> for FeatureDictionary {
    type Error = SpamError;

    fn try_from(map: HashMap<String, usize>) -> Result<Self> {
        let n = map.len();
        let mut slots: Vec<Option<String>> = vec![None; n];
        let mut seen = HashSet::with_capacity(n);

        for (word, i) in map {
            if i >= n {
                return Err(SpamError::InvalidDictionary(format!(
                    "index {} for '{}' is out of range for {} words",
                    i, word, n
                )));
            }
            if !seen.insert(i) {
                return Err(SpamError::InvalidDictionary(format!(
                    "index {} is assigned more than once",
                    i
                )));
            }
            slots[i] = Some(word);
        }

        // n distinct indices below n fill every slot
        let words: Vec<String> = slots.into_iter().flatten().collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Ok(Self { words, index })
    }
}

/// Build a dictionary from spam and ham top words and a mode name.
///
/// Fails with [`SpamError::InvalidConfiguration`] for an unknown mode.
pub fn build_dictionary<S: AsRef<str>>(
    spam_words: &[S],
    ham_words: &[S],
    mode: &str,
) -> Result<FeatureDictionary> {
    let mode: CombineMode = mode.parse()?;
    Ok(FeatureDictionary::combine(spam_words, ham_words, mode))
}
