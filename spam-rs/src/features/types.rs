//! Feature types and data structures

use std::fmt;
use std::str::FromStr;

use crate::error::SpamError;

/// Class label: 1 = spam, 0 = ham
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Ham = 0,
    Spam = 1,
}

impl Label {
    pub fn is_spam(&self) -> bool {
        *self == Label::Spam
    }

    /// Numeric form used by the classifier boundary
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// How the spam and ham top-word lists are combined into a vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineMode {
    /// Spam words only, in their given order
    SpamOnly,
    /// Spam words that are not ham words
    SpamMinusHam,
    /// Words on exactly one side
    SymmetricDifference,
}

impl CombineMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombineMode::SpamOnly => "spam only",
            CombineMode::SpamMinusHam => "spam-ham",
            CombineMode::SymmetricDifference => "symmetric difference",
        }
    }
}

impl FromStr for CombineMode {
    type Err = SpamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spam only" => Ok(CombineMode::SpamOnly),
            "spam-ham" => Ok(CombineMode::SpamMinusHam),
            "symmetric difference" => Ok(CombineMode::SymmetricDifference),
            other => Err(SpamError::InvalidConfiguration(format!(
                "Unknown feature dictionary mode: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary presence vector, one slot per vocabulary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`, 0 when out of range
    pub fn get(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.0[index] = 1;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Indices set to 1, ascending
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 1)
            .map(|(i, _)| i)
    }

    pub fn count_active(&self) -> usize {
        self.active().count()
    }
}

impl From<Vec<u8>> for FeatureVector {
    fn from(values: Vec<u8>) -> Self {
        Self(values.into_iter().map(|v| u8::from(v != 0)).collect())
    }
}
