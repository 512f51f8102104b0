//! Feature extraction module
//!
//! Corpus word counts, vocabulary selection and presence vectors.

pub mod counts;
pub mod dictionary;
pub mod types;
pub mod vectorizer;

pub use counts::{count_words, select_top, WordCounts};
pub use dictionary::{build_dictionary, FeatureDictionary};
pub use types::*;
pub use vectorizer::{featurize, featurize_batch, make_arrays, LabeledSet};
