//! Email preprocessing module
//!
//! Turns raw message text into an ordered list of lowercase, stemmed tokens.

pub mod normalizer;
pub mod patterns;
pub mod stemmer;

pub use normalizer::{lower, strip_header, to_list, Normalizer};
pub use patterns::{PatternClass, Patterns};
pub use stemmer::Stem;

/// Ordered tokens of one message, duplicates preserved
pub type TokenList = Vec<String>;
