//! Stemming seam
//!
//! The normalizer only needs a word-to-root function. Snowball English from
//! `rust-stemmers` is the default; it carries no per-call state, so a single
//! instance is shared behind an `Arc`.

use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use std::sync::Arc;

/// Reduce a word to its root form
pub trait Stem: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl Stem for Stemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Stemmer::stem(self, word)
    }
}

/// Shared Snowball English stemmer
pub fn english() -> Arc<dyn Stem> {
    Arc::new(Stemmer::create(Algorithm::English))
}
