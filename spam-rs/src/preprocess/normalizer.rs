//! Raw email text to token list
//!
//! The stages run in a fixed order and the order changes the output:
//! header strip, lowercase, structured-token replacement, punctuation
//! cleanup, split on single spaces, stem.

use std::sync::Arc;
use tracing::debug;

use super::patterns::Patterns;
use super::stemmer::{self, Stem};
use super::TokenList;
use crate::error::Result;

/// Email normalizer
#[derive(Clone)]
pub struct Normalizer {
    patterns: Patterns,
    stemmer: Arc<dyn Stem>,
}

impl Normalizer {
    /// Create a normalizer around a shared stemmer
    pub fn new(stemmer: Arc<dyn Stem>) -> Result<Self> {
        Ok(Self {
            patterns: Patterns::compile()?,
            stemmer,
        })
    }

    /// Create a normalizer with the Snowball English stemmer
    pub fn english() -> Result<Self> {
        Self::new(stemmer::english())
    }

    /// Convert one email into its token list
    pub fn normalize(&self, email: &str) -> TokenList {
        let body = lower(strip_header(email));
        let replaced = self.replace_patterns(&body);
        let cleaned = self.clean(&replaced);
        self.stem(&to_list(&cleaned))
    }

    /// Convert a batch of emails, preserving order
    pub fn normalize_batch<T: AsRef<str>>(&self, emails: &[T]) -> Vec<TokenList> {
        let lists: Vec<TokenList> = emails.iter().map(|e| self.normalize(e.as_ref())).collect();
        debug!(
            emails = lists.len(),
            tokens = lists.iter().map(Vec::len).sum::<usize>(),
            "Normalized email batch"
        );
        lists
    }

    /// Replace emails, URLs, HTML tags, digit runs and dollar runs
    pub fn replace_patterns(&self, text: &str) -> String {
        self.patterns.replace_all(text)
    }

    /// Remove remaining non-word characters, one space between words
    pub fn clean(&self, text: &str) -> String {
        self.patterns.clean(text)
    }

    /// Stem each word; empty strings from the split are dropped here
    pub fn stem(&self, words: &[&str]) -> TokenList {
        words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| self.stemmer.stem(w).into_owned())
            .collect()
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }
}

/// Drop everything up to and including the first blank line.
///
/// Text without a blank line is returned unchanged.
pub fn strip_header(email: &str) -> &str {
    match email.split_once("\n\n") {
        Some((_, body)) => body,
        None => email,
    }
}

pub fn lower(email: &str) -> String {
    email.to_lowercase()
}

/// Literal split on a single space
pub fn to_list(email: &str) -> Vec<&str> {
    email.split(' ').collect()
}
