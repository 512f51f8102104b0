//! Classifier module
//!
//! The `Classifier` trait plus a naive Bayes reference implementation.

pub mod bayes;
pub mod traits;

pub use bayes::BernoulliNaiveBayes;
pub use traits::Classifier;

#[cfg(test)]
pub use traits::MockClassifier;
