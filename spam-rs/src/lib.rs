//! spam-rs: text-to-feature pipeline for spam / ham email classification
//!
//! Turns raw email text into fixed-length binary presence vectors suitable
//! for a binary classifier.
//!
//! # Stages
//!
//! - **Normalizer**: strips the header, lowercases, collapses structured
//!   tokens (emails, URLs, HTML, numbers, dollar signs) to placeholders,
//!   removes punctuation and stems every token
//! - **Vocabulary**: counts words per class, keeps the frequent ones and
//!   combines the spam and ham lists into a word → index dictionary
//! - **Vectorizer**: maps a token list onto the dictionary as a 0/1 vector
//!
//! A Bernoulli naive Bayes classifier, evaluation metrics and learning-curve
//! generation sit on top so the pipeline can be exercised end to end.
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::features::{build_dictionary, featurize};
//! use spam_rs::preprocess::Normalizer;
//!
//! fn main() -> spam_rs::Result<()> {
//!     let normalizer = Normalizer::english()?;
//!     let spam = normalizer.normalize("Subject: hi\n\nWin FREE money at http://x.io");
//!     let ham = normalizer.normalize("Subject: re\n\nMeeting notes attached");
//!
//!     let dict = build_dictionary(&spam, &ham, "symmetric difference")?;
//!     let vector = featurize(&spam, &dict);
//!     println!("{} of {} features set", vector.count_active(), dict.len());
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod learning_curve;
pub mod metrics;
pub mod pipeline;
pub mod preprocess;

pub use config::Config;
pub use error::{Result, SpamError};
