//! Corpus module
//!
//! Loads raw messages from disk and partitions them for training.

pub mod loader;
pub mod split;

pub use loader::{load_corpus, load_dir, load_mbox, MboxMessage, MboxReader};
pub use split::{make_sets, rng_from_seed, Partition, Split};
