//! Train / cross-validation / test partitioning
//!
//! Each item is assigned independently by one uniform draw, so partition
//! sizes only approximate the requested fractions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Spam and ham items of one partition
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub spam: Vec<T>,
    pub ham: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            spam: Vec::new(),
            ham: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    pub fn len(&self) -> usize {
        self.spam.len() + self.ham.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spam.is_empty() && self.ham.is_empty()
    }
}

/// Train, cross-validation and test partitions
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub train: Partition<T>,
    pub cv: Partition<T>,
    pub test: Partition<T>,
}

/// Seeded rng when a seed is given, entropy-seeded otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Partition spams and hams.
///
/// A draw `v` in [0, 1) sends an item to train when `v <= train`, to cv when
/// `v <= train + cv`, and to test otherwise.
pub fn make_sets<T, R: Rng + ?Sized>(
    spams: Vec<T>,
    hams: Vec<T>,
    train: f64,
    cv: f64,
    rng: &mut R,
) -> Split<T> {
    let mut split = Split {
        train: Partition::default(),
        cv: Partition::default(),
        test: Partition::default(),
    };

    for spam in spams {
        let v: f64 = rng.gen();
        let target = if v <= train {
            &mut split.train
        } else if v <= train + cv {
            &mut split.cv
        } else {
            &mut split.test
        };
        target.spam.push(spam);
    }

    for ham in hams {
        let v: f64 = rng.gen();
        let target = if v <= train {
            &mut split.train
        } else if v <= train + cv {
            &mut split.cv
        } else {
            &mut split.test
        };
        target.ham.push(ham);
    }

    debug!(
        train = split.train.len(),
        cv = split.cv.len(),
        test = split.test.len(),
        "Partitioned corpus"
    );

    split
}
