// Classifier trait: the only surface the feature pipeline needs from a model.
//
// Feature vectors go in, labels come out. Any binary classifier with fit and
// predict can sit behind this, including mocks in tests.

use crate::error::Result;
use crate::features::{FeatureVector, Label};

/// Binary spam/ham classifier
#[cfg_attr(test, mockall::automock)]
pub trait Classifier {
    /// Train from scratch on stacked feature vectors and their labels.
    /// Any previous training state is discarded.
    fn fit(&mut self, x: &[FeatureVector], y: &[Label]) -> Result<()>;

    /// Predict one label per feature vector
    fn predict(&self, x: &[FeatureVector]) -> Vec<Label>;
}
