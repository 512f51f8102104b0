//! Learning curves
//!
//! Trains the classifier on growing random subsets of the training set and
//! records the metric on that subset and on the cross-validation set.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::error::Result;
use crate::features::LabeledSet;
use crate::metrics::Metric;

/// One metric measured at increasing training-set sizes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningCurve {
    pub metric: &'static str,
    /// Training rows used at each point
    pub sizes: Vec<usize>,
    /// Metric on the rows trained on
    pub train: Vec<f64>,
    /// Metric on the cross-validation set
    pub cv: Vec<f64>,
}

impl LearningCurve {
    /// (size, train, cv) per point
    pub fn points(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.sizes
            .iter()
            .zip(&self.train)
            .zip(&self.cv)
            .map(|((s, t), c)| (*s, *t, *c))
    }
}

/// Build a learning curve with `n_points` evenly spaced training sizes.
///
/// Point `i` trains on a fresh random `(i + 1) / n_points` share of `train`.
pub fn make_learning_curve<C, R>(
    train: &LabeledSet,
    cv: &LabeledSet,
    classifier: &mut C,
    metric: Metric,
    n_points: usize,
    rng: &mut R,
) -> Result<LearningCurve>
where
    C: Classifier + ?Sized,
    R: Rng + ?Sized,
{
    let m = train.len();
    let mut rows: Vec<usize> = (0..m).collect();
    let mut curve = LearningCurve {
        metric: metric.name(),
        sizes: Vec::with_capacity(n_points),
        train: Vec::with_capacity(n_points),
        cv: Vec::with_capacity(n_points),
    };

    for i in 0..n_points {
        let size = m * (i + 1) / n_points;
        rows.shuffle(rng);
        let subset = train.select(&rows[..size]);

        classifier.fit(&subset.x, &subset.y)?;
        let train_score = metric.compute(&subset.y, &classifier.predict(&subset.x));
        let cv_score = metric.compute(&cv.y, &classifier.predict(&cv.x));

        debug!(
            point = i + 1,
            size,
            train = train_score,
            cv = cv_score,
            "Learning curve point"
        );

        curve.sizes.push(size);
        curve.train.push(train_score);
        curve.cv.push(cv_score);
    }

    info!(metric = metric.name(), points = n_points, rows = m, "Built learning curve");
    Ok(curve)
}
