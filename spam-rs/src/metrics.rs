//! Classifier evaluation metrics
//!
//! Spam is the positive class. Ratios whose denominator is zero are reported
//! as 0.0. Label and prediction slices are compared pairwise; extra entries
//! in the longer slice are ignored.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SpamError;
use crate::features::Label;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Confusion {
    tp: usize,
    fp: usize,
    tn: usize,
    fn_: usize,
}

impl Confusion {
    fn from_labels(labels: &[Label], predictions: &[Label]) -> Self {
        let mut c = Confusion::default();
        for (truth, predicted) in labels.iter().zip(predictions) {
            match (truth, predicted) {
                (Label::Spam, Label::Spam) => c.tp += 1,
                (Label::Ham, Label::Spam) => c.fp += 1,
                (Label::Ham, Label::Ham) => c.tn += 1,
                (Label::Spam, Label::Ham) => c.fn_ += 1,
            }
        }
        c
    }

    fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Fraction of correct predictions
pub fn accuracy(labels: &[Label], predictions: &[Label]) -> f64 {
    let c = Confusion::from_labels(labels, predictions);
    ratio(c.tp + c.tn, c.total())
}

/// Fraction of wrong predictions
pub fn error_rate(labels: &[Label], predictions: &[Label]) -> f64 {
    let c = Confusion::from_labels(labels, predictions);
    ratio(c.fp + c.fn_, c.total())
}

/// tp / (tp + fp)
pub fn precision(labels: &[Label], predictions: &[Label]) -> f64 {
    let c = Confusion::from_labels(labels, predictions);
    ratio(c.tp, c.tp + c.fp)
}

/// tp / (tp + fn)
pub fn recall(labels: &[Label], predictions: &[Label]) -> f64 {
    let c = Confusion::from_labels(labels, predictions);
    ratio(c.tp, c.tp + c.fn_)
}

/// Harmonic mean of precision and recall
pub fn f1(labels: &[Label], predictions: &[Label]) -> f64 {
    let p = precision(labels, predictions);
    let r = recall(labels, predictions);
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// A named metric, selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Accuracy,
    ErrorRate,
    Precision,
    Recall,
    F1,
}

impl Metric {
    pub fn compute(&self, labels: &[Label], predictions: &[Label]) -> f64 {
        match self {
            Metric::Accuracy => accuracy(labels, predictions),
            Metric::ErrorRate => error_rate(labels, predictions),
            Metric::Precision => precision(labels, predictions),
            Metric::Recall => recall(labels, predictions),
            Metric::F1 => f1(labels, predictions),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::ErrorRate => "error-rate",
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::F1 => "f1",
        }
    }
}

impl FromStr for Metric {
    type Err = SpamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accuracy" => Ok(Metric::Accuracy),
            "error-rate" | "error" => Ok(Metric::ErrorRate),
            "precision" => Ok(Metric::Precision),
            "recall" => Ok(Metric::Recall),
            "f1" => Ok(Metric::F1),
            other => Err(SpamError::InvalidConfiguration(format!(
                "Unknown metric: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All metrics for one labelled prediction run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub accuracy: f64,
    pub error_rate: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Scores {
    pub fn compute(labels: &[Label], predictions: &[Label]) -> Self {
        Self {
            accuracy: accuracy(labels, predictions),
            error_rate: error_rate(labels, predictions),
            precision: precision(labels, predictions),
            recall: recall(labels, predictions),
            f1: f1(labels, predictions),
        }
    }
}
