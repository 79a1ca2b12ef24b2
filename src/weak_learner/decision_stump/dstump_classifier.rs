//! Provides the decision stump class.
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};


/// Defines the ray that are predicted as +1.0.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PositiveSide {
    /// The right-hand-side ray `x > threshold` is predicted as +1.0
    RHS,
    /// The left-hand-side ray `x <= threshold` is predicted as +1.0
    LHS
}


/// The struct `DStumpClassifier` defines the decision stump class.
/// Given a point over the `d`-dimensional space,
/// a classifier predicts its label from the single coordinate
/// `x[feature_index]` compared against `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DStumpClassifier {
    /// The intercept of the stump
    pub threshold: f64,

    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// A ray to be predicted as +1.0
    pub positive_side: PositiveSide
}


impl Classifier for DStumpClassifier {
    /// # Panics
    /// Panics if `sample` has no feature at `self.feature_index`.
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let val = sample.features()[self.feature_index][row];
        let rhs = if val > self.threshold { 1.0 } else { -1.0 };
        match self.positive_side {
            PositiveSide::RHS => rhs,
            PositiveSide::LHS => -rhs,
        }
    }
}


impl fmt::Display for DStumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.positive_side {
            PositiveSide::RHS => ">",
            PositiveSide::LHS => "<=",
        };
        write!(
            f,
            "x[{}] {op} {:.4} ? +1 : -1",
            self.feature_index,
            self.threshold,
        )
    }
}
