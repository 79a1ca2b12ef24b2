//! Weak-learner kinds.
//!
//! [`Estimator`] is the tag a configuration carries.
//! [`Estimator::build`] turns it into an [`AnyWeakLearner`],
//! whose hypotheses are [`WeakHypothesis`] values.
//! Adding a weak learner means adding a variant to all three enums.
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::{BoostError, Classifier, Sample, WeakLearner};
use super::{
    DStump,
    DStumpClassifier,
    Gaussian,
    GaussianNB,
    NBayesClassifier,
};


/// The kind of weak learner a booster trains in each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub enum Estimator {
    /// Gaussian naive Bayes, see [`GaussianNB`].
    NaiveBayes,
    /// Depth-1 decision tree, see [`DStump`].
    /// This is the default kind.
    #[default]
    #[serde(alias = "Default")]
    DecisionStump,
}


impl Estimator {
    /// Builds the weak learner of this kind for `sample`.
    pub fn build(&self, sample: &Sample) -> AnyWeakLearner {
        match self {
            Self::NaiveBayes => AnyWeakLearner::NaiveBayes(GaussianNB::init()),
            Self::DecisionStump => AnyWeakLearner::DecisionStump(
                DStump::init(sample)
            ),
        }
    }
}


impl FromStr for Estimator {
    type Err = BoostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NaiveBayes" => Ok(Self::NaiveBayes),
            "DecisionStump" | "Default" => Ok(Self::DecisionStump),
            _ => Err(BoostError::UnknownEstimator(s.to_string())),
        }
    }
}


impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NaiveBayes => "NaiveBayes",
            Self::DecisionStump => "DecisionStump",
        };
        write!(f, "{name}")
    }
}


/// A weak learner of any supported kind.
#[derive(Debug, Clone)]
pub enum AnyWeakLearner {
    /// Gaussian naive Bayes.
    NaiveBayes(GaussianNB),
    /// Decision stump.
    DecisionStump(DStump),
}


impl WeakLearner for AnyWeakLearner {
    type Hypothesis = WeakHypothesis;


    fn name(&self) -> &str {
        match self {
            Self::NaiveBayes(wl) => wl.name(),
            Self::DecisionStump(wl) => wl.name(),
        }
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        match self {
            Self::NaiveBayes(wl)
                => WeakHypothesis::NaiveBayes(wl.produce(sample, dist)),
            Self::DecisionStump(wl)
                => WeakHypothesis::DecisionStump(wl.produce(sample, dist)),
        }
    }
}


/// A hypothesis returned by [`AnyWeakLearner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeakHypothesis {
    /// Returned by [`GaussianNB`].
    NaiveBayes(NBayesClassifier<Gaussian>),
    /// Returned by [`DStump`].
    DecisionStump(DStumpClassifier),
}


impl Classifier for WeakHypothesis {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Self::NaiveBayes(h) => h.confidence(sample, row),
            Self::DecisionStump(h) => h.confidence(sample, row),
        }
    }
}
