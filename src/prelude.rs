//! Exports the boosting algorithm, weak learners, and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    AdaBoostParams,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,

    // Kind tag and its dispatch enums
    Estimator,
    AnyWeakLearner,
    WeakHypothesis,

    // Decision stump
    DStump,
    DStumpClassifier,

    // Naive Bayes
    GaussianNB,
    NBayesClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::research::{
    CrossValidation,
    accuracy,
    zero_one_loss,
};


pub use crate::error::BoostError;
