//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines Naive Bayes.
pub mod naive_bayes;

/// Defines the weak-learner kinds and their dispatch enums.
pub mod estimator;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DStump,
    DStumpClassifier,
    PositiveSide,
};

pub use self::naive_bayes::{
    Gaussian,
    GaussianNB,
    NBayesClassifier,
};

pub use self::estimator::{
    AnyWeakLearner,
    Estimator,
    WeakHypothesis,
};
