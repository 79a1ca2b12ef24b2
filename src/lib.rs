#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost (Freund & Schapire, 1995)
//! with k-fold cross-validation.
//!
//! The boosting loop repeatedly asks a weak learner for a hypothesis
//! under the current distribution over training examples,
//! weights the hypothesis by
//! `learning_rate * ln((1 - err) / err)`,
//! and puts more mass on the examples the hypothesis got wrong.
//! The resulting [`WeightedMajority`] predicts the sign
//! of the weighted vote.
//!
//! Two weak learners are provided:
//!
//! - [`DStump`], a depth-1 decision tree.
//! - [`GaussianNB`], a Gaussian naive Bayes classifier.
//!
//! Choose between them with [`Estimator`].
//!
//! # Example
//! ```no_run
//! use adaboost_cv::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("/path/to/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! let params = AdaBoostParams::new()
//!     .n_estimators(50)
//!     .learning_rate(1.0)
//!     .estimator(Estimator::DecisionStump);
//!
//! let f = params.fit(&sample).unwrap();
//! let predictions = f.predict_labels(&sample).unwrap();
//!
//! let score = params.cross_val_score(&sample, 5, Some(1234)).unwrap();
//! println!("5-fold accuracy: {score}");
//! ```

pub mod booster;
pub mod common;
pub mod error;
pub mod hypothesis;
pub mod prelude;
pub mod research;
pub mod sample;
pub mod weak_learner;


pub use error::BoostError;

pub use sample::{
    Feature,
    Sample,
    SampleReader,
};

pub use booster::{
    AdaBoost,
    AdaBoostParams,
    Booster,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use weak_learner::{
    AnyWeakLearner,
    DStump,
    DStumpClassifier,
    Estimator,
    GaussianNB,
    NBayesClassifier,
    WeakHypothesis,
    WeakLearner,
};

pub use research::{
    CrossValidation,
    accuracy,
    zero_one_loss,
};
