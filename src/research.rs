//! This directory provides tools to evaluate a boosting algorithm:
//! - k-fold cross validation
//! - Accuracy and zero-one loss

/// Provides the k-fold splitter.
pub mod cross_validation;

/// Defines the accuracy and loss functions.
pub mod loss_functions;


pub use cross_validation::CrossValidation;

pub use loss_functions::{
    accuracy,
    zero_one_loss,
};
