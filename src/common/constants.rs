//! Numeric constants and default hyper-parameters.

/// Added to the weighted error in the denominator of
/// `ln((1 - err) / (err + EPSILON))`
/// so that a perfect hypothesis gets a finite weight.
pub const EPSILON: f64 = 1e-10;

/// Tolerance on `|sum(dist) - 1|`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-6;

/// Gaussian naive Bayes adds
/// `VAR_SMOOTHING * max(variance)` to every variance.
pub const VAR_SMOOTHING: f64 = 1e-9;

/// Default number of boosting rounds.
pub const DEFAULT_N_ESTIMATORS: usize = 50;

/// Default learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 1.0;

/// Default number of folds for cross-validation.
pub const DEFAULT_N_FOLDS: usize = 5;

/// Seed used by [`CrossValidation`](crate::CrossValidation)
/// when none is given.
pub const DEFAULT_SEED: u64 = 1234;

pub(crate) const PRINT_WIDTH: usize = 9;
