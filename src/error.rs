//! Defines the error type shared by the whole crate.
use thiserror::Error;


/// Errors returned by sample construction, boosting,
/// and cross-validation.
#[derive(Debug, Error)]
pub enum BoostError {
    /// The sample has no example or no feature.
    #[error("The sample is empty (n_sample = {n_sample}, n_feature = {n_feature})")]
    EmptySample {
        /// Number of examples.
        n_sample: usize,
        /// Number of features.
        n_feature: usize,
    },

    /// Two lengths that must agree do not.
    #[error("Shape mismatch: expected length {expected}, got {got}")]
    ShapeMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A hyper-parameter is out of its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The weak-learner tag is not one of the known kinds.
    #[error("Unknown estimator `{0}`. Expected `NaiveBayes`, `DecisionStump`, or `Default`")]
    UnknownEstimator(String),

    /// A feature name that does not exist in the sample.
    #[error("The feature named `{0}` does not exist")]
    UnknownFeature(String),

    /// The sample weights sum to zero (or to a non-finite value).
    #[error("Sample weights degenerated at round {round}")]
    DegenerateWeights {
        /// Boosting round (1-indexed) that produced the bad weights.
        round: usize,
    },

    /// Prediction was requested from an ensemble with no member.
    #[error("The ensemble has no hypothesis. Fit it before predicting")]
    NotFitted,

    /// A column of a data frame holds a null value.
    #[error("The column `{0}` contains a missing value")]
    MissingValue(String),

    /// A CSV cell is not a number.
    #[error("Failed to parse `{value}` at line {line}")]
    Parse {
        /// 1-indexed line number in the file.
        line: usize,
        /// The offending cell.
        value: String,
    },

    /// I/O failure while reading a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure inside `polars`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// Malformed JSON configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
