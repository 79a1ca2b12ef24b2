//! The core library for the weak learner in the boosting protocol.
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that is slightly better than
//! the random guessing with respect to that distribution.
use crate::Sample;


/// A trait that defines the behavor of weak learners.
/// Boosting algorithms call [`WeakLearner::produce`] once per round.
pub trait WeakLearner {
    /// Returned hypothesis generated by `self`.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Trains a hypothesis on `sample`,
    /// where the `i`-th example has importance `dist[i]`.
    /// `dist` must be a probability vector of length `sample.shape().0`.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
