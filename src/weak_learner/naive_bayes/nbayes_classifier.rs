use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Sample};

use super::probability::Probability;


/// Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NBayesClassifier<P> {
    pub(super) prior_p: f64,
    pub(super) prior_n: f64, // equals to `1.0 - prior_p`

    pub(super) cond_density_p: P,
    pub(super) cond_density_n: P,
}


impl<P> NBayesClassifier<P>
    where P: Probability
{
    /// Computes the logarithm of the (unnormalized) posteriors
    /// `ln P(y) + ln p(x | y)` of the classes +/-
    /// for the given instance.
    /// A class with zero prior gets `-inf`.
    pub fn log_posteriors(&self, sample: &Sample, row: usize)
        -> (f64, f64)
    {
        let ln_p = if self.prior_p > 0.0 {
            self.prior_p.ln() + self.cond_density_p.log_probability(sample, row)
        } else {
            f64::NEG_INFINITY
        };
        let ln_n = if self.prior_n > 0.0 {
            self.prior_n.ln() + self.cond_density_n.log_probability(sample, row)
        } else {
            f64::NEG_INFINITY
        };

        (ln_p, ln_n)
    }


    /// Returns the weighted class priors `(P(+1), P(-1))`.
    pub fn priors(&self) -> (f64, f64) {
        (self.prior_p, self.prior_n)
    }
}


impl<P: Probability> Classifier for NBayesClassifier<P>
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let (p, n) = self.log_posteriors(sample, row);

        // Ties go to `-1`.
        if p > n { 1.0 } else { -1.0 }
    }
}
