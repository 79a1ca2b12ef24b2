use crate::{Sample, WeakLearner};
use crate::common::{checker, constants::VAR_SMOOTHING};

use super::probability::Gaussian;
use super::nbayes_classifier::*;


/// A factory that produces a `NBayesClassifier<Gaussian>`
/// for a given distribution over training examples.
/// The struct name comes from scikit-learn.
///
/// Examples with a positive label are the `+1` class,
/// all the others are the `-1` class.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianNB;


impl GaussianNB {
    /// Initializes the GaussianNB instance.
    pub fn init() -> Self {
        Self {}
    }
}


impl WeakLearner for GaussianNB {
    type Hypothesis = NBayesClassifier<Gaussian>;


    fn name(&self) -> &str {
        "Gaussian Naive Bayes"
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        let n_sample = sample.shape().0;
        checker::check_distribution(dist, n_sample);

        let target = sample.target();

        let mut prior_p: f64 = 0.0;
        let mut prior_n: f64 = 0.0;
        target.iter()
            .zip(dist)
            .for_each(|(&y, d)| {
                if y > 0.0 {
                    prior_p += d;
                } else {
                    prior_n += d;
                }
            });


        // Every variance is shifted by a fraction of the largest
        // unweighted variance so that constant features stay usable.
        let uniform = vec![1.0 / n_sample as f64; n_sample];
        let epsilon = sample.features()
            .iter()
            .map(|feat| {
                let mean = feat.weighted_mean(&uniform);
                feat.weighted_variance(mean, &uniform)
            })
            .fold(0.0_f64, f64::max)
            * VAR_SMOOTHING;
        let epsilon = if epsilon > 0.0 { epsilon } else { VAR_SMOOTHING };


        let cond_density_p = class_density(sample, dist, 1.0, prior_p, epsilon);
        let cond_density_n = class_density(sample, dist, -1.0, prior_n, epsilon);


        NBayesClassifier {
            prior_p,
            prior_n,

            cond_density_p,
            cond_density_n,
        }
    }
}


/// Compute the mean/variance for each feature over the examples
/// of class `label`.
/// A class without mass gets a placeholder density;
/// its zero prior keeps it from being predicted.
fn class_density(
    sample: &Sample,
    dist: &[f64],
    label: f64,
    prior: f64,
    epsilon: f64,
) -> Gaussian
{
    let n_feature = sample.shape().1;
    if prior <= 0.0 {
        return Gaussian::new(vec![0.0; n_feature], vec![1.0; n_feature]);
    }

    // Labels other than `+1` count as `-1`.
    let target = sample.target()
        .iter()
        .map(|&y| if y > 0.0 { 1.0 } else { -1.0 })
        .collect::<Vec<_>>();

    let (means, vars) = sample.features()
        .iter()
        .map(|feat| {
            let (mean, var) = feat.weighted_mean_and_variance_for_label(
                label, &target, dist, prior
            );
            (mean, var + epsilon)
        })
        .unzip();

    Gaussian::new(means, vars)
}
