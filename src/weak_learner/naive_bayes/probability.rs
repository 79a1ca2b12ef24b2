use serde::{
    Serialize,
    Deserialize,
};

use core::f64::consts::PI;
use crate::Sample;


/// A class-conditional density over the feature space.
pub trait Probability {
    /// Returns `ln p(x)` for the `row`-th example of `sample`.
    fn log_probability(&self, sample: &Sample, row: usize) -> f64;

    /// Returns `p(x)` for the `row`-th example of `sample`.
    fn probability(&self, sample: &Sample, row: usize) -> f64 {
        self.log_probability(sample, row).exp()
    }
}


/// Gaussian density with a diagonal covariance.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Gaussian {
    pub(super) means: Vec<f64>,
    pub(super) vars: Vec<f64>,
}

impl Gaussian {
    pub(super) fn new(means: Vec<f64>, vars: Vec<f64>) -> Self {
        assert_eq!(means.len(), vars.len());
        assert!(vars.iter().all(|v| *v > 0.0), "variance must be positive");
        Self { means, vars }
    }


    /// Returns the means of each feature.
    pub fn means(&self) -> &[f64] {
        &self.means[..]
    }


    /// Returns the variances of each feature.
    pub fn variances(&self) -> &[f64] {
        &self.vars[..]
    }
}


impl Probability for Gaussian {
    /// # Panics
    /// Panics if the dimension of `sample` differs from `self`.
    #[inline(always)]
    fn log_probability(&self, sample: &Sample, row: usize) -> f64 {
        let features = sample.features();
        assert_eq!(
            self.means.len(), features.len(),
            "the density has {} features, the sample has {}",
            self.means.len(), features.len(),
        );

        self.means.iter()
            .zip(&self.vars[..])
            .zip(features)
            .map(|((&mean, &var), feat)| {
                let x = feat[row];
                -0.5 * ((2.0 * PI * var).ln() + (x - mean).powi(2) / var)
            })
            .sum::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_at_zero() {
        let sample = Sample::from_rows(vec![vec![0.0]], vec![1.0]).unwrap();
        let density = Gaussian::new(vec![0.0], vec![1.0]);
        let p = density.probability(&sample, 0);
        assert!((p - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn independent_features_multiply() {
        let sample = Sample::from_rows(vec![vec![1.0, -2.0]], vec![1.0])
            .unwrap();
        let both = Gaussian::new(vec![0.0, 0.0], vec![1.0, 4.0]);

        let x = Sample::from_rows(vec![vec![1.0]], vec![1.0]).unwrap();
        let y = Sample::from_rows(vec![vec![-2.0]], vec![1.0]).unwrap();
        let px = Gaussian::new(vec![0.0], vec![1.0]).log_probability(&x, 0);
        let py = Gaussian::new(vec![0.0], vec![4.0]).log_probability(&y, 0);

        let lp = both.log_probability(&sample, 0);
        assert!((lp - (px + py)).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn dimension_mismatch() {
        let sample = Sample::from_rows(vec![vec![0.0]], vec![1.0]).unwrap();
        let density = Gaussian::new(vec![0.0, 0.0], vec![1.0, 1.0]);
        let _ = density.log_probability(&sample, 0);
    }
}
