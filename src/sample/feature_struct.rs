use std::ops::Index;
use std::slice::Iter;


/// Dense representation of a feature (a named column).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub name: String,
    /// Feature values.
    pub sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), sample: Vec::new() }
    }


    /// Construct a feature from its name and values.
    pub fn from_values<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self { name: name.to_string(), sample }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    pub(super) fn into_target(self) -> Vec<f64> {
        self.sample
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if the number of examples is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns an iterator over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Returns a new feature that keeps the rows in `ix`, in that order.
    pub(super) fn select(&self, ix: &[usize]) -> Self {
        let sample = ix.iter()
            .map(|&i| self.sample[i])
            .collect();
        Self { name: self.name.clone(), sample }
    }


    /// Compute the weighted mean of the feature.
    pub(crate) fn weighted_mean(&self, weight: &[f64]) -> f64 {
        self.sample.iter()
            .zip(weight)
            .map(|(x, w)| w * x)
            .sum::<f64>()
    }


    /// Compute the weighted variance of the feature around `mean`.
    pub(crate) fn weighted_variance(&self, mean: f64, weight: &[f64])
        -> f64
    {
        self.sample.iter()
            .zip(weight)
            .map(|(x, w)| w * (x - mean).powi(2))
            .sum::<f64>()
    }


    /// Computes the weighted mean and variance over the examples
    /// whose label is `y`.
    /// `prior` is the total weight on those examples.
    pub(crate) fn weighted_mean_and_variance_for_label(
        &self,
        y: f64,
        target: &[f64],
        weight: &[f64],
        prior: f64,
    ) -> (f64, f64)
    {
        let mean = self.sample.iter()
            .zip(target)
            .zip(weight)
            .filter(|((_, &t), _)| t == y)
            .map(|((x, _), w)| w * x)
            .sum::<f64>()
            / prior;

        let variance = self.sample.iter()
            .zip(target)
            .zip(weight)
            .filter(|((_, &t), _)| t == y)
            .map(|((x, _), w)| w * (x - mean).powi(2))
            .sum::<f64>()
            / prior;

        (mean, variance)
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_statistics() {
        let feat = Feature::from_values("x", vec![1.0, 3.0, 5.0, 7.0]);
        let weight = [0.25; 4];
        let mean = feat.weighted_mean(&weight);
        assert!((mean - 4.0).abs() < 1e-12);
        let var = feat.weighted_variance(mean, &weight);
        assert!((var - 5.0).abs() < 1e-12);
    }

    #[test]
    fn statistics_for_label() {
        let feat = Feature::from_values("x", vec![1.0, 3.0, 10.0, 20.0]);
        let target = [1.0, 1.0, -1.0, -1.0];
        let weight = [0.25; 4];
        let (mean, var) = feat.weighted_mean_and_variance_for_label(
            1.0, &target, &weight, 0.5
        );
        assert!((mean - 2.0).abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
    }

    #[test]
    fn select_keeps_order() {
        let feat = Feature::from_values("x", vec![1.0, 2.0, 3.0]);
        let sub = feat.select(&[2, 0]);
        assert_eq!(sub.sample, vec![3.0, 1.0]);
        assert_eq!(sub.name(), "x");
    }
}
