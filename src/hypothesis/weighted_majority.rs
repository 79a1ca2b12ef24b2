use serde::{Serialize, Deserialize};
use crate::{
    BoostError,
    Classifier,
    Sample,
};


/// A struct that the boosting algorithms in this library return.
/// The `t`-th hypothesis votes with weight `weights[t]`,
/// in the order the booster found them.
/// Weights are kept as computed: they are neither normalized
/// nor filtered, so a non-positive weight stays in the vote.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority`.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Construct a new `WeightedMajority` from given vectors.
    #[inline]
    pub fn from_vecs(weights: Vec<f64>, hypotheses: Vec<H>) -> Self {
        assert_eq!(weights.len(), hypotheses.len());
        Self { weights, hypotheses, }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Iterates over the pairs `(weight, hypothesis)`.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H: Classifier> WeightedMajority<H> {
    /// Predicts the labels of `sample` as
    /// `sign(sum_t weights[t] * h_t(x))`.
    /// Each label is `-1`, `+1`, or `0` on an exact tie.
    ///
    /// Returns [`BoostError::NotFitted`] if `self` is empty.
    pub fn predict_labels(&self, sample: &Sample)
        -> Result<Vec<i64>, BoostError>
    {
        if self.is_empty() {
            return Err(BoostError::NotFitted);
        }
        Ok(self.predict_all(sample))
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.predict(sample, row) as f64)
            .sum::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Predicts `+1` iff the first feature is positive.
    struct Positive;
    impl Classifier for Positive {
        fn confidence(&self, sample: &Sample, row: usize) -> f64 {
            if sample.features()[0][row] > 0.0 { 1.0 } else { -1.0 }
        }
    }

    /// Always predicts `-1`.
    struct Negative;
    impl Classifier for Negative {
        fn confidence(&self, _sample: &Sample, _row: usize) -> f64 {
            -1.0
        }
    }

    enum Either { P(Positive), N(Negative) }
    impl Classifier for Either {
        fn confidence(&self, sample: &Sample, row: usize) -> f64 {
            match self {
                Either::P(h) => h.confidence(sample, row),
                Either::N(h) => h.confidence(sample, row),
            }
        }
    }

    fn sample() -> Sample {
        Sample::from_rows(
            vec![vec![1.0], vec![-1.0]],
            vec![1.0, -1.0],
        ).unwrap()
    }

    #[test]
    fn empty_ensemble_is_not_fitted() {
        let f = WeightedMajority::<Positive>::new();
        let err = f.predict_labels(&sample()).unwrap_err();
        assert!(matches!(err, BoostError::NotFitted));
        assert_eq!(f.predict_all(&sample()), vec![0, 0]);
    }

    #[test]
    fn weighted_vote() {
        let mut f = WeightedMajority::new();
        f.push(2.0, Either::P(Positive));
        f.push(1.0, Either::N(Negative));
        assert_eq!(f.confidence_all(&sample()), vec![1.0, -3.0]);
        assert_eq!(f.predict_labels(&sample()).unwrap(), vec![1, -1]);
    }

    #[test]
    fn exact_tie_predicts_zero() {
        let mut f = WeightedMajority::new();
        f.push(1.0, Either::P(Positive));
        f.push(1.0, Either::N(Negative));
        assert_eq!(f.predict_labels(&sample()).unwrap(), vec![0, -1]);
    }

    #[test]
    fn negative_weights_are_kept() {
        let f = WeightedMajority::from_vecs(vec![-1.0], vec![Positive]);
        assert_eq!(f.len(), 1);
        assert_eq!(f.predict_labels(&sample()).unwrap(), vec![-1, 1]);
    }
}
