//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use tracing::debug;

use crate::{
    BoostError,
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    common::{
        constants::{
            DEFAULT_LEARNING_RATE,
            DEFAULT_N_ESTIMATORS,
            EPSILON,
        },
        utils,
    },
};

use std::mem;
use std::ops::ControlFlow;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// Each round `t` computes the weighted error `err` of the new
/// hypothesis and gives it the weight
/// `alpha = learning_rate * ln((1 - err) / (err + 1e-10))`.
/// The weights of misclassified examples are multiplied by
/// `exp(alpha)` and the distribution is renormalized.
///
/// `AdaBoost` runs exactly `n_estimators` rounds.
/// A round with `err = 0` or `err >= 0.5` does not stop boosting,
/// and its hypothesis is kept even if `alpha <= 0`.
///
/// Most users want [`AdaBoostParams::fit`](crate::AdaBoostParams::fit);
/// driving [`Booster`] by hand gives access to the distribution
/// between rounds.
///
/// # Example
/// ```no_run
/// use adaboost_cv::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut booster = AdaBoost::<DStumpClassifier>::init(&sample)
///     .n_estimators(100)
///     .learning_rate(0.5);
///
/// let weak_learner = DStump::init(&sample);
///
/// let f = booster.run(&weak_learner).unwrap();
/// let predictions = f.predict_all(&sample);
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample
    sample: &'a Sample,

    // Distribution on sample.
    dist: Vec<f64>,

    // Multiplier on every hypothesis weight.
    learning_rate: f64,

    // Number of rounds.
    n_estimators: usize,

    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;

        let uni = 1.0 / n_sample as f64;
        AdaBoost {
            sample,

            dist: vec![uni; n_sample],
            learning_rate: DEFAULT_LEARNING_RATE,
            n_estimators: DEFAULT_N_ESTIMATORS,

            weights: Vec::new(),
            hypotheses: Vec::new(),
        }
    }


    /// Set the number of boosting rounds.
    /// Default value is `50`.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        assert!(n_estimators > 0, "AdaBoost needs at least one round");
        self.n_estimators = n_estimators;
        self
    }


    /// Set the learning rate.
    /// Default value is `1.0`.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        assert!(
            learning_rate.is_finite() && learning_rate > 0.0,
            "learning rate must be a positive real. got {learning_rate}."
        );
        self.learning_rate = learning_rate;
        self
    }


    /// Returns the current distribution over the training examples.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the weights on the hypotheses found so far.
    pub fn alphas(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the weight on the new hypothesis.
    /// `update_params` also updates `self.dist`
    #[inline]
    fn update_params(
        &mut self,
        predictions: &[i64],
        iteration: usize,
    ) -> Result<(f64, f64), BoostError>
    {
        let target = self.sample.target();

        let error = utils::weighted_error(target, predictions, &self.dist)
            .ok_or(BoostError::DegenerateWeights { round: iteration })?;

        let alpha = self.learning_rate
            * ((1.0 - error) / (error + EPSILON)).ln();


        // Correctly classified examples keep their weight.
        let factor = alpha.exp();
        self.dist.iter_mut()
            .zip(target)
            .zip(predictions)
            .filter(|((_, &y), &p)| y != p as f64)
            .for_each(|((d, _), _)| { *d *= factor; });


        utils::normalize(&mut self.dist[..])
            .ok_or(BoostError::DegenerateWeights { round: iteration })?;

        Ok((error, alpha))
    }
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of rounds", format!("{}", self.n_estimators)),
            ("Learning rate", format!("{}", self.learning_rate)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        self.sample.is_valid_binary_instance();
        // Initialize parameters
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.weights = Vec::with_capacity(self.n_estimators);
        self.hypotheses = Vec::with_capacity(self.n_estimators);
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>, BoostError>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_estimators < iteration {
            return Ok(ControlFlow::Break(self.n_estimators));
        }


        // Get a new hypothesis
        let h = weak_learner.produce(self.sample, &self.dist);
        let predictions = h.predict_all(self.sample);


        // Compute the weight on the new hypothesis
        let (error, alpha) = self.update_params(&predictions, iteration)?;
        debug!(
            booster = self.name(),
            weak_learner = weak_learner.name(),
            round = iteration,
            error,
            alpha,
            "boosting round finished"
        );

        self.weights.push(alpha);
        self.hypotheses.push(h);

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        let weights = mem::take(&mut self.weights);
        let hypotheses = mem::take(&mut self.hypotheses);
        WeightedMajority::from_vecs(weights, hypotheses)
    }
}
