//! Configuration of AdaBoost, and the fit / cross-validation entry points.
use std::io::Read;

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::{
    AdaBoost,
    BoostError,
    Booster,
    Classifier,
    CrossValidation,
    Estimator,
    Sample,
    WeakHypothesis,
    WeakLearner,
    WeightedMajority,
    research::accuracy,
    common::{
        checker,
        constants::{
            DEFAULT_LEARNING_RATE,
            DEFAULT_N_ESTIMATORS,
            DEFAULT_N_FOLDS,
        },
    },
};


/// Hyper-parameters of AdaBoost.
///
/// `AdaBoostParams` never changes while fitting:
/// [`AdaBoostParams::fit`] returns a fresh [`WeightedMajority`],
/// so fitting twice gives two independent ensembles
/// of `n_estimators` hypotheses each.
///
/// # Example
/// ```no_run
/// use adaboost_cv::prelude::*;
///
/// let params = AdaBoostParams::from_json_str(
///     r#"{ "n_estimators": 10, "estimator": "NaiveBayes" }"#
/// ).unwrap();
/// assert_eq!(params.learning_rate, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaBoostParams {
    /// Number of boosting rounds. Default value is `50`.
    pub n_estimators: usize,
    /// Multiplier on every hypothesis weight. Default value is `1.0`.
    pub learning_rate: f64,
    /// Weak learner trained in each round.
    /// Default value is [`Estimator::DecisionStump`].
    pub estimator: Estimator,
}


impl Default for AdaBoostParams {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_N_ESTIMATORS,
            learning_rate: DEFAULT_LEARNING_RATE,
            estimator: Estimator::default(),
        }
    }
}


impl AdaBoostParams {
    /// Construct the default parameters.
    pub fn new() -> Self {
        Self::default()
    }


    /// Reads the parameters from a JSON string.
    /// Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, BoostError> {
        let params: Self = serde_json::from_str(json)?;
        params.check()?;
        Ok(params)
    }


    /// Reads the parameters from a JSON reader.
    /// Missing fields take their default value.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, BoostError> {
        let params: Self = serde_json::from_reader(reader)?;
        params.check()?;
        Ok(params)
    }


    /// Set the number of boosting rounds.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the weak learner kind.
    pub fn estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }


    /// Checks that `n_estimators` is positive
    /// and `learning_rate` is a positive real.
    pub fn check(&self) -> Result<(), BoostError> {
        checker::check_n_estimators(self.n_estimators)?;
        checker::check_learning_rate(self.learning_rate)?;
        Ok(())
    }


    /// Runs AdaBoost on `sample` and returns the ensemble.
    pub fn fit(&self, sample: &Sample)
        -> Result<WeightedMajority<WeakHypothesis>, BoostError>
    {
        self.check()?;
        checker::check_sample(sample)?;

        let weak_learner = self.estimator.build(sample);
        let mut booster = AdaBoost::<WeakHypothesis>::init(sample)
            .n_estimators(self.n_estimators)
            .learning_rate(self.learning_rate);

        if let Some(info) = booster.info() {
            let info = info.iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join(", ");
            debug!(
                booster = booster.name(),
                weak_learner = weak_learner.name(),
                %info,
                "boosting starts"
            );
        }

        let f = booster.run(&weak_learner)?;

        let (n_sample, n_feature) = sample.shape();
        info!(
            estimator = %self.estimator,
            n_sample,
            n_feature,
            n_estimators = f.len(),
            training_accuracy = accuracy(sample.target(), &f.predict_all(sample)),
            "AdaBoost fitted"
        );
        Ok(f)
    }


    /// Estimates the accuracy of `self` by `n_folds`-fold
    /// cross-validation.
    ///
    /// The examples are shuffled with `seed`,
    /// or with a random seed if `seed` is `None`.
    /// Each fold fits a new ensemble on the other folds
    /// and scores it on the held-out fold.
    /// Returns the mean accuracy over the folds.
    pub fn cross_val_score(
        &self,
        sample: &Sample,
        n_folds: usize,
        seed: Option<u64>,
    ) -> Result<f64, BoostError>
    {
        self.check()?;
        checker::check_sample(sample)?;
        checker::check_n_folds(n_folds, sample.shape().0)?;

        let seed = seed.unwrap_or_else(rand::random);
        let cv = CrossValidation::new(sample)
            .n_folds(n_folds)
            .seed(seed)
            .shuffle();

        let mut scores = Vec::with_capacity(n_folds);
        for (k, (train, test)) in cv.enumerate() {
            let f = self.fit(&train)?;
            let predictions = f.predict_labels(&test)?;
            let score = accuracy(test.target(), &predictions);
            info!(
                fold = k + 1,
                n_train = train.shape().0,
                n_test = test.shape().0,
                score,
                "cross-validation fold scored"
            );
            scores.push(score);
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        info!(n_folds, seed, mean, "cross-validation finished");
        Ok(mean)
    }


    /// [`AdaBoostParams::cross_val_score`] with `5` folds
    /// and a random seed.
    pub fn cross_val_score_default(&self, sample: &Sample)
        -> Result<f64, BoostError>
    {
        self.cross_val_score(sample, DEFAULT_N_FOLDS, None)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = AdaBoostParams::new();
        assert_eq!(params.n_estimators, 50);
        assert_eq!(params.learning_rate, 1.0);
        assert_eq!(params.estimator, Estimator::DecisionStump);
        assert!(params.check().is_ok());
    }

    #[test]
    fn json_fills_missing_fields() {
        let params = AdaBoostParams::from_json_str(
            r#"{ "n_estimators": 10, "estimator": "NaiveBayes" }"#
        ).unwrap();
        assert_eq!(params.n_estimators, 10);
        assert_eq!(params.learning_rate, 1.0);
        assert_eq!(params.estimator, Estimator::NaiveBayes);
    }

    #[test]
    fn json_round_trip() {
        let params = AdaBoostParams::new().learning_rate(0.25);
        let json = serde_json::to_string(&params).unwrap();
        let back = AdaBoostParams::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn json_rejects_bad_values() {
        let err = AdaBoostParams::from_json_str(r#"{ "n_estimators": 0 }"#)
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidParameter(_)));

        let err = AdaBoostParams::from_json_str(r#"{ "estimator": "SVM" }"#)
            .unwrap_err();
        assert!(matches!(err, BoostError::Json(_)));
    }

    #[test]
    fn fit_rejects_bad_parameters() {
        let sample = Sample::from_rows(
            vec![vec![0.0], vec![1.0]], vec![-1.0, 1.0]
        ).unwrap();
        let err = AdaBoostParams::new()
            .learning_rate(-1.0)
            .fit(&sample)
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidParameter(_)));
    }

    #[test]
    fn fit_rejects_empty_sample() {
        let sample = Sample::from_rows(Vec::new(), Vec::new()).unwrap();
        let err = AdaBoostParams::new().fit(&sample).unwrap_err();
        assert!(matches!(err, BoostError::EmptySample { n_sample: 0, .. }));
    }

    #[test]
    fn cross_val_score_rejects_bad_folds() {
        let sample = Sample::from_rows(
            vec![vec![0.0], vec![1.0]], vec![-1.0, 1.0]
        ).unwrap();
        let err = AdaBoostParams::new()
            .cross_val_score(&sample, 3, Some(0))
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidParameter(_)));
    }
}
