//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{BoostError, Sample};
use super::constants::SIMPLEX_TOLERANCE;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<(), BoostError> {
    let (n_sample, n_feature) = sample.shape();

    // `data` and `target` must have the length greater than `0`.
    if n_sample == 0 || n_feature == 0 {
        return Err(BoostError::EmptySample { n_sample, n_feature });
    }

    // The target is empty until `Sample::set_target` is called
    // on a sample read from CSV.
    let n_target = sample.target().len();
    if n_target != n_sample {
        return Err(BoostError::ShapeMismatch {
            expected: n_sample,
            got: n_target,
        });
    }
    Ok(())
}


/// Check the number of boosting rounds.
#[inline(always)]
pub(crate) fn check_n_estimators(n_estimators: usize)
    -> Result<(), BoostError>
{
    if n_estimators == 0 {
        return Err(BoostError::InvalidParameter(
            "`n_estimators` must be positive. got 0.".to_string()
        ));
    }
    Ok(())
}


/// Check the learning rate.
#[inline(always)]
pub(crate) fn check_learning_rate(rate: f64) -> Result<(), BoostError> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(BoostError::InvalidParameter(
            format!("`learning_rate` must be a positive real. got {rate}.")
        ));
    }
    Ok(())
}


/// Check the number of folds against the sample size.
#[inline(always)]
pub(crate) fn check_n_folds(n_folds: usize, n_sample: usize)
    -> Result<(), BoostError>
{
    if n_folds < 2 || n_folds > n_sample {
        return Err(BoostError::InvalidParameter(
            format!(
                "`n_folds` must be in [2, {n_sample}]. got {n_folds}."
            )
        ));
    }
    Ok(())
}


/// Asserts that `dist` is a probability vector over `n_sample` examples.
#[inline(always)]
pub(crate) fn check_distribution(dist: &[f64], n_sample: usize) {
    assert_eq!(
        dist.len(), n_sample,
        "distribution has {} entries for {n_sample} examples", dist.len()
    );

    let sum = dist.iter().sum::<f64>();
    assert!((sum - 1f64).abs() < SIMPLEX_TOLERANCE, "sum(dist[..]) = {sum}");
    assert!(
        dist.iter().all(|d| *d >= 0.0),
        "distribution has a negative entry"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_estimators_success() {
        assert!(check_n_estimators(1).is_ok());
    }

    #[test]
    fn test_n_estimators_failure() {
        assert!(check_n_estimators(0).is_err());
    }

    #[test]
    fn test_learning_rate_failure() {
        assert!(check_learning_rate(0.0).is_err());
        assert!(check_learning_rate(-1.0).is_err());
        assert!(check_learning_rate(f64::NAN).is_err());
        assert!(check_learning_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_n_folds() {
        assert!(check_n_folds(5, 100).is_ok());
        assert!(check_n_folds(100, 100).is_ok());
        assert!(check_n_folds(1, 100).is_err());
        assert!(check_n_folds(101, 100).is_err());
    }

    #[test]
    fn test_distribution_success() {
        check_distribution(&[0.25; 4], 4);
    }

    #[test]
    #[should_panic]
    fn test_distribution_failure_01() {
        check_distribution(&[0.5; 4], 4);
    }

    #[test]
    #[should_panic]
    fn test_distribution_failure_02() {
        check_distribution(&[0.5; 2], 4);
    }
}
