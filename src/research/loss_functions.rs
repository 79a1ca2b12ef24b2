use crate::{Classifier, Sample};


/// Returns the fraction of `predictions` equal to `target`.
///
/// # Panics
/// Panics if the two slices have different lengths or are empty.
pub fn accuracy(target: &[f64], predictions: &[i64]) -> f64 {
    assert_eq!(
        target.len(), predictions.len(),
        "{} labels for {} predictions", target.len(), predictions.len()
    );
    assert!(!target.is_empty(), "accuracy of an empty sample");

    let n_sample = target.len() as f64;
    target.iter()
        .zip(predictions)
        .filter(|(&y, &p)| y == p as f64)
        .count() as f64
        / n_sample
}


/// Zero-one loss of `f` over `sample`, i.e., `1 - accuracy`.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier
{
    let predictions = f.predict_all(sample);
    1.0 - accuracy(sample.target(), &predictions)
}
