//! This file provides some common functions
//! such as the weighted error calculation.


/// Returns the weighted zero-one error
/// `sum_i d_i 1[h(x_i) != y_i] / sum_i d_i`.
///
/// The denominator is recomputed rather than assumed to be `1`,
/// so that drift in `dist` does not bias the error.
/// Returns `None` if the denominator is zero or not finite.
#[inline(always)]
pub fn weighted_error(
    target: &[f64],
    predictions: &[i64],
    dist: &[f64],
) -> Option<f64>
{
    let total = dist.iter().sum::<f64>();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let wrong = target.iter()
        .zip(predictions)
        .zip(dist)
        .filter(|((&y, &p), _)| y != p as f64)
        .map(|(_, d)| d)
        .sum::<f64>();

    Some(wrong / total)
}


/// Normalizes `items` so that they sum to `1`.
/// Returns the normalizer,
/// or `None` (leaving `items` untouched) if it is zero or not finite.
#[inline(always)]
pub fn normalize(items: &mut [f64]) -> Option<f64> {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if z == 0.0 || !z.is_finite() {
        return None;
    }

    items.iter_mut()
        .for_each(|item| { *item /= z; });
    Some(z)
}


/// Sign function on `f64` that maps `0.0` to `0`.
#[inline(always)]
pub fn sign(x: f64) -> i64 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub(crate) fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_error_counts_mistakes() {
        let target = [1.0, -1.0, 1.0, -1.0];
        let predictions = [1, 1, -1, -1];
        let dist = [0.1, 0.2, 0.3, 0.4];
        let err = weighted_error(&target, &predictions, &dist).unwrap();
        assert!((err - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weighted_error_divides_by_drifted_sum() {
        let target = [1.0, -1.0];
        let predictions = [1, 1];
        let dist = [1.0, 1.0];
        let err = weighted_error(&target, &predictions, &dist).unwrap();
        assert!((err - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weighted_error_on_zero_weights() {
        let target = [1.0, -1.0];
        let predictions = [1, 1];
        assert!(weighted_error(&target, &predictions, &[0.0, 0.0]).is_none());
    }

    #[test]
    fn normalize_sums_to_one() {
        let mut v = vec![1.0, 3.0, 4.0];
        let z = normalize(&mut v).unwrap();
        assert_eq!(z, 8.0);
        assert!((v.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(v[0], 0.125);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        let mut v = vec![0.0, 0.0];
        assert!(normalize(&mut v).is_none());
        assert_eq!(v, vec![0.0, 0.0]);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(2.5), 1);
        assert_eq!(sign(-0.1), -1);
        assert_eq!(sign(0.0), 0);
    }
}
