use rand::prelude::*;
use adaboost_cv::prelude::*;


fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}


/// Two clusters in the plane:
/// `-1` around `(0, 0)` and `+1` around `(5, 5)`.
fn clusters(n_per_class: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();
    let mut target = Vec::new();
    for (center, label) in [(0.0, -1.0), (5.0, 1.0)] {
        for _ in 0..n_per_class {
            let x = center + rng.gen_range(-1.0..1.0);
            let y = center + rng.gen_range(-1.0..1.0);
            rows.push(vec![x, y]);
            target.push(label);
        }
    }
    Sample::from_rows(rows, target).unwrap()
}


/// Two overlapping clusters, so that no weak learner is perfect.
fn noisy(n_per_class: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();
    let mut target = Vec::new();
    for (center, label) in [(0.0, -1.0), (1.5, 1.0)] {
        for _ in 0..n_per_class {
            let x = center + rng.gen_range(-2.0..2.0);
            let y = center + rng.gen_range(-2.0..2.0);
            rows.push(vec![x, y]);
            target.push(label);
        }
    }
    Sample::from_rows(rows, target).unwrap()
}


fn labels(sample: &Sample) -> Vec<i64> {
    sample.target().iter().map(|&y| y as i64).collect()
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn separable_clusters_with_stumps() {
        init_logger();
        let sample = clusters(10, 7);
        assert_eq!(sample.shape(), (20, 2));

        let f = AdaBoostParams::new()
            .n_estimators(10)
            .learning_rate(1.0)
            .estimator("Default".parse().unwrap())
            .fit(&sample)
            .unwrap();

        assert_eq!(f.len(), 10);
        assert_eq!(f.predict_labels(&sample).unwrap(), labels(&sample));
    }

    #[test]
    fn separable_clusters_with_naive_bayes() {
        init_logger();
        let sample = clusters(10, 11);

        let f = AdaBoostParams::new()
            .n_estimators(5)
            .estimator(Estimator::NaiveBayes)
            .fit(&sample)
            .unwrap();

        assert_eq!(f.len(), 5);
        assert!(f.hypotheses.iter().all(|h| matches!(h, WeakHypothesis::NaiveBayes(_))));
        assert_eq!(f.predict_labels(&sample).unwrap(), labels(&sample));
    }

    #[test]
    fn perfect_learner_in_one_round() {
        init_logger();
        let sample = clusters(10, 3);

        let f = AdaBoostParams::new()
            .n_estimators(1)
            .fit(&sample)
            .unwrap();

        assert_eq!(f.len(), 1);
        // err = 0 gives alpha = ln(1 / 1e-10).
        assert!((f.weights[0] - (1e10f64).ln()).abs() < 1e-6);
        assert_eq!(f.predict_labels(&sample).unwrap(), labels(&sample));
    }

    #[test]
    fn refitting_does_not_accumulate() {
        init_logger();
        let sample = noisy(30, 5);
        let params = AdaBoostParams::new().n_estimators(8);

        let f1 = params.fit(&sample).unwrap();
        let f2 = params.fit(&sample).unwrap();
        assert_eq!(f1.len(), 8);
        assert_eq!(f2.len(), 8);
        assert_eq!(f1, f2);
    }

    #[test]
    fn distribution_sums_to_one_every_round() {
        init_logger();
        let sample = noisy(30, 9);

        for kind in [Estimator::DecisionStump, Estimator::NaiveBayes] {
            let weak_learner = kind.build(&sample);
            let mut booster = AdaBoost::<WeakHypothesis>::init(&sample)
                .n_estimators(15);

            booster.preprocess();
            for round in 1..=15 {
                let flow = booster.boost(&weak_learner, round).unwrap();
                assert!(flow.is_continue());

                let dist = booster.distribution();
                let sum = dist.iter().sum::<f64>();
                assert!((sum - 1.0).abs() < 1e-9, "round {round}: sum = {sum}");
                assert!(dist.iter().all(|d| *d >= 0.0));
            }
            assert!(booster.boost(&weak_learner, 16).unwrap().is_break());

            let f = booster.postprocess();
            assert_eq!(f.len(), 15);
        }
    }

    #[test]
    fn boosting_improves_on_a_single_stump() {
        init_logger();
        let sample = noisy(50, 21);

        let single = AdaBoostParams::new()
            .n_estimators(1)
            .fit(&sample)
            .unwrap();
        let many = AdaBoostParams::new()
            .n_estimators(50)
            .fit(&sample)
            .unwrap();

        let single_loss = zero_one_loss(&sample, &single);
        let many_loss = zero_one_loss(&sample, &many);
        assert!(
            many_loss <= single_loss,
            "1 round: {single_loss}, 50 rounds: {many_loss}"
        );
    }

    #[test]
    fn hypotheses_keep_round_order() {
        init_logger();
        let sample = noisy(20, 13);
        let weak_learner = DStump::init(&sample);
        let mut booster = AdaBoost::<DStumpClassifier>::init(&sample)
            .n_estimators(5);

        booster.preprocess();
        let mut alphas = Vec::new();
        for round in 1..=5 {
            let _ = booster.boost(&weak_learner, round).unwrap();
            alphas.push(*booster.alphas().last().unwrap());
        }
        let f = booster.postprocess();
        assert_eq!(f.weights, alphas);
    }

    #[test]
    fn unfitted_ensemble() {
        let sample = clusters(2, 1);
        let f = WeightedMajority::<WeakHypothesis>::new();
        assert!(matches!(
            f.predict_labels(&sample),
            Err(BoostError::NotFitted)
        ));
    }
}
