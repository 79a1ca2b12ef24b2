use rand::prelude::*;
use colored::Colorize;
use crate::Sample;
use crate::common::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED, PRINT_WIDTH};

use std::iter::Iterator;


/// A struct that generates
/// pairs of training/test sample for k-fold cross validation.
///
/// The examples are split into `n_folds` contiguous blocks
/// (after an optional shuffle).
/// The first `n % n_folds` blocks hold `n / n_folds + 1` examples,
/// the others `n / n_folds`.
/// The `i`-th pair uses the `i`-th block as the test sample
/// and the rest as the training sample,
/// so every example is tested exactly once.
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
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let f = AdaBoostParams::new()
///         .n_estimators(20)
///         .fit(&train)
///         .unwrap();
///
///     let train_loss = zero_one_loss(&train, &f);
///     let test_loss = zero_one_loss(&test, &f);
///     println!("[train: {train_loss}] [test: {test_loss}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS.min(n_sample.max(1)),
            seed: DEFAULT_SEED,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5`.
    ///
    /// # Panics
    /// Panics unless `2 <= n_folds <= n_sample`.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        let n_sample = self.sample.shape().0;
        assert!(
            2 <= n_folds && n_folds <= n_sample,
            "The number of folds should be in `[2, {n_sample}]`."
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test indices for `i`th fold.
    pub fn indices_at(&self, i: usize) -> (Vec<usize>, Vec<usize>) {
        assert!(i < self.n_folds, "fold {i} does not exist");

        let n_sample = self.ix.len();
        let base = n_sample / self.n_folds;
        let rem = n_sample % self.n_folds;

        let start = i * base + i.min(rem);
        let end = start + base + usize::from(i < rem);

        let test = self.ix[start..end].to_vec();
        let train = self.ix[..start].iter()
            .chain(&self.ix[end..])
            .copied()
            .collect();
        (train, test)
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let (train, test) = self.indices_at(i);
        (self.sample.subset(&train), self.sample.subset(&test))
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>PRINT_WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>PRINT_WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
