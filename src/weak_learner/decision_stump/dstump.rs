//! Provides the decision stump class.
use crate::{Sample, WeakLearner};
use crate::common::{checker, utils};

use super::{DStumpClassifier, PositiveSide};


type IndicesByValue = Vec<usize>;
type FeatureIndex   = Vec<IndicesByValue>;


/// The struct `DStump` generates a `DStumpClassifier`
/// for each call of `self.produce(..)`.
///
/// `DStump` sorts the examples once per feature at construction,
/// so it must only be used with the sample given to [`DStump::init`].
#[derive(Debug, Clone)]
pub struct DStump {
    // `indices[j][k]` holds the examples whose `j`-th feature
    // takes the `k`-th smallest distinct value.
    indices: Vec<FeatureIndex>,
    n_sample: usize,
}


impl DStump {
    /// Initializes and produce an instance of `DStump`.
    pub fn init(sample: &Sample) -> Self {
        let n_sample = sample.shape().0;

        let indices = sample.features()
            .iter()
            .map(|feature| {
                let mut ix = (0..n_sample).collect::<Vec<usize>>();
                ix.sort_by(|&i, &j| feature[i].total_cmp(&feature[j]));

                // Group the indices by value.
                let mut index: FeatureIndex = Vec::new();
                for i in ix {
                    match index.last_mut() {
                        Some(group) if feature[group[0]] == feature[i] => {
                            group.push(i);
                        },
                        _ => { index.push(vec![i]); },
                    }
                }
                index
            })
            .collect::<Vec<_>>();

        Self { indices, n_sample }
    }
}


impl WeakLearner for DStump {
    type Hypothesis = DStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    /// Returns the stump that maximizes the edge
    /// `sum_i dist[i] * y_i * h(x_i)`,
    /// i.e., minimizes the weighted training error.
    /// On ties, the first stump found is kept
    /// (smallest feature index, then smallest threshold).
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        assert_eq!(
            self.n_sample, sample.shape().0,
            "`DStump` was initialized on another sample"
        );
        checker::check_distribution(dist, self.n_sample);

        let target = sample.target();
        let features = sample.features();

        // Edge of the stump that predicts `+1` everywhere.
        let init_edge = utils::inner_product(dist, target);

        // Start from the stump whose threshold is below every value.
        let mut best_edge = init_edge.abs();
        let mut dstump = DStumpClassifier {
            threshold: features[0][self.indices[0][0][0]] - 1.0,
            feature_index: 0_usize,
            positive_side: side_of(init_edge),
        };


        for (j, index) in self.indices.iter().enumerate() {
            let feature = &features[j];
            let mut edge = init_edge;

            let mut groups = index.iter().peekable();
            while let Some(group) = groups.next() {
                // Move this group to the left-hand side.
                let temp = group.iter()
                    .map(|&i| dist[i] * target[i])
                    .sum::<f64>();
                edge -= 2.0 * temp;

                let left = feature[group[0]];
                let threshold = match groups.peek() {
                    Some(next) => {
                        // The midpoint of adjacent floats may round up
                        // to `right`, which sends `right` to the left.
                        let right = feature[next[0]];
                        let mid = (left + right) / 2.0;
                        if mid < right { mid } else { left }
                    },
                    None => left + 1.0,
                };

                if best_edge < edge.abs() {
                    best_edge = edge.abs();
                    dstump.threshold = threshold;
                    dstump.feature_index = j;
                    dstump.positive_side = side_of(edge);
                }
            }
        }

        dstump
    }
}


#[inline(always)]
fn side_of(edge: f64) -> PositiveSide {
    if edge >= 0.0 { PositiveSide::RHS } else { PositiveSide::LHS }
}
