use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::{BTreeSet, HashMap};

use polars::prelude::*;
use tracing::warn;

use crate::BoostError;
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample with dense format.
/// Features are stored column-wise.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from row-major data.
    /// Features are named `Feat. [1]`, `Feat. [2]`, ...
    ///
    /// Returns [`BoostError::ShapeMismatch`] if the rows have
    /// different lengths or `target.len() != rows.len()`.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<f64>)
        -> Result<Self, BoostError>
    {
        let n_sample = rows.len();
        if target.len() != n_sample {
            return Err(BoostError::ShapeMismatch {
                expected: n_sample,
                got: target.len(),
            });
        }

        let n_feature = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut features = (1..=n_feature)
            .map(|i| Feature::new(format!("Feat. [{i}]")))
            .collect::<Vec<_>>();

        for row in rows {
            if row.len() != n_feature {
                return Err(BoostError::ShapeMismatch {
                    expected: n_feature,
                    got: row.len(),
                });
            }
            for (feat, x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        Ok(Self::from_parts(features, target))
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column is cast to `f64`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self, BoostError>
    {
        let (n_sample, _) = data.shape();
        if target.len() != n_sample {
            return Err(BoostError::ShapeMismatch {
                expected: n_sample,
                got: target.len(),
            });
        }

        let target = series_to_vec(&target)?;
        let features = data.get_columns()
            .iter()
            .map(|series| {
                let values = series_to_vec(series)?;
                Ok(Feature::from_values(series.name(), values))
            })
            .collect::<Result<Vec<_>, BoostError>>()?;

        Ok(Self::from_parts(features, target))
    }


    /// Read a CSV format file to `Sample` type.
    /// The target is left empty;
    /// call [`Sample::set_target`] to pick the label column.
    pub fn from_csv<P>(file: P, has_header: bool)
        -> Result<Self, BoostError>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut features: Option<Vec<Feature>> = None;

        for (k, line) in lines.enumerate() {
            let line = line?;
            let line_no = k + 1;
            if line.trim().is_empty() { continue; }

            if has_header && features.is_none() {
                let names = line.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
                features = Some(names);
                continue;
            }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| BoostError::Parse {
                            line: line_no,
                            value: x.trim().to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            // if the header does not exist,
            // construct a dummy header.
            let feats = features.get_or_insert_with(|| {
                (1..=xs.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect()
            });

            if feats.len() != xs.len() {
                return Err(BoostError::ShapeMismatch {
                    expected: feats.len(),
                    got: xs.len(),
                });
            }

            for (feat, x) in feats.iter_mut().zip(xs) {
                feat.append(x);
            }
        }

        let features = features.unwrap_or_default();
        Ok(Self::from_parts(features, Vec::new()))
    }


    fn from_parts(features: Vec<Feature>, target: Vec<f64>) -> Self {
        let n_sample = features.first()
            .map(|feat| feat.len())
            .unwrap_or(target.len());
        let n_feature = features.len();
        let name_to_index = index_by_name(&features);

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Returns a slice of type `f64`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature named `name`, if any.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&i| &self.features[i])
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S)
        -> Result<Self, BoostError>
    {
        let target = target.as_ref();
        let pos = self.name_to_index.get(target)
            .copied()
            .ok_or_else(|| BoostError::UnknownFeature(target.to_string()))?;

        self.target = self.features.remove(pos).into_target();
        self.n_feature -= 1;
        self.name_to_index = index_by_name(&self.features);

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns a new sample made of the rows in `ix`, in that order.
    pub fn subset(&self, ix: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.select(ix))
            .collect::<Vec<_>>();
        let target = ix.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: ix.len(),
            n_feature: self.n_feature,
        }
    }


    /// Check whether `self` is
    /// a training set for binary classification with `±1` labels.
    /// Labels outside `{-1, +1}` are not rejected;
    /// this method logs a warning and returns `false`.
    pub fn is_valid_binary_instance(&self) -> bool {
        let set = self.target.iter()
            .map(|y| y.to_string())
            .collect::<BTreeSet<_>>();

        let is_pm = self.target.iter().all(|&y| y == 1.0 || y == -1.0);
        if !is_pm {
            let line = set.iter()
                .take(5)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            warn!(
                "the target values take values not in [-1.0, 1.0]. \
                 Currently, the labels are: [{line}]."
            );
        } else if set.len() < 2 {
            warn!("the target values take only one label.");
        }
        is_pm
    }
}


fn index_by_name(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


/// Cast `series` to `f64` and collect it.
fn series_to_vec(series: &Series) -> Result<Vec<f64>, BoostError> {
    let casted = series.cast(&DataType::Float64)?;
    casted.f64()?
        .into_iter()
        .map(|x| {
            x.ok_or_else(|| BoostError::MissingValue(series.name().to_string()))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Sample {
        let rows = vec![
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
        ];
        Sample::from_rows(rows, vec![1.0, -1.0, 1.0]).unwrap()
    }

    #[test]
    fn from_rows_shape() {
        let sample = toy();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.at(1), (vec![2.0, 20.0], -1.0));
        assert!(sample.feature("Feat. [2]").is_some());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![1.0]];
        let err = Sample::from_rows(rows, vec![1.0, -1.0]).unwrap_err();
        assert!(matches!(err, BoostError::ShapeMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn from_rows_rejects_target_length() {
        let rows = vec![vec![1.0], vec![2.0]];
        let err = Sample::from_rows(rows, vec![1.0]).unwrap_err();
        assert!(matches!(err, BoostError::ShapeMismatch { .. }));
    }

    #[test]
    fn subset_picks_rows() {
        let sample = toy();
        let sub = sample.subset(&[2, 0]);
        assert_eq!(sub.shape(), (2, 2));
        assert_eq!(sub.target(), &[1.0, 1.0]);
        assert_eq!(sub.at(0), (vec![3.0, 30.0], 1.0));
    }

    #[test]
    fn labels_outside_pm_one() {
        let sample = Sample::from_rows(
            vec![vec![0.0], vec![1.0]], vec![0.0, 1.0]
        ).unwrap();
        assert!(!sample.is_valid_binary_instance());
        assert!(toy().is_valid_binary_instance());
    }

    #[test]
    fn from_dataframe_casts_columns() {
        let s1 = Series::new("x", &[1.0, 2.0, 3.0]);
        let s2 = Series::new("y", &[4_i64, 5, 6]);
        let target = Series::new("class", &[1_i64, -1, 1]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();

        let sample = Sample::from_dataframe(df, target).unwrap();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.target(), &[1.0, -1.0, 1.0]);
        assert_eq!(sample.feature("y").unwrap().sample, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_dataframe_rejects_nulls() {
        let s1 = Series::new("x", &[Some(1.0), None]);
        let target = Series::new("class", &[1.0, -1.0]);
        let df = DataFrame::new(vec![s1]).unwrap();

        let err = Sample::from_dataframe(df, target).unwrap_err();
        assert!(matches!(err, BoostError::MissingValue(name) if name == "x"));
    }
}
