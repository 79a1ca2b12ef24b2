//! Decision stump: a depth-1 decision tree over a single feature.
mod dstump;
mod dstump_classifier;

pub use dstump::DStump;
pub use dstump_classifier::{PositiveSide, DStumpClassifier};
