//! The core library for `Classifier` trait
//! and the combined hypothesis returned by boosting.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_majority;


pub use hypothesis_traits::Classifier;
pub use weighted_majority::WeightedMajority;
