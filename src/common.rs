//! Defines some common functions used in this library.

/// Defines the constants shared by the modules.
pub mod constants;

/// Defines some useful functions such as the weighted error.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
