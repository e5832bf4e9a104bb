//! Statistical measures over voting-power distributions.

pub mod gini;

// Re-export main functions
pub use gini::{gini_coefficient, mean};
