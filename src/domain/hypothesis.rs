//! One-sample z-test domain types
//!
//! This module provides validated inputs, the standard normal primitives and
//! the evaluator that turns a sample summary into a significance decision.

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod normal;
pub mod result;
pub mod sample_size;
pub mod summary;
pub mod tail;
pub mod values;

// Re-export commonly used types
pub use errors::{HypothesisError, Parameter};
pub use evaluator::{
    compute_p_value, compute_z_statistic, critical_value, decide, evaluate, p_value_for,
    significance_level, standard_error, z_statistic_for,
};
pub use normal::{standard_normal_cdf, standard_normal_quantile, standard_normal_sf};
pub use result::{Decision, TestResult};
pub use sample_size::{SampleConfidence, SampleSize};
pub use summary::SampleSummary;
pub use tail::Tail;
pub use values::{Mean, PValue, SignificanceLevel, StandardDeviation, ZStatistic};
