//! ztest - One-sample z-test evaluation
//!
//! Computes z-statistics and standard normal p-values for a sample summary
//! and decides whether to reject the null hypothesis at a significance level,
//! following type-driven development principles.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

pub use application::Application;
pub use domain::hypothesis::{evaluate, SampleSummary, Tail, TestResult};
pub use error::{Error, Result};

