//! Application services and presentation
//!
//! This module wires configuration to the z-test evaluator and renders its
//! results for the command line.

pub mod app;
pub mod report;

pub use app::Application;
pub use report::Report;
