//! Error types for hypothesis test calculations

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The input a calculation rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    SampleMean,
    PopulationMean,
    PopulationStdDev,
    SampleSize,
    ZStatistic,
    PValue,
    Alpha,
    Tail,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SampleMean => "sample_mean",
            Self::PopulationMean => "population_mean",
            Self::PopulationStdDev => "population_std_dev",
            Self::SampleSize => "sample_size",
            Self::ZStatistic => "z_statistic",
            Self::PValue => "p_value",
            Self::Alpha => "alpha",
            Self::Tail => "tail",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while evaluating a z-test
///
/// Every failure is an invalid input: the computation is deterministic, so
/// there is nothing to retry and no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HypothesisError {
    #[error("Invalid parameter {parameter}: {reason}")]
    InvalidParameter { parameter: Parameter, reason: String },
}

impl HypothesisError {
    pub fn invalid(parameter: Parameter, reason: impl fmt::Display) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.to_string(),
        }
    }

    /// The parameter that failed validation
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}
