//! Sample description consumed by the z-test

use crate::domain::hypothesis::{
    errors::{HypothesisError, Parameter},
    values::{Mean, StandardDeviation},
    SampleSize,
};
use serde::{Deserialize, Serialize};

/// Summary of a sample and the population it is tested against
///
/// All fields are validated on construction: the population standard
/// deviation is strictly positive, the sample size is at least 1 and both
/// means are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    sample_mean: Mean,
    sample_size: SampleSize,
    population_mean: Mean,
    population_std_dev: StandardDeviation,
}

impl SampleSummary {
    /// Validate raw values into a summary
    ///
    /// Checks run in the order standard deviation, sample size, sample mean,
    /// population mean; the first failure is reported.
    pub fn new(
        sample_mean: f64,
        sample_size: u64,
        population_mean: f64,
        population_std_dev: f64,
    ) -> Result<Self, HypothesisError> {
        let population_std_dev = StandardDeviation::try_new(population_std_dev)
            .map_err(|e| HypothesisError::invalid(Parameter::PopulationStdDev, e))?;
        let sample_size = SampleSize::try_new(sample_size)
            .map_err(|e| HypothesisError::invalid(Parameter::SampleSize, e))?;
        let sample_mean = Mean::try_new(sample_mean)
            .map_err(|e| HypothesisError::invalid(Parameter::SampleMean, e))?;
        let population_mean = Mean::try_new(population_mean)
            .map_err(|e| HypothesisError::invalid(Parameter::PopulationMean, e))?;

        Ok(Self::from_parts(
            sample_mean,
            sample_size,
            population_mean,
            population_std_dev,
        ))
    }

    /// Assemble a summary from already-validated parts
    pub fn from_parts(
        sample_mean: Mean,
        sample_size: SampleSize,
        population_mean: Mean,
        population_std_dev: StandardDeviation,
    ) -> Self {
        Self {
            sample_mean,
            sample_size,
            population_mean,
            population_std_dev,
        }
    }

    /// Summarize raw observations against a known population
    pub fn from_observations(
        observations: &[f64],
        population_mean: f64,
        population_std_dev: f64,
    ) -> Result<Self, HypothesisError> {
        if observations.is_empty() {
            return Err(HypothesisError::invalid(
                Parameter::SampleSize,
                "at least one observation is required",
            ));
        }
        if let Some(bad) = observations.iter().find(|x| !x.is_finite()) {
            return Err(HypothesisError::invalid(
                Parameter::SampleMean,
                format!("observation {bad} is not finite"),
            ));
        }

        let n = observations.len();
        let sample_mean = observations.iter().sum::<f64>() / n as f64;
        Self::new(sample_mean, n as u64, population_mean, population_std_dev)
    }

    pub fn sample_mean(&self) -> Mean {
        self.sample_mean
    }

    pub fn sample_size(&self) -> SampleSize {
        self.sample_size
    }

    pub fn population_mean(&self) -> Mean {
        self.population_mean
    }

    pub fn population_std_dev(&self) -> StandardDeviation {
        self.population_std_dev
    }

    /// Observed difference between the sample mean and the hypothesized mean
    pub fn mean_difference(&self) -> f64 {
        self.sample_mean.into_inner() - self.population_mean.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_summary() {
        let summary = SampleSummary::new(103.0, 40, 100.0, 16.0).unwrap();
        assert_eq!(summary.sample_mean().into_inner(), 103.0);
        assert_eq!(summary.sample_size().into_inner(), 40);
        assert_eq!(summary.population_mean().into_inner(), 100.0);
        assert_eq!(summary.population_std_dev().into_inner(), 16.0);
        assert_eq!(summary.mean_difference(), 3.0);
    }

    #[test]
    fn test_invalid_inputs_name_the_parameter() {
        let cases = [
            (SampleSummary::new(1.0, 10, 0.0, 0.0), Parameter::PopulationStdDev),
            (SampleSummary::new(1.0, 10, 0.0, -2.0), Parameter::PopulationStdDev),
            (SampleSummary::new(1.0, 0, 0.0, 1.0), Parameter::SampleSize),
            (SampleSummary::new(f64::NAN, 10, 0.0, 1.0), Parameter::SampleMean),
            (
                SampleSummary::new(1.0, 10, f64::INFINITY, 1.0),
                Parameter::PopulationMean,
            ),
        ];
        for (result, parameter) in cases {
            assert_eq!(result.unwrap_err().parameter(), parameter);
        }
    }

    #[test]
    fn test_from_observations_uses_sample_mean_and_length() {
        let summary =
            SampleSummary::from_observations(&[98.0, 102.0, 104.0, 108.0], 100.0, 16.0).unwrap();
        assert_eq!(summary.sample_mean().into_inner(), 103.0);
        assert_eq!(summary.sample_size().into_inner(), 4);
    }

    #[test]
    fn test_from_observations_rejects_empty_and_non_finite() {
        assert_eq!(
            SampleSummary::from_observations(&[], 0.0, 1.0)
                .unwrap_err()
                .parameter(),
            Parameter::SampleSize
        );
        assert_eq!(
            SampleSummary::from_observations(&[1.0, f64::NAN], 0.0, 1.0)
                .unwrap_err()
                .parameter(),
            Parameter::SampleMean
        );
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let valid = r#"{"sample_mean":103.0,"sample_size":40,"population_mean":100.0,"population_std_dev":16.0}"#;
        assert!(serde_json::from_str::<SampleSummary>(valid).is_ok());

        let zero_std = r#"{"sample_mean":103.0,"sample_size":40,"population_mean":100.0,"population_std_dev":0.0}"#;
        assert!(serde_json::from_str::<SampleSummary>(zero_std).is_err());
    }
}
