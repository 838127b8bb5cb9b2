//! Sample size domain type for z-test inputs

use crate::domain::hypothesis::constants;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of observations behind a sample mean
///
/// Must be greater than 0; the standard error divides by its square root.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Hash
    )
)]
pub struct SampleSize(u64);

impl SampleSize {
    /// Square root of the size, the scaling factor of the standard error
    pub fn sqrt(&self) -> f64 {
        (self.into_inner() as f64).sqrt()
    }

    /// Whether the sample supports meaningful inference (at least 2 observations)
    pub fn meets_recommended_minimum(&self) -> bool {
        self.into_inner() >= constants::sample_size::RECOMMENDED_MIN_SAMPLE_SIZE
    }

    /// Whether the sample is large enough for the usual normal approximation
    pub fn is_large_sample(&self) -> bool {
        self.into_inner() >= constants::sample_size::LARGE_SAMPLE_THRESHOLD
    }

    /// Confidence category based on sample size
    pub fn confidence_category(&self) -> SampleConfidence {
        match self.into_inner() {
            n if n < constants::sample_size::LARGE_SAMPLE_THRESHOLD => SampleConfidence::Low,
            n if n < constants::sample_size::HIGH_CONFIDENCE_THRESHOLD => {
                SampleConfidence::Moderate
            }
            n if n < constants::sample_size::VERY_HIGH_CONFIDENCE_THRESHOLD => {
                SampleConfidence::High
            }
            _ => SampleConfidence::VeryHigh,
        }
    }
}

/// Confidence level based on sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SampleConfidence {
    /// Low confidence (< 30 observations)
    Low,
    /// Moderate confidence (30-99 observations)
    Moderate,
    /// High confidence (100-999 observations)
    High,
    /// Very high confidence (1000+ observations)
    VeryHigh,
}

impl fmt::Display for SampleConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very high"),
        }
    }
}
