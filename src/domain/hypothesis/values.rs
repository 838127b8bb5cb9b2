//! Domain value types for z-test calculations
//!
//! Provides validated types for the real-valued inputs and outputs of a test.

use crate::domain::hypothesis::constants;
use nutype::nutype;

/// A mean (sample or hypothesized population), any finite real
#[nutype(
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Mean(f64);

/// Population standard deviation
///
/// Must be strictly positive; a zero spread makes the standard error vanish.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct StandardDeviation(f64);

/// Standardized distance between a sample mean and the hypothesized mean
#[nutype(
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct ZStatistic(f64);

impl ZStatistic {
    /// Magnitude of the statistic, ignoring direction
    pub fn magnitude(&self) -> f64 {
        self.into_inner().abs()
    }
}

/// Probability of a result at least as extreme under the null hypothesis
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct PValue(f64);

impl PValue {
    /// Build a p-value from a raw tail area, clamping floating-point overshoot
    /// past exact 0 or 1.
    ///
    /// Returns `None` only for NaN.
    pub fn clamped(area: f64) -> Option<Self> {
        if area.is_nan() {
            return None;
        }
        Self::try_new(area.clamp(constants::probability::MIN, constants::probability::MAX)).ok()
    }

    /// Whether this p-value falls strictly below the significance level
    pub fn is_significant_at(&self, alpha: SignificanceLevel) -> bool {
        self.into_inner() < alpha.into_inner()
    }
}

/// Significance level (alpha), exclusive of 0 and 1
#[nutype(
    validate(finite, greater = 0.0, less = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Strict significance level (1%)
    pub fn strict() -> Self {
        Self::try_new(constants::significance::STRICT_ALPHA).unwrap()
    }

    /// Conventional significance level (5%)
    pub fn conventional() -> Self {
        Self::try_new(constants::significance::CONVENTIONAL_ALPHA).unwrap()
    }

    /// Lenient significance level (10%)
    pub fn lenient() -> Self {
        Self::try_new(constants::significance::LENIENT_ALPHA).unwrap()
    }

    /// Confidence level implied by this alpha (1 - alpha)
    pub fn confidence_level(&self) -> f64 {
        constants::probability::MAX - self.into_inner()
    }
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::conventional()
    }
}
