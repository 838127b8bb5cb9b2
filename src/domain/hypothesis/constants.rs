//! Constants for z-test calculations and sample size guidance

/// Conventional significance levels
pub mod significance {
    /// Strict significance level (1%)
    pub const STRICT_ALPHA: f64 = 0.01;

    /// Conventional significance level (5%)
    pub const CONVENTIONAL_ALPHA: f64 = 0.05;

    /// Lenient significance level (10%)
    pub const LENIENT_ALPHA: f64 = 0.10;

    /// Two-sided tests split alpha evenly between both tails
    pub const TWO_SIDED_TAIL_COUNT: f64 = 2.0;
}

/// Sample size thresholds
pub mod sample_size {
    /// Smallest sample for which inference is meaningful
    pub const RECOMMENDED_MIN_SAMPLE_SIZE: u64 = 2;

    /// Rule-of-thumb size for the normal approximation (Central Limit Theorem)
    pub const LARGE_SAMPLE_THRESHOLD: u64 = 30;

    /// Moderate-to-high confidence boundary
    pub const HIGH_CONFIDENCE_THRESHOLD: u64 = 100;

    /// Very high confidence boundary
    pub const VERY_HIGH_CONFIDENCE_THRESHOLD: u64 = 1000;
}

/// Bounds of a probability
pub mod probability {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
}
