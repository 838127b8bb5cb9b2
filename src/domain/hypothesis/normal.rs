//! Standard normal distribution primitives
//!
//! Thin wrappers over `statrs` so the rest of the domain never builds a
//! distribution by hand.

use statrs::distribution::{ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    Normal::standard()
}

/// Φ(x): probability that a standard normal variable is at most `x`
pub fn standard_normal_cdf(x: f64) -> f64 {
    standard_normal().cdf(x)
}

/// 1 − Φ(x), evaluated directly to keep precision deep in the upper tail
pub fn standard_normal_sf(x: f64) -> f64 {
    standard_normal().sf(x)
}

/// Φ⁻¹(p) for p in [0, 1]
pub fn standard_normal_quantile(p: f64) -> f64 {
    standard_normal().inverse_cdf(p)
}
