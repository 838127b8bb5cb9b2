//! One-sample z-test evaluation
//!
//! Pure functions mapping a sample description to a z-statistic, a z-statistic
//! to a tail p-value, and a p-value to a significance decision. `evaluate`
//! composes all three.
//!
//! # Example
//!
//! ```
//! use ztest::domain::hypothesis::{evaluate, SampleSummary, Tail};
//!
//! let sample = SampleSummary::new(103.0, 40, 100.0, 16.0).unwrap();
//! let result = evaluate(&sample, Tail::Upper, 0.05).unwrap();
//!
//! assert!((result.z_statistic().into_inner() - 1.1858541225631423).abs() < 1e-12);
//! assert!(!result.reject_null());
//! ```

use crate::domain::hypothesis::{
    constants,
    errors::{HypothesisError, Parameter},
    normal::{standard_normal_cdf, standard_normal_quantile, standard_normal_sf},
    result::TestResult,
    tail::Tail,
    values::{PValue, SignificanceLevel, StandardDeviation, ZStatistic},
    SampleSize, SampleSummary,
};
use tracing::{debug, info, instrument, warn};

/// Standard error of the mean: σ / √n
pub fn standard_error(population_std_dev: StandardDeviation, sample_size: SampleSize) -> f64 {
    population_std_dev.into_inner() / sample_size.sqrt()
}

/// z = (x̄ − μ₀) / (σ / √n)
///
/// Fails with `InvalidParameter` when the standard deviation is not strictly
/// positive, the sample size is zero, either mean is not finite, or the
/// quotient overflows.
pub fn compute_z_statistic(
    sample_mean: f64,
    population_mean: f64,
    population_std_dev: f64,
    sample_size: u64,
) -> Result<ZStatistic, HypothesisError> {
    let sample = SampleSummary::new(sample_mean, sample_size, population_mean, population_std_dev)?;
    z_statistic_for(&sample)
}

/// z-statistic of an already-validated sample
pub fn z_statistic_for(sample: &SampleSummary) -> Result<ZStatistic, HypothesisError> {
    let se = standard_error(sample.population_std_dev(), sample.sample_size());
    let z = sample.mean_difference() / se;
    ZStatistic::try_new(z).map_err(|_| {
        HypothesisError::invalid(
            Parameter::ZStatistic,
            format!("computed statistic {z} is not finite"),
        )
    })
}

/// Tail probability of `z_statistic` under the standard normal
///
/// - `Upper`: 1 − Φ(z)
/// - `Lower`: Φ(z)
/// - `TwoSided`: 2 × (1 − Φ(|z|))
///
/// The result is clamped to [0, 1]. NaN or infinite input fails with
/// `InvalidParameter`.
pub fn compute_p_value(z_statistic: f64, tail: Tail) -> Result<PValue, HypothesisError> {
    let z = ZStatistic::try_new(z_statistic).map_err(|_| {
        HypothesisError::invalid(
            Parameter::ZStatistic,
            format!("{z_statistic} is not a finite number"),
        )
    })?;
    p_value_for(z, tail)
}

/// Tail probability of an already-validated statistic
pub fn p_value_for(z_statistic: ZStatistic, tail: Tail) -> Result<PValue, HypothesisError> {
    let z = z_statistic.into_inner();
    let area = match tail {
        Tail::Upper => standard_normal_sf(z),
        Tail::Lower => standard_normal_cdf(z),
        Tail::TwoSided => {
            constants::significance::TWO_SIDED_TAIL_COUNT
                * standard_normal_sf(z_statistic.magnitude())
        }
    };
    PValue::clamped(area).ok_or_else(|| {
        HypothesisError::invalid(Parameter::PValue, format!("tail area for z = {z} is NaN"))
    })
}

/// Validate a raw alpha into a significance level in (0, 1)
pub fn significance_level(alpha: f64) -> Result<SignificanceLevel, HypothesisError> {
    SignificanceLevel::try_new(alpha).map_err(|_| {
        HypothesisError::invalid(
            Parameter::Alpha,
            format!("{alpha} is outside the open interval (0, 1)"),
        )
    })
}

/// Whether to reject the null hypothesis: true iff `p_value < alpha`
///
/// Ties retain the null. Alpha must lie in (0, 1) and the p-value in [0, 1].
pub fn decide(p_value: f64, alpha: f64) -> Result<bool, HypothesisError> {
    let alpha = significance_level(alpha)?;
    let p_value = PValue::try_new(p_value).map_err(|_| {
        HypothesisError::invalid(
            Parameter::PValue,
            format!("{p_value} is not a probability in [0, 1]"),
        )
    })?;
    Ok(p_value.is_significant_at(alpha))
}

/// Critical z beyond which the null is rejected at level `alpha`
///
/// `Upper` and `Lower` return the signed boundary of their rejection
/// region; `TwoSided` returns the positive boundary that |z| must exceed.
pub fn critical_value(tail: Tail, alpha: SignificanceLevel) -> f64 {
    let a = alpha.into_inner();
    match tail {
        Tail::Upper => standard_normal_quantile(1.0 - a),
        Tail::Lower => standard_normal_quantile(a),
        Tail::TwoSided => {
            standard_normal_quantile(1.0 - a / constants::significance::TWO_SIDED_TAIL_COUNT)
        }
    }
}

/// Run the complete one-sample z-test
///
/// Alpha is validated before anything is computed; any invalid input aborts
/// the whole evaluation.
#[instrument(skip(sample), fields(n = sample.sample_size().into_inner()))]
pub fn evaluate(
    sample: &SampleSummary,
    tail: Tail,
    alpha: f64,
) -> Result<TestResult, HypothesisError> {
    let alpha = significance_level(alpha)?;

    if !sample.sample_size().meets_recommended_minimum() {
        warn!(
            sample_size = sample.sample_size().into_inner(),
            "Sample size below the recommended minimum of {}; inference is not meaningful",
            constants::sample_size::RECOMMENDED_MIN_SAMPLE_SIZE
        );
    } else if !sample.sample_size().is_large_sample() {
        debug!(
            confidence = %sample.sample_size().confidence_category(),
            "Small sample; the z-test assumes a normally distributed population"
        );
    }

    let z_statistic = z_statistic_for(sample)?;
    debug!(z = z_statistic.into_inner(), "Computed z-statistic");

    let p_value = p_value_for(z_statistic, tail)?;
    debug!(p = p_value.into_inner(), %tail, "Computed p-value");

    let result = TestResult::new(z_statistic, p_value, tail, alpha);
    info!(
        z = z_statistic.into_inner(),
        p = p_value.into_inner(),
        alpha = alpha.into_inner(),
        decision = %result.decision(),
        "z-test evaluated"
    );

    Ok(result)
}
