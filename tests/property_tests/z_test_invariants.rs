//! Property-based tests for z-test invariants
//!
//! These tests use property-based testing to verify that the evaluator's
//! statistical identities hold across the whole valid input space.

use proptest::prelude::*;
use ztest::domain::hypothesis::{
    compute_p_value, compute_z_statistic, critical_value, decide, evaluate, SampleSummary,
    SignificanceLevel, Tail,
};

const TOLERANCE: f64 = 1e-9;

// Property test generators
pub mod generators {
    use super::*;

    /// Generate tail directions
    pub fn tail() -> impl Strategy<Value = Tail> {
        prop_oneof![Just(Tail::Upper), Just(Tail::Lower), Just(Tail::TwoSided)]
    }

    /// Generate z-statistics across and beyond the usual range
    pub fn z_statistic() -> impl Strategy<Value = f64> {
        prop_oneof![-8.0..8.0f64, -1e6..1e6f64]
    }

    /// Generate significance levels in (0, 1)
    pub fn alpha() -> impl Strategy<Value = f64> {
        1e-6..0.999_999f64
    }

    /// Generate valid sample summaries
    pub fn sample_summary() -> impl Strategy<Value = SampleSummary> {
        (-1e3..1e3f64, 1u64..100_000, -1e3..1e3f64, 1e-3..1e3f64).prop_map(
            |(sample_mean, n, population_mean, std_dev)| {
                SampleSummary::new(sample_mean, n, population_mean, std_dev)
                    .expect("generated summary is valid")
            },
        )
    }
}

proptest! {
    #[test]
    fn prop_p_value_is_a_probability(z in generators::z_statistic(), tail in generators::tail()) {
        let p = compute_p_value(z, tail).unwrap().into_inner();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn prop_lower_tail_reflects_upper_tail(z in generators::z_statistic()) {
        let lower = compute_p_value(z, Tail::Lower).unwrap().into_inner();
        let upper_of_negated = compute_p_value(-z, Tail::Upper).unwrap().into_inner();
        prop_assert!((lower - upper_of_negated).abs() < TOLERANCE);
    }

    #[test]
    fn prop_one_sided_tails_are_complementary(z in generators::z_statistic()) {
        let lower = compute_p_value(z, Tail::Lower).unwrap().into_inner();
        let upper = compute_p_value(z, Tail::Upper).unwrap().into_inner();
        prop_assert!((lower + upper - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn prop_two_sided_doubles_upper_tail(z in generators::z_statistic()) {
        let two_sided = compute_p_value(z, Tail::TwoSided).unwrap().into_inner();
        let upper = compute_p_value(z.abs(), Tail::Upper).unwrap().into_inner();
        prop_assert!((two_sided - (2.0 * upper).min(1.0)).abs() < TOLERANCE);
    }

    #[test]
    fn prop_decision_is_strict_comparison(p in 0.0..=1.0f64, alpha in generators::alpha()) {
        prop_assert_eq!(decide(p, alpha).unwrap(), p < alpha);
        prop_assert!(!decide(alpha, alpha).unwrap());
    }

    #[test]
    fn prop_z_sign_follows_mean_difference(sample in generators::sample_summary()) {
        let z = compute_z_statistic(
            sample.sample_mean().into_inner(),
            sample.population_mean().into_inner(),
            sample.population_std_dev().into_inner(),
            sample.sample_size().into_inner(),
        )
        .unwrap()
        .into_inner();
        let difference = sample.mean_difference();
        prop_assert!((z == 0.0 && difference == 0.0) || z.signum() == difference.signum());
    }

    #[test]
    fn prop_evaluate_matches_components(
        sample in generators::sample_summary(),
        tail in generators::tail(),
        alpha in generators::alpha(),
    ) {
        let result = evaluate(&sample, tail, alpha).unwrap();
        let z = result.z_statistic().into_inner();
        let p = compute_p_value(z, tail).unwrap();

        prop_assert_eq!(result.p_value(), p);
        prop_assert_eq!(result.reject_null(), decide(p.into_inner(), alpha).unwrap());
        prop_assert_eq!(result.tail(), tail);
    }

    #[test]
    fn prop_rejection_agrees_with_critical_value(
        z in -6.0..6.0f64,
        tail in generators::tail(),
        alpha in 0.001..0.5f64,
    ) {
        let level = SignificanceLevel::try_new(alpha).unwrap();
        let critical = critical_value(tail, level);
        // Skip statistics too close to the boundary for floating-point comparison
        prop_assume!((z.abs() - critical.abs()).abs() > 1e-6);

        let p = compute_p_value(z, tail).unwrap().into_inner();
        let rejected = decide(p, alpha).unwrap();
        let beyond_critical = match tail {
            Tail::Upper => z > critical,
            Tail::Lower => z < critical,
            Tail::TwoSided => z.abs() > critical,
        };
        prop_assert_eq!(rejected, beyond_critical);
    }

    #[test]
    fn prop_growing_sample_drives_p_value_to_zero(difference in 0.5..5.0f64, std_dev in 1.0..20.0f64) {
        let mut previous = f64::INFINITY;
        for n in [10u64, 1_000, 100_000, 10_000_000] {
            let sample = SampleSummary::new(100.0 + difference, n, 100.0, std_dev).unwrap();
            let p = evaluate(&sample, Tail::TwoSided, 0.05).unwrap().p_value().into_inner();
            prop_assert!(p <= previous);
            previous = p;
        }
        prop_assert!(previous < 1e-12);
    }
}
