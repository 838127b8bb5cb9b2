//! Rendering of z-test results for the command line

use crate::domain::hypothesis::{
    critical_value, standard_error, Decision, SampleSummary, Tail, TestResult,
};
use serde::Serialize;
use std::fmt;

/// Everything printed for one evaluation
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sample: SampleSummary,
    pub result: TestResult,
    pub standard_error: f64,
    pub critical_value: f64,
    pub decision: Decision,
}

impl Report {
    pub fn new(sample: SampleSummary, result: TestResult) -> Self {
        Self {
            standard_error: standard_error(sample.population_std_dev(), sample.sample_size()),
            critical_value: critical_value(result.tail(), result.alpha()),
            decision: result.decision(),
            sample,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Hypotheses, statistics and the verdict as aligned plain text
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail = self.result.tail();
        let mu0 = self.sample.population_mean().into_inner();
        let critical = match tail {
            Tail::TwoSided => format!("±{:.6}", self.critical_value),
            Tail::Upper | Tail::Lower => format!("{:.6}", self.critical_value),
        };

        writeln!(f, "One-sample z-test ({tail} tail)")?;
        writeln!(f, "  H0: μ = {mu0}")?;
        writeln!(f, "  H1: μ {} {mu0}", tail.alternative_operator())?;
        let rows = [
            ("sample mean", self.sample.sample_mean().into_inner().to_string()),
            ("sample size", self.sample.sample_size().into_inner().to_string()),
            (
                "sample confidence",
                self.sample.sample_size().confidence_category().to_string(),
            ),
            (
                "population std dev",
                self.sample.population_std_dev().into_inner().to_string(),
            ),
            ("standard error", format!("{:.6}", self.standard_error)),
            (
                "z-statistic",
                format!("{:.6}", self.result.z_statistic().into_inner()),
            ),
            ("critical value", critical),
            ("p-value", format!("{:.6}", self.result.p_value().into_inner())),
            ("alpha", self.result.alpha().into_inner().to_string()),
            ("decision", self.decision.to_string()),
        ];
        for (label, value) in rows {
            writeln!(f, "  {label:<20}{value}")?;
        }
        writeln!(f, "{}", self.decision.interpretation())
    }
}
