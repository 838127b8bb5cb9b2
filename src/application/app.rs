use crate::application::report::Report;
use crate::config::{OutputFormat, Settings};
use crate::domain::hypothesis::{evaluate, TestResult};
use crate::Result;
use std::io::Write;
use tracing::{info, instrument};

/// Runs the configured z-test and prints the report
pub struct Application {
    settings: Settings,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Evaluate the configured sample and write the report to `out`
    #[instrument(skip(self, out))]
    pub fn run(&self, out: &mut impl Write) -> Result<TestResult> {
        let sample = self.settings.sample_summary()?;
        let tail = self.settings.test.tail;
        info!(
            "Evaluating {tail} tail z-test at alpha = {}",
            self.settings.test.alpha
        );

        let result = evaluate(&sample, tail, self.settings.test.alpha)?;
        let report = Report::new(sample, result);

        match self.settings.output.format {
            OutputFormat::Text => write!(out, "{}", report.to_text())?,
            OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        }
        out.flush()?;

        Ok(result)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
