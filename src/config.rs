use crate::domain::hypothesis::{
    significance_level, HypothesisError, SampleSummary, SignificanceLevel, Tail,
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Directory searched for `default`, `{environment}` and `local` config files
pub const CONFIG_DIR: &str = "config";

/// Prefix of environment overrides, e.g. `ZTEST__TEST__ALPHA=0.01`
pub const ENV_PREFIX: &str = "ZTEST";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub sample: SampleSettings,
    pub test: TestSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Raw sample description; validated by [`Settings::sample_summary`]
#[derive(Debug, Deserialize, Clone)]
pub struct SampleSettings {
    pub sample_mean: f64,
    pub sample_size: u64,
    pub population_mean: f64,
    pub population_std_dev: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TestSettings {
    pub tail: Tail,
    pub alpha: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load(Path::new(CONFIG_DIR), &environment)
    }

    /// Layer defaults, optional files under `config_dir` and `ZTEST__*`
    /// environment variables, later sources winning.
    pub fn load(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        Self::load_with_env_prefix(config_dir, environment, ENV_PREFIX)
    }

    fn load_with_env_prefix(
        config_dir: &Path,
        environment: &str,
        env_prefix: &str,
    ) -> Result<Self, ConfigError> {
        let file = |name: &str| {
            File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        let config = Config::builder()
            // Start with the worked example: does a mean of 103 over 40
            // observations exceed a population mean of 100 (σ = 16)?
            .set_default("sample.sample_mean", 103.0)?
            .set_default("sample.sample_size", 40)?
            .set_default("sample.population_mean", 100.0)?
            .set_default("sample.population_std_dev", 16.0)?
            .set_default("test.tail", "upper")?
            .set_default("test.alpha", 0.05)?
            .set_default("output.format", "text")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            .add_source(Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn sample_summary(&self) -> Result<SampleSummary, HypothesisError> {
        SampleSummary::new(
            self.sample.sample_mean,
            self.sample.sample_size,
            self.sample.population_mean,
            self.sample.population_std_dev,
        )
    }

    pub fn significance_level(&self) -> Result<SignificanceLevel, HypothesisError> {
        significance_level(self.test.alpha)
    }
}
