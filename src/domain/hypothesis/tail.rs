//! Direction of the alternative hypothesis

use crate::domain::hypothesis::errors::{HypothesisError, Parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tail(s) of the standard normal distribution count as "extreme"
///
/// Deserialization goes through [`FromStr`], so config values and parsed
/// strings accept the same words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Tail {
    /// H₁: μ > μ₀ (testing for an increase)
    Upper,
    /// H₁: μ < μ₀ (testing for a decrease)
    Lower,
    /// H₁: μ ≠ μ₀
    TwoSided,
}

impl Tail {
    /// Relational operator of the alternative hypothesis
    pub fn alternative_operator(&self) -> &'static str {
        match self {
            Self::Upper => ">",
            Self::Lower => "<",
            Self::TwoSided => "≠",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::TwoSided => "two-sided",
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tail {
    type Err = HypothesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "two-sided" | "two_sided" | "two" => Ok(Self::TwoSided),
            other => Err(HypothesisError::invalid(
                Parameter::Tail,
                format!("unknown tail '{other}' (expected upper, lower or two-sided)"),
            )),
        }
    }
}

impl TryFrom<String> for Tail {
    type Error = HypothesisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
