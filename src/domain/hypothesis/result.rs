//! Outcome of a z-test evaluation

use crate::domain::hypothesis::{
    tail::Tail,
    values::{PValue, SignificanceLevel, ZStatistic},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one sample against the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    z_statistic: ZStatistic,
    p_value: PValue,
    tail: Tail,
    alpha: SignificanceLevel,
    reject_null: bool,
}

impl TestResult {
    /// `reject_null` is derived from the p-value and alpha, never supplied
    pub(crate) fn new(
        z_statistic: ZStatistic,
        p_value: PValue,
        tail: Tail,
        alpha: SignificanceLevel,
    ) -> Self {
        Self {
            z_statistic,
            p_value,
            tail,
            alpha,
            reject_null: p_value.is_significant_at(alpha),
        }
    }

    pub fn z_statistic(&self) -> ZStatistic {
        self.z_statistic
    }

    pub fn p_value(&self) -> PValue {
        self.p_value
    }

    pub fn tail(&self) -> Tail {
        self.tail
    }

    pub fn alpha(&self) -> SignificanceLevel {
        self.alpha
    }

    pub fn reject_null(&self) -> bool {
        self.reject_null
    }

    pub fn decision(&self) -> Decision {
        if self.reject_null {
            Decision::RejectNull
        } else {
            Decision::FailToRejectNull
        }
    }
}

/// Verdict on the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// p-value strictly below alpha
    RejectNull,
    /// p-value at or above alpha
    FailToRejectNull,
}

impl Decision {
    /// Plain-language reading of the decision
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::RejectNull => {
                "The result is statistically significant: reject the null hypothesis."
            }
            Self::FailToRejectNull => {
                "The result is not statistically significant: fail to reject the null hypothesis."
            }
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RejectNull => write!(f, "reject H0"),
            Self::FailToRejectNull => write!(f, "fail to reject H0"),
        }
    }
}
