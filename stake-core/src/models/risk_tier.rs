use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed interval `[min, max]` that one estimator parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(
        min: f64,
        max: f64,
    ) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies inside the closed interval.
    pub fn contains(
        &self,
        value: f64,
    ) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The fixed parameter bundle behind a [`RiskTier`].
///
/// Win rate and stake size are expressed in percent; the estimator
/// converts them to fractions after sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    pub win_rate_percent: ParameterRange,
    pub avg_odds: ParameterRange,
    pub bets_per_month: ParameterRange,
    pub stake_percent: ParameterRange,
}

const LOW: RiskParameters = RiskParameters {
    win_rate_percent: ParameterRange::new(65.0, 70.0),
    avg_odds: ParameterRange::new(1.3, 1.5),
    bets_per_month: ParameterRange::new(45.0, 60.0),
    stake_percent: ParameterRange::new(1.0, 3.0),
};

const MEDIUM: RiskParameters = RiskParameters {
    win_rate_percent: ParameterRange::new(55.0, 60.0),
    avg_odds: ParameterRange::new(1.8, 2.2),
    bets_per_month: ParameterRange::new(30.0, 45.0),
    stake_percent: ParameterRange::new(3.0, 5.0),
};

const HIGH: RiskParameters = RiskParameters {
    win_rate_percent: ParameterRange::new(40.0, 45.0),
    avg_odds: ParameterRange::new(2.5, 3.5),
    bets_per_month: ParameterRange::new(20.0, 30.0),
    stake_percent: ParameterRange::new(5.0, 7.0),
};

/// One of the three preset staking strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    #[default]
    Medium,
    High,
}

/// Error returned when a string does not name a [`RiskTier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk tier '{0}' (expected low, medium or high)")]
pub struct ParseRiskTierError(pub String);

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn parameters(&self) -> &'static RiskParameters {
        match self {
            Self::Low => &LOW,
            Self::Medium => &MEDIUM,
            Self::High => &HIGH,
        }
    }

    /// Short code used on the command line and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Safer choice with smaller but steady returns",
            Self::Medium => "Balanced strategy between risk and return",
            Self::High => "Higher risk with potential for larger returns",
        }
    }

    /// Parses a tier code case-insensitively. Single-letter forms are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Some(Self::Low),
            "m" | "medium" => Some(Self::Medium),
            "h" | "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for RiskTier {
    type Err = ParseRiskTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRiskTierError(s.to_string()))
    }
}

impl fmt::Display for RiskTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
