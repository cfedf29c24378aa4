mod calculation;
mod risk_tier;

pub use calculation::{CalculationInput, CalculationResult, DEFAULT_CAPITAL, MINIMUM_CAPITAL};
pub use risk_tier::{ParameterRange, ParseRiskTierError, RiskParameters, RiskTier};
