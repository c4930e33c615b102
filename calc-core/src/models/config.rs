use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by [`CalculatorConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorConfigError {
    /// The surcharge factor must be strictly positive.
    #[error("surcharge rate must be positive, got {0}")]
    InvalidSurchargeRate(Decimal),
}

/// Tunable constants for a [`Calculator`](crate::Calculator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Factor applied by the surcharge key. Defaults to 1.10 (10% tax).
    pub surcharge_rate: Decimal,
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), CalculatorConfigError> {
        if self.surcharge_rate <= Decimal::ZERO {
            return Err(CalculatorConfigError::InvalidSurchargeRate(
                self.surcharge_rate,
            ));
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            surcharge_rate: Decimal::new(110, 2),
        }
    }
}
