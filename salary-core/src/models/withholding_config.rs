use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`WithholdingConfig`] holds an out-of-range value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WithholdingConfigError {
    /// The pension rate must be between 0 and 1.
    #[error("pension rate must be between 0 and 1, got {0}")]
    InvalidPensionRate(Decimal),

    /// The monthly pension cap must be positive.
    #[error("monthly pension cap must be positive, got {0}")]
    InvalidPensionCap(Decimal),

    /// Twelve monthly pension caps must fit in a [`Decimal`].
    #[error("monthly pension cap is too large to annualize, got {0}")]
    PensionCapOverflow(Decimal),

    /// The health insurance rate must be between 0 and 1.
    #[error("health insurance rate must be between 0 and 1, got {0}")]
    InvalidHealthRate(Decimal),

    /// The long-term-care rate must be between 0 and 1.
    #[error("long-term-care rate must be between 0 and 1, got {0}")]
    InvalidCareRate(Decimal),

    /// The employment insurance rate must be between 0 and 1.
    #[error("employment insurance rate must be between 0 and 1, got {0}")]
    InvalidEmploymentRate(Decimal),

    /// The local income tax rate must be between 0 and 1.
    #[error("local income tax rate must be between 0 and 1, got {0}")]
    InvalidLocalTaxRate(Decimal),
}

/// Insurance and surtax rates applied on top of the fixed bracket tables.
///
/// [`Default`] yields the statutory employee-side rates. The bracket tables
/// for income tax and income deduction are not part of this configuration.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::WithholdingConfig;
///
/// let config = WithholdingConfig::default();
///
/// assert_eq!(config.annual_pension_cap(), dec!(2829600));
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WithholdingConfig {
    /// National pension contribution rate on taxable income.
    pub pension_rate: Decimal,

    /// Monthly ceiling on the pension contribution.
    ///
    /// The annual ceiling is twelve times this amount.
    pub pension_monthly_cap: Decimal,

    /// Health insurance rate on taxable income.
    pub health_rate: Decimal,

    /// Long-term-care premium rate, applied to the health insurance amount.
    pub care_rate: Decimal,

    /// Employment (unemployment) insurance rate on taxable income.
    pub employment_rate: Decimal,

    /// Local income tax as a fraction of national income tax.
    pub local_tax_rate: Decimal,
}

impl WithholdingConfig {
    /// Annual pension ceiling (twelve monthly caps).
    ///
    /// Saturates at [`Decimal::MAX`]; [`validate`](Self::validate) rejects
    /// caps that would get there.
    pub fn annual_pension_cap(&self) -> Decimal {
        self.pension_monthly_cap
            .checked_mul(Decimal::from(12))
            .unwrap_or(Decimal::MAX)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`WithholdingConfigError`] if any rate is outside `[0, 1]` or
    /// the monthly pension cap is not positive or overflows when annualized.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::{WithholdingConfig, WithholdingConfigError};
    ///
    /// let config = WithholdingConfig {
    ///     health_rate: dec!(1.5),
    ///     ..WithholdingConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(WithholdingConfigError::InvalidHealthRate(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), WithholdingConfigError> {
        if !is_fraction(self.pension_rate) {
            return Err(WithholdingConfigError::InvalidPensionRate(
                self.pension_rate,
            ));
        }
        if self.pension_monthly_cap <= Decimal::ZERO {
            return Err(WithholdingConfigError::InvalidPensionCap(
                self.pension_monthly_cap,
            ));
        }
        if self
            .pension_monthly_cap
            .checked_mul(Decimal::from(12))
            .is_none()
        {
            return Err(WithholdingConfigError::PensionCapOverflow(
                self.pension_monthly_cap,
            ));
        }
        if !is_fraction(self.health_rate) {
            return Err(WithholdingConfigError::InvalidHealthRate(self.health_rate));
        }
        if !is_fraction(self.care_rate) {
            return Err(WithholdingConfigError::InvalidCareRate(self.care_rate));
        }
        if !is_fraction(self.employment_rate) {
            return Err(WithholdingConfigError::InvalidEmploymentRate(
                self.employment_rate,
            ));
        }
        if !is_fraction(self.local_tax_rate) {
            return Err(WithholdingConfigError::InvalidLocalTaxRate(
                self.local_tax_rate,
            ));
        }
        Ok(())
    }
}

impl Default for WithholdingConfig {
    fn default() -> Self {
        Self {
            pension_rate: dec!(0.045),
            pension_monthly_cap: dec!(235800),
            health_rate: dec!(0.03495),
            care_rate: dec!(0.1227),
            employment_rate: dec!(0.008),
            local_tax_rate: dec!(0.1),
        }
    }
}

fn is_fraction(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn validate_accepts_statutory_defaults() {
        let config = WithholdingConfig::default();

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_zero_rates() {
        let config = WithholdingConfig {
            pension_rate: dec!(0),
            health_rate: dec!(0),
            care_rate: dec!(0),
            employment_rate: dec!(0),
            local_tax_rate: dec!(0),
            ..WithholdingConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_pension_rate() {
        let config = WithholdingConfig {
            pension_rate: dec!(-0.01),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::InvalidPensionRate(dec!(-0.01)))
        );
    }

    #[test]
    fn validate_rejects_zero_pension_cap() {
        let config = WithholdingConfig {
            pension_monthly_cap: dec!(0),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::InvalidPensionCap(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_cap_that_overflows_when_annualized() {
        let config = WithholdingConfig {
            pension_monthly_cap: dec!(70000000000000000000000000000),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::PensionCapOverflow(dec!(
                70000000000000000000000000000
            )))
        );
    }

    #[test]
    fn annual_pension_cap_saturates_instead_of_overflowing() {
        let config = WithholdingConfig {
            pension_monthly_cap: dec!(70000000000000000000000000000),
            ..WithholdingConfig::default()
        };

        assert_eq!(config.annual_pension_cap(), Decimal::MAX);
    }

    #[test]
    fn validate_rejects_care_rate_above_one() {
        let config = WithholdingConfig {
            care_rate: dec!(1.01),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::InvalidCareRate(dec!(1.01)))
        );
    }

    #[test]
    fn validate_rejects_negative_employment_rate() {
        let config = WithholdingConfig {
            employment_rate: dec!(-0.008),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::InvalidEmploymentRate(dec!(-0.008)))
        );
    }

    #[test]
    fn validate_rejects_local_tax_rate_above_one() {
        let config = WithholdingConfig {
            local_tax_rate: dec!(2),
            ..WithholdingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(WithholdingConfigError::InvalidLocalTaxRate(dec!(2)))
        );
    }

    #[test]
    fn annual_pension_cap_is_twelve_months() {
        let config = WithholdingConfig {
            pension_monthly_cap: dec!(100000),
            ..WithholdingConfig::default()
        };

        assert_eq!(config.annual_pension_cap(), dec!(1200000));
    }
}
