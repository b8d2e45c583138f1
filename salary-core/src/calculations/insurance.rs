//! Mandatory social insurance withheld from salary.
//!
//! All four contributions are taken from taxable income (pre-tax salary minus
//! the non-taxable allowance):
//!
//! | Item       | Formula                                     |
//! |------------|---------------------------------------------|
//! | Pension    | taxable × 4.5%, capped at 12 × 235,800      |
//! | Health     | taxable × 3.495%                            |
//! | Care       | health × 12.27%                             |
//! | Hire       | taxable × 0.8%                              |
//!
//! Each amount is floored at zero, so an allowance larger than the salary
//! yields no contributions.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::floor_at_zero;
use crate::{InsuranceWithholding, WithholdingConfig};

/// Calculates insurance withholdings under a given rate configuration.
#[derive(Debug, Clone)]
pub struct InsuranceCalculator<'a> {
    config: &'a WithholdingConfig,
}

impl<'a> InsuranceCalculator<'a> {
    pub fn new(config: &'a WithholdingConfig) -> Self {
        Self { config }
    }

    /// Calculates all four contributions from `taxable_income`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::WithholdingConfig;
    /// use salary_core::calculations::InsuranceCalculator;
    ///
    /// let config = WithholdingConfig::default();
    /// let insurance = InsuranceCalculator::new(&config).calculate(dec!(20800000));
    ///
    /// assert_eq!(insurance.pension, dec!(936000));
    /// assert_eq!(insurance.health, dec!(726960));
    /// assert_eq!(insurance.care, dec!(89197.992));
    /// assert_eq!(insurance.hire, dec!(166400));
    /// ```
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> InsuranceWithholding {
        let health = self.health(taxable_income);

        InsuranceWithholding {
            pension: self.pension(taxable_income),
            health,
            care: self.care(health),
            hire: self.hire(taxable_income),
        }
    }

    fn pension(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let pension = floor_at_zero(taxable_income * self.config.pension_rate);
        let cap = self.config.annual_pension_cap();

        if pension > cap {
            debug!(
                pension = %pension,
                cap = %cap,
                "pension exceeds annual ceiling; capping"
            );
            return cap;
        }

        pension
    }

    fn health(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        floor_at_zero(taxable_income * self.config.health_rate)
    }

    fn care(
        &self,
        health: Decimal,
    ) -> Decimal {
        floor_at_zero(health * self.config.care_rate)
    }

    fn hire(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        floor_at_zero(taxable_income * self.config.employment_rate)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculate(taxable_income: Decimal) -> InsuranceWithholding {
        let config = WithholdingConfig::default();
        InsuranceCalculator::new(&config).calculate(taxable_income)
    }

    // =========================================================================
    // pension tests
    // =========================================================================

    #[test]
    fn pension_is_rate_of_taxable_income_below_cap() {
        let result = calculate(dec!(40000000));

        assert_eq!(result.pension, dec!(1800000));
    }

    #[test]
    fn pension_is_capped_at_annual_ceiling() {
        let result = calculate(dec!(98800000));

        assert_eq!(result.pension, dec!(2829600));
    }

    #[test]
    fn pension_at_exact_ceiling_is_unchanged() {
        // 2,829,600 / 0.045
        let result = calculate(dec!(62880000));

        assert_eq!(result.pension, dec!(2829600));
    }

    #[test]
    fn pension_cap_follows_config() {
        let config = WithholdingConfig {
            pension_monthly_cap: dec!(100000),
            ..WithholdingConfig::default()
        };

        let result = InsuranceCalculator::new(&config).calculate(dec!(40000000));

        assert_eq!(result.pension, dec!(1200000));
    }

    // =========================================================================
    // health, care, and hire tests
    // =========================================================================

    #[test]
    fn health_care_and_hire_use_statutory_rates() {
        let result = calculate(dec!(98800000));

        assert_eq!(result.health, dec!(3453060));
        assert_eq!(result.care, dec!(423690.462));
        assert_eq!(result.hire, dec!(790400));
    }

    #[test]
    fn health_is_not_capped() {
        let result = calculate(dec!(1498800000));

        assert_eq!(result.health, dec!(52383060));
        assert_eq!(result.care, dec!(6427401.462));
    }

    // =========================================================================
    // zero-floor tests
    // =========================================================================

    #[test]
    fn negative_taxable_income_yields_no_contributions() {
        let result = calculate(dec!(-200000));

        assert_eq!(result, InsuranceWithholding::default());
    }

    #[test]
    fn zero_taxable_income_yields_no_contributions() {
        let result = calculate(Decimal::ZERO);

        assert_eq!(result.total(), Decimal::ZERO);
    }
}
