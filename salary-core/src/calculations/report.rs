//! Salary report assembly.
//!
//! Runs the insurance, deduction and income-tax calculators in dependency
//! order and collects every intermediate figure into a [`SalaryReport`]:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Insurance from taxable income (pre-tax − non-taxable allowance) |
//! | 2    | Income, tax-credit, dependent and non-taxable deductions |
//! | 3    | Taxable base: pre-tax − insurance − deductions, floored at zero |
//! | 4    | Income tax from the progressive schedule |
//! | 5    | Local income tax: 10% of income tax |
//! | 6    | Total withholding: insurance + income tax + local income tax |
//! | 7    | Net pay: pre-tax − total withholding |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{SalaryInput, compute_salary_report};
//!
//! let report = compute_salary_report(&SalaryInput::default());
//!
//! assert_eq!(report.tax_on, dec!(8091442.008));
//! assert_eq!(report.income_tax, dec!(485486.52048));
//! assert_eq!(report.after_tax + report.total_tax, report.pre_tax);
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::floor_at_zero;
use crate::calculations::deductions;
use crate::calculations::income_tax::{income_tax, local_income_tax};
use crate::calculations::insurance::InsuranceCalculator;
use crate::{
    DeductionSet, InsuranceWithholding, SalaryInput, SalaryReport, WithholdingConfig,
    WithholdingConfigError,
};

/// Computes a salary report under the statutory rates.
pub fn compute_salary_report(input: &SalaryInput) -> SalaryReport {
    SalaryReportCalculator::default().calculate(input)
}

/// Calculator for salary withholding reports.
///
/// Holds a validated [`WithholdingConfig`]; the bracket tables are fixed.
/// The calculator keeps no state between calls, so one instance can be shared
/// across threads and reused for any number of inputs.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::{SalaryInput, SalaryReportCalculator, WithholdingConfig};
///
/// let calculator = SalaryReportCalculator::new(WithholdingConfig::default()).unwrap();
/// let report = calculator.calculate(&SalaryInput::new(dec!(100000000)).with_dependents(2));
///
/// assert_eq!(report.pension, dec!(2829600));
/// assert_eq!(report.after_tax, dec!(78959191.659968));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalaryReportCalculator {
    config: WithholdingConfig,
}

impl SalaryReportCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WithholdingConfigError`] if any rate is out of range.
    pub fn new(config: WithholdingConfig) -> Result<Self, WithholdingConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WithholdingConfig {
        &self.config
    }

    /// Calculates the full withholding report for `input`.
    ///
    /// Negative salary or allowance amounts are floored at zero before
    /// anything else is computed.
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> SalaryReport {
        let input = clamp_input(input);
        let pre_tax = input.pre_tax_salary;

        let insurance = InsuranceCalculator::new(&self.config).calculate(input.taxable_income());
        let deductions = deductions::calculate(&input);
        debug!(
            pre_tax = %pre_tax,
            insurance = %insurance.total(),
            deductions = %deductions.total(),
            "insurance and deductions computed"
        );

        let tax_on = taxable_base(pre_tax, &insurance, &deductions);
        let income_tax = income_tax(tax_on);
        let income_tax_local = local_income_tax(income_tax, self.config.local_tax_rate);

        let total_tax = insurance.total() + income_tax + income_tax_local;
        let after_tax = pre_tax - total_tax;
        debug!(
            tax_on = %tax_on,
            income_tax = %income_tax,
            total_tax = %total_tax,
            after_tax = %after_tax,
            "salary report computed"
        );

        SalaryReport {
            pension: insurance.pension,
            health: insurance.health,
            care: insurance.care,
            hire: insurance.hire,
            tax_deduction: deductions.tax_credit,
            income_deduction: deductions.income,
            family_deduction: deductions.family,
            non_tax_deduction: deductions.non_tax,
            tax_on,
            income_tax,
            income_tax_local,
            total_tax,
            pre_tax,
            after_tax,
        }
    }
}

fn clamp_input(input: &SalaryInput) -> SalaryInput {
    if input.pre_tax_salary < Decimal::ZERO {
        warn!(
            pre_tax_salary = %input.pre_tax_salary,
            "pre-tax salary is negative; treating as zero"
        );
    }
    if input.non_taxable_allowance < Decimal::ZERO {
        warn!(
            non_taxable_allowance = %input.non_taxable_allowance,
            "non-taxable allowance is negative; treating as zero"
        );
    }

    SalaryInput {
        pre_tax_salary: floor_at_zero(input.pre_tax_salary),
        dependent_count: input.dependent_count,
        non_taxable_allowance: floor_at_zero(input.non_taxable_allowance),
    }
}

/// Pre-tax salary less insurance and deductions, floored at zero.
fn taxable_base(
    pre_tax: Decimal,
    insurance: &InsuranceWithholding,
    deductions: &DeductionSet,
) -> Decimal {
    let base = pre_tax - insurance.total() - deductions.total();
    if base < Decimal::ZERO {
        debug!(
            base = %base,
            "deductions exceed salary; taxable base is zero"
        );
    }
    floor_at_zero(base)
}
