use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Pre-tax salary used when none is supplied.
pub const DEFAULT_PRE_TAX_SALARY: Decimal = dec!(22000000);

/// Dependent count (self included) used when none is supplied.
pub const DEFAULT_DEPENDENT_COUNT: u32 = 1;

/// Annual non-taxable allowance used when none is supplied.
pub const DEFAULT_NON_TAXABLE_ALLOWANCE: Decimal = dec!(1200000);

/// Inputs for a single salary report. All monetary amounts are annual.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::SalaryInput;
///
/// let input = SalaryInput::new(dec!(50000000))
///     .with_dependents(3)
///     .with_non_taxable_allowance(dec!(2400000));
///
/// assert_eq!(input.taxable_income(), dec!(47600000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Contracted gross annual salary.
    pub pre_tax_salary: Decimal,

    /// Number of dependents, including the employee.
    pub dependent_count: u32,

    /// Portion of the salary exempt from tax (meal allowance and the like).
    pub non_taxable_allowance: Decimal,
}

impl SalaryInput {
    /// Creates an input for `pre_tax_salary` with default dependents and allowance.
    pub fn new(pre_tax_salary: Decimal) -> Self {
        Self {
            pre_tax_salary,
            ..Self::default()
        }
    }

    pub fn with_dependents(
        mut self,
        dependent_count: u32,
    ) -> Self {
        self.dependent_count = dependent_count;
        self
    }

    pub fn with_non_taxable_allowance(
        mut self,
        non_taxable_allowance: Decimal,
    ) -> Self {
        self.non_taxable_allowance = non_taxable_allowance;
        self
    }

    /// Pre-tax salary minus the non-taxable allowance. May be negative.
    pub fn taxable_income(&self) -> Decimal {
        self.pre_tax_salary - self.non_taxable_allowance
    }
}

impl Default for SalaryInput {
    fn default() -> Self {
        Self {
            pre_tax_salary: DEFAULT_PRE_TAX_SALARY,
            dependent_count: DEFAULT_DEPENDENT_COUNT,
            non_taxable_allowance: DEFAULT_NON_TAXABLE_ALLOWANCE,
        }
    }
}
