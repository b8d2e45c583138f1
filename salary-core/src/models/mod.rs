mod bracket;
mod salary_input;
mod salary_report;
mod withholding_config;

pub use bracket::Bracket;
pub use salary_input::{
    DEFAULT_DEPENDENT_COUNT, DEFAULT_NON_TAXABLE_ALLOWANCE, DEFAULT_PRE_TAX_SALARY, SalaryInput,
};
pub use salary_report::{DeductionSet, InsuranceWithholding, SalaryReport};
pub use withholding_config::{WithholdingConfig, WithholdingConfigError};
