//! Withholding calculations.
//!
//! Insurance, deductions and income tax are evaluated by separate modules
//! and combined into a [`SalaryReport`](crate::SalaryReport) by
//! [`SalaryReportCalculator`].

pub mod brackets;
pub mod common;
pub mod deductions;
pub mod income_tax;
pub mod insurance;
pub mod report;

pub use brackets::{BracketSchedule, INCOME_DEDUCTION_SCHEDULE, INCOME_TAX_SCHEDULE};
pub use insurance::InsuranceCalculator;
pub use report::{SalaryReportCalculator, compute_salary_report};
