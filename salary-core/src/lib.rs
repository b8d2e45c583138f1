pub mod calculations;
pub mod models;

pub use calculations::{SalaryReportCalculator, compute_salary_report};
pub use models::*;
