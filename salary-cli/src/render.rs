//! Plain-text rendering of a salary report.

use rust_decimal::Decimal;
use salary_core::SalaryReport;
use salary_core::calculations::common::round_half_up;

const LABELS: [&str; 14] = [
    "Pension",
    "Health insurance",
    "Long-term care",
    "Employment insurance",
    "Tax credit deduction",
    "Income deduction",
    "Dependent deduction",
    "Non-taxable deduction",
    "Taxable base",
    "Income tax",
    "Local income tax",
    "Total withholding",
    "Pre-tax salary",
    "After-tax salary",
];

/// Renders one labelled line per report field followed by monthly net pay.
///
/// Amounts are rounded half-up to two decimal places unless `exact` is set.
pub fn render_report(
    report: &SalaryReport,
    exact: bool,
) -> String {
    let (shown, monthly) = if exact {
        (report.clone(), report.monthly_after_tax())
    } else {
        (report.rounded(), round_half_up(report.monthly_after_tax()))
    };

    let mut out = String::new();
    for (label, (_, amount)) in LABELS.iter().zip(shown.fields()) {
        push_line(&mut out, label, amount);
    }
    push_line(&mut out, "Monthly after-tax", monthly);
    out
}

fn push_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    out.push_str(&format!(
        "{label:<24}{:>22}\n",
        amount.normalize().to_string()
    ));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use salary_core::{SalaryInput, compute_salary_report};

    use super::*;

    #[test]
    fn render_report_has_one_line_per_field_plus_monthly() {
        let report = compute_salary_report(&SalaryInput::default());

        let text = render_report(&report, false);

        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn render_report_rounds_by_default() {
        let report = compute_salary_report(&SalaryInput::default());

        let text = render_report(&report, false);

        let care = text.lines().nth(2).unwrap();
        assert!(care.starts_with("Long-term care"));
        assert!(care.ends_with("89197.99"));
        assert!(text.lines().last().unwrap().ends_with("1628950.57"));
    }

    #[test]
    fn render_report_exact_keeps_full_precision() {
        let report = compute_salary_report(&SalaryInput::default());

        let text = render_report(&report, true);

        assert!(text.contains("89197.992\n"));
        assert!(text.contains("19547406.835472\n"));
    }

    #[test]
    fn render_report_aligns_amounts() {
        let report = compute_salary_report(&SalaryInput::new(dec!(0)));

        let text = render_report(&report, false);

        for line in text.lines() {
            assert_eq!(line.chars().count(), 46, "{line}");
        }
    }
}
