//! End-to-end checks from a rate file through the calculator to rendered output.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_cli::render::render_report;
use salary_cli::utils::parse_amount;
use salary_core::{SalaryInput, SalaryReportCalculator};
use salary_data::parse_withholding_config;

#[test]
fn test_comma_amounts_feed_the_calculator() {
    let input = SalaryInput::new(parse_amount("100,000,000").unwrap())
        .with_dependents(2)
        .with_non_taxable_allowance(parse_amount("1,200,000").unwrap());

    let report = SalaryReportCalculator::default().calculate(&input);

    assert_eq!(report.after_tax, dec!(78959191.659968));
}

#[test]
fn test_rate_override_changes_rendered_local_tax() {
    let config = parse_withholding_config(r#"local_tax_rate = "0.2""#).unwrap();
    let calculator = SalaryReportCalculator::new(config).unwrap();

    let text = render_report(&calculator.calculate(&SalaryInput::default()), false);

    let local = text
        .lines()
        .find(|line| line.starts_with("Local income tax"))
        .unwrap();
    assert!(local.ends_with("97097.3"), "{local}");
}

#[test]
fn test_zero_salary_renders_all_zero() {
    let report = SalaryReportCalculator::default().calculate(&SalaryInput::new(dec!(0)));

    let text = render_report(&report, false);

    assert!(text.lines().all(|line| line.ends_with(" 0")));
}
