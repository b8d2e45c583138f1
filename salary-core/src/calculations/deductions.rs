//! Deductions subtracted from pre-tax salary before income tax applies.
//!
//! The earned-income deduction follows [`INCOME_DEDUCTION_SCHEDULE`]. The
//! remaining three categories are short step functions of the pre-tax
//! salary. Below their first step each deducts the salary itself; above it,
//! the tax-credit and non-taxable deductions stay at or below their fixed
//! amounts while the dependent deduction grows with the dependent count and
//! can exceed the salary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::brackets::INCOME_DEDUCTION_SCHEDULE;
use crate::calculations::common::max;
use crate::{DeductionSet, SalaryInput};

/// Flat tax-credit deduction for salaries up to [`TAX_CREDIT_PHASE_OUT_START`].
pub const TAX_CREDIT_FLAT: Decimal = dec!(740000);

/// Salary above which the tax-credit deduction starts to shrink.
pub const TAX_CREDIT_PHASE_OUT_START: Decimal = dec!(33000000);

/// Salary above which the steeper tax-credit reduction applies.
pub const TAX_CREDIT_PHASE_OUT_SECOND: Decimal = dec!(70000000);

const TAX_CREDIT_MID_FLOOR: Decimal = dec!(660000);
const TAX_CREDIT_MID_REDUCTION: Decimal = dec!(0.008);
const TAX_CREDIT_TOP_FLOOR: Decimal = dec!(500000);
const TAX_CREDIT_TOP_REDUCTION: Decimal = dec!(0.5);

/// Deduction granted per dependent, the employee included.
pub const DEPENDENT_DEDUCTION_PER_PERSON: Decimal = dec!(1500000);

/// Calculates all four deduction categories for `input`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::SalaryInput;
/// use salary_core::calculations::deductions;
///
/// let deductions = deductions::calculate(&SalaryInput::default());
///
/// assert_eq!(deductions.income, dec!(8550000));
/// assert_eq!(deductions.tax_credit, dec!(740000));
/// assert_eq!(deductions.family, dec!(1500000));
/// assert_eq!(deductions.non_tax, dec!(1200000));
/// ```
pub fn calculate(input: &SalaryInput) -> DeductionSet {
    let salary = input.pre_tax_salary;

    DeductionSet {
        income: income_deduction(salary),
        tax_credit: tax_credit_deduction(salary),
        family: dependent_deduction(salary, input.dependent_count),
        non_tax: non_taxable_deduction(salary, input.non_taxable_allowance),
    }
}

/// Earned-income deduction from the five-band schedule.
pub fn income_deduction(pre_tax_salary: Decimal) -> Decimal {
    INCOME_DEDUCTION_SCHEDULE.evaluate(pre_tax_salary)
}

/// Earned-income tax-credit deduction.
///
/// Salaries below the flat amount deduct themselves; up to 33M the flat
/// 740,000 applies; it then shrinks by 0.8% of the excess (floor 660,000)
/// and, above 70M, by 50% of the excess (floor 500,000).
pub fn tax_credit_deduction(pre_tax_salary: Decimal) -> Decimal {
    if pre_tax_salary < TAX_CREDIT_FLAT {
        pre_tax_salary
    } else if pre_tax_salary <= TAX_CREDIT_PHASE_OUT_START {
        TAX_CREDIT_FLAT
    } else if pre_tax_salary <= TAX_CREDIT_PHASE_OUT_SECOND {
        let excess = pre_tax_salary - TAX_CREDIT_PHASE_OUT_START;
        max(
            TAX_CREDIT_MID_FLOOR,
            TAX_CREDIT_FLAT - excess * TAX_CREDIT_MID_REDUCTION,
        )
    } else {
        let excess = pre_tax_salary - TAX_CREDIT_PHASE_OUT_SECOND;
        max(
            TAX_CREDIT_TOP_FLOOR,
            TAX_CREDIT_MID_FLOOR - excess * TAX_CREDIT_TOP_REDUCTION,
        )
    }
}

/// Per-dependent deduction; salaries below one person's allowance deduct themselves.
pub fn dependent_deduction(
    pre_tax_salary: Decimal,
    dependent_count: u32,
) -> Decimal {
    if pre_tax_salary < DEPENDENT_DEDUCTION_PER_PERSON {
        pre_tax_salary
    } else {
        DEPENDENT_DEDUCTION_PER_PERSON * Decimal::from(dependent_count)
    }
}

/// Non-taxable allowance deduction, never more than the salary itself.
pub fn non_taxable_deduction(
    pre_tax_salary: Decimal,
    non_taxable_allowance: Decimal,
) -> Decimal {
    if pre_tax_salary < non_taxable_allowance {
        pre_tax_salary
    } else {
        non_taxable_allowance
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // income_deduction tests
    // =========================================================================

    #[test]
    fn income_deduction_at_band_boundaries() {
        assert_eq!(income_deduction(dec!(5000000)), dec!(3500000));
        assert_eq!(income_deduction(dec!(15000000)), dec!(7500000));
        assert_eq!(income_deduction(dec!(45000000)), dec!(12000000));
        assert_eq!(income_deduction(dec!(100000000)), dec!(14750000));
    }

    #[test]
    fn income_deduction_is_zero_for_zero_salary() {
        assert_eq!(income_deduction(Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // tax_credit_deduction tests
    // =========================================================================

    #[test]
    fn tax_credit_deduction_below_flat_amount_is_salary() {
        assert_eq!(tax_credit_deduction(dec!(500000)), dec!(500000));
    }

    #[test]
    fn tax_credit_deduction_is_flat_up_to_first_phase_out() {
        assert_eq!(tax_credit_deduction(dec!(740000)), dec!(740000));
        assert_eq!(tax_credit_deduction(dec!(33000000)), dec!(740000));
    }

    #[test]
    fn tax_credit_deduction_shrinks_above_first_phase_out() {
        // 740,000 - 0.8% of 5,000,000
        assert_eq!(tax_credit_deduction(dec!(38000000)), dec!(700000));
    }

    #[test]
    fn tax_credit_deduction_floors_at_mid_minimum() {
        assert_eq!(tax_credit_deduction(dec!(50000000)), dec!(660000));
        assert_eq!(tax_credit_deduction(dec!(70000000)), dec!(660000));
    }

    #[test]
    fn tax_credit_deduction_shrinks_above_second_phase_out() {
        // 660,000 - 50% of 100,000
        assert_eq!(tax_credit_deduction(dec!(70100000)), dec!(610000));
    }

    #[test]
    fn tax_credit_deduction_floors_at_top_minimum() {
        assert_eq!(tax_credit_deduction(dec!(100000000)), dec!(500000));
    }

    // =========================================================================
    // dependent_deduction tests
    // =========================================================================

    #[test]
    fn dependent_deduction_below_per_person_amount_is_salary() {
        assert_eq!(dependent_deduction(dec!(1000000), 3), dec!(1000000));
    }

    #[test]
    fn dependent_deduction_scales_with_dependents() {
        assert_eq!(dependent_deduction(dec!(1500000), 1), dec!(1500000));
        assert_eq!(dependent_deduction(dec!(50000000), 3), dec!(4500000));
    }

    #[test]
    fn dependent_deduction_can_exceed_salary() {
        assert_eq!(dependent_deduction(dec!(1600000), 3), dec!(4500000));
    }

    #[test]
    fn dependent_deduction_with_no_dependents_is_zero() {
        assert_eq!(dependent_deduction(dec!(50000000), 0), Decimal::ZERO);
    }

    // =========================================================================
    // non_taxable_deduction tests
    // =========================================================================

    #[test]
    fn non_taxable_deduction_is_allowance_when_salary_covers_it() {
        assert_eq!(
            non_taxable_deduction(dec!(22000000), dec!(1200000)),
            dec!(1200000)
        );
    }

    #[test]
    fn non_taxable_deduction_is_salary_when_below_allowance() {
        assert_eq!(
            non_taxable_deduction(dec!(1000000), dec!(1200000)),
            dec!(1000000)
        );
    }

    #[test]
    fn calculate_combines_all_categories() {
        let input = SalaryInput::new(dec!(50000000))
            .with_dependents(3)
            .with_non_taxable_allowance(dec!(2400000));

        let result = calculate(&input);

        assert_eq!(
            result,
            DeductionSet {
                income: dec!(12250000),
                tax_credit: dec!(660000),
                family: dec!(4500000),
                non_tax: dec!(2400000),
            }
        );
    }
}
