//! National and local income tax on the taxable base.

use rust_decimal::Decimal;

use crate::calculations::brackets::INCOME_TAX_SCHEDULE;

/// Applies the eight-band progressive schedule to `tax_base`.
///
/// The result is not floored; the schedule is continuous from zero, so a
/// non-negative base always yields a non-negative tax.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::income_tax::income_tax;
///
/// assert_eq!(income_tax(dec!(8091442.008)), dec!(485486.52048));
/// assert_eq!(income_tax(dec!(46000000)), dec!(5820000));
/// ```
pub fn income_tax(tax_base: Decimal) -> Decimal {
    INCOME_TAX_SCHEDULE.evaluate(tax_base)
}

/// Local income tax levied as a flat share of the national income tax.
pub fn local_income_tax(
    income_tax: Decimal,
    local_tax_rate: Decimal,
) -> Decimal {
    income_tax * local_tax_rate
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn income_tax_in_first_band_is_six_percent() {
        assert_eq!(income_tax(dec!(12000000)), dec!(720000));
    }

    #[test]
    fn income_tax_matches_rate_minus_offset_in_each_band() {
        let cases = [
            (dec!(30000000), dec!(0.15), dec!(1080000)),
            (dec!(73053249.538), dec!(0.24), dec!(5220000)),
            (dec!(100000000), dec!(0.35), dec!(14900000)),
            (dec!(200000000), dec!(0.38), dec!(19400000)),
            (dec!(400000000), dec!(0.40), dec!(25400000)),
            (dec!(800000000), dec!(0.42), dec!(35400000)),
            (dec!(1380419538.538), dec!(0.45), dec!(65400000)),
        ];

        for (base, rate, offset) in cases {
            assert_eq!(income_tax(base), base * rate - offset, "base {base}");
        }
    }

    #[test]
    fn income_tax_on_zero_base_is_zero() {
        assert_eq!(income_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn local_income_tax_is_share_of_income_tax() {
        assert_eq!(
            local_income_tax(dec!(485486.52048), dec!(0.1)),
            dec!(48548.652048)
        );
    }
}
