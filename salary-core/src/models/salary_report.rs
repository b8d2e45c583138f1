use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Mandatory social insurance contributions withheld from salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsuranceWithholding {
    /// National pension, capped at the annual ceiling.
    pub pension: Decimal,
    /// Health insurance.
    pub health: Decimal,
    /// Long-term-care premium, derived from health insurance.
    pub care: Decimal,
    /// Employment (unemployment) insurance.
    pub hire: Decimal,
}

impl InsuranceWithholding {
    pub fn total(&self) -> Decimal {
        self.pension + self.health + self.care + self.hire
    }
}

/// The four deduction categories subtracted before the income-tax schedule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionSet {
    /// Earned-income deduction.
    pub income: Decimal,
    /// Earned-income tax-credit deduction.
    pub tax_credit: Decimal,
    /// Per-dependent deduction.
    pub family: Decimal,
    /// Non-taxable allowance deduction.
    pub non_tax: Decimal,
}

impl DeductionSet {
    pub fn total(&self) -> Decimal {
        self.income + self.tax_credit + self.family + self.non_tax
    }
}

/// Full withholding breakdown for one salary.
///
/// Every intermediate figure is kept so callers can show how the net pay
/// was reached. Amounts are annual and unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    pub pension: Decimal,
    pub health: Decimal,
    pub care: Decimal,
    pub hire: Decimal,

    pub tax_deduction: Decimal,
    pub income_deduction: Decimal,
    pub family_deduction: Decimal,
    pub non_tax_deduction: Decimal,

    /// Taxable base the progressive schedule was applied to.
    pub tax_on: Decimal,
    pub income_tax: Decimal,
    pub income_tax_local: Decimal,

    /// Insurance plus income taxes.
    pub total_tax: Decimal,
    pub pre_tax: Decimal,
    pub after_tax: Decimal,
}

impl SalaryReport {
    /// Field names in report order, as used by [`SalaryReport::fields`].
    pub const FIELD_NAMES: [&'static str; 14] = [
        "pension",
        "health",
        "care",
        "hire",
        "tax_deduction",
        "income_deduction",
        "family_deduction",
        "non_tax_deduction",
        "tax_on",
        "income_tax",
        "income_tax_local",
        "total_tax",
        "pre_tax",
        "after_tax",
    ];

    /// Net pay per month.
    pub fn monthly_after_tax(&self) -> Decimal {
        self.after_tax / Decimal::from(12)
    }

    /// Returns a copy with every amount rounded half-up to two decimal places.
    ///
    /// Rounding happens field by field, so the rounded copy may be off by a
    /// cent from `after_tax + total_tax == pre_tax`.
    pub fn rounded(&self) -> Self {
        Self {
            pension: round_half_up(self.pension),
            health: round_half_up(self.health),
            care: round_half_up(self.care),
            hire: round_half_up(self.hire),
            tax_deduction: round_half_up(self.tax_deduction),
            income_deduction: round_half_up(self.income_deduction),
            family_deduction: round_half_up(self.family_deduction),
            non_tax_deduction: round_half_up(self.non_tax_deduction),
            tax_on: round_half_up(self.tax_on),
            income_tax: round_half_up(self.income_tax),
            income_tax_local: round_half_up(self.income_tax_local),
            total_tax: round_half_up(self.total_tax),
            pre_tax: round_half_up(self.pre_tax),
            after_tax: round_half_up(self.after_tax),
        }
    }

    /// Labelled fields in report order.
    pub fn fields(&self) -> [(&'static str, Decimal); 14] {
        let amounts = [
            self.pension,
            self.health,
            self.care,
            self.hire,
            self.tax_deduction,
            self.income_deduction,
            self.family_deduction,
            self.non_tax_deduction,
            self.tax_on,
            self.income_tax,
            self.income_tax_local,
            self.total_tax,
            self.pre_tax,
            self.after_tax,
        ];
        std::array::from_fn(|i| (Self::FIELD_NAMES[i], amounts[i]))
    }
}
