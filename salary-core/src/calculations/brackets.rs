//! Statutory bracket schedules and band selection.
//!
//! Both schedules are ordered by ascending upper bound, contiguous, and end
//! with an open-ended band. An amount falls into the first band whose upper
//! bound is at or above it.
//!
//! | Income tax band        | Formula              |
//! |------------------------|----------------------|
//! | ≤ 12,000,000           | 6%                   |
//! | ≤ 46,000,000           | 15% − 1,080,000      |
//! | ≤ 88,000,000           | 24% − 5,220,000      |
//! | ≤ 150,000,000          | 35% − 14,900,000     |
//! | ≤ 300,000,000          | 38% − 19,400,000     |
//! | ≤ 500,000,000          | 40% − 25,400,000     |
//! | ≤ 1,000,000,000        | 42% − 35,400,000     |
//! | above                  | 45% − 65,400,000     |
//!
//! | Income deduction band  | Formula                               |
//! |------------------------|---------------------------------------|
//! | ≤ 5,000,000            | 70%                                   |
//! | ≤ 15,000,000           | 3,500,000 + 40% over 5,000,000        |
//! | ≤ 45,000,000           | 7,500,000 + 15% over 15,000,000       |
//! | ≤ 100,000,000          | 12,000,000 + 5% over 45,000,000       |
//! | above                  | 14,750,000 + 2% over 100,000,000      |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Bracket;

/// An ordered, exhaustive sequence of [`Bracket`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSchedule {
    brackets: &'static [Bracket],
}

impl BracketSchedule {
    pub const fn new(brackets: &'static [Bracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'static [Bracket] {
        self.brackets
    }

    /// Finds the first band whose upper bound is at or above `amount`.
    pub fn find(
        &self,
        amount: Decimal,
    ) -> Option<&'static Bracket> {
        self.brackets.iter().find(|b| b.contains(amount))
    }

    /// Evaluates the formula of the band `amount` falls into.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::calculations::INCOME_TAX_SCHEDULE;
    ///
    /// // 15% - 1,080,000
    /// assert_eq!(INCOME_TAX_SCHEDULE.evaluate(dec!(20000000)), dec!(1920000));
    /// ```
    pub fn evaluate(
        &self,
        amount: Decimal,
    ) -> Decimal {
        self.find(amount)
            .map_or(Decimal::ZERO, |bracket| bracket.evaluate(amount))
    }
}

/// Progressive income tax on the taxable base.
pub const INCOME_TAX_SCHEDULE: BracketSchedule = BracketSchedule::new(INCOME_TAX_BRACKETS);

/// Earned-income deduction on the pre-tax salary.
pub const INCOME_DEDUCTION_SCHEDULE: BracketSchedule =
    BracketSchedule::new(INCOME_DEDUCTION_BRACKETS);

const INCOME_TAX_BRACKETS: &[Bracket] = &[
    Bracket {
        min_amount: dec!(0),
        max_amount: Some(dec!(12000000)),
        rate: dec!(0.06),
        base_amount: dec!(0),
    },
    Bracket {
        min_amount: dec!(12000000),
        max_amount: Some(dec!(46000000)),
        rate: dec!(0.15),
        base_amount: dec!(720000),
    },
    Bracket {
        min_amount: dec!(46000000),
        max_amount: Some(dec!(88000000)),
        rate: dec!(0.24),
        base_amount: dec!(5820000),
    },
    Bracket {
        min_amount: dec!(88000000),
        max_amount: Some(dec!(150000000)),
        rate: dec!(0.35),
        base_amount: dec!(15900000),
    },
    Bracket {
        min_amount: dec!(150000000),
        max_amount: Some(dec!(300000000)),
        rate: dec!(0.38),
        base_amount: dec!(37600000),
    },
    Bracket {
        min_amount: dec!(300000000),
        max_amount: Some(dec!(500000000)),
        rate: dec!(0.40),
        base_amount: dec!(94600000),
    },
    Bracket {
        min_amount: dec!(500000000),
        max_amount: Some(dec!(1000000000)),
        rate: dec!(0.42),
        base_amount: dec!(174600000),
    },
    Bracket {
        min_amount: dec!(1000000000),
        max_amount: None,
        rate: dec!(0.45),
        base_amount: dec!(384600000),
    },
];

const INCOME_DEDUCTION_BRACKETS: &[Bracket] = &[
    Bracket {
        min_amount: dec!(0),
        max_amount: Some(dec!(5000000)),
        rate: dec!(0.70),
        base_amount: dec!(0),
    },
    Bracket {
        min_amount: dec!(5000000),
        max_amount: Some(dec!(15000000)),
        rate: dec!(0.40),
        base_amount: dec!(3500000),
    },
    Bracket {
        min_amount: dec!(15000000),
        max_amount: Some(dec!(45000000)),
        rate: dec!(0.15),
        base_amount: dec!(7500000),
    },
    Bracket {
        min_amount: dec!(45000000),
        max_amount: Some(dec!(100000000)),
        rate: dec!(0.05),
        base_amount: dec!(12000000),
    },
    Bracket {
        min_amount: dec!(100000000),
        max_amount: None,
        rate: dec!(0.02),
        base_amount: dec!(14750000),
    },
];
