use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single band of a piecewise-linear schedule.
///
/// Amounts inside the band evaluate to
/// `base_amount + (amount - min_amount) * rate`. The upper bound is
/// inclusive; `max_amount` is `None` for the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub min_amount: Decimal,
    pub max_amount: Option<Decimal>,
    pub rate: Decimal,
    pub base_amount: Decimal,
}

impl Bracket {
    /// Returns `true` if `amount` is at or below this band's upper bound.
    ///
    /// Lower bounds are not checked: schedules are walked in ascending order
    /// and the first band that contains the amount wins.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        self.max_amount.is_none_or(|max| amount <= max)
    }

    /// Applies this band's formula to `amount`.
    pub fn evaluate(
        &self,
        amount: Decimal,
    ) -> Decimal {
        self.base_amount + (amount - self.min_amount) * self.rate
    }

    /// The constant subtracted in the `rate * amount - offset` form of
    /// this band (the "progressive deduction" column of a rate table).
    pub fn progressive_deduction(&self) -> Decimal {
        self.rate * self.min_amount - self.base_amount
    }
}
