use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// A fully-resolved annuity: all three quantities plus the schedule
/// parameters they were derived under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnuityQuote {
    pub principal: Money,
    pub payment: Money,
    pub total: Money,
    pub payment_count: u64,
    pub rate: Rate,
    /// Term in annum periods.
    pub term: u32,
    /// Payments per annum period (1 = annual, 12 = monthly).
    pub frequency: u32,
}
