//! Closed-form annuity equations.
//!
//! Every derivation in the crate reduces to the two primitives here:
//! [`rate_over_term`] (the per-payment amortization factor) and
//! [`payment_count`]. The composite functions never repeat arithmetic;
//! they compose through those primitives so that different entry points
//! converge on the same numbers.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::AnnuityError;
use crate::types::{Money, Rate};
use crate::AnnuityResult;

fn check_schedule(term: u32, frequency: u32) -> AnnuityResult<()> {
    if term == 0 {
        return Err(AnnuityError::InvalidInput {
            field: "term".into(),
            reason: "Term must be at least one period".into(),
        });
    }
    if frequency == 0 {
        return Err(AnnuityError::InvalidInput {
            field: "frequency".into(),
            reason: "Frequency must be at least one payment per period".into(),
        });
    }
    Ok(())
}

/// Total number of payments over the life of the annuity.
pub fn payment_count(term: u32, frequency: u32) -> AnnuityResult<u64> {
    check_schedule(term, frequency)?;
    Ok(u64::from(term) * u64::from(frequency))
}

/// Per-payment amortization factor:
/// `r * (1+r)^n / ((1+r)^n - 1)` with `r = rate / frequency` and
/// `n = term * frequency`.
///
/// A zero rate makes the denominator exactly zero and fails with
/// [`AnnuityError::DivisionByZero`]; the zero-interest limit is not
/// substituted.
pub fn rate_over_term(rate: Rate, term: u32, frequency: u32) -> AnnuityResult<Rate> {
    let n = payment_count(term, frequency)?;
    let r = rate / Decimal::from(frequency);
    let compounded = (Decimal::ONE + r).powi(n as i64);
    let denominator = compounded - Decimal::ONE;
    if denominator.is_zero() {
        return Err(AnnuityError::DivisionByZero {
            context: "amortization factor denominator (1+r)^n - 1".into(),
        });
    }
    Ok(r * compounded / denominator)
}

/// Periodic payment that amortizes `principal` over the term.
pub fn payment_from_principal(
    principal: Money,
    rate: Rate,
    term: u32,
    frequency: u32,
) -> AnnuityResult<Money> {
    let factor = rate_over_term(rate, term, frequency)?;
    Ok(principal * factor)
}

/// Periodic payment given the total paid over the term. Rate-independent.
pub fn payment_from_total(total: Money, term: u32, frequency: u32) -> AnnuityResult<Money> {
    let count = payment_count(term, frequency)?;
    Ok(total / Decimal::from(count))
}

/// Principal amortized by a given periodic payment.
pub fn principal_from_payment(
    payment: Money,
    rate: Rate,
    term: u32,
    frequency: u32,
) -> AnnuityResult<Money> {
    let factor = rate_over_term(rate, term, frequency)?;
    if factor.is_zero() {
        return Err(AnnuityError::DivisionByZero {
            context: "amortization factor".into(),
        });
    }
    Ok(payment / factor)
}

/// Principal given the total paid over the term.
pub fn principal_from_total(
    total: Money,
    rate: Rate,
    term: u32,
    frequency: u32,
) -> AnnuityResult<Money> {
    let payment = payment_from_total(total, term, frequency)?;
    principal_from_payment(payment, rate, term, frequency)
}

/// Sum of all payments given an explicit payment count.
pub fn total_over_count(payment: Money, count: u64) -> Money {
    payment * Decimal::from(count)
}

/// Sum of all payments over the term. Rate-independent.
pub fn total_from_payment(payment: Money, term: u32, frequency: u32) -> AnnuityResult<Money> {
    let count = payment_count(term, frequency)?;
    Ok(total_over_count(payment, count))
}

/// Sum of all payments required to amortize `principal` over the term.
pub fn total_from_principal(
    principal: Money,
    rate: Rate,
    term: u32,
    frequency: u32,
) -> AnnuityResult<Money> {
    let payment = payment_from_principal(principal, rate, term, frequency)?;
    total_from_payment(payment, term, frequency)
}
