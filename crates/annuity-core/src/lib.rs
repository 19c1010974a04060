//! Fixed-rate annuity calculations with decimal precision.
//!
//! Given any one of principal, periodic payment, or total paid over the
//! term — plus a nominal annual rate, a term in years, and a payment
//! frequency — the other two quantities are derived lazily through exact
//! decimal arithmetic. All entry points reduce to the same closed-form
//! equations in [`formulas`], so they converge on the same numbers.

pub mod annuity;
pub mod error;
pub mod formulas;
mod memo;
pub mod quantity;
pub mod types;

pub use annuity::Annuity;
pub use error::AnnuityError;
pub use quantity::{PaymentSource, PrincipalSource, TotalSource};
pub use types::*;

/// Standard result type for all annuity operations
pub type AnnuityResult<T> = Result<T, AnnuityError>;
