//! The annuity aggregate.
//!
//! An [`Annuity`] binds one source for each of principal, payment, and
//! total — exactly one literal, the other two derived from it — plus the
//! shared rate, term, and frequency. It is write-once, read-many: each
//! accessor resolves its source lazily on first call and caches the result.

use crate::formulas;
use crate::memo::Memo;
use crate::quantity::{PaymentSource, PrincipalSource, TotalSource};
use crate::types::{AnnuityQuote, Money, Rate};
use crate::AnnuityResult;

#[derive(Debug, Clone)]
pub struct Annuity {
    principal: PrincipalSource,
    payment: PaymentSource,
    total: TotalSource,
    rate: Rate,
    term: u32,
    frequency: u32,
    count: Memo<u64>,
}

impl Annuity {
    /// Annuity with a known principal; payment and total are derived.
    pub fn from_principal(principal: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::from_sources(
            PrincipalSource::literal(principal),
            PaymentSource::from_principal(principal, rate, term, frequency),
            TotalSource::from_principal(principal, rate, term, frequency),
            rate,
            term,
            frequency,
        )
    }

    /// Annuity with a known total paid; principal and payment are derived.
    pub fn from_total(total: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::from_sources(
            PrincipalSource::from_total(total, rate, term, frequency),
            PaymentSource::from_total(total, term, frequency),
            TotalSource::literal(total),
            rate,
            term,
            frequency,
        )
    }

    /// Annuity with a known periodic payment; principal and total are derived.
    pub fn from_payment(payment: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::from_sources(
            PrincipalSource::from_payment(payment, rate, term, frequency),
            PaymentSource::literal(payment),
            TotalSource::from_payment(payment, term, frequency),
            rate,
            term,
            frequency,
        )
    }

    /// Escape hatch for callers supplying pre-built sources. Mutual
    /// consistency across the three sources is the caller's responsibility
    /// and is not re-validated here.
    pub fn from_sources(
        principal: PrincipalSource,
        payment: PaymentSource,
        total: TotalSource,
        rate: Rate,
        term: u32,
        frequency: u32,
    ) -> Self {
        Self {
            principal,
            payment,
            total,
            rate,
            term,
            frequency,
            count: Memo::new(),
        }
    }

    pub fn principal(&self) -> AnnuityResult<Money> {
        self.principal.value()
    }

    pub fn payment(&self) -> AnnuityResult<Money> {
        self.payment.value()
    }

    pub fn total(&self) -> AnnuityResult<Money> {
        self.total.value()
    }

    /// Total number of payments over the life of the annuity. Depends only
    /// on term and frequency, never on the rate.
    pub fn payment_count(&self) -> AnnuityResult<u64> {
        self.count
            .get_or_try_init(|| formulas::payment_count(self.term, self.frequency))
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn term(&self) -> u32 {
        self.term
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Resolve all quantities into a serializable snapshot.
    pub fn quote(&self) -> AnnuityResult<AnnuityQuote> {
        Ok(AnnuityQuote {
            principal: self.principal()?,
            payment: self.payment()?,
            total: self.total()?,
            payment_count: self.payment_count()?,
            rate: self.rate,
            term: self.term,
            frequency: self.frequency,
        })
    }
}
