//! Quantity sources for the value-resolution layer.
//!
//! Each of principal, payment, and total is backed by a source that either
//! holds the value directly (literal) or holds the other known quantity and
//! derives this one lazily on first access. Construction never computes and
//! never fails; formula errors surface from [`value()`](PrincipalSource::value)
//! and the first successful result is cached for the source's lifetime.

use crate::formulas;
use crate::memo::Memo;
use crate::types::{Money, Rate};
use crate::AnnuityResult;

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum PrincipalKind {
    Literal(Money),
    FromPayment {
        payment: Money,
        rate: Rate,
        term: u32,
        frequency: u32,
    },
    FromTotal {
        total: Money,
        rate: Rate,
        term: u32,
        frequency: u32,
    },
}

/// Source of the principal amount.
#[derive(Debug, Clone)]
pub struct PrincipalSource {
    kind: PrincipalKind,
    cache: Memo<Money>,
}

impl PrincipalSource {
    pub fn literal(value: Money) -> Self {
        Self::new(PrincipalKind::Literal(value))
    }

    pub fn from_payment(payment: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::new(PrincipalKind::FromPayment {
            payment,
            rate,
            term,
            frequency,
        })
    }

    pub fn from_total(total: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::new(PrincipalKind::FromTotal {
            total,
            rate,
            term,
            frequency,
        })
    }

    fn new(kind: PrincipalKind) -> Self {
        Self {
            kind,
            cache: Memo::new(),
        }
    }

    /// Resolve the principal, computing at most once.
    pub fn value(&self) -> AnnuityResult<Money> {
        self.cache.get_or_try_init(|| match self.kind {
            PrincipalKind::Literal(value) => Ok(value),
            PrincipalKind::FromPayment {
                payment,
                rate,
                term,
                frequency,
            } => formulas::principal_from_payment(payment, rate, term, frequency),
            PrincipalKind::FromTotal {
                total,
                rate,
                term,
                frequency,
            } => formulas::principal_from_total(total, rate, term, frequency),
        })
    }
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum PaymentKind {
    Literal(Money),
    FromPrincipal {
        principal: Money,
        rate: Rate,
        term: u32,
        frequency: u32,
    },
    // The payment follows from the total and the count alone; no rate needed.
    FromTotal {
        total: Money,
        term: u32,
        frequency: u32,
    },
}

/// Source of the periodic payment amount.
#[derive(Debug, Clone)]
pub struct PaymentSource {
    kind: PaymentKind,
    cache: Memo<Money>,
}

impl PaymentSource {
    pub fn literal(value: Money) -> Self {
        Self::new(PaymentKind::Literal(value))
    }

    pub fn from_principal(principal: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::new(PaymentKind::FromPrincipal {
            principal,
            rate,
            term,
            frequency,
        })
    }

    pub fn from_total(total: Money, term: u32, frequency: u32) -> Self {
        Self::new(PaymentKind::FromTotal {
            total,
            term,
            frequency,
        })
    }

    fn new(kind: PaymentKind) -> Self {
        Self {
            kind,
            cache: Memo::new(),
        }
    }

    /// Resolve the payment, computing at most once.
    pub fn value(&self) -> AnnuityResult<Money> {
        self.cache.get_or_try_init(|| match self.kind {
            PaymentKind::Literal(value) => Ok(value),
            PaymentKind::FromPrincipal {
                principal,
                rate,
                term,
                frequency,
            } => formulas::payment_from_principal(principal, rate, term, frequency),
            PaymentKind::FromTotal {
                total,
                term,
                frequency,
            } => formulas::payment_from_total(total, term, frequency),
        })
    }
}

// ---------------------------------------------------------------------------
// Total
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum TotalKind {
    Literal(Money),
    FromPayment {
        payment: Money,
        term: u32,
        frequency: u32,
    },
    FromPrincipal {
        principal: Money,
        rate: Rate,
        term: u32,
        frequency: u32,
    },
}

/// Source of the total amount paid over the term.
#[derive(Debug, Clone)]
pub struct TotalSource {
    kind: TotalKind,
    cache: Memo<Money>,
}

impl TotalSource {
    pub fn literal(value: Money) -> Self {
        Self::new(TotalKind::Literal(value))
    }

    pub fn from_payment(payment: Money, term: u32, frequency: u32) -> Self {
        Self::new(TotalKind::FromPayment {
            payment,
            term,
            frequency,
        })
    }

    pub fn from_principal(principal: Money, rate: Rate, term: u32, frequency: u32) -> Self {
        Self::new(TotalKind::FromPrincipal {
            principal,
            rate,
            term,
            frequency,
        })
    }

    fn new(kind: TotalKind) -> Self {
        Self {
            kind,
            cache: Memo::new(),
        }
    }

    /// Resolve the total, computing at most once.
    pub fn value(&self) -> AnnuityResult<Money> {
        self.cache.get_or_try_init(|| match self.kind {
            TotalKind::Literal(value) => Ok(value),
            TotalKind::FromPayment {
                payment,
                term,
                frequency,
            } => formulas::total_from_payment(payment, term, frequency),
            TotalKind::FromPrincipal {
                principal,
                rate,
                term,
                frequency,
            } => formulas::total_from_principal(principal, rate, term, frequency),
        })
    }
}
