use annuity_core::{formulas, Annuity, AnnuityError, PaymentSource, PrincipalSource, TotalSource};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Concrete scenarios
// ===========================================================================

#[test]
fn test_monthly_mortgage_from_principal() {
    // 100k at 5% per annum over 30 years, paid monthly
    let annuity = Annuity::from_principal(dec!(100_000), dec!(0.05), 30, 12);

    let payment = annuity.payment().unwrap();
    assert!(
        (payment - dec!(536.8216)).abs() < dec!(0.0001),
        "expected ~536.8216, got {payment}",
    );
    assert_eq!(annuity.payment_count().unwrap(), 360);

    // Total is exactly payment * count, no independent arithmetic
    let total = annuity.total().unwrap();
    assert_eq!(total, payment * dec!(360));
}

#[test]
fn test_total_from_payment_no_rate_dependency() {
    // 500 per year for 10 years; the rate never enters the total
    let annuity = Annuity::from_payment(dec!(500), dec!(0.07), 10, 1);
    assert_eq!(annuity.total().unwrap(), dec!(5_000));
    assert_eq!(annuity.payment_count().unwrap(), 10);
}

#[test]
fn test_payment_from_total_divides_exactly() {
    let annuity = Annuity::from_total(dec!(12_000), dec!(0.05), 1, 12);
    assert_eq!(annuity.payment().unwrap(), dec!(1_000));
}

// ===========================================================================
// Cross-entry-point consistency
// ===========================================================================

#[test]
fn test_round_trip_principal_payment_total() {
    let rate = dec!(0.05);
    let from_principal = Annuity::from_principal(dec!(100_000), rate, 30, 12);
    let payment = from_principal.payment().unwrap();

    // Feed the derived payment back in; totals must agree
    let from_payment = Annuity::from_payment(payment, rate, 30, 12);
    let direct = from_principal.total().unwrap();
    let round_tripped = from_payment.total().unwrap();
    assert_eq!(round_tripped, direct);

    // And the recovered principal lands back on the original
    let recovered = from_payment.principal().unwrap();
    assert!((recovered - dec!(100_000)).abs() < dec!(0.0000001));
}

#[test]
fn test_from_total_agrees_with_formula_layer() {
    let rate = dec!(0.045);
    let annuity = Annuity::from_total(dec!(90_000), rate, 15, 12);

    let expected_payment = formulas::payment_from_total(dec!(90_000), 15, 12).unwrap();
    let expected_principal = formulas::principal_from_total(dec!(90_000), rate, 15, 12).unwrap();

    assert_eq!(annuity.payment().unwrap(), expected_payment);
    assert_eq!(annuity.principal().unwrap(), expected_principal);
    assert_eq!(annuity.total().unwrap(), dec!(90_000));
}

// ===========================================================================
// Memoization
// ===========================================================================

#[test]
fn test_accessors_are_idempotent() {
    let annuity = Annuity::from_principal(dec!(250_000), dec!(0.04), 25, 12);

    assert_eq!(annuity.payment().unwrap(), annuity.payment().unwrap());
    assert_eq!(annuity.principal().unwrap(), annuity.principal().unwrap());
    assert_eq!(annuity.total().unwrap(), annuity.total().unwrap());
    assert_eq!(
        annuity.payment_count().unwrap(),
        annuity.payment_count().unwrap()
    );
}

#[test]
fn test_literal_sources_pass_through_unchanged() {
    let annuity = Annuity::from_sources(
        PrincipalSource::literal(dec!(-1_234.56)),
        PaymentSource::literal(dec!(0)),
        TotalSource::literal(dec!(0.000001)),
        dec!(0.05),
        10,
        1,
    );
    assert_eq!(annuity.principal().unwrap(), dec!(-1_234.56));
    assert_eq!(annuity.payment().unwrap(), dec!(0));
    assert_eq!(annuity.total().unwrap(), dec!(0.000001));
}

// ===========================================================================
// Failure modes
// ===========================================================================

#[test]
fn test_zero_term_fails_on_first_access() {
    // Construction is infallible; the error waits for resolution
    let annuity = Annuity::from_principal(dec!(100_000), dec!(0.05), 0, 12);

    assert!(matches!(
        annuity.payment().unwrap_err(),
        AnnuityError::InvalidInput { ref field, .. } if field == "term"
    ));
    assert!(matches!(
        annuity.total().unwrap_err(),
        AnnuityError::InvalidInput { .. }
    ));
    assert!(matches!(
        annuity.payment_count().unwrap_err(),
        AnnuityError::InvalidInput { .. }
    ));
}

#[test]
fn test_zero_frequency_fails_on_first_access() {
    let annuity = Annuity::from_total(dec!(12_000), dec!(0.05), 1, 0);
    assert!(matches!(
        annuity.payment().unwrap_err(),
        AnnuityError::InvalidInput { ref field, .. } if field == "frequency"
    ));
}

#[test]
fn test_zero_rate_fails_with_division_by_zero() {
    let annuity = Annuity::from_principal(dec!(100_000), dec!(0), 30, 12);
    assert!(matches!(
        annuity.payment().unwrap_err(),
        AnnuityError::DivisionByZero { .. }
    ));
    // The rate-independent count still resolves
    assert_eq!(annuity.payment_count().unwrap(), 360);
}

// ===========================================================================
// Quote snapshot
// ===========================================================================

#[test]
fn test_quote_serializes_and_round_trips() {
    let annuity = Annuity::from_principal(dec!(100_000), dec!(0.05), 30, 12);
    let quote = annuity.quote().unwrap();

    assert_eq!(quote.principal, dec!(100_000));
    assert_eq!(quote.payment_count, 360);
    assert_eq!(quote.term, 30);
    assert_eq!(quote.frequency, 12);

    let json = serde_json::to_string(&quote).unwrap();
    let back: annuity_core::AnnuityQuote = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quote);
}

#[test]
fn test_quote_propagates_failures() {
    let annuity = Annuity::from_payment(dec!(500), dec!(0), 10, 12);
    assert!(matches!(
        annuity.quote().unwrap_err(),
        AnnuityError::DivisionByZero { .. }
    ));
}
