//! Fixed-rate amortized payment, shared by both hold calculators.

/// Standard fixed-rate monthly payment.
///
/// A non-positive principal short-circuits to 0 (no loan, no payment)
/// instead of evaluating a degenerate exponent term. A zero rate amortizes
/// linearly: principal / term.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / f64::from(term_months);
    }
    (monthly_rate * principal) / (1.0 - (1.0 + monthly_rate).powi(-(term_months as i32)))
}
