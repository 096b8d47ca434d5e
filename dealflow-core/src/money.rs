//! Currency rounding.
//!
//! One rounding authority for every currency output the engine produces.
//! Convention: round half away from zero at two decimal places (`f64::round`
//! semantics). Tests pin the convention so it cannot drift silently.

/// Round a currency amount to the nearest cent, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
