//! Valuation & offer calculator — the 70%/75% MAO anchors.
//!
//! mao70 = 0.70 * arv - rehab
//! mao75 = 0.75 * arv - rehab
//! spread = max(0, mao75 - mao70)   (= 0.05 * arv, the wholesale spread)
//!
//! Negative MAOs are legitimate outputs (a deal can be un-buyable); nothing
//! here clamps them. All outputs are cent-rounded via [`crate::money`].

use crate::domain::OfferAnchors;
use crate::error::{require_non_negative, require_positive, EngineError};
use crate::money::round_cents;

/// Percentage anchors for the two MAO rules.
pub const MAO_LOW_PCT: f64 = 0.70;
pub const MAO_HIGH_PCT: f64 = 0.75;

/// Compute the MAO anchors for a deal.
///
/// `arv` must be > 0 (an absent ARV estimate is the caller's problem to
/// resolve before calling); `rehab` must be >= 0.
pub fn offer_anchors(arv: f64, rehab: f64) -> Result<OfferAnchors, EngineError> {
    require_positive("arv", arv)?;
    require_non_negative("rehab", rehab)?;

    let mao70 = round_cents(MAO_LOW_PCT * arv - rehab);
    let mao75 = round_cents(MAO_HIGH_PCT * arv - rehab);
    let spread = round_cents((mao75 - mao70).max(0.0));

    Ok(OfferAnchors {
        mao70,
        mao75,
        spread,
    })
}
