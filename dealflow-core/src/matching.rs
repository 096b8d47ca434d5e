//! Buyer matching engine.
//!
//! Filters a roster snapshot against a deal's candidate price (mao70),
//! state, and property type, then ranks the matches with a total order:
//! verified buyers first, then descending cash on hand, then ascending
//! close time, then buyer id. The order has no non-deterministic ties, so
//! matching the same (deal, roster) snapshot twice yields identical output.
//!
//! An empty result is a valid outcome, not an error.

use crate::domain::{Buyer, MatchResult, OfferAnchors, PropertyType};
use std::cmp::Ordering;

/// The slice of a deal the matcher needs.
#[derive(Debug, Clone)]
pub struct DealCriteria<'a> {
    pub anchors: &'a OfferAnchors,
    pub state: &'a str,
    pub property_type: PropertyType,
}

/// Match a roster snapshot against a deal. The roster is read-only; output
/// ordering is independent of roster insertion order.
pub fn match_buyers(deal: &DealCriteria<'_>, roster: &[Buyer]) -> Vec<MatchResult> {
    let mut matched: Vec<&Buyer> = roster
        .iter()
        .filter(|b| {
            b.accepts_price(deal.anchors.mao70)
                && b.accepts_state(deal.state)
                && b.accepts_type(deal.property_type)
        })
        .collect();

    matched.sort_by(rank);

    matched
        .into_iter()
        .map(|b| MatchResult {
            buyer_id: b.id.clone(),
            buyer_name: b.name.clone(),
            verified: b.verified,
            cash: b.cash,
            close_days: b.close_days,
            // Every match shares the deal's mao75 anchor (already
            // cent-rounded by the offer calculator).
            suggested_offer: deal.anchors.mao75,
        })
        .collect()
}

fn rank(a: &&Buyer, b: &&Buyer) -> Ordering {
    b.verified
        .cmp(&a.verified)
        .then_with(|| b.cash.partial_cmp(&a.cash).unwrap_or(Ordering::Equal))
        .then_with(|| a.close_days.cmp(&b.close_days))
        .then_with(|| a.id.cmp(&b.id))
}
