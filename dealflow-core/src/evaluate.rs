//! One-shot deal evaluation: facts → offer anchors → grade → buyer matches.
//!
//! The composition is one-way; nothing feeds back. The roster is a
//! read-only snapshot owned by the caller — re-running against a changed
//! snapshot may legitimately produce different matches.

use crate::domain::{Buyer, DealGrade, MatchResult, OfferAnchors, PropertyFacts, RehabEstimate};
use crate::error::EngineError;
use crate::grading::grade_deal;
use crate::matching::{match_buyers, DealCriteria};
use crate::offers::offer_anchors;
use serde::{Deserialize, Serialize};

/// Everything the pipeline produces for one deal, as one serializable
/// bundle. Safe to persist, log, or render; the engine keeps nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealAnalysis {
    pub address: String,
    pub state: String,
    pub arv: f64,
    pub rehab: RehabEstimate,
    pub anchors: OfferAnchors,
    pub graded: DealGrade,
    pub matches: Vec<MatchResult>,
}

/// Evaluate a deal end to end.
///
/// When `rehab` is `None`, the estimate is derived from square footage and
/// condition; a property with unknown square footage falls back to a zero
/// rehab budget.
pub fn evaluate_deal(
    facts: &PropertyFacts,
    rehab: Option<f64>,
    roster: &[Buyer],
) -> Result<DealAnalysis, EngineError> {
    let rehab = match (rehab, facts.sqft) {
        (Some(amount), _) => RehabEstimate::explicit(amount)?,
        (None, Some(sqft)) => RehabEstimate::from_condition(sqft, facts.condition)?,
        (None, None) => RehabEstimate::explicit(0.0)?,
    };

    let anchors = offer_anchors(facts.arv, rehab.amount)?;
    let graded = grade_deal(&anchors, facts.arv, facts.condition, facts.monthly_rent)?;
    let matches = match_buyers(
        &DealCriteria {
            anchors: &anchors,
            state: &facts.state,
            property_type: facts.property_type,
        },
        roster,
    );

    Ok(DealAnalysis {
        address: facts.address.clone(),
        state: facts.state.clone(),
        arv: facts.arv,
        rehab,
        anchors,
        graded,
        matches,
    })
}
