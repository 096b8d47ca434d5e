//! Lead scoring engine.
//!
//! Additive weight tables over the four seller categoricals, base 60,
//! capped at 100. Typed inputs make scoring itself infallible; the fallible
//! boundary is [`parse_and_score`], which rejects unknown category strings.

use crate::domain::{EquityBand, LeadAttributes, LeadSource, Motivation, Timeline};
use crate::error::EngineError;

const BASE_SCORE: u32 = 60;
const SCORE_CAP: u32 = 100;

fn motivation_weight(m: Motivation) -> u32 {
    match m {
        Motivation::Low => 0,
        Motivation::Medium => 10,
        Motivation::High => 20,
    }
}

fn equity_weight(e: EquityBand) -> u32 {
    match e {
        EquityBand::Under10 => 0,
        EquityBand::From10To30 => 10,
        EquityBand::From30To50 => 15,
        EquityBand::Over50 => 20,
    }
}

fn timeline_weight(t: Timeline) -> u32 {
    match t {
        Timeline::Asap => 15,
        Timeline::Days30To60 => 8,
        Timeline::Days60Plus => 0,
    }
}

fn source_weight(s: LeadSource) -> u32 {
    match s {
        LeadSource::DirectMail => 5,
        LeadSource::Rvm => 8,
        LeadSource::ColdCalling => 3,
        LeadSource::Ppc => 12,
        LeadSource::Referral => 15,
        LeadSource::Other => 0,
    }
}

/// Score a lead's attributes. Deterministic, always in [60, 100].
pub fn score_lead(attrs: &LeadAttributes) -> u8 {
    let raw = BASE_SCORE
        + motivation_weight(attrs.motivation)
        + equity_weight(attrs.equity)
        + timeline_weight(attrs.timeline)
        + source_weight(attrs.source);
    raw.min(SCORE_CAP) as u8
}

/// Parse the four categoricals from strings and score them. Any value
/// outside the known sets fails with `UnknownCategory`.
pub fn parse_and_score(
    motivation: &str,
    equity: &str,
    timeline: &str,
    source: &str,
) -> Result<(LeadAttributes, u8), EngineError> {
    let attrs = LeadAttributes {
        motivation: motivation.parse()?,
        equity: equity.parse()?,
        timeline: timeline.parse()?,
        source: source.parse()?,
    };
    Ok((attrs, score_lead(&attrs)))
}
