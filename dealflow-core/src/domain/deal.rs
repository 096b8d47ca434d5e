//! Derived deal values: offer anchors, grades, strategies, match results.
//!
//! All of these are outputs — plain serializable values with no behavior
//! beyond ordering helpers. None are persisted by the engine.

use super::buyer::BuyerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The standardized maximum-allowable-offer anchors for a deal.
///
/// `mao70`/`mao75` may be negative ("do not buy"); they are never clamped.
/// `spread` is the informational wholesale spread, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferAnchors {
    pub mao70: f64,
    pub mao75: f64,
    pub spread: f64,
}

/// Letter grade for a deal. Ordering: A is best, D is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        f.write_str(s)
    }
}

/// Exit strategies the grading engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Wholesale,
    FixAndFlip,
    Brrrr,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Wholesale => "Wholesale",
            Strategy::FixAndFlip => "Fix & Flip",
            Strategy::Brrrr => "BRRRR",
        };
        f.write_str(s)
    }
}

/// A graded deal: letter grade, 0–100 confidence score, recommended
/// strategies, and an optional note (set when the grade is forced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealGrade {
    pub grade: Grade,
    pub score: u8,
    pub strategies: Vec<Strategy>,
    pub note: Option<String>,
}

/// One matched buyer for a deal. A join projection: references the buyer,
/// mutates nothing, and is discarded after use unless the caller records it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub buyer_id: BuyerId,
    pub buyer_name: String,
    pub verified: bool,
    pub cash: f64,
    pub close_days: u32,
    /// Shared anchor for every match: the deal's mao75.
    pub suggested_offer: f64,
}
