//! Domain types for the deal evaluation engine.

pub mod buyer;
pub mod deal;
pub mod lead;
pub mod property;

pub use buyer::{Buyer, BuyerId};
pub use deal::{DealGrade, Grade, MatchResult, OfferAnchors, Strategy};
pub use lead::{EquityBand, Lead, LeadAttributes, LeadSource, Motivation, Timeline};
pub use property::{Condition, PropertyFacts, PropertyType, RehabEstimate, REHAB_BASE_PSF};

/// Two-letter region code (e.g. "TX").
pub type StateCode = String;
