//! Buyer roster entries.
//!
//! Buyers are created and edited by an external admin flow; the matching
//! engine reads a snapshot and never writes back.

use super::property::PropertyType;
use super::StateCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque buyer identifier (e.g. "B001"). Also the final matching tie-break,
/// so ordering on it must be total — `String` ordering suffices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuyerId(pub String);

impl fmt::Display for BuyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuyerId {
    fn from(s: &str) -> Self {
        BuyerId(s.to_string())
    }
}

/// A capitalized buyer and their buy-box criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: BuyerId,
    pub name: String,
    pub verified: bool,
    /// Cash on hand, used as the primary ranking key within a
    /// verification tier.
    pub cash: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Two-letter region codes the buyer accepts (e.g. "TX").
    pub states: Vec<StateCode>,
    pub types: Vec<PropertyType>,
    /// Typical days to close, >= 1. Faster closes rank higher.
    pub close_days: u32,
}

impl Buyer {
    pub fn accepts_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    pub fn accepts_type(&self, property_type: PropertyType) -> bool {
        self.types.contains(&property_type)
    }

    pub fn accepts_price(&self, price: f64) -> bool {
        self.min_price <= price && price <= self.max_price
    }
}
