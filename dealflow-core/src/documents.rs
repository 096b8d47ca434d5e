//! Document renderer payloads.
//!
//! The engine's side of the document boundary: structured payloads for a
//! letter of intent and a purchase & sale agreement. An external renderer
//! turns these into artifacts; nothing here touches files or templates.

use crate::domain::MatchResult;
use crate::evaluate::DealAnalysis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for a letter of intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoiPayload {
    pub date: NaiveDate,
    pub buyer_name: String,
    pub seller_name: String,
    pub property_address: String,
    pub state: String,
    pub purchase_price: f64,
    pub earnest_money: f64,
    pub closing_days: u32,
    pub inspection_days: u32,
}

/// Payload for a purchase & sale agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub date: NaiveDate,
    pub buyer_name: String,
    pub seller_name: String,
    pub property_address: String,
    pub state: String,
    pub purchase_price: f64,
    pub earnest_money: f64,
    pub closing_date: Option<NaiveDate>,
    pub contingencies: Vec<String>,
}

/// Standard earnest money when the caller has no negotiated figure.
pub const DEFAULT_EARNEST: f64 = 1_000.0;

/// Standard inspection window in business days.
pub const DEFAULT_INSPECTION_DAYS: u32 = 7;

/// Build an LOI payload from an analysis and a matched buyer. The offer
/// price is the match's suggested offer (the deal's mao75 anchor) and the
/// closing window is the buyer's typical close time.
pub fn loi_payload(
    analysis: &DealAnalysis,
    matched: &MatchResult,
    seller_name: &str,
    date: NaiveDate,
) -> LoiPayload {
    LoiPayload {
        date,
        buyer_name: matched.buyer_name.clone(),
        seller_name: seller_name.to_string(),
        property_address: analysis.address.clone(),
        state: analysis.state.clone(),
        purchase_price: matched.suggested_offer,
        earnest_money: DEFAULT_EARNEST,
        closing_days: matched.close_days,
        inspection_days: DEFAULT_INSPECTION_DAYS,
    }
}

/// Build a contract payload from an analysis and a matched buyer.
pub fn contract_payload(
    analysis: &DealAnalysis,
    matched: &MatchResult,
    seller_name: &str,
    date: NaiveDate,
    closing_date: Option<NaiveDate>,
) -> ContractPayload {
    ContractPayload {
        date,
        buyer_name: matched.buyer_name.clone(),
        seller_name: seller_name.to_string(),
        property_address: analysis.address.clone(),
        state: analysis.state.clone(),
        purchase_price: matched.suggested_offer,
        earnest_money: DEFAULT_EARNEST,
        closing_date,
        contingencies: vec!["Inspection".to_string()],
    }
}
