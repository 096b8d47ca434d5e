//! Seller leads and their categorical attributes.
//!
//! The four categoricals feed the lead-scoring table. Parsing from strings
//! is the fallible boundary: an unrecognized value is rejected with
//! `UnknownCategory`, never absorbed as a zero weight.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motivation {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquityBand {
    #[serde(rename = "<10%")]
    Under10,
    #[serde(rename = "10-30%")]
    From10To30,
    #[serde(rename = "30-50%")]
    From30To50,
    #[serde(rename = "50%+")]
    Over50,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "30-60 days")]
    Days30To60,
    #[serde(rename = "60+ days")]
    Days60Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    DirectMail,
    Rvm,
    ColdCalling,
    Ppc,
    Referral,
    Other,
}

impl FromStr for Motivation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Motivation::Low),
            "medium" => Ok(Motivation::Medium),
            "high" => Ok(Motivation::High),
            _ => Err(EngineError::UnknownCategory {
                field: "motivation",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for EquityBand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<10%" => Ok(EquityBand::Under10),
            "10-30%" => Ok(EquityBand::From10To30),
            "30-50%" => Ok(EquityBand::From30To50),
            "50%+" => Ok(EquityBand::Over50),
            _ => Err(EngineError::UnknownCategory {
                field: "equity",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Timeline {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asap" => Ok(Timeline::Asap),
            "30-60 days" => Ok(Timeline::Days30To60),
            "60+ days" => Ok(Timeline::Days60Plus),
            _ => Err(EngineError::UnknownCategory {
                field: "timeline",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for LeadSource {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct mail" | "direct_mail" => Ok(LeadSource::DirectMail),
            "rvm" => Ok(LeadSource::Rvm),
            "cold calling" | "cold_calling" => Ok(LeadSource::ColdCalling),
            "ppc" => Ok(LeadSource::Ppc),
            "referral" => Ok(LeadSource::Referral),
            "other" => Ok(LeadSource::Other),
            _ => Err(EngineError::UnknownCategory {
                field: "source",
                value: s.to_string(),
            }),
        }
    }
}

/// The four scoring inputs, bundled so callers pass one value around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadAttributes {
    pub motivation: Motivation,
    pub equity: EquityBand,
    pub timeline: Timeline,
    pub source: LeadSource,
}

/// A seller lead. The score is computed once at intake and frozen; editing
/// contact details later does not recompute it (re-submit to rescore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub attributes: LeadAttributes,
    pub score: u8,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(
        name: String,
        phone: Option<String>,
        address: Option<String>,
        attributes: LeadAttributes,
        created_at: DateTime<Utc>,
    ) -> Self {
        let score = crate::lead_score::score_lead(&attributes);
        Self {
            name,
            phone,
            address,
            attributes,
            score,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_are_rejected() {
        assert!("desperate".parse::<Motivation>().is_err());
        assert!("90%".parse::<EquityBand>().is_err());
        assert!("tomorrow".parse::<Timeline>().is_err());
        assert!("billboard".parse::<LeadSource>().is_err());
    }

    #[test]
    fn known_categories_parse() {
        assert_eq!("High".parse::<Motivation>().unwrap(), Motivation::High);
        assert_eq!("50%+".parse::<EquityBand>().unwrap(), EquityBand::Over50);
        assert_eq!("ASAP".parse::<Timeline>().unwrap(), Timeline::Asap);
        assert_eq!(
            "Direct Mail".parse::<LeadSource>().unwrap(),
            LeadSource::DirectMail
        );
    }

    #[test]
    fn lead_score_frozen_at_intake() {
        let attrs = LeadAttributes {
            motivation: Motivation::High,
            equity: EquityBand::Over50,
            timeline: Timeline::Asap,
            source: LeadSource::Other,
        };
        let mut lead = Lead::new("Edgar".into(), None, None, attrs, Utc::now());
        let original = lead.score;
        // Editing contact details leaves the score untouched.
        lead.phone = Some("(713) 555-0100".into());
        assert_eq!(lead.score, original);
    }
}
