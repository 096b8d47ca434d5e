//! Property facts — the raw inputs every calculator consumes.

use crate::error::{require_non_negative, EngineError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Observed condition of a property. Drives the default rehab estimate and
/// the optional grading confidence bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
    /// Condition not yet assessed. Treated as `Fair` wherever a multiplier
    /// or score is needed.
    Unknown,
}

impl Condition {
    /// Per-square-foot rehab multiplier, applied to [`REHAB_BASE_PSF`].
    /// Unknown condition falls back to the fair-condition multiplier.
    pub fn rehab_multiplier(self) -> f64 {
        match self {
            Condition::Excellent => 0.02,
            Condition::Good => 0.05,
            Condition::Fair | Condition::Unknown => 0.12,
            Condition::Poor => 0.25,
        }
    }

    /// Coarse 0–100 condition score used as a grading confidence input.
    pub fn score(self) -> u8 {
        match self {
            Condition::Excellent => 90,
            Condition::Good => 75,
            Condition::Fair | Condition::Unknown => 60,
            Condition::Poor => 40,
        }
    }
}

impl FromStr for Condition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            "unknown" => Ok(Condition::Unknown),
            _ => Err(EngineError::UnknownCategory {
                field: "condition",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
            Condition::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Property type, matched against buyer box criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "SFR")]
    Sfr,
    Townhome,
    Duplex,
    Triplex,
    Fourplex,
    Condo,
    Land,
    Multifamily,
}

impl FromStr for PropertyType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sfr" => Ok(PropertyType::Sfr),
            "townhome" => Ok(PropertyType::Townhome),
            "duplex" => Ok(PropertyType::Duplex),
            "triplex" => Ok(PropertyType::Triplex),
            "fourplex" => Ok(PropertyType::Fourplex),
            "condo" => Ok(PropertyType::Condo),
            "land" => Ok(PropertyType::Land),
            "multifamily" => Ok(PropertyType::Multifamily),
            _ => Err(EngineError::UnknownCategory {
                field: "property_type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::Sfr => "SFR",
            PropertyType::Townhome => "Townhome",
            PropertyType::Duplex => "Duplex",
            PropertyType::Triplex => "Triplex",
            PropertyType::Fourplex => "Fourplex",
            PropertyType::Condo => "Condo",
            PropertyType::Land => "Land",
            PropertyType::Multifamily => "Multifamily",
        };
        f.write_str(s)
    }
}

/// Raw facts about a property, as supplied by the caller's lookup service.
///
/// Immutable once built. Optional fields stay `None` when the lookup could
/// not supply them; every consumer documents its own fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFacts {
    pub address: String,
    pub owner: Option<String>,
    /// After-repair value estimate. Must be positive to be usable; the
    /// offer calculator enforces this, not the constructor.
    pub arv: f64,
    pub sqft: Option<f64>,
    pub beds: Option<u8>,
    pub baths: Option<f64>,
    pub year_built: Option<u16>,
    pub monthly_rent: Option<f64>,
    pub mortgage_balance: Option<f64>,
    pub annual_taxes: Option<f64>,
    pub annual_insurance: Option<f64>,
    pub condition: Condition,
    pub state: String,
    pub city: Option<String>,
    pub property_type: PropertyType,
}

/// Base rehab cost per square foot before the condition multiplier.
pub const REHAB_BASE_PSF: f64 = 25.0;

/// A rehab budget: supplied explicitly by the caller, or derived from
/// square footage and condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RehabEstimate {
    pub amount: f64,
    /// True when the amount came from the per-square-foot table rather than
    /// a caller-supplied figure.
    pub derived: bool,
}

impl RehabEstimate {
    /// Wrap a caller-supplied rehab budget. Must be >= 0.
    pub fn explicit(amount: f64) -> Result<Self, EngineError> {
        require_non_negative("rehab", amount)?;
        Ok(Self {
            amount,
            derived: false,
        })
    }

    /// Derive a budget from square footage and condition:
    /// `sqft * $25/sqft * condition multiplier`.
    pub fn from_condition(sqft: f64, condition: Condition) -> Result<Self, EngineError> {
        require_non_negative("sqft", sqft)?;
        Ok(Self {
            amount: sqft * REHAB_BASE_PSF * condition.rehab_multiplier(),
            derived: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_condition_uses_fair_multiplier() {
        assert_eq!(
            Condition::Unknown.rehab_multiplier(),
            Condition::Fair.rehab_multiplier()
        );
    }

    #[test]
    fn rehab_from_condition_table() {
        // 1,643 sqft in good condition: 1643 * 25 * 0.05
        let est = RehabEstimate::from_condition(1_643.0, Condition::Good).unwrap();
        assert!((est.amount - 2_053.75).abs() < 1e-9);
        assert!(est.derived);
    }

    #[test]
    fn explicit_rehab_rejects_negative() {
        assert!(RehabEstimate::explicit(-100.0).is_err());
        assert!(!RehabEstimate::explicit(25_000.0).unwrap().derived);
    }

    #[test]
    fn property_type_parses_case_insensitively() {
        assert_eq!("sfr".parse::<PropertyType>().unwrap(), PropertyType::Sfr);
        assert_eq!(
            "Townhome".parse::<PropertyType>().unwrap(),
            PropertyType::Townhome
        );
        assert!("castle".parse::<PropertyType>().is_err());
    }
}
