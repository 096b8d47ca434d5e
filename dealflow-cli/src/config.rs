//! Serializable analysis configuration.
//!
//! A TOML file capturing everything needed to reproduce one deal analysis:
//! the property facts, the rehab override, and the roster source. The
//! content-addressed id names the output artifact, so identical configs
//! land on the same file.

use anyhow::{Context, Result};
use dealflow_core::domain::{Condition, PropertyFacts, PropertyType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One deal analysis, as configured on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    pub property: PropertyConfig,

    /// Explicit rehab budget. Omit to derive from sqft and condition.
    pub rehab: Option<f64>,

    /// Path to a roster file (JSON or CSV). Omit to use the built-in
    /// sample roster.
    pub roster: Option<PathBuf>,
}

/// Property facts as written in config files. Only the fields the engine
/// consumes; the lookup-service extras (owner, mortgage, taxes) are
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyConfig {
    pub address: String,
    pub arv: f64,
    pub state: String,
    pub property_type: PropertyType,
    #[serde(default = "default_condition")]
    pub condition: Condition,
    pub sqft: Option<f64>,
    pub monthly_rent: Option<f64>,
    pub owner: Option<String>,
}

fn default_condition() -> Condition {
    Condition::Unknown
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Deterministic content hash: identical configs share an id, so
    /// re-running an analysis overwrites its own artifact.
    pub fn analysis_id(&self) -> String {
        let json = serde_json::to_string(self).expect("AnalysisConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    pub fn to_property_facts(&self) -> PropertyFacts {
        PropertyFacts {
            address: self.property.address.clone(),
            owner: self.property.owner.clone(),
            arv: self.property.arv,
            sqft: self.property.sqft,
            beds: None,
            baths: None,
            year_built: None,
            monthly_rent: self.property.monthly_rent,
            mortgage_balance: None,
            annual_taxes: None,
            annual_insurance: None,
            condition: self.property.condition,
            state: self.property.state.clone(),
            city: None,
            property_type: self.property.property_type,
        }
    }
}
