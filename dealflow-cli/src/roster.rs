//! Buyer roster loading — JSON or CSV, sniffed by file extension.
//!
//! JSON is the native format (a serialized `Vec<Buyer>`); CSV supports
//! spreadsheet-maintained rosters with pipe-separated states and types:
//!
//! ```csv
//! id,name,verified,cash,min_price,max_price,states,types,close_days
//! B001,Empire Capital Partners,true,2500000,75000,300000,TX|FL|GA,SFR,14
//! ```

use anyhow::{bail, Context, Result};
use dealflow_core::domain::{Buyer, Condition, PropertyFacts, PropertyType};
use serde::Deserialize;
use std::path::Path;

/// Raw CSV row before states/types are split and parsed.
#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    verified: bool,
    cash: f64,
    min_price: f64,
    max_price: f64,
    states: String,
    types: String,
    close_days: u32,
}

impl RosterRow {
    fn into_buyer(self) -> Result<Buyer> {
        let types = self
            .types
            .split('|')
            .map(|t| {
                t.trim()
                    .parse::<PropertyType>()
                    .with_context(|| format!("buyer {}: bad property type", self.id))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Buyer {
            id: self.id.as_str().into(),
            name: self.name,
            verified: self.verified,
            cash: self.cash,
            min_price: self.min_price,
            max_price: self.max_price,
            states: self
                .states
                .split('|')
                .map(|s| s.trim().to_string())
                .collect(),
            types,
            close_days: self.close_days,
        })
    }
}

/// Load a roster snapshot from a JSON or CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<Buyer>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read roster {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid roster JSON {}", path.display()))
        }
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("failed to read roster {}", path.display()))?;
            let mut buyers = Vec::new();
            for row in reader.deserialize::<RosterRow>() {
                let row =
                    row.with_context(|| format!("invalid roster row in {}", path.display()))?;
                buyers.push(row.into_buyer()?);
            }
            Ok(buyers)
        }
        _ => bail!(
            "unsupported roster format: {} (expected .json or .csv)",
            path.display()
        ),
    }
}

/// Raw batch-input row: one property per line. Rehab is always derived
/// from sqft and condition in batch mode.
#[derive(Debug, Deserialize)]
struct PropertyRow {
    address: String,
    arv: f64,
    state: String,
    property_type: String,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    sqft: Option<f64>,
    #[serde(default)]
    monthly_rent: Option<f64>,
}

impl PropertyRow {
    fn into_facts(self) -> Result<PropertyFacts> {
        let condition = match self.condition.as_deref() {
            Some(c) if !c.is_empty() => c
                .parse::<Condition>()
                .with_context(|| format!("{}: bad condition", self.address))?,
            _ => Condition::Unknown,
        };
        let property_type = self
            .property_type
            .parse::<PropertyType>()
            .with_context(|| format!("{}: bad property type", self.address))?;
        Ok(PropertyFacts {
            address: self.address,
            owner: None,
            arv: self.arv,
            sqft: self.sqft,
            beds: None,
            baths: None,
            year_built: None,
            monthly_rent: self.monthly_rent,
            mortgage_balance: None,
            annual_taxes: None,
            annual_insurance: None,
            condition,
            state: self.state,
            city: None,
            property_type,
        })
    }
}

/// Load batch-evaluation input: a CSV of properties, one per row.
pub fn load_properties_csv(path: &Path) -> Result<Vec<PropertyFacts>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to read properties {}", path.display()))?;
    let mut properties = Vec::new();
    for row in reader.deserialize::<PropertyRow>() {
        let row = row.with_context(|| format!("invalid property row in {}", path.display()))?;
        properties.push(row.into_facts()?);
    }
    Ok(properties)
}
