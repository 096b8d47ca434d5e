//! DealFlow CLI — deal analysis, batch evaluation, lead scoring, and
//! hold-strategy calculators.
//!
//! Commands:
//! - `analyze` — grade one deal and match it against a buyer roster
//! - `batch` — evaluate a CSV of properties in parallel
//! - `lead-score` — score a seller lead from its four categoricals
//! - `brrrr` / `subto` — rental-hold and subject-to projections
//! - `show` — print a previously saved analysis artifact
//! - `roster sample` — dump the built-in sample roster as JSON

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chrono::Utc;
use dealflow_core::documents;
use dealflow_core::domain::{Buyer, Condition, PropertyFacts, PropertyType};
use dealflow_core::evaluate::evaluate_deal;
use dealflow_core::holds::{brrrr, subto, BrrrrInputs, SubtoInputs};
use dealflow_core::lead_score::parse_and_score;
use dealflow_core::testdata::sample_roster;

mod config;
mod report;
mod roster;

use config::AnalysisConfig;
use report::{evaluate_batch, load_analysis, render_summary, save_analysis};
use roster::{load_properties_csv, load_roster};

#[derive(Parser)]
#[command(
    name = "dealflow",
    about = "DealFlow CLI — deal evaluation and buyer matching engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade one deal and match it against a buyer roster.
    Analyze {
        /// Path to a TOML analysis config. Flags below are ignored when set.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Property address (label only).
        #[arg(long, default_value = "unknown")]
        address: String,

        /// After-repair value estimate.
        #[arg(long)]
        arv: Option<f64>,

        /// Rehab budget. Omit to derive from sqft and condition.
        #[arg(long)]
        rehab: Option<f64>,

        /// Property state code (e.g. TX).
        #[arg(long, default_value = "TX")]
        state: String,

        /// Property type: SFR, Townhome, Duplex, Triplex, Fourplex, Condo, Land, Multifamily.
        #[arg(long, default_value = "SFR")]
        property_type: String,

        /// Condition: excellent, good, fair, poor, unknown.
        #[arg(long, default_value = "unknown")]
        condition: String,

        /// Square footage (used for derived rehab).
        #[arg(long)]
        sqft: Option<f64>,

        /// Monthly market rent (gates the BRRRR recommendation).
        #[arg(long)]
        rent: Option<f64>,

        /// Roster file (JSON or CSV). Defaults to the built-in sample roster.
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Write a JSON artifact into this directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the analysis as JSON instead of the summary.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also print a letter-of-intent payload for the top-ranked match.
        #[arg(long, default_value_t = false)]
        loi: bool,

        /// Seller name for the LOI payload.
        #[arg(long, default_value = "")]
        seller: String,
    },
    /// Evaluate a CSV of properties in parallel against one roster snapshot.
    Batch {
        /// CSV of properties (address,arv,state,property_type,condition,sqft,monthly_rent).
        input: PathBuf,

        /// Roster file (JSON or CSV). Defaults to the built-in sample roster.
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Write one JSON artifact per property into this directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Score a seller lead.
    LeadScore {
        /// Motivation: Low, Medium, High.
        #[arg(long)]
        motivation: String,

        /// Equity band: <10%, 10-30%, 30-50%, 50%+.
        #[arg(long)]
        equity: String,

        /// Timeline: ASAP, 30-60 days, 60+ days.
        #[arg(long)]
        timeline: String,

        /// Source: Direct Mail, RVM, Cold Calling, PPC, Referral, Other.
        #[arg(long, default_value = "Other")]
        source: String,
    },
    /// Rental-hold (BRRRR) cash-flow projection.
    Brrrr {
        #[arg(long)]
        purchase: f64,
        #[arg(long, default_value_t = 0.0)]
        rehab: f64,
        #[arg(long)]
        arv: f64,
        #[arg(long, default_value_t = 0.75)]
        ltv: f64,
        #[arg(long, default_value_t = 6_000.0)]
        closing: f64,
        #[arg(long, default_value_t = 0.07)]
        rate: f64,
        #[arg(long, default_value_t = 0.0)]
        rent: f64,
        #[arg(long, default_value_t = 0.0)]
        taxes: f64,
        #[arg(long, default_value_t = 0.0)]
        insurance: f64,
        #[arg(long, default_value_t = 0.08)]
        management: f64,
        #[arg(long, default_value_t = 0.05)]
        maintenance: f64,
    },
    /// Subject-to / wrap cash-flow projection.
    Subto {
        #[arg(long)]
        arv: f64,
        #[arg(long)]
        balance: f64,
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        #[arg(long)]
        piti: f64,
        #[arg(long, default_value_t = 0.0)]
        arrears: f64,
        #[arg(long, default_value_t = 10_000.0)]
        down: f64,
        #[arg(long, default_value_t = 0.0)]
        assignment_fee: f64,
        #[arg(long, default_value_t = 0.085)]
        wrap_rate: f64,
        #[arg(long, default_value_t = 0.0)]
        exit_rent: f64,
    },
    /// Print a previously saved analysis artifact.
    Show {
        /// Path to a JSON artifact written by `analyze` or `batch`.
        artifact: PathBuf,

        /// Print the raw artifact JSON instead of the summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Roster utilities.
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
}

#[derive(Subcommand)]
enum RosterAction {
    /// Dump the built-in sample roster as JSON (edit and reuse via --roster).
    Sample,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            config,
            address,
            arv,
            rehab,
            state,
            property_type,
            condition,
            sqft,
            rent,
            roster,
            output_dir,
            json,
            loi,
            seller,
        } => {
            let (facts, rehab, roster_path, config_id) = match config {
                Some(path) => {
                    let config = AnalysisConfig::load(&path)?;
                    let roster_path = config.roster.clone();
                    let id = config.analysis_id();
                    (config.to_property_facts(), config.rehab, roster_path, Some(id))
                }
                None => {
                    let arv = match arv {
                        Some(v) => v,
                        None => bail!("--arv is required without --config"),
                    };
                    let facts = PropertyFacts {
                        address,
                        owner: None,
                        arv,
                        sqft,
                        beds: None,
                        baths: None,
                        year_built: None,
                        monthly_rent: rent,
                        mortgage_balance: None,
                        annual_taxes: None,
                        annual_insurance: None,
                        condition: condition.parse::<Condition>()?,
                        state,
                        city: None,
                        property_type: property_type.parse::<PropertyType>()?,
                    };
                    (facts, rehab, roster, None)
                }
            };
            let roster = resolve_roster(roster_path.as_deref())?;
            let analysis = evaluate_deal(&facts, rehab, &roster)
                .context("deal evaluation failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render_summary(&analysis));
            }

            if loi {
                match analysis.matches.first() {
                    Some(top) => {
                        let payload = documents::loi_payload(
                            &analysis,
                            top,
                            &seller,
                            Utc::now().date_naive(),
                        );
                        println!("{}", serde_json::to_string_pretty(&payload)?);
                    }
                    None => eprintln!("no matched buyer to draft an LOI for"),
                }
            }

            if let Some(dir) = output_dir {
                let id =
                    config_id.unwrap_or_else(|| artifact_id(&facts, analysis.rehab.amount));
                let path = save_analysis(&dir, &id, &analysis)?;
                eprintln!("wrote {}", path.display());
            }
            Ok(())
        }
        Commands::Batch {
            input,
            roster,
            output_dir,
        } => {
            let properties = load_properties_csv(&input)?;
            let roster = resolve_roster(roster.as_deref())?;
            let results = evaluate_batch(&properties, &roster);

            let mut failures = 0_usize;
            for (facts, result) in properties.iter().zip(results) {
                match result {
                    Ok(analysis) => {
                        println!(
                            "{:<40} grade {} ({} matches)",
                            analysis.address,
                            analysis.graded.grade,
                            analysis.matches.len()
                        );
                        if let Some(dir) = &output_dir {
                            let id = artifact_id(facts, analysis.rehab.amount);
                            save_analysis(dir, &id, &analysis)?;
                        }
                    }
                    Err(err) => {
                        failures += 1;
                        eprintln!("{:<40} FAILED: {err}", facts.address);
                    }
                }
            }
            if failures > 0 {
                eprintln!("{failures} of {} properties failed", properties.len());
            }
            Ok(())
        }
        Commands::LeadScore {
            motivation,
            equity,
            timeline,
            source,
        } => {
            let (attrs, score) = parse_and_score(&motivation, &equity, &timeline, &source)?;
            println!("score: {score}");
            println!("{}", serde_json::to_string_pretty(&attrs)?);
            Ok(())
        }
        Commands::Brrrr {
            purchase,
            rehab,
            arv,
            ltv,
            closing,
            rate,
            rent,
            taxes,
            insurance,
            management,
            maintenance,
        } => {
            let projection = brrrr::project(&BrrrrInputs {
                purchase_price: purchase,
                rehab,
                arv,
                refinance_ltv: ltv,
                closing_costs: closing,
                refinance_rate: rate,
                monthly_rent: rent,
                annual_taxes: taxes,
                annual_insurance: insurance,
                management_pct: management,
                maintenance_pct: maintenance,
            })?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
            Ok(())
        }
        Commands::Subto {
            arv,
            balance,
            rate,
            piti,
            arrears,
            down,
            assignment_fee,
            wrap_rate,
            exit_rent,
        } => {
            let projection = subto::project(&SubtoInputs {
                arv,
                existing_balance: balance,
                existing_rate: rate,
                existing_piti: piti,
                arrears,
                down_payment: down,
                assignment_fee,
                wrap_rate,
                exit_rent,
            })?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
            Ok(())
        }
        Commands::Show { artifact, json } => {
            let artifact = load_analysis(&artifact)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&artifact)?);
            } else {
                print!("{}", render_summary(&artifact.analysis));
            }
            Ok(())
        }
        Commands::Roster { action } => match action {
            RosterAction::Sample => {
                println!("{}", serde_json::to_string_pretty(&sample_roster())?);
                Ok(())
            }
        },
    }
}

/// Roster snapshot for a run: a file when given, else the built-in sample.
fn resolve_roster(path: Option<&std::path::Path>) -> Result<Vec<Buyer>> {
    match path {
        Some(p) => load_roster(p),
        None => Ok(sample_roster()),
    }
}

/// Content-derived artifact name for ad-hoc and batch runs. Config runs use
/// [`AnalysisConfig::analysis_id`] instead. Every input that feeds the
/// evaluation participates, including the resolved (possibly derived) rehab,
/// so analyses that grade differently never share a file.
fn artifact_id(facts: &PropertyFacts, resolved_rehab: f64) -> String {
    let key = format!(
        "{}|{}|{}|{}|{}|{}|{:?}",
        facts.address,
        facts.arv,
        resolved_rehab,
        facts.condition,
        facts.state,
        facts.property_type,
        facts.monthly_rent,
    );
    blake3::hash(key.as_bytes()).to_hex().to_string()
}
