//! Artifact writing and batch evaluation.
//!
//! Analyses are persisted as pretty JSON with a schema version; unknown
//! versions are rejected on load. Batch evaluation fans out across a rayon
//! pool — every deal is independent, so parallelism needs no coordination.

use anyhow::{bail, Context, Result};
use dealflow_core::domain::Buyer;
use dealflow_core::evaluate::{evaluate_deal, DealAnalysis};
use dealflow_core::{domain::PropertyFacts, EngineError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// A persisted analysis artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisArtifact {
    pub schema_version: u32,
    pub analysis_id: String,
    pub analysis: DealAnalysis,
}

/// Write an analysis to `<output_dir>/<analysis_id>.json`, creating the
/// directory if needed. Returns the artifact path.
pub fn save_analysis(
    output_dir: &Path,
    analysis_id: &str,
    analysis: &DealAnalysis,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let artifact = AnalysisArtifact {
        schema_version: SCHEMA_VERSION,
        analysis_id: analysis_id.to_string(),
        analysis: analysis.clone(),
    };
    let path = output_dir.join(format!("{analysis_id}.json"));
    let json =
        serde_json::to_string_pretty(&artifact).context("failed to serialize analysis")?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Load a persisted artifact, rejecting unknown schema versions.
pub fn load_analysis(path: &Path) -> Result<AnalysisArtifact> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let artifact: AnalysisArtifact =
        serde_json::from_str(&raw).with_context(|| format!("invalid artifact {}", path.display()))?;
    if artifact.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            artifact.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(artifact)
}

/// Evaluate many properties against one roster snapshot in parallel.
/// Per-property failures are returned in place, not propagated — one bad
/// row must not sink the batch.
pub fn evaluate_batch(
    properties: &[PropertyFacts],
    roster: &[Buyer],
) -> Vec<Result<DealAnalysis, EngineError>> {
    properties
        .par_iter()
        .map(|facts| evaluate_deal(facts, None, roster))
        .collect()
}

/// Render a one-screen summary of an analysis.
pub fn render_summary(analysis: &DealAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("Property:  {}\n", analysis.address));
    out.push_str(&format!(
        "ARV:       ${:>12.2}    Rehab: ${:.2}{}\n",
        analysis.arv,
        analysis.rehab.amount,
        if analysis.rehab.derived {
            " (derived)"
        } else {
            ""
        }
    ));
    out.push_str(&format!(
        "MAO 70%:   ${:>12.2}    MAO 75%: ${:.2}    Spread: ${:.2}\n",
        analysis.anchors.mao70, analysis.anchors.mao75, analysis.anchors.spread
    ));
    out.push_str(&format!(
        "Grade:     {} (score {})\n",
        analysis.graded.grade, analysis.graded.score
    ));
    if let Some(note) = &analysis.graded.note {
        out.push_str(&format!("Note:      {note}\n"));
    }
    let strategies: Vec<String> = analysis
        .graded
        .strategies
        .iter()
        .map(ToString::to_string)
        .collect();
    out.push_str(&format!(
        "Strategy:  {}\n",
        if strategies.is_empty() {
            "none".to_string()
        } else {
            strategies.join(", ")
        }
    ));
    if analysis.matches.is_empty() {
        out.push_str("Matches:   none yet\n");
    } else {
        out.push_str(&format!("Matches:   {}\n", analysis.matches.len()));
        for m in &analysis.matches {
            out.push_str(&format!(
                "  {} {:<28} {} cash ${:>11.0}  closes in {:>2}d  offer ${:.2}\n",
                m.buyer_id,
                m.buyer_name,
                if m.verified { "[verified]" } else { "          " },
                m.cash,
                m.close_days,
                m.suggested_offer
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealflow_core::testdata::{sample_property, sample_roster, synthetic_properties};

    #[test]
    fn artifact_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let analysis =
            evaluate_deal(&sample_property(), Some(25_000.0), &sample_roster()).unwrap();

        let path = save_analysis(dir.path(), "abc123", &analysis).unwrap();
        let artifact = load_analysis(&path).unwrap();
        assert_eq!(artifact.schema_version, SCHEMA_VERSION);
        assert_eq!(artifact.analysis.anchors.mao70, 161_900.0);
    }

    #[test]
    fn loaded_artifact_renders_like_the_original() {
        let dir = tempfile::tempdir().unwrap();
        let analysis =
            evaluate_deal(&sample_property(), Some(25_000.0), &sample_roster()).unwrap();
        let path = save_analysis(dir.path(), "porter", &analysis).unwrap();

        let artifact = load_analysis(&path).unwrap();
        assert_eq!(render_summary(&artifact.analysis), render_summary(&analysis));
    }

    #[test]
    fn future_schema_versions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let analysis =
            evaluate_deal(&sample_property(), Some(25_000.0), &sample_roster()).unwrap();
        let artifact = AnalysisArtifact {
            schema_version: SCHEMA_VERSION + 1,
            analysis_id: "future".to_string(),
            analysis,
        };
        let path = dir.path().join("future.json");
        std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();
        assert!(load_analysis(&path).is_err());
    }

    #[test]
    fn batch_matches_sequential_results() {
        let properties = synthetic_properties(11, 40);
        let roster = sample_roster();
        let parallel = evaluate_batch(&properties, &roster);

        for (facts, result) in properties.iter().zip(&parallel) {
            let sequential = evaluate_deal(facts, None, &roster).unwrap();
            let parallel = result.as_ref().unwrap();
            assert_eq!(parallel.anchors, sequential.anchors);
            assert_eq!(parallel.graded, sequential.graded);
            assert_eq!(parallel.matches, sequential.matches);
        }
    }

    #[test]
    fn summary_mentions_grade_and_matches() {
        let analysis =
            evaluate_deal(&sample_property(), Some(25_000.0), &sample_roster()).unwrap();
        let text = render_summary(&analysis);
        assert!(text.contains("Grade:     A"));
        assert!(text.contains("B001"));
    }
}
