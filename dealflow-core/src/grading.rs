//! Deal grading engine.
//!
//! Grade is a deterministic function of the mao70/ARV ratio, thresholds
//! evaluated top-down, first match wins:
//!
//! | r >=  | grade |
//! |-------|-------|
//! | 0.60  | A     |
//! | 0.55  | B     |
//! | 0.50  | C     |
//! | else  | D     |
//!
//! A non-positive mao70 forces grade D with an empty strategy set — that is
//! a valid "pass on this deal" outcome, not an error.

use crate::domain::{Condition, DealGrade, Grade, OfferAnchors, Strategy};
use crate::error::{require_positive, EngineError};
use crate::holds::amortization::monthly_payment;

/// Ratio thresholds, best tier first.
const GRADE_THRESHOLDS: &[(f64, Grade)] = &[(0.60, Grade::A), (0.55, Grade::B), (0.50, Grade::C)];

/// Minimum debt-service coverage for a BRRRR recommendation.
const DSCR_FLOOR: f64 = 1.2;

/// Financing assumptions behind the DSCR check: a 30-year note at 7% on
/// 75% of the candidate price (the refinance lender's view of the deal).
const DSCR_FINANCING_RATE: f64 = 0.07;
const DSCR_TERM_MONTHS: u32 = 360;
const DSCR_LTV: f64 = 0.75;

/// Grade a deal from its offer anchors.
///
/// `arv` must be positive (same validation as the offer calculator).
/// `monthly_rent`, when known, gates the BRRRR recommendation on grade-A
/// deals; without it BRRRR is never recommended.
///
/// A non-positive mao70 short-circuits to grade D with score 0. That branch
/// skips the condition bonus entirely, so the score stays flat in condition
/// there and only picks up the bonus once mao70 is positive.
pub fn grade_deal(
    anchors: &OfferAnchors,
    arv: f64,
    condition: Condition,
    monthly_rent: Option<f64>,
) -> Result<DealGrade, EngineError> {
    require_positive("arv", arv)?;

    if anchors.mao70 <= 0.0 {
        return Ok(DealGrade {
            grade: Grade::D,
            score: 0,
            strategies: Vec::new(),
            note: Some("insufficient margin".to_string()),
        });
    }

    let r = anchors.mao70 / arv;
    let grade = GRADE_THRESHOLDS
        .iter()
        .find(|(floor, _)| r >= *floor)
        .map(|(_, g)| *g)
        .unwrap_or(Grade::D);

    let mut strategies = Vec::new();
    match grade {
        Grade::A | Grade::B => {
            strategies.push(Strategy::Wholesale);
            strategies.push(Strategy::FixAndFlip);
            if grade == Grade::A && brrrr_coverage_ok(anchors.mao70, monthly_rent) {
                strategies.push(Strategy::Brrrr);
            }
        }
        Grade::C => strategies.push(Strategy::Wholesale),
        Grade::D => {}
    }

    Ok(DealGrade {
        grade,
        score: confidence_score(r, condition),
        strategies,
        note: None,
    })
}

/// Rent-based coverage check: annual rent over the annual debt service on a
/// 75%-of-price loan must clear [`DSCR_FLOOR`]. Unknown rent fails the check.
fn brrrr_coverage_ok(mao70: f64, monthly_rent: Option<f64>) -> bool {
    let rent = match monthly_rent {
        Some(r) if r > 0.0 => r,
        _ => return false,
    };
    let debt_monthly = monthly_payment(mao70 * DSCR_LTV, DSCR_FINANCING_RATE, DSCR_TERM_MONTHS);
    if debt_monthly <= 0.0 {
        return false;
    }
    (rent * 12.0) / (debt_monthly * 12.0) >= DSCR_FLOOR
}

/// 0–100 confidence score, monotonic in both the MAO ratio and the
/// condition score: the ratio contributes up to 85 points (linear, saturating
/// at r = 0.75) and condition up to 15.
fn confidence_score(r: f64, condition: Condition) -> u8 {
    let ratio_part = (r.clamp(0.0, 0.75) / 0.75) * 85.0;
    let condition_part = f64::from(condition.score()) / 100.0 * 15.0;
    (ratio_part + condition_part).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offers::offer_anchors;

    fn grade_of(arv: f64, rehab: f64) -> Grade {
        let anchors = offer_anchors(arv, rehab).unwrap();
        grade_deal(&anchors, arv, Condition::Unknown, None)
            .unwrap()
            .grade
    }

    #[test]
    fn porter_sample_is_grade_a() {
        // r = 161900 / 267000 = 0.6063
        assert_eq!(grade_of(267_000.0, 25_000.0), Grade::A);
    }

    #[test]
    fn heavy_rehab_drops_to_d() {
        // r = 80000 / 200000 = 0.40
        assert_eq!(grade_of(200_000.0, 60_000.0), Grade::D);
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        // rehab chosen so r lands exactly on each cutoff
        assert_eq!(grade_of(100_000.0, 10_000.0), Grade::A); // r = 0.60
        assert_eq!(grade_of(100_000.0, 15_000.0), Grade::B); // r = 0.55
        assert_eq!(grade_of(100_000.0, 20_000.0), Grade::C); // r = 0.50
        assert_eq!(grade_of(100_000.0, 20_000.01), Grade::D);
    }

    #[test]
    fn non_positive_mao_forces_d_with_note() {
        let anchors = offer_anchors(100_000.0, 90_000.0).unwrap();
        let graded = grade_deal(&anchors, 100_000.0, Condition::Good, Some(1_500.0)).unwrap();
        assert_eq!(graded.grade, Grade::D);
        assert!(graded.strategies.is_empty());
        assert_eq!(graded.note.as_deref(), Some("insufficient margin"));
        assert_eq!(graded.score, 0);

        // No condition bonus in the forced branch: score is flat at 0.
        let poor = grade_deal(&anchors, 100_000.0, Condition::Poor, Some(1_500.0)).unwrap();
        assert_eq!(poor.score, 0);
    }

    #[test]
    fn strategy_sets_per_grade() {
        let a = offer_anchors(267_000.0, 25_000.0).unwrap();
        let graded = grade_deal(&a, 267_000.0, Condition::Good, None).unwrap();
        assert_eq!(
            graded.strategies,
            vec![Strategy::Wholesale, Strategy::FixAndFlip]
        );

        let c = offer_anchors(100_000.0, 20_000.0).unwrap();
        let graded = grade_deal(&c, 100_000.0, Condition::Good, None).unwrap();
        assert_eq!(graded.strategies, vec![Strategy::Wholesale]);
    }

    #[test]
    fn brrrr_needs_rent_coverage() {
        let anchors = offer_anchors(267_000.0, 25_000.0).unwrap();

        // Porter sample rent of $1,973 against debt service on
        // 0.75 * 161900 ≈ $121,425 at 7%/360 (≈ $808/mo): DSCR ≈ 2.44.
        let with_rent = grade_deal(&anchors, 267_000.0, Condition::Good, Some(1_973.0)).unwrap();
        assert!(with_rent.strategies.contains(&Strategy::Brrrr));

        // Thin rent fails the 1.2 floor.
        let thin = grade_deal(&anchors, 267_000.0, Condition::Good, Some(500.0)).unwrap();
        assert!(!thin.strategies.contains(&Strategy::Brrrr));

        // Unknown rent never recommends BRRRR.
        let unknown = grade_deal(&anchors, 267_000.0, Condition::Good, None).unwrap();
        assert!(!unknown.strategies.contains(&Strategy::Brrrr));
    }

    #[test]
    fn score_monotonic_in_ratio_and_condition() {
        let low = offer_anchors(100_000.0, 18_000.0).unwrap(); // r = 0.52
        let high = offer_anchors(100_000.0, 8_000.0).unwrap(); // r = 0.62

        let s_low = grade_deal(&low, 100_000.0, Condition::Fair, None).unwrap().score;
        let s_high = grade_deal(&high, 100_000.0, Condition::Fair, None).unwrap().score;
        assert!(s_high > s_low);

        let s_poor = grade_deal(&high, 100_000.0, Condition::Poor, None).unwrap().score;
        let s_exc = grade_deal(&high, 100_000.0, Condition::Excellent, None)
            .unwrap()
            .score;
        assert!(s_exc > s_poor);
    }

    #[test]
    fn invalid_arv_is_rejected() {
        let anchors = OfferAnchors {
            mao70: 70_000.0,
            mao75: 75_000.0,
            spread: 5_000.0,
        };
        assert!(grade_deal(&anchors, 0.0, Condition::Good, None).is_err());
    }
}
