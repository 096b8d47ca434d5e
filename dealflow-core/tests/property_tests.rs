//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Wholesale spread identity — mao75 − mao70 tracks 0.05·ARV to the cent
//! 2. Grading monotonicity — raising ARV with mao70 fixed never improves the tier
//! 3. Lead score bounds — always [60, 100]; single-factor upgrades never lower it
//! 4. Matching determinism — idempotent, insertion-order independent, totally ordered

use proptest::prelude::*;
use dealflow_core::domain::{
    Buyer, Condition, EquityBand, LeadAttributes, LeadSource, Motivation, OfferAnchors,
    PropertyType, Timeline,
};
use dealflow_core::grading::grade_deal;
use dealflow_core::lead_score::score_lead;
use dealflow_core::matching::{match_buyers, DealCriteria};
use dealflow_core::money::round_cents;
use dealflow_core::offers::offer_anchors;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_arv() -> impl Strategy<Value = f64> {
    (50_000.0..900_000.0_f64).prop_map(|v| (v * 100.0).round() / 100.0)
}

fn arb_rehab() -> impl Strategy<Value = f64> {
    (0.0..150_000.0_f64).prop_map(|v| (v * 100.0).round() / 100.0)
}

fn arb_motivation() -> impl Strategy<Value = Motivation> {
    prop_oneof![
        Just(Motivation::Low),
        Just(Motivation::Medium),
        Just(Motivation::High),
    ]
}

fn arb_equity() -> impl Strategy<Value = EquityBand> {
    prop_oneof![
        Just(EquityBand::Under10),
        Just(EquityBand::From10To30),
        Just(EquityBand::From30To50),
        Just(EquityBand::Over50),
    ]
}

fn arb_timeline() -> impl Strategy<Value = Timeline> {
    prop_oneof![
        Just(Timeline::Asap),
        Just(Timeline::Days30To60),
        Just(Timeline::Days60Plus),
    ]
}

fn arb_source() -> impl Strategy<Value = LeadSource> {
    prop_oneof![
        Just(LeadSource::DirectMail),
        Just(LeadSource::Rvm),
        Just(LeadSource::ColdCalling),
        Just(LeadSource::Ppc),
        Just(LeadSource::Referral),
        Just(LeadSource::Other),
    ]
}

fn arb_attributes() -> impl Strategy<Value = LeadAttributes> {
    (arb_motivation(), arb_equity(), arb_timeline(), arb_source()).prop_map(
        |(motivation, equity, timeline, source)| LeadAttributes {
            motivation,
            equity,
            timeline,
            source,
        },
    )
}

fn arb_roster() -> impl Strategy<Value = Vec<Buyer>> {
    prop::collection::vec(
        (
            any::<bool>(),
            10_000.0..5_000_000.0_f64,
            20_000.0..150_000.0_f64,
            150_000.0..600_000.0_f64,
            1..60_u32,
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(
                |(i, (verified, cash, min_price, max_price, close_days))| Buyer {
                    id: format!("B{i:03}").as_str().into(),
                    name: format!("Buyer {i}"),
                    verified,
                    cash: cash.round(),
                    min_price,
                    max_price,
                    states: vec!["TX".into()],
                    types: vec![PropertyType::Sfr],
                    close_days,
                },
            )
            .collect()
    })
}

// ── 1. Wholesale spread identity ─────────────────────────────────────

proptest! {
    /// mao75 − mao70 equals round(0.05·arv) to within 1.5 cents: each
    /// anchor is rounded independently (±0.005 apiece) and the 5% slice
    /// carries its own ±0.005.
    #[test]
    fn spread_tracks_five_percent_of_arv(arv in arb_arv(), rehab in arb_rehab()) {
        let a = offer_anchors(arv, rehab).unwrap();
        let expected = round_cents(0.05 * arv);
        prop_assert!(((a.mao75 - a.mao70) - expected).abs() <= 0.015 + 1e-9);
        prop_assert!(a.spread >= 0.0);
    }

    /// mao75 >= mao70 always (same rehab on both sides).
    #[test]
    fn mao75_never_below_mao70(arv in arb_arv(), rehab in arb_rehab()) {
        let a = offer_anchors(arv, rehab).unwrap();
        prop_assert!(a.mao75 >= a.mao70);
    }
}

// ── 2. Grading monotonicity ──────────────────────────────────────────

proptest! {
    /// Holding mao70 fixed, increasing ARV never improves the grade tier.
    #[test]
    fn grade_monotone_in_arv(
        mao70 in 1_000.0..300_000.0_f64,
        arv in 100_000.0..500_000.0_f64,
        bump in 1.01..3.0_f64,
    ) {
        let anchors = OfferAnchors { mao70, mao75: mao70 + 1.0, spread: 1.0 };
        let g1 = grade_deal(&anchors, arv, Condition::Unknown, None).unwrap().grade;
        let g2 = grade_deal(&anchors, arv * bump, Condition::Unknown, None).unwrap().grade;
        // Grade ordering: A < B < C < D, so "never improves" is g2 >= g1.
        prop_assert!(g2 >= g1);
    }

    /// Grading is deterministic: same inputs, same output.
    #[test]
    fn grading_is_deterministic(arv in arb_arv(), rehab in arb_rehab()) {
        let anchors = offer_anchors(arv, rehab).unwrap();
        let g1 = grade_deal(&anchors, arv, Condition::Fair, Some(1_500.0)).unwrap();
        let g2 = grade_deal(&anchors, arv, Condition::Fair, Some(1_500.0)).unwrap();
        prop_assert_eq!(g1, g2);
    }
}

// ── 3. Lead score bounds and monotonicity ────────────────────────────

proptest! {
    #[test]
    fn lead_score_bounded(attrs in arb_attributes()) {
        let score = score_lead(&attrs);
        prop_assert!((60..=100).contains(&score));
    }

    /// Upgrading any single category to a higher-weighted option never
    /// decreases the score.
    #[test]
    fn single_factor_upgrade_never_lowers_score(attrs in arb_attributes()) {
        let base = score_lead(&attrs);

        let hot = LeadAttributes { motivation: Motivation::High, ..attrs };
        prop_assert!(score_lead(&hot) >= base);

        let rich = LeadAttributes { equity: EquityBand::Over50, ..attrs };
        prop_assert!(score_lead(&rich) >= base);

        let urgent = LeadAttributes { timeline: Timeline::Asap, ..attrs };
        prop_assert!(score_lead(&urgent) >= base);

        let referred = LeadAttributes { source: LeadSource::Referral, ..attrs };
        prop_assert!(score_lead(&referred) >= base);
    }
}

// ── 4. Matching determinism ──────────────────────────────────────────

proptest! {
    /// Two runs over the same (deal, roster) snapshot yield identical
    /// ordered results, and the order survives roster reversal.
    #[test]
    fn matching_is_idempotent(roster in arb_roster(), arv in arb_arv()) {
        let anchors = offer_anchors(arv, 0.0).unwrap();
        let deal = DealCriteria {
            anchors: &anchors,
            state: "TX",
            property_type: PropertyType::Sfr,
        };

        let first = match_buyers(&deal, &roster);
        let second = match_buyers(&deal, &roster);
        prop_assert_eq!(&first, &second);

        let mut reversed = roster.clone();
        reversed.reverse();
        let third = match_buyers(&deal, &reversed);
        prop_assert_eq!(&first, &third);
    }

    /// Every match carries the shared mao75 anchor and fits the buyer's box.
    #[test]
    fn matches_respect_filters(roster in arb_roster(), arv in arb_arv()) {
        let anchors = offer_anchors(arv, 0.0).unwrap();
        let deal = DealCriteria {
            anchors: &anchors,
            state: "TX",
            property_type: PropertyType::Sfr,
        };

        for m in match_buyers(&deal, &roster) {
            prop_assert_eq!(m.suggested_offer, anchors.mao75);
            let buyer = roster.iter().find(|b| b.id == m.buyer_id).unwrap();
            prop_assert!(buyer.min_price <= anchors.mao70);
            prop_assert!(anchors.mao70 <= buyer.max_price);
        }
    }
}
