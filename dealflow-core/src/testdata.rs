//! Sample and synthetic data for tests, demos, and the CLI's built-in
//! roster. Nothing here is reachable from the grading or matching paths;
//! the generator is seeded so fixtures are reproducible.

use crate::domain::{Buyer, Condition, PropertyFacts, PropertyType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The Porter, TX sample property used across tests and demos.
pub fn sample_property() -> PropertyFacts {
    PropertyFacts {
        address: "21372 W Memorial Dr, Porter, TX 77365".to_string(),
        owner: Some("EDGAR LORI G".to_string()),
        arv: 267_000.0,
        sqft: Some(1_643.0),
        beds: Some(3),
        baths: Some(2.0),
        year_built: Some(1969),
        monthly_rent: Some(1_973.0),
        mortgage_balance: Some(27_986.0),
        annual_taxes: Some(1_497.0),
        annual_insurance: Some(1_600.0),
        condition: Condition::Good,
        state: "TX".to_string(),
        city: Some("Porter".to_string()),
        property_type: PropertyType::Sfr,
    }
}

/// The four-buyer demo roster.
pub fn sample_roster() -> Vec<Buyer> {
    vec![
        Buyer {
            id: "B001".into(),
            name: "Empire Capital Partners".to_string(),
            verified: true,
            cash: 2_500_000.0,
            min_price: 75_000.0,
            max_price: 300_000.0,
            states: vec!["TX".into(), "FL".into(), "GA".into()],
            types: vec![PropertyType::Sfr],
            close_days: 14,
        },
        Buyer {
            id: "B002".into(),
            name: "Pinnacle Real Estate Group".to_string(),
            verified: true,
            cash: 1_800_000.0,
            min_price: 90_000.0,
            max_price: 400_000.0,
            states: vec!["TX".into(), "AZ".into(), "NC".into(), "SC".into()],
            types: vec![PropertyType::Sfr, PropertyType::Townhome],
            close_days: 21,
        },
        Buyer {
            id: "B003".into(),
            name: "Sunbelt Rental Fund".to_string(),
            verified: true,
            cash: 3_200_000.0,
            min_price: 60_000.0,
            max_price: 240_000.0,
            states: vec![
                "TX".into(),
                "AL".into(),
                "MS".into(),
                "TN".into(),
                "FL".into(),
            ],
            types: vec![PropertyType::Sfr],
            close_days: 28,
        },
        Buyer {
            id: "B004".into(),
            name: "Great Lakes Holdings".to_string(),
            verified: false,
            cash: 900_000.0,
            min_price: 50_000.0,
            max_price: 180_000.0,
            states: vec!["OH".into(), "MI".into(), "IN".into(), "IL".into()],
            types: vec![PropertyType::Sfr, PropertyType::Duplex],
            close_days: 30,
        },
    ]
}

/// Generate `count` synthetic properties from a seed. Values are plausible
/// but fabricated; for load tests and demos only.
pub fn synthetic_properties(seed: u64, count: usize) -> Vec<PropertyFacts> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities = ["Dallas", "Houston", "Austin", "Porter"];
    let conditions = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    (0..count)
        .map(|i| {
            let sqft = rng.gen_range(900.0..3_200.0_f64).round();
            let arv = rng.gen_range(120_000.0..550_000.0_f64).round();
            let condition = conditions[rng.gen_range(0..conditions.len())];
            let city = cities[rng.gen_range(0..cities.len())];
            PropertyFacts {
                address: format!("{} Synthetic Ln #{i}", rng.gen_range(100..9_999)),
                owner: None,
                arv,
                sqft: Some(sqft),
                beds: Some(rng.gen_range(2..6)),
                baths: Some(f64::from(rng.gen_range(1..4))),
                year_built: Some(rng.gen_range(1950..2023)),
                monthly_rent: Some((sqft * rng.gen_range(0.9..1.4)).round()),
                mortgage_balance: None,
                annual_taxes: Some((arv * 0.021).round()),
                annual_insurance: Some(1_600.0),
                condition,
                state: "TX".to_string(),
                city: Some(city.to_string()),
                property_type: PropertyType::Sfr,
            }
        })
        .collect()
}
