//! Statistical shape of generated data.
//!
//! These are sampling-tolerance checks on seeded runs, never exact values.

use fleet_tickets_core::{
    config::GeneratorConfig,
    engine::Dataset,
    report::Summary,
    rng::RngBank,
};
use std::collections::HashSet;

#[test]
fn severity_proportions_converge() {
    // ~130k tickets over the default half year.
    let config = GeneratorConfig { base_monthly_volume: 20_000, ..GeneratorConfig::default() };
    let dataset = Dataset::generate(&config, &RngBank::new(0x5EED_0001)).unwrap();
    let summary = Summary::from_tickets(&dataset.run.tickets);

    assert!(summary.total_tickets > 100_000, "only {} tickets", summary.total_tickets);
    for (severity, target) in [(1, 0.50), (2, 0.35), (3, 0.15)] {
        let share = summary.share_of(severity);
        assert!(
            (share - target).abs() < 0.01,
            "severity {severity}: share {share:.4}, expected {target}"
        );
    }
    assert_eq!(summary.severity_distribution[0].0, 1, "severity 1 should be most common");
}

#[test]
fn small_tables_are_fully_covered() {
    let config = GeneratorConfig {
        base_monthly_volume: 2_000,
        customer_count: 5,
        asset_count: 10,
        technician_count: 3,
        ..GeneratorConfig::default()
    };
    let dataset = Dataset::generate(&config, &RngBank::new(0x5EED_0002)).unwrap();

    let assets: HashSet<_> = dataset.run.tickets.iter().map(|t| t.asset_id).collect();
    let techs: HashSet<_> = dataset.run.tickets.iter().map(|t| t.assigned_technician_id).collect();
    assert_eq!(assets.len(), 10, "some assets never received a ticket");
    assert_eq!(techs.len(), 3, "some technicians never received a ticket");
}

#[test]
fn heavy_tailed_assets_attract_more_tickets() {
    let config = GeneratorConfig { base_monthly_volume: 2_000, ..GeneratorConfig::default() };
    let dataset = Dataset::generate(&config, &RngBank::new(0x5EED_0003)).unwrap();

    let heaviest = dataset
        .fleet
        .assets
        .iter()
        .max_by(|a, b| a.failure_weight.partial_cmp(&b.failure_weight).unwrap())
        .unwrap();
    let lightest = dataset
        .fleet
        .assets
        .iter()
        .min_by(|a, b| a.failure_weight.partial_cmp(&b.failure_weight).unwrap())
        .unwrap();
    let count = |id: u32| dataset.run.tickets.iter().filter(|t| t.asset_id == id).count();

    assert!(
        count(heaviest.asset_id) > count(lightest.asset_id),
        "heaviest asset (w={:.2}) got {} tickets, lightest (w={:.2}) got {}",
        heaviest.failure_weight,
        count(heaviest.asset_id),
        lightest.failure_weight,
        count(lightest.asset_id)
    );
}

#[test]
fn half_year_volume_within_sanity_bounds() {
    // Base 200, Jan–Jun 2024, 8 technicians: expected ~1310 tickets.
    for seed in [1u64, 2, 3, 4, 5] {
        let dataset = Dataset::generate(&GeneratorConfig::default(), &RngBank::new(seed)).unwrap();
        let total = dataset.run.tickets.len();
        assert!((900..=1500).contains(&total), "seed {seed}: {total} tickets");
        assert_eq!(dataset.run.months.len(), 6);
    }
}

#[test]
fn escalation_rate_is_a_proper_fraction() {
    let dataset =
        Dataset::generate(&GeneratorConfig::default(), &RngBank::new(0x5EED_0004)).unwrap();
    let summary = Summary::from_tickets(&dataset.run.tickets);
    let rate = summary.escalation_rate.unwrap();
    assert!(rate > 0.0 && rate < 1.0, "escalation rate {rate}");
    assert!(summary.mean_resolution_hours.unwrap() >= 1.0);
}
