//! Per-ticket invariants of the simulation engine.

use chrono::{Datelike, NaiveDate};
use fleet_tickets_core::{
    config::{GeneratorConfig, OverloadOrdering},
    engine::{Dataset, TicketEngine},
    error::GenError,
    factory::Fleet,
    rng::{RngBank, StreamSlot},
    ticket::TicketStatus,
};
use std::collections::HashSet;

const TOLERANCE_HOURS: f64 = 1e-6;

fn build(config: &GeneratorConfig, seed: u64) -> Dataset {
    let _ = env_logger::builder().is_test(true).try_init();
    Dataset::generate(config, &RngBank::new(seed)).expect("generate dataset")
}

#[test]
fn close_time_after_open_time() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0001);
    assert!(!dataset.run.tickets.is_empty());
    for t in &dataset.run.tickets {
        assert!(t.close_time > t.open_time, "ticket {} closes before it opens", t.ticket_id);
        assert!(t.resolution_hours() >= 1.0 - TOLERANCE_HOURS);
    }
}

#[test]
fn references_resolve_in_supplied_tables() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0002);
    let asset_ids: HashSet<_> = dataset.fleet.assets.iter().map(|a| a.asset_id).collect();
    let tech_ids: HashSet<_> = dataset.fleet.technicians.iter().map(|t| t.technician_id).collect();

    for t in &dataset.run.tickets {
        assert!(asset_ids.contains(&t.asset_id), "unknown asset {}", t.asset_id);
        assert!(
            tech_ids.contains(&t.assigned_technician_id),
            "unknown technician {}",
            t.assigned_technician_id
        );
    }
}

#[test]
fn severity_and_sla_lookup() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0003);
    for t in &dataset.run.tickets {
        let expected = match t.severity {
            1 => 54,
            2 => 30,
            3 => 10,
            other => panic!("severity {other} out of range"),
        };
        assert_eq!(t.sla_hours, expected);
    }
}

#[test]
fn open_day_never_past_28() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0004);
    for t in &dataset.run.tickets {
        assert!((1..=28).contains(&t.open_time.day()), "opened on day {}", t.open_time.day());
    }
}

#[test]
fn ticket_ids_unique() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0005);
    let ids: HashSet<_> = dataset.run.tickets.iter().map(|t| t.ticket_id.as_str()).collect();
    assert_eq!(ids.len(), dataset.run.tickets.len());
    for id in ids {
        let parsed = uuid::Uuid::parse_str(id).expect("ticket id is a uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }
}

#[test]
fn legacy_status_uses_pre_overload_hours() {
    let dataset = build(&GeneratorConfig::default(), 0xABCD_0006);
    for t in &dataset.run.tickets {
        assert_eq!(t.status, TicketStatus::from_sla(t.computed_hours, t.sla_hours));
        let from_timestamps = t.resolution_hours();
        assert!(
            (from_timestamps - t.computed_hours.max(1.0)).abs() < TOLERANCE_HOURS,
            "timestamps carry {from_timestamps} h, computed {} h",
            t.computed_hours
        );
    }
}

#[test]
fn corrected_ordering_applies_overload_everywhere() {
    let config = GeneratorConfig {
        overload_ordering: OverloadOrdering::Corrected,
        ..GeneratorConfig::default()
    };
    let dataset = build(&config, 0xABCD_0007);
    for t in &dataset.run.tickets {
        assert_eq!(t.status, TicketStatus::from_sla(t.adjusted_hours, t.sla_hours));
        assert!((t.resolution_hours() - t.adjusted_hours.max(1.0)).abs() < TOLERANCE_HOURS);
    }
}

#[test]
fn negative_durations_close_after_the_floor() {
    // N(1, 5) noise turns a large share of draws negative.
    let config = GeneratorConfig {
        resolution_noise_std: 5.0,
        ..GeneratorConfig::default()
    };
    let dataset = build(&config, 0xABCD_000B);
    let negative: Vec<_> = dataset
        .run
        .tickets
        .iter()
        .filter(|t| t.computed_hours < 0.0)
        .collect();
    assert!(!negative.is_empty(), "no negative durations drawn");

    for t in negative {
        assert_eq!(t.status, TicketStatus::Closed, "ticket {}", t.ticket_id);
        assert!(
            (t.resolution_hours() - 1.0).abs() < TOLERANCE_HOURS,
            "ticket {} resolved in {} h",
            t.ticket_id,
            t.resolution_hours()
        );
    }
}

#[test]
fn overload_factor_only_in_busy_months() {
    // Without volume noise: Jan 2024 = 260 tickets (> 230), Mar 2024 = 200.
    let config = GeneratorConfig {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        volume_noise_std: 0.0,
        ..GeneratorConfig::default()
    };
    let dataset = build(&config, 0xABCD_0008);

    let volumes: Vec<usize> = dataset.run.months.iter().map(|m| m.volume).collect();
    assert_eq!(volumes, vec![260, 260, 200]);
    let overloaded: Vec<bool> = dataset.run.months.iter().map(|m| m.overloaded).collect();
    assert_eq!(overloaded, vec![true, true, false]);

    let jan = &dataset.run.months[0];
    assert!((jan.load_ratio - 260.0 * 15.0 / (8.0 * 140.0)).abs() < 1e-12);
    assert_eq!(jan.capacity_hours, 1120.0);

    for t in &dataset.run.tickets {
        let expected = if t.open_time.month() == 3 { 1.0 } else { 1.4 };
        assert!((t.adjusted_hours - t.computed_hours * expected).abs() < 1e-9);
    }
}

#[test]
fn zero_base_volume_yields_no_tickets() {
    let config = GeneratorConfig { base_monthly_volume: 0, ..GeneratorConfig::default() };
    let dataset = build(&config, 0xABCD_0009);
    assert!(dataset.run.tickets.is_empty());
    assert_eq!(dataset.run.months.len(), 6);
    assert!(dataset.run.months.iter().all(|m| m.volume == 0 && m.load_ratio == 0.0));
}

#[test]
fn empty_tables_are_fatal() {
    let config = GeneratorConfig::default();
    let fleet = Fleet::generate(&config, &RngBank::new(1)).unwrap();

    let no_assets = TicketEngine::new(config.clone(), &[], &fleet.technicians);
    assert!(matches!(no_assets, Err(GenError::EmptyTable { table: "assets" })));

    let no_techs = TicketEngine::new(config.clone(), &fleet.assets, &[]);
    assert!(matches!(no_techs, Err(GenError::EmptyTable { table: "technicians" })));

    let zero_techs = GeneratorConfig { technician_count: 0, ..config };
    let result = Dataset::generate(&zero_techs, &RngBank::new(1));
    assert!(matches!(result, Err(GenError::EmptyTable { table: "technicians" })));
}

#[test]
fn single_month_matches_engine_run() {
    let config = GeneratorConfig {
        start_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        ..GeneratorConfig::default()
    };
    let bank = RngBank::new(0xABCD_000A);
    let fleet = Fleet::generate(&config, &bank).unwrap();
    let engine = TicketEngine::new(config, &fleet.assets, &fleet.technicians).unwrap();

    let run = engine.run(&mut bank.for_stream(StreamSlot::Tickets)).unwrap();
    let december = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
    let (load, tickets) = engine
        .simulate_month(december, &mut bank.for_stream(StreamSlot::Tickets))
        .unwrap();

    assert_eq!(run.months, vec![load]);
    assert_eq!(run.tickets, tickets);
    assert_eq!(run.months[0].seasonal_factor, 1.30);
}
