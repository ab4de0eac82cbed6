//! ticket-gen: headless runner for the fleet ticket generator.
//!
//! Usage:
//!   ticket-gen
//!   ticket-gen --seed 12345 --out ./data --config overrides.json

use anyhow::Result;
use fleet_tickets_core::{
    config::GeneratorConfig,
    engine::{Dataset, SimulationRun},
    export,
    report::Summary,
    rng::RngBank,
    ticket::Ticket,
};
use std::{env, path::Path};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let out_dir = flag_value(&args, "--out").unwrap_or(".");
    let config = match flag_value(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let bank = match flag_value(&args, "--seed") {
        Some(raw) => RngBank::new(raw.parse()?),
        None => RngBank::from_entropy(),
    };

    println!("Fleet ticket generator: ticket-gen");
    println!("  seed:        {}", bank.master_seed());
    println!("  range:       {} .. {}", config.start_date, config.end_date);
    println!("  base volume: {}", config.base_monthly_volume);
    println!("  ordering:    {:?}", config.overload_ordering);
    println!("  out:         {out_dir}");
    println!();

    let dataset = Dataset::generate(&config, &bank)?;
    let tickets = &dataset.run.tickets;

    print_head(tickets, 5);
    print_summary(&Summary::from_tickets(tickets));
    print_months(&dataset.run);

    std::fs::create_dir_all(out_dir)?;
    let out = Path::new(out_dir);
    export::write_tickets_csv(&out.join("tickets.csv"), tickets)?;
    export::write_customers_csv(&out.join("customers.csv"), &dataset.fleet.customers)?;
    export::write_assets_csv(&out.join("assets.csv"), &dataset.fleet.assets)?;
    export::write_technicians_csv(&out.join("technicians.csv"), &dataset.fleet.technicians)?;
    log::info!("wrote {} tickets to {}", tickets.len(), out.join("tickets.csv").display());

    Ok(())
}

fn print_head(tickets: &[Ticket], n: usize) {
    println!(
        "{:<38} {:>5} {:<19} {:>3} {:>4} {:>4} {:<10}",
        "ticket_id", "asset", "open_time", "sev", "tech", "sla", "status"
    );
    for t in tickets.iter().take(n) {
        println!(
            "{:<38} {:>5} {:<19} {:>3} {:>4} {:>4} {:<10}",
            t.ticket_id,
            t.asset_id,
            t.open_time.format("%Y-%m-%d %H:%M:%S"),
            t.severity,
            t.assigned_technician_id,
            t.sla_hours,
            t.status.as_str(),
        );
    }
    println!();
}

fn print_summary(summary: &Summary) {
    println!("=== RUN SUMMARY ===");
    println!("  total tickets:   {}", summary.total_tickets);
    println!("  severity distribution:");
    for (severity, share) in &summary.severity_distribution {
        println!("    {severity}: {share:.4}");
    }
    match summary.escalation_rate {
        Some(rate) => println!("  escalation rate: {rate:.4}"),
        None => println!("  escalation rate: n/a"),
    }
    match summary.mean_resolution_hours {
        Some(hours) => println!("  avg resolution:  {hours:.2} h"),
        None => println!("  avg resolution:  n/a"),
    }
    println!();
}

fn print_months(run: &SimulationRun) {
    println!("=== MONTHLY LOAD ===");
    for m in &run.months {
        println!(
            "  {} | factor {:.2} | volume {:>4} | load {:.2}{}",
            m.month.format("%Y-%m"),
            m.seasonal_factor,
            m.volume,
            m.load_ratio,
            if m.overloaded { " | OVERLOAD" } else { "" }
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
