//! Flat CSV output.
//!
//! RULE: Only export.rs writes files.
//! Every table gets an explicit header row, even when empty, and rows
//! are written in generation order. Output is a pure function of the input.

use crate::{
    entity::{Asset, Customer, Technician},
    error::GenResult,
    ticket::Ticket,
};
use chrono::NaiveDateTime;
use std::{fs::File, io::Write, path::Path};

pub const TICKET_COLUMNS: [&str; 9] = [
    "ticket_id",
    "asset_id",
    "open_time",
    "severity",
    "assigned_technician_id",
    "sla_hours",
    "close_time",
    "status",
    "resolution_hours",
];

const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn seconds(ts: NaiveDateTime) -> String {
    ts.format(SECONDS_FORMAT).to_string()
}

fn writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

/// Tickets table plus the timestamp-derived resolution_hours column.
pub fn write_tickets<W: Write>(out: W, tickets: &[Ticket]) -> GenResult<()> {
    let mut w = writer(out);
    w.write_record(TICKET_COLUMNS)?;
    for t in tickets {
        w.write_record([
            t.ticket_id.clone(),
            t.asset_id.to_string(),
            seconds(t.open_time),
            t.severity.to_string(),
            t.assigned_technician_id.to_string(),
            t.sla_hours.to_string(),
            t.close_time.format(MICROS_FORMAT).to_string(),
            t.status.as_str().to_string(),
            t.resolution_hours().to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_customers<W: Write>(out: W, customers: &[Customer]) -> GenResult<()> {
    let mut w = writer(out);
    w.write_record(["customer_id", "name", "industry", "tier", "contract_sla_hours"])?;
    for c in customers {
        w.write_record([
            c.customer_id.to_string(),
            c.name.clone(),
            c.industry.as_str().to_string(),
            c.tier.as_str().to_string(),
            c.contract_sla_hours.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_assets<W: Write>(out: W, assets: &[Asset]) -> GenResult<()> {
    let mut w = writer(out);
    w.write_record([
        "asset_id",
        "customer_id",
        "asset_type",
        "install_date",
        "criticality",
        "failure_weight",
    ])?;
    for a in assets {
        w.write_record([
            a.asset_id.to_string(),
            a.customer_id.to_string(),
            a.asset_type.as_str().to_string(),
            seconds(a.install_date),
            a.criticality.to_string(),
            a.failure_weight.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_technicians<W: Write>(out: W, technicians: &[Technician]) -> GenResult<()> {
    let mut w = writer(out);
    w.write_record([
        "technician_id",
        "name",
        "skill_level",
        "base_resolution_hours",
        "active",
    ])?;
    for t in technicians {
        w.write_record([
            t.technician_id.to_string(),
            t.name.clone(),
            t.skill_level.to_string(),
            t.base_resolution_hours.to_string(),
            t.active.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_tickets_csv(path: &Path, tickets: &[Ticket]) -> GenResult<()> {
    write_tickets(File::create(path)?, tickets)
}

pub fn write_customers_csv(path: &Path, customers: &[Customer]) -> GenResult<()> {
    write_customers(File::create(path)?, customers)
}

pub fn write_assets_csv(path: &Path, assets: &[Asset]) -> GenResult<()> {
    write_assets(File::create(path)?, assets)
}

pub fn write_technicians_csv(path: &Path, technicians: &[Technician]) -> GenResult<()> {
    write_technicians(File::create(path)?, technicians)
}
