use crate::types::{AssetId, Severity, TechnicianId, TicketId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Closed,
    Escalated,
}

impl TicketStatus {
    /// Escalated iff the resolution duration exceeds the SLA threshold.
    pub fn from_sla(resolution_hours: f64, sla_hours: u32) -> Self {
        if resolution_hours > sla_hours as f64 {
            Self::Escalated
        } else {
            Self::Closed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Escalated => "escalated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub asset_id: AssetId,
    pub open_time: NaiveDateTime,
    pub severity: Severity,
    pub assigned_technician_id: TechnicianId,
    pub sla_hours: u32,
    pub close_time: NaiveDateTime,
    pub status: TicketStatus,
    /// Resolution hours after skill, severity, noise and load scaling,
    /// before the 1-hour floor and before any overload factor.
    pub computed_hours: f64,
    /// `computed_hours` times the month's overload factor. Under the legacy
    /// ordering this never reaches the timestamps.
    pub adjusted_hours: f64,
}

impl Ticket {
    /// Duration between open and close, in hours.
    pub fn resolution_hours(&self) -> f64 {
        hours_between(self.open_time, self.close_time)
    }
}

pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 3_600_000_000.0,
        None => delta.num_seconds() as f64 / 3_600.0,
    }
}

/// Hours as a chrono duration, at microsecond precision.
pub fn duration_from_hours(hours: f64) -> chrono::Duration {
    chrono::Duration::microseconds((hours * 3_600_000_000.0).round() as i64)
}

/// Aggregate load figures for one simulated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLoad {
    pub month: NaiveDate,
    pub seasonal_factor: f64,
    pub volume: usize,
    pub capacity_hours: f64,
    pub expected_hours: f64,
    pub load_ratio: f64,
    pub overloaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_threshold_is_strict() {
        assert_eq!(TicketStatus::from_sla(30.0, 30), TicketStatus::Closed);
        assert_eq!(TicketStatus::from_sla(30.0001, 30), TicketStatus::Escalated);
        assert_eq!(TicketStatus::from_sla(-4.0, 10), TicketStatus::Closed);
    }

    #[test]
    fn duration_round_trips_at_microsecond_precision() {
        let open = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let close = open + duration_from_hours(12.345_678);
        assert!((hours_between(open, close) - 12.345_678).abs() < 1e-9);
    }
}
