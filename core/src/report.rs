//! End-of-run summary statistics.

use crate::{
    ticket::{Ticket, TicketStatus},
    types::Severity,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_tickets: usize,
    /// Normalized frequency per severity, most common first.
    pub severity_distribution: Vec<(Severity, f64)>,
    pub escalation_rate: Option<f64>,
    /// Mean of the timestamp-derived resolution hours.
    pub mean_resolution_hours: Option<f64>,
}

impl Summary {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let total = tickets.len();
        if total == 0 {
            return Self {
                total_tickets: 0,
                severity_distribution: Vec::new(),
                escalation_rate: None,
                mean_resolution_hours: None,
            };
        }

        let mut counts: Vec<(Severity, usize)> = Vec::new();
        for t in tickets {
            match counts.iter_mut().find(|(s, _)| *s == t.severity) {
                Some((_, n)) => *n += 1,
                None => counts.push((t.severity, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let severity_distribution = counts
            .into_iter()
            .map(|(s, n)| (s, n as f64 / total as f64))
            .collect();

        let escalated = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Escalated)
            .count();
        let hours: f64 = tickets.iter().map(Ticket::resolution_hours).sum();

        Self {
            total_tickets: total,
            severity_distribution,
            escalation_rate: Some(escalated as f64 / total as f64),
            mean_resolution_hours: Some(hours / total as f64),
        }
    }

    pub fn share_of(&self, severity: Severity) -> f64 {
        self.severity_distribution
            .iter()
            .find(|(s, _)| *s == severity)
            .map(|(_, share)| *share)
            .unwrap_or(0.0)
    }
}
