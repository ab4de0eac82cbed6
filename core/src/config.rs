use crate::{
    error::{GenError, GenResult},
    types::Severity,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-severity lookup row: urgency weight, SLA threshold and the
/// multiplier applied to a technician's base resolution hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityProfile {
    pub severity: Severity,
    pub weight: f64,
    pub sla_hours: u32,
    pub resolution_factor: f64,
}

/// Where the monthly overload multiplier enters the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadOrdering {
    /// Close time and status are decided on the pre-overload duration;
    /// the overload factor only touches the in-memory adjusted hours.
    #[default]
    Legacy,
    /// The overload factor is applied first, so close time and status
    /// both see the overloaded duration.
    Corrected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First simulated month is the month containing this date.
    pub start_date: NaiveDate,
    /// Inclusive: a month is simulated while its first day is <= end_date.
    pub end_date: NaiveDate,

    pub base_monthly_volume: u32,
    /// Std-dev of the N(1, σ) monthly volume multiplier.
    pub volume_noise_std: f64,

    /// Ordered, not a map: sampling walks the cumulative weights in order.
    pub severities: Vec<SeverityProfile>,

    pub capacity_hours_per_technician: f64,
    pub expected_hours_per_ticket: f64,
    pub load_ratio_cap: f64,
    pub load_impact: f64,

    /// Overload applies when volume > base_monthly_volume * overload_threshold.
    pub overload_threshold: f64,
    pub overload_multiplier: f64,
    pub overload_ordering: OverloadOrdering,

    /// Std-dev of the N(1, σ) per-ticket resolution multiplier.
    pub resolution_noise_std: f64,
    /// Skill divisor is skill_offset + skill_level * skill_weight.
    pub skill_offset: f64,
    pub skill_weight: f64,
    pub min_resolution_hours: f64,
    /// Tickets open between day 1 and this day (00:00) of each month.
    pub open_day_max: u32,

    pub customer_count: usize,
    pub asset_count: usize,
    pub technician_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default(),
            base_monthly_volume: 200,
            volume_noise_std: 0.1,
            severities: default_severities(),
            capacity_hours_per_technician: 140.0,
            expected_hours_per_ticket: 15.0,
            load_ratio_cap: 1.2,
            load_impact: 0.45,
            overload_threshold: 1.15,
            overload_multiplier: 1.4,
            overload_ordering: OverloadOrdering::Legacy,
            resolution_noise_std: 0.35,
            skill_offset: 0.7,
            skill_weight: 0.6,
            min_resolution_hours: 1.0,
            open_day_max: 28,
            customer_count: 50,
            asset_count: 300,
            technician_count: 8,
        }
    }
}

fn default_severities() -> Vec<SeverityProfile> {
    vec![
        SeverityProfile {
            severity: 1,
            weight: 0.50,
            sla_hours: 54,
            resolution_factor: 1.8,
        },
        SeverityProfile {
            severity: 2,
            weight: 0.35,
            sla_hours: 30,
            resolution_factor: 1.2,
        },
        SeverityProfile {
            severity: 3,
            weight: 0.15,
            sla_hours: 10,
            resolution_factor: 0.8,
        },
    ]
}

impl GeneratorConfig {
    /// Load a JSON override file. Missing fields keep their defaults.
    pub fn load(path: &str) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GenResult<()> {
        if self.end_date < self.start_date {
            return Err(GenError::invalid_config(format!(
                "end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }
        if self.severities.is_empty() {
            return Err(GenError::invalid_config("severities table is empty"));
        }
        let total: f64 = self.severities.iter().map(|s| s.weight).sum();
        if self.severities.iter().any(|s| s.weight < 0.0) || (total - 1.0).abs() > 1e-6 {
            return Err(GenError::invalid_config(format!(
                "severity weights must be non-negative and sum to 1.0 (got {total})"
            )));
        }
        for (i, s) in self.severities.iter().enumerate() {
            if !(1..=3).contains(&s.severity) {
                return Err(GenError::invalid_config(format!(
                    "severity {} outside 1..=3",
                    s.severity
                )));
            }
            if s.sla_hours == 0 {
                return Err(GenError::invalid_config(format!(
                    "severity {} has a zero sla_hours",
                    s.severity
                )));
            }
            if self.severities[..i].iter().any(|p| p.severity == s.severity) {
                return Err(GenError::invalid_config(format!(
                    "severity {} listed twice",
                    s.severity
                )));
            }
        }
        if !(self.capacity_hours_per_technician > 0.0) {
            return Err(GenError::invalid_config(
                "capacity_hours_per_technician must be positive",
            ));
        }
        // The floor keeps close_time strictly after open_time.
        if !(self.min_resolution_hours > 0.0) {
            return Err(GenError::invalid_config(format!(
                "min_resolution_hours must be positive (got {})",
                self.min_resolution_hours
            )));
        }
        if !(1..=28).contains(&self.open_day_max) {
            return Err(GenError::invalid_config(format!(
                "open_day_max must be within 1..=28 (got {})",
                self.open_day_max
            )));
        }
        if self.skill_offset + self.skill_weight <= 0.0 {
            return Err(GenError::invalid_config("skill divisor must stay positive"));
        }
        Ok(())
    }

    pub fn severity_profile(&self, severity: Severity) -> Option<&SeverityProfile> {
        self.severities.iter().find(|s| s.severity == severity)
    }

    /// Volume above which a month counts as overloaded.
    pub fn overload_volume(&self) -> f64 {
        self.base_monthly_volume as f64 * self.overload_threshold
    }
}
