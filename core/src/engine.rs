//! The ticket simulation engine.
//!
//! PER-MONTH ORDER (fixed, reproduced exactly):
//!   1. Seasonal factor and Gaussian volume for the month.
//!   2. Capacity, expected hours and load ratio.
//!   3. Asset weights compiled into a weighted index.
//!   4. Per ticket: open time, asset, technician, severity,
//!      resolution hours, load scaling, close time, status,
//!      then the overload factor.
//!
//! RULES:
//!   - The engine never mutates the entity tables.
//!   - All randomness flows through the SimRng passed to run().
//!   - Under OverloadOrdering::Legacy the overload factor is applied
//!     after close time and status are fixed, so timestamps carry the
//!     pre-overload duration.

use crate::{
    calendar::{random_instant_in_month, MonthCursor},
    config::{GeneratorConfig, OverloadOrdering},
    entity::{Asset, Technician},
    error::{GenError, GenResult},
    factory::Fleet,
    rng::{RngBank, SimRng, StreamSlot},
    sampling::{pick_severity, AssetSampler},
    seasonal::seasonal_factor,
    ticket::{duration_from_hours, MonthLoad, Ticket, TicketStatus},
};
use chrono::{Datelike, NaiveDate};
use rand_distr::Normal;

/// Everything one pass over the date range produced.
#[derive(Debug, Clone, Default)]
pub struct SimulationRun {
    pub tickets: Vec<Ticket>,
    pub months: Vec<MonthLoad>,
}

/// Entity tables plus the tickets generated from them.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub fleet: Fleet,
    pub run: SimulationRun,
}

impl Dataset {
    /// Build the fleet, then simulate tickets on the tickets stream.
    pub fn generate(config: &GeneratorConfig, bank: &RngBank) -> GenResult<Self> {
        let fleet = Fleet::generate(config, bank)?;
        let engine = TicketEngine::new(config.clone(), &fleet.assets, &fleet.technicians)?;
        let mut rng = bank.for_stream(StreamSlot::Tickets);
        let run = engine.run(&mut rng)?;
        Ok(Self { fleet, run })
    }
}

pub struct TicketEngine<'a> {
    config: GeneratorConfig,
    assets: &'a [Asset],
    technicians: &'a [Technician],
    volume_noise: Normal<f64>,
    resolution_noise: Normal<f64>,
}

impl<'a> TicketEngine<'a> {
    /// Fails fast on an invalid config or an empty input table.
    pub fn new(
        config: GeneratorConfig,
        assets: &'a [Asset],
        technicians: &'a [Technician],
    ) -> GenResult<Self> {
        config.validate()?;
        if assets.is_empty() {
            return Err(GenError::EmptyTable { table: "assets" });
        }
        if technicians.is_empty() {
            return Err(GenError::EmptyTable { table: "technicians" });
        }
        let volume_noise = Normal::new(1.0, config.volume_noise_std)?;
        let resolution_noise = Normal::new(1.0, config.resolution_noise_std)?;
        Ok(Self {
            config,
            assets,
            technicians,
            volume_noise,
            resolution_noise,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Simulate every month in the configured range.
    pub fn run(&self, rng: &mut SimRng) -> GenResult<SimulationRun> {
        let mut run = SimulationRun::default();
        for month in MonthCursor::new(self.config.start_date, self.config.end_date) {
            let (load, tickets) = self.simulate_month(month, rng)?;
            log::info!(
                "month={} volume={} load_ratio={:.3} overloaded={}",
                month.format("%Y-%m"),
                load.volume,
                load.load_ratio,
                load.overloaded
            );
            run.tickets.extend(tickets);
            run.months.push(load);
        }
        log::info!(
            "simulation complete: {} tickets over {} months",
            run.tickets.len(),
            run.months.len()
        );
        Ok(run)
    }

    /// Generate one month of tickets. `month` is the first day of the month.
    pub fn simulate_month(
        &self,
        month: NaiveDate,
        rng: &mut SimRng,
    ) -> GenResult<(MonthLoad, Vec<Ticket>)> {
        let factor = seasonal_factor(month.month());
        let noise = rng.gaussian(&self.volume_noise);
        let raw = self.config.base_monthly_volume as f64 * factor * noise;
        let volume = monthly_volume(raw);
        if volume == 0 {
            log::warn!("month={} degenerate volume {raw:.2}; no tickets", month.format("%Y-%m"));
        }

        // Capacity ignores the active flag.
        let capacity_hours =
            self.technicians.len() as f64 * self.config.capacity_hours_per_technician;
        let expected_hours = volume as f64 * self.config.expected_hours_per_ticket;
        let load_ratio = expected_hours / capacity_hours;
        let overloaded = volume as f64 > self.config.overload_volume();

        let load = MonthLoad {
            month,
            seasonal_factor: factor,
            volume,
            capacity_hours,
            expected_hours,
            load_ratio,
            overloaded,
        };
        if volume == 0 {
            return Ok((load, Vec::new()));
        }

        let sampler = AssetSampler::new(self.assets)?;
        let mut tickets = Vec::with_capacity(volume);
        for _ in 0..volume {
            tickets.push(self.create_ticket(month, &load, &sampler, rng));
        }
        Ok((load, tickets))
    }

    fn create_ticket(
        &self,
        month: NaiveDate,
        load: &MonthLoad,
        sampler: &AssetSampler,
        rng: &mut SimRng,
    ) -> Ticket {
        let cfg = &self.config;

        let open_time = random_instant_in_month(month, cfg.open_day_max, rng);
        let asset = &self.assets[sampler.sample(rng)];
        let tech = rng.pick(self.technicians);
        let profile = pick_severity(&cfg.severities, rng);

        let skill_divisor = cfg.skill_offset + tech.skill_level as f64 * cfg.skill_weight;
        let noise = rng.gaussian(&self.resolution_noise);
        let mut hours =
            tech.base_resolution_hours as f64 * profile.resolution_factor / skill_divisor * noise;
        hours *= 1.0 + load.load_ratio.min(cfg.load_ratio_cap) * cfg.load_impact;

        let overload_factor = if load.overloaded { cfg.overload_multiplier } else { 1.0 };
        let adjusted_hours = hours * overload_factor;

        // Legacy: timestamps and status see the pre-overload duration.
        let decided_hours = match cfg.overload_ordering {
            OverloadOrdering::Legacy => hours,
            OverloadOrdering::Corrected => adjusted_hours,
        };
        let floored_hours = decided_hours.max(cfg.min_resolution_hours);
        let close_time = open_time + duration_from_hours(floored_hours);
        let status = TicketStatus::from_sla(decided_hours, profile.sla_hours);

        Ticket {
            ticket_id: uuid::Builder::from_random_bytes(rng.bytes16()).into_uuid().to_string(),
            asset_id: asset.asset_id,
            open_time,
            severity: profile.severity,
            assigned_technician_id: tech.technician_id,
            sla_hours: profile.sla_hours,
            close_time,
            status,
            computed_hours: hours,
            adjusted_hours,
        }
    }
}

/// Truncate a raw Gaussian-scaled volume; non-positive means no tickets.
pub fn monthly_volume(raw: f64) -> usize {
    if raw.is_finite() && raw > 0.0 {
        raw.trunc() as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_truncates_toward_zero() {
        assert_eq!(monthly_volume(260.9), 260);
        assert_eq!(monthly_volume(0.99), 0);
    }

    #[test]
    fn degenerate_volume_is_zero() {
        assert_eq!(monthly_volume(0.0), 0);
        assert_eq!(monthly_volume(-17.3), 0);
        assert_eq!(monthly_volume(f64::NAN), 0);
    }
}
