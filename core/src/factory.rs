//! Entity factories.
//!
//! RULE: Every table is produced by an EntityFactory.
//! Rows are sampled independently; there is no cross-row or
//! cross-table correlation apart from the asset → customer key.

use crate::{
    calendar::{midnight, random_instant},
    config::GeneratorConfig,
    entity::{Asset, AssetType, Customer, Industry, Technician, Tier},
    error::{GenError, GenResult},
    rng::{RngBank, SimRng, StreamSlot},
    types::CustomerId,
};
use chrono::NaiveDate;

/// Pareto parameters for asset failure weights: support [1, inf).
pub const FAILURE_WEIGHT_MIN: f64 = 1.0;
pub const FAILURE_WEIGHT_ALPHA: f64 = 2.0;

/// The contract every table factory fulfills.
pub trait EntityFactory {
    type Row;

    /// Stable table name, used for logging and file names.
    fn table(&self) -> &'static str;

    /// Produce `count` independently sampled rows.
    fn generate(&self, count: usize, rng: &mut SimRng) -> GenResult<Vec<Self::Row>>;
}

pub struct CustomerFactory;

impl EntityFactory for CustomerFactory {
    type Row = Customer;

    fn table(&self) -> &'static str {
        "customers"
    }

    fn generate(&self, count: usize, rng: &mut SimRng) -> GenResult<Vec<Customer>> {
        let mut rows = Vec::with_capacity(count);
        for i in 0..count {
            let tier = *rng.pick(&Tier::ALL);
            let customer_id = i as CustomerId;
            rows.push(Customer {
                customer_id,
                name: format!("Customer_{customer_id}"),
                industry: *rng.pick(&Industry::ALL),
                tier,
                contract_sla_hours: tier.contract_sla_hours(),
            });
        }
        Ok(rows)
    }
}

pub struct AssetFactory {
    customer_ids: Vec<CustomerId>,
}

impl AssetFactory {
    pub fn new(customers: &[Customer]) -> Self {
        Self {
            customer_ids: customers.iter().map(|c| c.customer_id).collect(),
        }
    }
}

impl EntityFactory for AssetFactory {
    type Row = Asset;

    fn table(&self) -> &'static str {
        "assets"
    }

    fn generate(&self, count: usize, rng: &mut SimRng) -> GenResult<Vec<Asset>> {
        if count > 0 && self.customer_ids.is_empty() {
            return Err(GenError::EmptyTable { table: "customers" });
        }
        let install_from = install_window(2018);
        let install_to = install_window(2023);

        let mut rows = Vec::with_capacity(count);
        for i in 0..count {
            rows.push(Asset {
                asset_id: i as u32,
                customer_id: *rng.pick(&self.customer_ids),
                asset_type: *rng.pick(&AssetType::ALL),
                install_date: random_instant(install_from, install_to, rng),
                criticality: rng.range_inclusive(1, 3) as u8,
                failure_weight: rng.pareto(FAILURE_WEIGHT_MIN, FAILURE_WEIGHT_ALPHA),
            });
        }
        Ok(rows)
    }
}

fn install_window(year: i32) -> chrono::NaiveDateTime {
    midnight(NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default())
}

pub struct TechnicianFactory;

impl EntityFactory for TechnicianFactory {
    type Row = Technician;

    fn table(&self) -> &'static str {
        "technicians"
    }

    fn generate(&self, count: usize, rng: &mut SimRng) -> GenResult<Vec<Technician>> {
        let mut rows = Vec::with_capacity(count);
        for i in 0..count {
            let technician_id = i as u32;
            rows.push(Technician {
                technician_id,
                name: format!("Tech_{technician_id}"),
                skill_level: rng.range_inclusive(1, 3) as u8,
                base_resolution_hours: rng.range_inclusive(6, 24) as u32,
                active: true,
            });
        }
        Ok(rows)
    }
}

/// The three entity tables of one run.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub customers: Vec<Customer>,
    pub assets: Vec<Asset>,
    pub technicians: Vec<Technician>,
}

impl Fleet {
    /// Build every table from its own RNG stream.
    pub fn generate(config: &GeneratorConfig, bank: &RngBank) -> GenResult<Self> {
        let customers = run_factory(
            &CustomerFactory,
            config.customer_count,
            bank,
            StreamSlot::Customers,
        )?;
        let assets = run_factory(
            &AssetFactory::new(&customers),
            config.asset_count,
            bank,
            StreamSlot::Assets,
        )?;
        let technicians = run_factory(
            &TechnicianFactory,
            config.technician_count,
            bank,
            StreamSlot::Technicians,
        )?;
        Ok(Self { customers, assets, technicians })
    }
}

fn run_factory<F: EntityFactory>(
    factory: &F,
    count: usize,
    bank: &RngBank,
    slot: StreamSlot,
) -> GenResult<Vec<F::Row>> {
    let mut rng = bank.for_stream(slot);
    let rows = factory.generate(count, &mut rng)?;
    log::debug!("{}: generated {} rows (stream={})", factory.table(), rows.len(), rng.name);
    Ok(rows)
}
