//! Fleet entity rows: customers, assets and technicians.
//!
//! All three tables are generated once per run and never mutated.

use crate::types::{AssetId, CustomerId, TechnicianId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Manufacturing,
    Retail,
    Energy,
}

impl Industry {
    pub const ALL: [Industry; 3] = [Self::Manufacturing, Self::Retail, Self::Energy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Energy => "Energy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::A, Self::B, Self::C];

    /// Contractual SLA promised to customers of this tier.
    pub fn contract_sla_hours(&self) -> u32 {
        match self {
            Self::A => 24,
            Self::B => 48,
            Self::C => 72,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Pump,
    Generator,
    Compressor,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [Self::Pump, Self::Generator, Self::Compressor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pump => "Pump",
            Self::Generator => "Generator",
            Self::Compressor => "Compressor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub industry: Industry,
    pub tier: Tier,
    pub contract_sla_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: AssetId,
    pub customer_id: CustomerId,
    pub asset_type: AssetType,
    pub install_date: NaiveDateTime,
    pub criticality: u8, // 1..=3
    /// Relative ticket likelihood (>= 1, heavy tailed). Not a probability.
    pub failure_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub technician_id: TechnicianId,
    pub name: String,
    pub skill_level: u8, // 1..=3
    pub base_resolution_hours: u32,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_sla_lookup() {
        assert_eq!(Tier::A.contract_sla_hours(), 24);
        assert_eq!(Tier::B.contract_sla_hours(), 48);
        assert_eq!(Tier::C.contract_sla_hours(), 72);
    }
}
