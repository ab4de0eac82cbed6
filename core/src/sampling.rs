//! Discrete weighted choice.
//!
//! Weight tables are compiled once into a cumulative index and then
//! drawn from many times; nothing is re-normalized per draw.

use crate::{
    config::SeverityProfile,
    entity::Asset,
    error::{GenError, GenResult},
    rng::SimRng,
};
use rand::distributions::{Distribution, WeightedIndex};

/// Relative sampling weight of each asset: failure_weight / Σ failure_weight.
pub fn relative_weights(assets: &[Asset]) -> Vec<f64> {
    let total: f64 = assets.iter().map(|a| a.failure_weight).sum();
    assets.iter().map(|a| a.failure_weight / total).collect()
}

/// Weighted draw over asset positions, with replacement.
pub struct AssetSampler {
    index: WeightedIndex<f64>,
}

impl AssetSampler {
    pub fn new(assets: &[Asset]) -> GenResult<Self> {
        if assets.is_empty() {
            return Err(GenError::EmptyTable { table: "assets" });
        }
        let index = WeightedIndex::new(relative_weights(assets))?;
        Ok(Self { index })
    }

    /// Position of the chosen asset in the table passed to `new`.
    pub fn sample(&self, rng: &mut SimRng) -> usize {
        self.index.sample(rng)
    }
}

/// Cumulative walk over the ordered severity table.
pub fn pick_severity<'a>(profiles: &'a [SeverityProfile], rng: &mut SimRng) -> &'a SeverityProfile {
    let roll = rng.next_f64();
    let mut cumulative = 0.0;
    for profile in profiles {
        cumulative += profile.weight;
        if roll < cumulative {
            return profile;
        }
    }
    // Rounding can leave the cumulative sum just under 1.0.
    &profiles[profiles.len() - 1]
}
