use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Number of ordinal price tiers a location can fall into.
pub const TIER_COUNT: usize = 6;

/// Historical mean rent per location plus the fixed bin edges that turn a
/// mean rent into a price tier.
///
/// Bins are right-closed: a rent lands in tier `i` when
/// `edges[i - 1] < rent <= edges[i]`. The first bin also includes its left
/// edge, so a rent exactly equal to `edges[0]` is tier 1. Edges are fixed
/// when the table is built and never change afterwards; a model trained
/// against one edge sequence is only valid with that same sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTierTable {
    edges: Vec<f64>,
    mean_rents: BTreeMap<String, f64>,
}

impl LocationTierTable {
    /// Build a table from explicit edges (`TIER_COUNT + 1` non-decreasing
    /// values) and per-location mean rents.
    pub fn new(edges: Vec<f64>, mean_rents: BTreeMap<String, f64>) -> anyhow::Result<Self> {
        ensure!(
            edges.len() == TIER_COUNT + 1,
            "expected {} bin edges, got {}",
            TIER_COUNT + 1,
            edges.len()
        );
        ensure!(
            edges.windows(2).all(|w| w[0] <= w[1]),
            "bin edges must be non-decreasing"
        );
        ensure!(!mean_rents.is_empty(), "mean rent table is empty");
        Ok(Self { edges, mean_rents })
    }

    /// Training-time construction: edges are the k/6 quantiles (linear
    /// interpolation) of the full set of per-location mean rents, so each
    /// tier holds roughly the same number of locations.
    pub fn from_mean_rents(mean_rents: BTreeMap<String, f64>) -> anyhow::Result<Self> {
        ensure!(
            mean_rents.len() >= 2,
            "need at least two locations to derive tiers, got {}",
            mean_rents.len()
        );
        let mut rents: Vec<f64> = mean_rents.values().copied().collect();
        rents.sort_by(|a, b| a.total_cmp(b));

        let edges: Vec<f64> = (0..=TIER_COUNT)
            .map(|k| quantile(&rents, k as f64 / TIER_COUNT as f64))
            .collect();
        Self::new(edges, mean_rents)
    }

    /// Price tier for a location, in `1..=TIER_COUNT`. Locations outside
    /// the historical table have no tier and fail explicitly.
    pub fn tier(&self, location: &str) -> Result<u8, EncodeError> {
        let rent = self
            .mean_rents
            .get(location)
            .ok_or_else(|| EncodeError::LocationNotFound(location.to_string()))?;
        Ok(self.bin_of(*rent))
    }

    fn bin_of(&self, rent: f64) -> u8 {
        for i in 1..=TIER_COUNT {
            if rent <= self.edges[i] {
                return i as u8;
            }
        }
        // Table construction keeps every rent within the edge range; this
        // only absorbs float wobble at the top edge.
        TIER_COUNT as u8
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn mean_rent(&self, location: &str) -> Option<f64> {
        self.mean_rents.get(location).copied()
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.mean_rents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mean_rents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean_rents.is_empty()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("writing tier table to {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading tier table from {}", path.as_ref().display()))?;
        let table: Self = serde_json::from_str(&json)?;
        // Re-validate: the artifact may have been edited by hand.
        Self::new(table.edges, table.mean_rents)
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
