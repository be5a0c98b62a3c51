use crate::{
    catalog::{normalize_id, CropCatalog},
    error::{FarmError, FarmResult},
    types::{CropId, Gold},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Most plots of a single crop that may grow at the same time.
pub const MAX_PLOTS_PER_CROP: u32 = 5;

/// Starting conditions and shop rules for a new farm.
///
/// Every field has a default, so a config file only needs to name
/// what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FarmConfig {
    pub starting_gold:          Gold,
    pub starting_plot_capacity: u32,
    pub max_plots_per_crop:     u32,
    /// Price of the first extra plot.
    pub plot_base_cost:         Gold,
    /// Added to the plot price after every purchase.
    pub plot_cost_increment:    Gold,
    pub starting_seeds:         BTreeMap<CropId, u32>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            starting_gold:          20,
            starting_plot_capacity: 5,
            max_plots_per_crop:     MAX_PLOTS_PER_CROP,
            plot_base_cost:         25,
            plot_cost_increment:    15,
            starting_seeds:         BTreeMap::from([("pepper".to_string(), 3)]),
        }
    }
}

impl FarmConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: FarmConfig = serde_json::from_str(&content)?;
        log::info!("config: loaded farm config from {path}");
        Ok(config)
    }

    /// Defaults with an empty seed bag, so tests start from a clean inventory.
    /// In the binary, use FarmConfig::default() or FarmConfig::load().
    pub fn default_test() -> Self {
        Self {
            starting_seeds: BTreeMap::new(),
            ..Self::default()
        }
    }

    pub fn validate(&self, catalog: &CropCatalog) -> FarmResult<()> {
        if self.max_plots_per_crop == 0 {
            return Err(FarmError::InvalidConfig(
                "max_plots_per_crop must be at least 1".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for crop in self.starting_seeds.keys() {
            let id = normalize_id(crop);
            if !catalog.contains(&id) {
                return Err(FarmError::InvalidConfig(format!(
                    "starting seeds name unknown crop '{id}'"
                )));
            }
            if !seen.insert(id.clone()) {
                return Err(FarmError::InvalidConfig(format!(
                    "starting seeds name '{id}' more than once"
                )));
            }
        }
        Ok(())
    }
}
