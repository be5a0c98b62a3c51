//! Crop catalog: the fixed price and growth table.
//!
//! The catalog is built once, validated, and handed to the farm.
//! Nothing mutates it afterwards. Lookups are case-insensitive:
//! every id is trimmed and lowercased before it is used as a key.

use crate::{
    error::{FarmError, FarmResult},
    types::CropId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropSpec {
    pub id:         CropId,
    pub seed_cost:  u32,
    pub sell_price: u32,
    /// Days from planting to harvest. Always at least 1.
    pub grow_time:  u32,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    crops: Vec<CropSpec>,
}

/// (id, seed_cost, sell_price, grow_time)
const STANDARD_CROPS: &[(&str, u32, u32, u32)] = &[
    ("pepper",     2,  5,  5),
    ("carrot",     1,  3,  3),
    ("pea",        2,  4,  4),
    ("cucumber",   3,  6,  5),
    ("eggplant",   3,  6,  6),
    ("radish",     1,  3,  3),
    ("onion",      2,  4,  4),
    ("hops",       3,  7,  6),
    ("potato",     2,  5,  5),
    ("tomato",     3,  6,  6),
    ("leek",       2,  4,  4),
    ("watermelon", 5, 10,  8),
    ("corn",       4,  8,  7),
    ("cabbage",    3,  7,  5),
    ("pine",       6, 12, 10),
    ("pumpkin",    5, 11,  9),
];

/// Canonical form of a crop id as typed by a player.
pub fn normalize_id(raw: &str) -> CropId {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct CropCatalog {
    /// Insertion order is display order.
    crops: Vec<CropSpec>,
    index: HashMap<CropId, usize>,
}

impl CropCatalog {
    /// The built-in sixteen-crop table.
    pub fn standard() -> Self {
        let crops = STANDARD_CROPS
            .iter()
            .map(|&(id, seed_cost, sell_price, grow_time)| CropSpec {
                id: id.to_string(),
                seed_cost,
                sell_price,
                grow_time,
            })
            .collect();
        Self::assemble(crops)
    }

    /// Build a catalog from explicit entries, rejecting empty tables,
    /// duplicate ids and zero growth times.
    pub fn from_specs(specs: Vec<CropSpec>) -> FarmResult<Self> {
        if specs.is_empty() {
            return Err(FarmError::InvalidCatalog("catalog has no crops".into()));
        }

        let mut crops: Vec<CropSpec> = Vec::with_capacity(specs.len());
        for mut spec in specs {
            spec.id = normalize_id(&spec.id);
            if spec.id.is_empty() {
                return Err(FarmError::InvalidCatalog("crop with an empty id".into()));
            }
            if spec.grow_time == 0 {
                return Err(FarmError::InvalidCatalog(format!(
                    "{} must take at least one day to grow",
                    spec.id
                )));
            }
            if crops.iter().any(|c| c.id == spec.id) {
                return Err(FarmError::InvalidCatalog(format!(
                    "duplicate crop id: {}",
                    spec.id
                )));
            }
            crops.push(spec);
        }

        Ok(Self::assemble(crops))
    }

    /// Load a catalog from a JSON file of the form `{ "crops": [...] }`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        let catalog = Self::from_specs(file.crops)?;
        log::info!("catalog: loaded {} crops from {path}", catalog.len());
        Ok(catalog)
    }

    fn assemble(crops: Vec<CropSpec>) -> Self {
        let index = crops
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { crops, index }
    }

    /// Resolve a player-typed id to its catalog key.
    pub fn normalize(&self, raw: &str) -> FarmResult<CropId> {
        self.lookup(raw).map(|spec| spec.id.clone())
    }

    pub fn lookup(&self, raw: &str) -> FarmResult<&CropSpec> {
        let id = normalize_id(raw);
        match self.index.get(&id) {
            Some(&i) => Ok(&self.crops[i]),
            None => Err(FarmError::UnknownCrop { crop: id }),
        }
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.index.contains_key(&normalize_id(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropSpec> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
