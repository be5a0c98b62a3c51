//! Seed and crop stock.
//!
//! Mutators are crate-private: only the farm aggregate may move stock,
//! and it always checks before it mutates.

use crate::types::CropId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    seeds: BTreeMap<CropId, u32>,
    crops: BTreeMap<CropId, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeds(&self, crop: &str) -> u32 {
        self.seeds.get(crop).copied().unwrap_or(0)
    }

    pub fn crops(&self, crop: &str) -> u32 {
        self.crops.get(crop).copied().unwrap_or(0)
    }

    pub(crate) fn add_seeds(&mut self, crop: &str, qty: u32) -> u32 {
        let count = self.seeds.entry(crop.to_string()).or_insert(0);
        *count += qty;
        *count
    }

    /// Caller guarantees at least one seed is in stock.
    pub(crate) fn take_seed(&mut self, crop: &str) -> u32 {
        let count = self.seeds.entry(crop.to_string()).or_insert(0);
        *count -= 1;
        *count
    }

    /// `None` when the count is already at `u32::MAX`. Stock is unchanged then.
    pub(crate) fn add_crop(&mut self, crop: &str) -> Option<u32> {
        let count = self.crops.entry(crop.to_string()).or_insert(0);
        *count = count.checked_add(1)?;
        Some(*count)
    }

    #[cfg(test)]
    pub(crate) fn set_crops(&mut self, crop: &str, qty: u32) {
        self.crops.insert(crop.to_string(), qty);
    }

    /// Caller guarantees at least `qty` units are in stock.
    pub(crate) fn remove_crops(&mut self, crop: &str, qty: u32) -> u32 {
        let count = self.crops.entry(crop.to_string()).or_insert(0);
        *count -= qty;
        *count
    }
}
