//! Read-only views of a farm for display and the JSON runner mode.
//!
//! A snapshot is never read back into a farm.

use crate::{
    error::FarmResult,
    farm::FarmState,
    types::{CropId, Day, Gold},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlotView {
    pub crop:            CropId,
    pub growth_stage:    u32,
    pub required_growth: u32,
    pub ready:           bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StockLine {
    pub crop:  CropId,
    pub count: u32,
}

/// Idempotence checks compare snapshots, so the event log is left out.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FarmSnapshot {
    pub day:            Day,
    pub gold:           Gold,
    pub plot_capacity:  u32,
    pub plots_occupied: usize,
    pub next_plot_cost: Gold,
    pub plots:          Vec<PlotView>,
    /// Non-zero counts only, in catalog order.
    pub seeds:          Vec<StockLine>,
    pub crops:          Vec<StockLine>,
}

impl FarmSnapshot {
    pub fn capture(farm: &FarmState) -> Self {
        let plots = farm
            .plots()
            .iter()
            .map(|p| PlotView {
                crop:            p.crop_type().to_string(),
                growth_stage:    p.growth_stage(),
                required_growth: p.required_growth(),
                ready:           p.is_ready(),
            })
            .collect();

        let seeds = stock_lines(farm, |crop| farm.inventory().seeds(crop));
        let crops = stock_lines(farm, |crop| farm.inventory().crops(crop));

        Self {
            day:            farm.day(),
            gold:           farm.gold(),
            plot_capacity:  farm.plot_capacity(),
            plots_occupied: farm.plots().len(),
            next_plot_cost: farm.next_plot_cost(),
            plots,
            seeds,
            crops,
        }
    }

    pub fn to_json(&self) -> FarmResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn stock_lines(farm: &FarmState, count_of: impl Fn(&str) -> u32) -> Vec<StockLine> {
    farm.catalog()
        .iter()
        .filter_map(|spec| {
            let count = count_of(&spec.id);
            (count > 0).then(|| StockLine { crop: spec.id.clone(), count })
        })
        .collect()
}
