//! Farm events: one per successful operation.
//!
//! Rejected operations emit nothing. The log lives in memory only.

use crate::types::{CropId, Day, Gold};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variants are appended, never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FarmEvent {
    // ── Plot lifecycle ─────────────────────────────
    Planted {
        day:        Day,
        crop:       CropId,
        seeds_left: u32,
    },
    TimeAdvanced {
        day:         Day,
        days:        Day,
        newly_ready: u32,
    },
    Harvested {
        day:    Day,
        crop:   CropId,
        stored: u32,
    },
    /// Informational: the harvest found nothing ripe. State is unchanged.
    NothingReady {
        day:  Day,
        crop: CropId,
    },
    HarvestedAll {
        day:   Day,
        count: u32,
    },

    // ── Economy ────────────────────────────────────
    SeedsBought {
        day:       Day,
        crop:      CropId,
        qty:       u32,
        cost:      Gold,
        gold_left: Gold,
    },
    CropsSold {
        day:      Day,
        crop:     CropId,
        qty:      u32,
        revenue:  Gold,
        gold_now: Gold,
    },
    PlotBought {
        day:       Day,
        cost:      Gold,
        capacity:  u32,
        next_cost: Gold,
    },
}

impl FarmEvent {
    /// Stable snake_case name of the variant.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Planted { .. }      => "planted",
            Self::TimeAdvanced { .. } => "time_advanced",
            Self::Harvested { .. }    => "harvested",
            Self::NothingReady { .. } => "nothing_ready",
            Self::HarvestedAll { .. } => "harvested_all",
            Self::SeedsBought { .. }  => "seeds_bought",
            Self::CropsSold { .. }    => "crops_sold",
            Self::PlotBought { .. }   => "plot_bought",
        }
    }

    pub fn day(&self) -> Day {
        match self {
            Self::Planted { day, .. }
            | Self::TimeAdvanced { day, .. }
            | Self::Harvested { day, .. }
            | Self::NothingReady { day, .. }
            | Self::HarvestedAll { day, .. }
            | Self::SeedsBought { day, .. }
            | Self::CropsSold { day, .. }
            | Self::PlotBought { day, .. } => *day,
        }
    }
}

impl fmt::Display for FarmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planted { crop, seeds_left, .. } => {
                write!(f, "Planted {crop}. Seeds left: {seeds_left}")
            }
            Self::TimeAdvanced { days, newly_ready, .. } => {
                write!(f, "Time passed: {days} day(s).")?;
                if *newly_ready > 0 {
                    write!(f, " {newly_ready} plot(s) ready to harvest.")?;
                }
                Ok(())
            }
            Self::Harvested { crop, stored, .. } => {
                write!(f, "Harvested 1 {crop}. Stored: {stored}")
            }
            Self::NothingReady { crop, .. } => write!(f, "No ready {crop} to harvest."),
            Self::HarvestedAll { count: 0, .. } => write!(f, "No crops ready."),
            Self::HarvestedAll { count, .. } => write!(f, "Harvested {count} crops."),
            Self::SeedsBought { crop, qty, cost, gold_left, .. } => write!(
                f,
                "Bought {qty} {crop} seeds for {cost} gold. Gold left: {gold_left}"
            ),
            Self::CropsSold { crop, qty, revenue, gold_now, .. } => write!(
                f,
                "Sold {qty} {crop} for {revenue} gold. Gold now: {gold_now}"
            ),
            Self::PlotBought { cost, capacity, next_cost, .. } => write!(
                f,
                "Bought a plot for {cost} gold. Capacity: {capacity}. Next plot: {next_cost} gold"
            ),
        }
    }
}
