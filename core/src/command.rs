use crate::types::Day;
use serde::{Deserialize, Serialize};

/// All player-issued commands. Crop ids may be in any case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum FarmCommand {
    // ── Plots ─────────────────────────────────────
    Plant { crop: String },
    Advance { days: Day },
    Harvest { crop: String },
    HarvestAll,

    // ── Shop ──────────────────────────────────────
    BuySeeds { crop: String, qty: u32 },
    SellCrops { crop: String, qty: u32 },
    BuyPlot,
}
