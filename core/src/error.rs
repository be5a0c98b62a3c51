use crate::types::{CropId, Day, Gold};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    // ── Player-facing rejections ───────────────────
    #[error("'{crop}' is not a valid crop")]
    UnknownCrop { crop: String },

    #[error("No {crop} seeds left. Buy some first")]
    NoSeeds { crop: CropId },

    #[error("All {capacity} plots are in use. Harvest or buy a plot first")]
    NoCapacity { capacity: u32 },

    #[error("Cannot plant more {crop}: max {limit} plots")]
    PerCropLimitReached { crop: CropId, limit: u32 },

    #[error("Not enough gold: need {needed}, you have {available}")]
    InsufficientGold { needed: Gold, available: Gold },

    #[error("Not enough {crop} to sell: requested {requested}, you have {available}")]
    InsufficientInventory {
        crop:      CropId,
        requested: u32,
        available: u32,
    },

    #[error("Time must advance by at least one day, got {days}")]
    InvalidDuration { days: Day },

    #[error("Quantity must be at least 1, got {qty}")]
    InvalidQuantity { qty: u32 },

    #[error("Gold balance would overflow")]
    GoldOverflow,

    #[error("{crop} stock would overflow")]
    InventoryOverflow { crop: CropId },

    // ── Setup failures ─────────────────────────────
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FarmError {
    /// True for rejections of a single farm operation. The farm is left
    /// untouched and the caller may simply carry on.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::InvalidCatalog(_) | Self::InvalidConfig(_) | Self::Serialization(_)
        )
    }
}

pub type FarmResult<T> = Result<T, FarmError>;
