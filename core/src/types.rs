//! Shared primitive types used across the farm.

/// One simulated day. Every growing plot advances one stage per day.
pub type Day = u64;

/// A canonical (trimmed, lowercase) crop identifier: a catalog key.
pub type CropId = String;

/// Gold balances, prices and costs. Always non-negative.
pub type Gold = u64;
