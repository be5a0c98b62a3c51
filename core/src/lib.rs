//! farm-core: the plot, stock and gold state machine of an idle farm.
//!
//! A caller builds a [`farm::FarmState`] from a [`catalog::CropCatalog`]
//! and a [`config::FarmConfig`], then drives it with the plot and shop
//! operations (or with [`command::FarmCommand`]s through `apply`).

pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod farm;
pub mod inventory;
pub mod plot;
pub mod snapshot;
pub mod types;
