//! Harvest configuration.
//!
//! `HarvestConfig` carries every tunable of a run — the category and
//! locality vocabularies, delays, bounded-wait timeouts, the listings
//! cap, and the summarization credential — behind a type-safe builder
//! with sensible defaults.

pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

pub use builder::{HarvestConfigBuilder, WithSearchUrl, WithStorageDir};
pub use types::HarvestConfig;
