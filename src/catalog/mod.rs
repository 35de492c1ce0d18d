//! Crop catalog domain models and queries
//!
//! This module contains the static catalog data structures and their accessors.
//! It is split into submodules:
//! - `crop`: Region, Crop and ActivityTemplate records, duration descriptors
//! - `catalog_data`: The validated, immutable catalog container
//! - `queries`: Read-only lookups used by the selection form
//! - `serde_impl`: Serialization/deserialization with load-time validation

mod catalog_data;
mod crop;
mod queries;
mod serde_impl;

// Re-export all public types
pub use catalog_data::{CATALOG_FORMAT_VERSION, Catalog};
pub use crop::{ActivityDuration, ActivityTemplate, Crop, CropSummary, DurationUnit, Region};
