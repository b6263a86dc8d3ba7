//! Record normalization - split nested records into an id-keyed entity table
//!
//! `{"id": 1, "car": {"id": 33, "make": "Ford"}}` becomes the root
//! `{"id": 1, "carId": 33}` plus the table `{"33": {"id": 33, "make": "Ford"}}`.
//! Nested records at any depth land in the same flat table.

pub mod types;
pub mod normalizer;

pub use types::{EntityId, NormalizeConfig, Normalized};
pub use normalizer::Normalizer;

use crate::error::Result;
use crate::types::Record;

/// Normalize a record with the default configuration (`id` field, `Id` suffix)
pub fn normalize_object(record: &Record) -> Result<Normalized> {
    Normalizer::default().normalize(record)
}
