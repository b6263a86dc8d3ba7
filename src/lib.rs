//! # Reshape - JSON Record and Tree Transforms
//!
//! Small, pure functions that clone, merge, filter and reshape JSON records
//! (`serde_json::Map`) and `{ value, children }` trees.
//!
//! ## Modules
//!
//! - **record**: copy, convert and query flat records
//! - **cache**: memoized lookups over a caller-owned cache
//! - **normalize**: split nested records into an id-keyed entity table
//! - **tree**: depth and leaf counts for shallow trees
//!
//! ## Quick Start
//!
//! ### Record transforms
//!
//! ```rust
//! use reshape::{filter_object, merge_objects, Record};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let person: Record = serde_json::from_value(json!({"name": "Kate", "age": 31}))?;
//! let extra: Record = serde_json::from_value(json!({"age": 32, "city": "Rome"}))?;
//!
//! let merged = merge_objects(&person, &extra);
//! let numbers = filter_object(&merged, |_, v| v.is_number());
//!
//! assert_eq!(merged["age"], 32);
//! assert_eq!(numbers.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Normalization
//!
//! ```rust
//! use reshape::{normalize_object, Record};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let user: Record = serde_json::from_value(json!({
//!     "id": 1,
//!     "name": "John",
//!     "car": {"id": 33, "manufacturer": "Ford"}
//! }))?;
//!
//! let normalized = normalize_object(&user)?;
//!
//! assert_eq!(normalized.root["carId"], 33);
//! assert_eq!(normalized.entities["33"]["manufacturer"], "Ford");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod normalize;
pub mod record;
pub mod tree;
pub mod types;

// Re-export commonly used types for convenience
pub use cache::{get_cached_value, get_cached_value_sync};
pub use error::{ReshapeError, Result};
pub use normalize::{normalize_object, EntityId, NormalizeConfig, Normalized, Normalizer};
pub use record::{
    array_to_object, array_to_object_deep, clone_object, filter_object, has_valid_property,
    merge_objects, pairs_from_value, set_property, to_array,
};
pub use tree::{count_tree_leaf_nodes, get_tree_depth, TreeNode};
pub use types::{is_record, KeyValuePair, Record};
