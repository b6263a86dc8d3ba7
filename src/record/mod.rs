//! Record transforms - copy, convert and query flat key-value records
//!
//! Every function here leaves its borrowed inputs untouched and returns a
//! freshly built record or sequence.

pub mod copy;
pub mod convert;
pub mod query;

pub use copy::{clone_object, merge_objects, set_property};
pub use convert::{array_to_object, array_to_object_deep, pairs_from_value, to_array};
pub use query::{filter_object, has_valid_property};
