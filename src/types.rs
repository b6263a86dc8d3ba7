use serde_json::{Map, Value};

/// A mapping from string keys to JSON values, iterated in insertion order.
pub type Record = Map<String, Value>;

/// A single `(key, value)` entry, the element type of pair sequences.
pub type KeyValuePair = (String, Value);

/// Returns true when `value` is a record (a JSON object).
///
/// Arrays and null are not records.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns true when `value` is a two-element array whose first element is a string.
pub(crate) fn is_pair(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.len() == 2 && items[0].is_string(),
        _ => false,
    }
}
