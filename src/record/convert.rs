use crate::error::{ReshapeError, Result};
use crate::types::{is_pair, KeyValuePair, Record};
use serde_json::{Map, Value};
use tracing::debug;

/// Turn a record of records into a sequence, tagging each inner record with its key
///
/// `{"a": {"name": "X"}}` becomes `[{"key": "a", "name": "X"}]`. The `key`
/// field is written first, so an inner field literally named `key` replaces it.
///
/// # Errors
/// Returns [`ReshapeError::NotARecord`] if any value is not a record.
pub fn to_array(record: &Record) -> Result<Vec<Record>> {
    record
        .iter()
        .map(|(key, value)| {
            let Value::Object(inner) = value else {
                debug!(key = %key, "to_array: value is not a record");
                return Err(ReshapeError::NotARecord { key: key.clone() });
            };

            let mut item = Map::with_capacity(inner.len() + 1);
            item.insert("key".to_string(), Value::String(key.clone()));
            for (k, v) in inner {
                item.insert(k.clone(), v.clone());
            }
            Ok(item)
        })
        .collect()
}

/// Fold key-value pairs into a record, later pairs overwriting earlier ones
pub fn array_to_object<I>(pairs: I) -> Record
where
    I: IntoIterator<Item = KeyValuePair>,
{
    pairs.into_iter().collect()
}

/// Like [`array_to_object`], but values that are themselves pair sequences
/// become nested records
///
/// A JSON array counts as a pair sequence when every element is a
/// `[string, value]` array. Other arrays are kept as they are. An empty array
/// becomes an empty record.
pub fn array_to_object_deep<I>(pairs: I) -> Record
where
    I: IntoIterator<Item = KeyValuePair>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key, deepen(value)))
        .collect()
}

fn deepen(value: Value) -> Value {
    match value {
        Value::Array(items) if items.iter().all(is_pair) => {
            Value::Object(array_to_object_deep(items.into_iter().filter_map(into_pair)))
        }
        other => other,
    }
}

fn into_pair(value: Value) -> Option<KeyValuePair> {
    let Value::Array(items) = value else {
        return None;
    };
    let mut items = items.into_iter();
    match (items.next(), items.next(), items.next()) {
        (Some(Value::String(key)), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

/// Read the JSON form `[["name", "John"], ["age", 22]]` into typed pairs
///
/// # Errors
/// - [`ReshapeError::NotASequence`] if `value` is not an array
/// - [`ReshapeError::MalformedPair`] if an element is not a `[string, value]` pair
pub fn pairs_from_value(value: &Value) -> Result<Vec<KeyValuePair>> {
    let Value::Array(items) = value else {
        return Err(ReshapeError::NotASequence);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            into_pair(item.clone()).ok_or_else(|| {
                debug!(index, "pairs_from_value: malformed pair");
                ReshapeError::MalformedPair { index }
            })
        })
        .collect()
}
