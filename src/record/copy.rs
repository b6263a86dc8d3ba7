use crate::types::{KeyValuePair, Record};

/// Copy a record's top-level entries into a new record
pub fn clone_object(record: &Record) -> Record {
    record.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Combine two records into a new one; on key collision `second` wins
///
/// Colliding keys stay at their position in `first`. Keys only present in
/// `second` are appended in its order.
pub fn merge_objects(first: &Record, second: &Record) -> Record {
    let mut merged = clone_object(first);
    for (key, value) in second {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Return a copy of `record` with `key` set to `value`
pub fn set_property(record: &Record, (key, value): KeyValuePair) -> Record {
    let mut updated = clone_object(record);
    updated.insert(key, value);
    updated
}
