use crate::types::Record;
use serde_json::Value;

/// Keep only the entries for which `predicate(key, value)` holds, in order
pub fn filter_object<P>(record: &Record, mut predicate: P) -> Record
where
    P: FnMut(&str, &Value) -> bool,
{
    record
        .iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// True if any entry satisfies `predicate(key, value)`; stops at the first match
pub fn has_valid_property<P>(record: &Record, mut predicate: P) -> bool
where
    P: FnMut(&str, &Value) -> bool,
{
    record.iter().any(|(k, v)| predicate(k, v))
}
