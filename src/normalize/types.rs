use crate::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The key an extracted entity is stored under in the entity table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    /// Stringify an id value the way it would appear as an object key
    ///
    /// Strings are used verbatim; numbers and booleans use their JSON text,
    /// except that a whole-valued float like `1.0` is written as `1`.
    /// Null, arrays and objects cannot identify an entity.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(EntityId::new(s.clone())),
            Value::Number(n) => Some(EntityId::new(number_key(n))),
            Value::Bool(b) => Some(EntityId::new(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn number_key(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Configuration for normalization
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Field holding each nested record's identifier
    pub id_field: String,

    /// Appended to a field name to form its reference column, e.g. "car" -> "carId"
    pub reference_suffix: String,

    /// Fields to always keep inline (never extract as entities)
    pub scalar_fields: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            id_field: String::from("id"),
            reference_suffix: String::from("Id"),
            scalar_fields: vec![],
        }
    }
}

/// The result of normalizing a record
///
/// Serializes as the two-element array `[root, entities]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "(Record, Record)", from = "(Record, Record)")]
pub struct Normalized {
    /// The input record with nested records replaced by id references
    pub root: Record,

    /// Every extracted record, normalized, keyed by its stringified id
    pub entities: Record,
}

impl From<Normalized> for (Record, Record) {
    fn from(normalized: Normalized) -> Self {
        (normalized.root, normalized.entities)
    }
}

impl From<(Record, Record)> for Normalized {
    fn from((root, entities): (Record, Record)) -> Self {
        Normalized { root, entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_from_value() {
        assert_eq!(EntityId::from_value(&json!(33)), Some(EntityId::new("33")));
        assert_eq!(EntityId::from_value(&json!("ab-1")), Some(EntityId::new("ab-1")));
        assert_eq!(EntityId::from_value(&json!(1.0)), Some(EntityId::new("1")));
        assert_eq!(EntityId::from_value(&json!(-4.0)), Some(EntityId::new("-4")));
        assert_eq!(EntityId::from_value(&json!(2.5)), Some(EntityId::new("2.5")));
        assert_eq!(EntityId::from_value(&json!(true)), Some(EntityId::new("true")));
        assert_eq!(EntityId::from_value(&json!(null)), None);
        assert_eq!(EntityId::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn test_normalized_serializes_as_pair() {
        let normalized = Normalized {
            root: serde_json::from_value(json!({"id": 1, "carId": 33})).unwrap(),
            entities: serde_json::from_value(json!({"33": {"id": 33}})).unwrap(),
        };

        let value = serde_json::to_value(&normalized).unwrap();
        assert_eq!(value, json!([{"id": 1, "carId": 33}, {"33": {"id": 33}}]));

        let back: Normalized = serde_json::from_value(value).unwrap();
        assert_eq!(back, normalized);
    }
}
