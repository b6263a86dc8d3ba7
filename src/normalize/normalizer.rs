use crate::error::{ReshapeError, Result};
use crate::normalize::types::{EntityId, NormalizeConfig, Normalized};
use crate::types::{is_record, Record};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Splits nested records out of a record into a flat, id-keyed entity table
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Normalizer { config }
    }

    /// Normalize a record into its reference-only root and the entity table
    ///
    /// The root itself is never added to the entity table. Entities appear in
    /// discovery order, each parent before the records nested inside it. A
    /// repeated id overwrites the earlier entity in place.
    pub fn normalize(&self, record: &Record) -> Result<Normalized> {
        let root = self.normalized(record, "$")?;

        let mut entities = Map::new();
        self.extract_entities(record, "$", &mut entities)?;

        debug!(entities = entities.len(), "normalized record");
        Ok(Normalized { root, entities })
    }

    /// Replace every nested record with a `<field><suffix>` reference to its id
    fn normalized(&self, record: &Record, path: &str) -> Result<Record> {
        let mut data = Map::with_capacity(record.len());

        for (key, value) in record {
            if is_record(value) && !self.is_scalar_field(key) {
                let field_path = format!("{}.{}", path, key);
                let id = self.id_value(value, &field_path)?;
                data.insert(
                    format!("{}{}", key, self.config.reference_suffix),
                    id.clone(),
                );
            } else {
                data.insert(key.clone(), value.clone());
            }
        }

        Ok(data)
    }

    /// Recursively collect every nested record into `entities`
    fn extract_entities(&self, record: &Record, path: &str, entities: &mut Record) -> Result<()> {
        for (key, value) in record {
            let Value::Object(inner) = value else {
                continue;
            };
            if self.is_scalar_field(key) {
                continue;
            }

            let field_path = format!("{}.{}", path, key);
            let id = self.entity_id(value, &field_path)?;
            trace!(id = %id.0, path = %field_path, "extracting entity");

            let entity = self.normalized(inner, &field_path)?;
            entities.insert(id.0, Value::Object(entity));

            self.extract_entities(inner, &field_path, entities)?;
        }

        Ok(())
    }

    fn id_value<'a>(&self, nested: &'a Value, path: &str) -> Result<&'a Value> {
        nested
            .get(self.config.id_field.as_str())
            .ok_or_else(|| ReshapeError::MissingId {
                field: self.config.id_field.clone(),
                path: path.to_string(),
            })
    }

    fn entity_id(&self, nested: &Value, path: &str) -> Result<EntityId> {
        let value = self.id_value(nested, path)?;
        EntityId::from_value(value).ok_or_else(|| ReshapeError::InvalidId {
            field: self.config.id_field.clone(),
            path: path.to_string(),
        })
    }

    /// Check if a field should always be kept inline
    fn is_scalar_field(&self, field_name: &str) -> bool {
        self.config.scalar_fields.iter().any(|f| f == field_name)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(NormalizeConfig::default())
    }
}
