//! In-memory field collection.
//!
//! The owning collection of field definitions for one screen. Records are
//! kept in insertion order with an id index for lookup. Nothing is
//! persisted; the collection lives as long as the process holds it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::FieldDefinition;

/// The store interface the designer core consumes.
///
/// The core reads through `list` and `get` and writes through `upsert`.
/// It never deletes records.
pub trait FieldStore {
    /// All fields, in insertion order.
    fn list(&self) -> &[FieldDefinition];

    /// Look up a field by id.
    fn get(&self, id: &str) -> Option<&FieldDefinition>;

    /// Insert a field, or replace the one with the same id in place.
    fn upsert(&mut self, field: FieldDefinition);
}

/// A set of field definitions used to seed a collection.
#[derive(Debug, Clone, Default)]
pub struct FieldDefaults {
    fields: Vec<FieldDefinition>,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default field definition.
    pub fn field(mut self, def: FieldDefinition) -> Self {
        self.fields.push(def);
        self
    }

    /// Parse defaults from a YAML sequence of field definitions.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let fields: Vec<FieldDefinition> = serde_yaml_ng::from_str(yaml)?;
        Ok(Self { fields })
    }

    /// Access the field definitions.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// Builder for [`FieldCollection`]. Created by [`FieldCollection::builder`].
#[derive(Debug, Default)]
pub struct FieldCollectionBuilder {
    defaults: Option<FieldDefaults>,
}

impl FieldCollectionBuilder {
    /// Seed the collection with default definitions.
    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Build the collection. Fails if two defaults share an id.
    pub fn build(self) -> Result<FieldCollection> {
        let fields = self.defaults.map(|d| d.fields).unwrap_or_default();
        let collection = FieldCollection::from_fields(fields)?;
        debug!(fields = collection.len(), "field collection opened");
        Ok(collection)
    }
}

/// Ordered, id-indexed collection of field definitions.
#[derive(Debug, Clone, Default)]
pub struct FieldCollection {
    fields: Vec<FieldDefinition>,
    id_index: HashMap<String, usize>,
}

impl FieldCollection {
    pub fn builder() -> FieldCollectionBuilder {
        FieldCollectionBuilder::default()
    }

    /// Build from a sequence of fields whose ids must be unique.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDefinition>) -> Result<Self> {
        let mut collection = Self::default();
        for def in fields {
            if collection.id_index.contains_key(&def.id) {
                return Err(FieldsError::DuplicateFieldId { id: def.id });
            }
            collection.push(def);
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// Field ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }

    fn push(&mut self, def: FieldDefinition) {
        let idx = self.fields.len();
        self.id_index.insert(def.id.clone(), idx);
        self.fields.push(def);
    }
}

impl FieldStore for FieldCollection {
    fn list(&self) -> &[FieldDefinition] {
        &self.fields
    }

    fn get(&self, id: &str) -> Option<&FieldDefinition> {
        self.id_index.get(id).map(|&i| &self.fields[i])
    }

    fn upsert(&mut self, field: FieldDefinition) {
        if let Some(&idx) = self.id_index.get(&field.id) {
            debug!(id = %field.id, "field replaced");
            self.fields[idx] = field;
        } else {
            debug!(id = %field.id, "field added");
            self.push(field);
        }
    }
}
