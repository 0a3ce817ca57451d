//! User annotations attached to scene nodes
//!
//! Records are keyed by the node's display name and live for the whole
//! session. They are created empty the first time a name is selected and are
//! never removed automatically.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Free-text annotation of one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub name: String,
    pub material: String,
    pub cost: String,
    pub dimensions: String,
}

/// Editable fields of a [`MetadataRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Name,
    Material,
    Cost,
    Dimensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metadata field '{0}'")]
pub struct UnknownFieldError(pub String);

impl MetadataField {
    pub const ALL: [MetadataField; 4] = [
        MetadataField::Name,
        MetadataField::Material,
        MetadataField::Cost,
        MetadataField::Dimensions,
    ];

    /// Field key as used by form inputs
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::Name => "name",
            MetadataField::Material => "material",
            MetadataField::Cost => "cost",
            MetadataField::Dimensions => "dimensions",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Name => "Name",
            MetadataField::Material => "Material",
            MetadataField::Cost => "Cost",
            MetadataField::Dimensions => "Dimensions",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetadataField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

impl MetadataRecord {
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Name => &self.name,
            MetadataField::Material => &self.material,
            MetadataField::Cost => &self.cost,
            MetadataField::Dimensions => &self.dimensions,
        }
    }

    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        let slot = match field {
            MetadataField::Name => &mut self.name,
            MetadataField::Material => &mut self.material,
            MetadataField::Cost => &mut self.cost,
            MetadataField::Dimensions => &mut self.dimensions,
        };
        *slot = value.into();
    }

    /// Builder pattern: Set one field
    pub fn with(mut self, field: MetadataField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        MetadataField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

/// Session-lifetime store of annotations, keyed by display name
#[derive(Debug, Default)]
pub struct MetadataStore {
    records: HashMap<String, MetadataRecord>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `name`, creating an empty one on first use
    pub fn load_or_create(&mut self, name: &str) -> &MetadataRecord {
        self.records.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&MetadataRecord> {
        self.records.get(name)
    }

    /// Stores `record` under `name`, replacing what was there
    pub fn commit(&mut self, name: &str, record: MetadataRecord) {
        self.records.insert(name.to_string(), record);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The record shown in the inspector, detached from the store until saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    record: MetadataRecord,
    dirty: bool,
}

impl EditBuffer {
    /// Replaces the buffer contents, dropping unsaved changes
    pub fn load(&mut self, record: MetadataRecord) {
        self.record = record;
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        self.load(MetadataRecord::default());
    }

    pub fn set_field(&mut self, field: MetadataField, value: impl Into<String>) {
        self.record.set(field, value);
        self.dirty = true;
    }

    pub fn record(&self) -> &MetadataRecord {
        &self.record
    }

    /// True when the buffer holds edits that were never committed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
