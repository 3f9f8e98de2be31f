//! Error types for field definitions

use thiserror::Error;

use crate::types::{Attribute, DataType};

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// A save was attempted while required attributes were still empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required attributes: {}", join_attributes(.missing_fields))]
pub struct ValidationError {
    /// The empty attributes, in form order.
    pub missing_fields: Vec<Attribute>,
}

fn join_attributes(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .map(|a| a.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while editing or storing field definitions
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Required attributes are empty
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Range value removal outside the current range
    #[error("range value index {index} out of bounds (len {len})")]
    RangeIndexOutOfBounds { index: usize, len: usize },

    /// Length input that is not a non-negative integer
    #[error("invalid length '{input}': expected a non-negative integer")]
    InvalidLength { input: String },

    /// Data type label or key not recognized
    #[error("unknown data type: {value}")]
    UnknownDataType { value: String },

    /// Attribute does not exist on the field's current data type
    #[error("attribute '{attribute}' does not apply to data type {data_type}")]
    NotApplicable {
        attribute: Attribute,
        data_type: DataType,
    },

    /// Attribute cannot be set from a single text input
    #[error("attribute '{attribute}' cannot be set from text input")]
    UnsupportedAttribute { attribute: Attribute },

    /// Checkbox input that is neither checked nor unchecked
    #[error("invalid checkbox value '{input}': expected true or false")]
    InvalidFlag { input: String },

    /// Two fields in one collection share an id
    #[error("duplicate field id: {id}")]
    DuplicateFieldId { id: String },

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
