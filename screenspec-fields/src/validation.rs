//! Save-time validation of field definitions.

use crate::error::ValidationError;
use crate::types::{Attribute, FieldDefinition};

/// Check that every required attribute is non-empty.
///
/// The data type needs no check; [`FieldKind`](crate::FieldKind) only
/// admits the six legal kinds.
pub fn validate(field: &FieldDefinition) -> Result<(), ValidationError> {
    let missing_fields: Vec<Attribute> = Attribute::REQUIRED
        .into_iter()
        .filter(|attr| match attr {
            Attribute::Id => field.id.is_empty(),
            Attribute::LogicalName => field.logical_name.is_empty(),
            Attribute::PhysicalName => field.physical_name.is_empty(),
            _ => false,
        })
        .collect();

    if missing_fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing_fields })
    }
}
