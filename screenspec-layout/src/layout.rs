//! Generation requests and generated layouts.

use serde::{Deserialize, Serialize};

use screenspec_fields::{DataType, FieldCollection, FieldDefinition, FieldSummary};

use crate::error::{LayoutError, Result};
use crate::inspector::Badge;
use crate::markup;

/// Input to the matcher. Both strings are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    title: String,
    requirements: String,
}

impl GenerateRequest {
    /// Build a request, rejecting a blank title or requirements text.
    ///
    /// The strings are kept exactly as given; only the emptiness check
    /// looks at the trimmed text.
    pub fn new(title: impl Into<String>, requirements: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let requirements = requirements.into();
        if title.trim().is_empty() {
            return Err(LayoutError::EmptyTitle);
        }
        if requirements.trim().is_empty() {
            return Err(LayoutError::EmptyRequirements);
        }
        Ok(Self {
            title,
            requirements,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }
}

/// A screen produced by the matcher.
///
/// Every field id appears exactly once in `fields`, and the markup tags
/// exactly those ids with `data-field-id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLayout {
    pub title: String,
    pub description: String,
    pub markup: String,
    pub fields: Vec<FieldSummary>,
}

impl GeneratedLayout {
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }

    /// Full definitions for the layout's fields, type-specific attributes absent.
    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        self.fields.iter().map(FieldSummary::to_definition).collect()
    }

    /// A collection keyed by the layout's field ids.
    pub fn field_collection(&self) -> Result<FieldCollection> {
        Ok(FieldCollection::from_fields(self.field_definitions())?)
    }

    /// Summary cards shown under a freshly generated layout.
    pub fn field_cards(&self) -> Vec<FieldCard> {
        self.fields.iter().map(FieldCard::from).collect()
    }

    /// Verify that markup and field list carry the same ids.
    pub fn check_consistency(&self, name: &str) -> Result<()> {
        let (markup_only, fields_only) = markup::id_mismatch(&self.markup, self.field_ids())?;
        if markup_only.is_empty() && fields_only.is_empty() {
            Ok(())
        } else {
            Err(LayoutError::InconsistentTemplate {
                name: name.to_string(),
                markup_only,
                fields_only,
            })
        }
    }
}

/// Display data for one generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCard {
    pub id: String,
    pub logical_name: String,
    pub physical_name: String,
    pub data_type: DataType,
    pub required_badge: Badge,
    pub type_badge: Badge,
    pub input_format: Option<String>,
    pub remarks: Option<String>,
}

impl From<&FieldSummary> for FieldCard {
    fn from(summary: &FieldSummary) -> Self {
        Self {
            id: summary.id.clone(),
            logical_name: summary.logical_name.clone(),
            physical_name: summary.physical_name.clone(),
            data_type: summary.data_type,
            required_badge: Badge::required(summary.required),
            type_badge: Badge::data_type(summary.data_type),
            input_format: summary.input_format.clone(),
            remarks: summary.remarks.clone(),
        }
    }
}
