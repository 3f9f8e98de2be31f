//! Layout templates and the table the matcher selects from.
//!
//! A template is an atomic `(description, markup, fields)` unit guarded by
//! a list of trigger substrings. The table is plain data: it can be loaded
//! from YAML, swapped in tests, or extended without touching the matcher.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use screenspec_fields::{FieldSummary, FieldsError};

use crate::error::{LayoutError, Result};
use crate::layout::GeneratedLayout;

const BUILTIN_TEMPLATES: &str = include_str!("../builtin/templates.yaml");

/// One pre-authored screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub name: String,
    /// Substrings of the requirements text that select this template.
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Title used only when the template is shown on its own.
    pub title: String,
    pub description: String,
    pub markup: String,
    pub fields: Vec<FieldSummary>,
}

impl LayoutTemplate {
    /// Whether any trigger occurs in the requirements text.
    pub fn matches(&self, requirements: &str) -> bool {
        self.triggers
            .iter()
            .any(|t| !t.is_empty() && requirements.contains(t.as_str()))
    }

    /// The template as a layout, with its own title.
    pub fn to_layout(&self) -> GeneratedLayout {
        GeneratedLayout {
            title: self.title.clone(),
            description: self.description.clone(),
            markup: self.markup.clone(),
            fields: self.fields.clone(),
        }
    }

    /// The template as a layout titled by the caller.
    pub fn instantiate(&self, title: &str) -> GeneratedLayout {
        GeneratedLayout {
            title: title.to_string(),
            ..self.to_layout()
        }
    }

    /// Check field id uniqueness and markup/fields agreement.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(FieldsError::DuplicateFieldId {
                    id: field.id.clone(),
                }
                .into());
            }
        }
        self.to_layout().check_consistency(&self.name)
    }
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    default: String,
    templates: Vec<LayoutTemplate>,
}

/// Ordered templates plus the fallback used when none match.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    templates: Vec<LayoutTemplate>,
    default_index: usize,
}

impl TemplateTable {
    /// Build a checked table. `default` must name one of the templates.
    pub fn new(templates: Vec<LayoutTemplate>, default: &str) -> Result<Self> {
        let mut names = HashSet::new();
        for template in &templates {
            if !names.insert(template.name.as_str()) {
                return Err(LayoutError::DuplicateTemplate {
                    name: template.name.clone(),
                });
            }
            template.check()?;
        }
        let default_index = templates
            .iter()
            .position(|t| t.name == default)
            .ok_or_else(|| LayoutError::DefaultTemplateNotFound {
                name: default.to_string(),
            })?;
        debug!(
            templates = templates.len(),
            default = %default,
            "template table loaded"
        );
        Ok(Self {
            templates,
            default_index,
        })
    }

    /// The compiled-in product and user registration templates.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Parse a table from YAML with top-level `default` and `templates` keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: TemplateFile = serde_yaml_ng::from_str(yaml)?;
        Self::new(file.templates, &file.default)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Same templates with a different fallback.
    pub fn with_default(self, default: &str) -> Result<Self> {
        Self::new(self.templates, default)
    }

    /// First template, in table order, with a trigger in the text; else the default.
    pub fn select(&self, requirements: &str) -> &LayoutTemplate {
        self.templates
            .iter()
            .find(|t| t.matches(requirements))
            .unwrap_or_else(|| self.default_template())
    }

    pub fn get(&self, name: &str) -> Option<&LayoutTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn templates(&self) -> &[LayoutTemplate] {
        &self.templates
    }

    pub fn default_template(&self) -> &LayoutTemplate {
        &self.templates[self.default_index]
    }
}
