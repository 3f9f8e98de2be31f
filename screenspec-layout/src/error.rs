//! Error types for layout generation and viewing

use screenspec_fields::FieldsError;
use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while generating, rendering or exporting layouts
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Generation requested with a blank screen title
    #[error("screen title must not be empty")]
    EmptyTitle,

    /// Generation requested with blank requirements text
    #[error("requirements text must not be empty")]
    EmptyRequirements,

    /// Template markup and field list disagree on the set of field ids
    #[error(
        "template '{name}' is inconsistent: ids only in markup {markup_only:?}, ids only in fields {fields_only:?}"
    )]
    InconsistentTemplate {
        name: String,
        markup_only: Vec<String>,
        fields_only: Vec<String>,
    },

    /// Two templates in one table share a name
    #[error("duplicate template name: {name}")]
    DuplicateTemplate { name: String },

    /// The configured default template is not in the table
    #[error("default template not found: {name}")]
    DefaultTemplateNotFound { name: String },

    /// A CSS selector used for markup inspection failed to parse
    #[error("invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Field model error
    #[error(transparent)]
    Fields(#[from] FieldsError),

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for LayoutError {
    fn from(error: figment::Error) -> Self {
        LayoutError::Config(Box::new(error))
    }
}
