//! Field definition model and editor
//!
//! `screenspec-fields` owns the data dictionary of a screen: one
//! [`FieldDefinition`] per input, the rules that decide which attributes a
//! data type carries, and the editor that produces new definitions.
//!
//! # Architecture
//!
//! - **Tagged data type**: [`FieldKind`] variants hold only their legal attributes
//! - **Shared visibility rule**: [`visible_attributes`] drives both the editor form and the inspector
//! - **Reducer editing**: [`apply_change`] maps `(draft, change)` to a new draft
//! - **In-memory store**: [`FieldCollection`] implements the [`FieldStore`] interface

pub mod builtin;
pub mod editor;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;
pub mod validation;

pub use builtin::{sample_defaults, sample_fields};
pub use editor::{
    apply_change, parse_length, EditMode, EditorEvent, EditorOutcome, FieldChange, FieldEditor,
};
pub use error::{FieldsError, Result, ValidationError};
pub use logging::Pretty;
pub use store::{FieldCollection, FieldCollectionBuilder, FieldDefaults, FieldStore};
pub use types::{
    visible_attributes, Attribute, AttributeSet, DataType, FieldDefinition, FieldKind,
    FieldSummary,
};
pub use validation::validate;
