//! Field definition editor.
//!
//! Edits are modelled as a reducer: [`apply_change`] takes the current
//! draft and one [`FieldChange`] and returns a new draft, leaving its input
//! untouched. [`FieldEditor`] owns the single draft for an editing session
//! and turns form events into reducer calls.

use tracing::{debug, trace};

use crate::error::{FieldsError, Result, ValidationError};
use crate::logging::Pretty;
use crate::types::{Attribute, AttributeSet, DataType, FieldDefinition, FieldKind};
use crate::validation;

/// A single edit to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Id(String),
    LogicalName(String),
    PhysicalName(String),
    /// Switch data type; attributes the new type cannot hold are cleared.
    DataType(DataType),
    Length(Option<u32>),
    Required(bool),
    DefaultValue(Option<String>),
    InputFormat(Option<String>),
    Remarks(Option<String>),
    /// Append the trimmed text to the value range unless it is blank.
    AddRangeValue(String),
    /// Remove the value range entry at an index.
    RemoveRangeValue(usize),
}

impl FieldChange {
    /// Build a change from raw form input for a text-editable attribute.
    ///
    /// Empty input clears optional attributes. `length` must be a
    /// non-negative integer or empty. The value range is edited through
    /// [`FieldChange::AddRangeValue`] and [`FieldChange::RemoveRangeValue`]
    /// instead.
    pub fn from_input(attribute: Attribute, input: &str) -> Result<Self> {
        let optional = || (!input.is_empty()).then(|| input.to_string());
        let change = match attribute {
            Attribute::Id => FieldChange::Id(input.into()),
            Attribute::LogicalName => FieldChange::LogicalName(input.into()),
            Attribute::PhysicalName => FieldChange::PhysicalName(input.into()),
            Attribute::DataType => FieldChange::DataType(input.parse()?),
            Attribute::Length => FieldChange::Length(parse_length(input)?),
            Attribute::Required => FieldChange::Required(parse_checked(input)?),
            Attribute::DefaultValue => FieldChange::DefaultValue(optional()),
            Attribute::InputFormat => FieldChange::InputFormat(optional()),
            Attribute::Remarks => FieldChange::Remarks(optional()),
            Attribute::ValueRange => return Err(FieldsError::UnsupportedAttribute { attribute }),
        };
        Ok(change)
    }
}

/// Parse a length input. Empty input means "absent", never zero.
pub fn parse_length(input: &str) -> Result<Option<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FieldsError::InvalidLength {
            input: input.to_string(),
        })
}

/// Parse a checkbox input. Empty input means unchecked.
fn parse_checked(input: &str) -> Result<bool> {
    match input.trim() {
        "true" | "on" | "1" | "checked" => Ok(true),
        "" | "false" | "off" | "0" => Ok(false),
        _ => Err(FieldsError::InvalidFlag {
            input: input.to_string(),
        }),
    }
}

/// Apply one change to a draft, producing the next draft.
pub fn apply_change(draft: &FieldDefinition, change: FieldChange) -> Result<FieldDefinition> {
    let mut next = draft.clone();
    let data_type = next.data_type();
    match change {
        FieldChange::Id(id) => next.id = id,
        FieldChange::LogicalName(name) => next.logical_name = name,
        FieldChange::PhysicalName(name) => next.physical_name = name,
        FieldChange::DataType(target) => next.kind = next.kind.switch_to(target),
        FieldChange::Length(value) => match &mut next.kind {
            FieldKind::Text { length } | FieldKind::Number { length } => *length = value,
            _ => {
                return Err(FieldsError::NotApplicable {
                    attribute: Attribute::Length,
                    data_type,
                })
            }
        },
        FieldChange::Required(required) => next.required = required,
        FieldChange::DefaultValue(value) => next.default_value = value,
        FieldChange::InputFormat(value) => next.input_format = value,
        FieldChange::Remarks(value) => next.remarks = value,
        FieldChange::AddRangeValue(text) => {
            let value_range = range_of(&mut next.kind, data_type)?;
            let value = text.trim();
            if !value.is_empty() {
                value_range.push(value.to_string());
            }
        }
        FieldChange::RemoveRangeValue(index) => {
            let value_range = range_of(&mut next.kind, data_type)?;
            if index >= value_range.len() {
                return Err(FieldsError::RangeIndexOutOfBounds {
                    index,
                    len: value_range.len(),
                });
            }
            value_range.remove(index);
        }
    }
    Ok(next)
}

fn range_of(kind: &mut FieldKind, data_type: DataType) -> Result<&mut Vec<String>> {
    match kind {
        FieldKind::Choice { value_range } => Ok(value_range),
        _ => Err(FieldsError::NotApplicable {
            attribute: Attribute::ValueRange,
            data_type,
        }),
    }
}

/// Whether the editor is creating a field or changing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    New,
    Existing { id: String },
}

/// A user action inside the editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    Change(FieldChange),
    /// Text typed into the range value input.
    RangeInput(String),
    /// Enter pressed in the range value input, or the add button clicked.
    /// Adds the pending value; never submits the form.
    AddPendingRangeValue,
    Submit,
    Cancel,
}

/// What the editor did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Editing,
    Saved(FieldDefinition),
    Cancelled,
}

/// An editing session over one draft.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    mode: EditMode,
    draft: FieldDefinition,
    pending_range_value: String,
}

impl FieldEditor {
    /// Start a new field: text type, optional, everything else empty.
    pub fn new_field() -> Self {
        Self {
            mode: EditMode::New,
            draft: FieldDefinition::blank(),
            pending_range_value: String::new(),
        }
    }

    /// Start editing a copy of an existing field. The original is never mutated.
    pub fn edit(initial: &FieldDefinition) -> Self {
        Self {
            mode: EditMode::Existing {
                id: initial.id.clone(),
            },
            draft: initial.clone(),
            pending_range_value: String::new(),
        }
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_new(&self) -> bool {
        self.mode == EditMode::New
    }

    /// Page heading for the session.
    pub fn heading(&self) -> String {
        match self.mode {
            EditMode::New => "新規項目定義".to_string(),
            EditMode::Existing { .. } => format!("{}の編集", self.draft.logical_name),
        }
    }

    pub fn draft(&self) -> &FieldDefinition {
        &self.draft
    }

    /// Inputs the form should render for the draft's current type.
    pub fn visible_attributes(&self) -> AttributeSet {
        self.draft.visible_attributes()
    }

    /// Apply a change to the draft.
    ///
    /// On error the draft is left as it was.
    pub fn apply(&mut self, change: FieldChange) -> Result<&FieldDefinition> {
        debug!(id = %self.draft.id, ?change, "applying field change");
        self.draft = apply_change(&self.draft, change)?;
        Ok(&self.draft)
    }

    /// Set an attribute from raw form input.
    pub fn set_attribute(&mut self, attribute: Attribute, input: &str) -> Result<&FieldDefinition> {
        let change = FieldChange::from_input(attribute, input)?;
        self.apply(change)
    }

    pub fn add_range_value(&mut self, text: &str) -> Result<&FieldDefinition> {
        self.apply(FieldChange::AddRangeValue(text.to_string()))
    }

    pub fn remove_range_value(&mut self, index: usize) -> Result<&FieldDefinition> {
        self.apply(FieldChange::RemoveRangeValue(index))
    }

    pub fn pending_range_value(&self) -> &str {
        &self.pending_range_value
    }

    pub fn set_pending_range_value(&mut self, text: impl Into<String>) {
        self.pending_range_value = text.into();
    }

    /// Add the pending range value and clear the input.
    ///
    /// Returns `false` and keeps the input when it is blank.
    pub fn commit_pending_range_value(&mut self) -> Result<bool> {
        if self.pending_range_value.trim().is_empty() {
            return Ok(false);
        }
        let text = std::mem::take(&mut self.pending_range_value);
        if let Err(e) = self.add_range_value(&text) {
            self.pending_range_value = text;
            return Err(e);
        }
        Ok(true)
    }

    /// Return the draft if every required attribute is filled in.
    pub fn save(&self) -> std::result::Result<FieldDefinition, ValidationError> {
        validation::validate(&self.draft)?;
        debug!(id = %self.draft.id, "field definition saved");
        trace!("saved field: {}", Pretty(&self.draft));
        Ok(self.draft.clone())
    }

    /// Discard the draft.
    pub fn cancel(&self) -> EditorOutcome {
        debug!(id = %self.draft.id, "field edit cancelled");
        EditorOutcome::Cancelled
    }

    /// Route a form event.
    pub fn handle(&mut self, event: EditorEvent) -> Result<EditorOutcome> {
        match event {
            EditorEvent::Change(change) => {
                self.apply(change)?;
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::RangeInput(text) => {
                self.set_pending_range_value(text);
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::AddPendingRangeValue => {
                self.commit_pending_range_value()?;
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::Submit => Ok(EditorOutcome::Saved(self.save()?)),
            EditorEvent::Cancel => Ok(self.cancel()),
        }
    }
}
