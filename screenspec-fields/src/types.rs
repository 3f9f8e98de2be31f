//! Core field definition types.
//!
//! A field definition is one row of a screen's data dictionary. The data
//! type is a tagged union: each variant carries exactly the optional
//! attributes that are legal for it, so a `date` field can never hold a
//! stale `length` and only `choice` fields own a value range.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldsError;
use crate::validation;

/// The six kinds of input a field can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    Text,
    Number,
    Date,
    Choice,
    Checkbox,
    Textarea,
}

impl DataType {
    /// All data types, in the order the editor offers them.
    pub const ALL: [DataType; 6] = [
        DataType::Text,
        DataType::Number,
        DataType::Date,
        DataType::Choice,
        DataType::Checkbox,
        DataType::Textarea,
    ];

    /// Display label shown in the editor's type selector.
    pub fn label(self) -> &'static str {
        match self {
            DataType::Text => "文字列",
            DataType::Number => "数値",
            DataType::Date => "日付",
            DataType::Choice => "選択",
            DataType::Checkbox => "チェックボックス",
            DataType::Textarea => "テキストエリア",
        }
    }

    /// Stable machine key, identical to the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Choice => "choice",
            DataType::Checkbox => "checkbox",
            DataType::Textarea => "textarea",
        }
    }

    /// Whether fields of this type carry a `length`.
    pub fn supports_length(self) -> bool {
        matches!(self, DataType::Text | DataType::Number)
    }

    /// Whether fields of this type carry a value range.
    pub fn supports_value_range(self) -> bool {
        matches!(self, DataType::Choice)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataType {
    type Err = FieldsError;

    /// Accepts either the display label or the machine key.
    ///
    /// `テキスト` is accepted as an alias for `textarea`; generated layouts
    /// use it for multi-line descriptions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "テキスト" {
            return Ok(DataType::Textarea);
        }
        DataType::ALL
            .into_iter()
            .find(|t| t.label() == s || t.key() == s)
            .ok_or_else(|| FieldsError::UnknownDataType { value: s.into() })
    }
}

/// A named attribute of a field definition.
///
/// Ordering follows the editor's form layout, so an [`AttributeSet`]
/// iterates in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Id,
    LogicalName,
    PhysicalName,
    DataType,
    Length,
    Required,
    DefaultValue,
    InputFormat,
    ValueRange,
    Remarks,
}

impl Attribute {
    /// Attributes every field shows regardless of its data type.
    pub const BASE: [Attribute; 8] = [
        Attribute::Id,
        Attribute::LogicalName,
        Attribute::PhysicalName,
        Attribute::DataType,
        Attribute::Required,
        Attribute::DefaultValue,
        Attribute::InputFormat,
        Attribute::Remarks,
    ];

    /// Attributes that must be non-empty before a save.
    pub const REQUIRED: [Attribute; 3] = [
        Attribute::Id,
        Attribute::LogicalName,
        Attribute::PhysicalName,
    ];

    /// Form label for the attribute.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Id => "項目ID",
            Attribute::LogicalName => "論理名",
            Attribute::PhysicalName => "物理名",
            Attribute::DataType => "データ型",
            Attribute::Length => "桁数",
            Attribute::Required => "必須/任意",
            Attribute::DefaultValue => "初期値",
            Attribute::InputFormat => "入力形式",
            Attribute::ValueRange => "値の範囲",
            Attribute::Remarks => "備考",
        }
    }

    /// Machine name, matching the serialized field key.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Id => "id",
            Attribute::LogicalName => "logical_name",
            Attribute::PhysicalName => "physical_name",
            Attribute::DataType => "data_type",
            Attribute::Length => "length",
            Attribute::Required => "required",
            Attribute::DefaultValue => "default_value",
            Attribute::InputFormat => "input_format",
            Attribute::ValueRange => "value_range",
            Attribute::Remarks => "remarks",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A set of attributes, iterated in form order.
pub type AttributeSet = BTreeSet<Attribute>;

/// Attributes meaningful for a data type.
///
/// The editor uses this to decide which inputs to render and the inspector
/// uses it to decide which rows to show, so the two never disagree.
pub fn visible_attributes(data_type: DataType) -> AttributeSet {
    let mut set: AttributeSet = Attribute::BASE.into_iter().collect();
    if data_type.supports_length() {
        set.insert(Attribute::Length);
    }
    if data_type.supports_value_range() {
        set.insert(Attribute::ValueRange);
    }
    set
}

/// The data type of a field together with the attributes only that type owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<u32>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<u32>,
    },
    Date,
    /// Candidate values in display order. Duplicates are allowed.
    Choice {
        #[serde(default)]
        value_range: Vec<String>,
    },
    Checkbox,
    Textarea,
}

impl FieldKind {
    /// A kind of the given type with every optional attribute absent.
    pub fn empty(data_type: DataType) -> Self {
        match data_type {
            DataType::Text => FieldKind::Text { length: None },
            DataType::Number => FieldKind::Number { length: None },
            DataType::Date => FieldKind::Date,
            DataType::Choice => FieldKind::Choice {
                value_range: Vec::new(),
            },
            DataType::Checkbox => FieldKind::Checkbox,
            DataType::Textarea => FieldKind::Textarea,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            FieldKind::Text { .. } => DataType::Text,
            FieldKind::Number { .. } => DataType::Number,
            FieldKind::Date => DataType::Date,
            FieldKind::Choice { .. } => DataType::Choice,
            FieldKind::Checkbox => DataType::Checkbox,
            FieldKind::Textarea => DataType::Textarea,
        }
    }

    pub fn length(&self) -> Option<u32> {
        match self {
            FieldKind::Text { length } | FieldKind::Number { length } => *length,
            _ => None,
        }
    }

    /// The value range, present only on `choice` kinds.
    pub fn value_range(&self) -> Option<&[String]> {
        match self {
            FieldKind::Choice { value_range } => Some(value_range),
            _ => None,
        }
    }

    /// Switch to another data type.
    ///
    /// Attributes the target type cannot hold are dropped. `length` survives
    /// a switch between `text` and `number`; switching to the current type
    /// leaves the kind untouched.
    pub fn switch_to(self, target: DataType) -> Self {
        if self.data_type() == target {
            return self;
        }
        match (self.length(), target) {
            (length, DataType::Text) => FieldKind::Text { length },
            (length, DataType::Number) => FieldKind::Number { length },
            (_, other) => FieldKind::empty(other),
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::empty(DataType::Text)
    }
}

/// A field definition: the full metadata for one input on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Join key between layout elements and metadata; unique per collection.
    pub id: String,
    pub logical_name: String,
    pub physical_name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Free-text hint such as a date mask or character-set note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl FieldDefinition {
    /// Create an optional text field.
    pub fn new(
        id: impl Into<String>,
        logical_name: impl Into<String>,
        physical_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            logical_name: logical_name.into(),
            physical_name: physical_name.into(),
            kind: FieldKind::default(),
            required: false,
            default_value: None,
            input_format: None,
            remarks: None,
        }
    }

    /// An empty record, the starting point for a new field in the editor.
    pub fn blank() -> Self {
        Self::new("", "", "")
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_input_format(mut self, format: impl Into<String>) -> Self {
        self.input_format = Some(format.into());
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn data_type(&self) -> DataType {
        self.kind.data_type()
    }

    pub fn length(&self) -> Option<u32> {
        self.kind.length()
    }

    pub fn value_range(&self) -> Option<&[String]> {
        self.kind.value_range()
    }

    /// True iff `id`, `logical_name` and `physical_name` are all non-empty.
    pub fn is_valid(&self) -> bool {
        validation::validate(self).is_ok()
    }

    /// Attributes meaningful for this field's current data type.
    pub fn visible_attributes(&self) -> AttributeSet {
        visible_attributes(self.data_type())
    }
}

/// The reduced projection of a field carried by a generated layout.
///
/// It has no `length` and no value range; those are filled in later
/// through the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub id: String,
    pub logical_name: String,
    pub physical_name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl FieldSummary {
    /// Expand into a full definition with every type-specific attribute absent.
    pub fn to_definition(&self) -> FieldDefinition {
        FieldDefinition {
            id: self.id.clone(),
            logical_name: self.logical_name.clone(),
            physical_name: self.physical_name.clone(),
            kind: FieldKind::empty(self.data_type),
            required: self.required,
            default_value: None,
            input_format: self.input_format.clone(),
            remarks: self.remarks.clone(),
        }
    }
}

impl From<&FieldDefinition> for FieldSummary {
    fn from(def: &FieldDefinition) -> Self {
        Self {
            id: def.id.clone(),
            logical_name: def.logical_name.clone(),
            physical_name: def.physical_name.clone(),
            data_type: def.data_type(),
            required: def.required,
            input_format: def.input_format.clone(),
            remarks: def.remarks.clone(),
        }
    }
}
