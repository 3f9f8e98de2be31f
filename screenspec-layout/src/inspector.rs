//! Inspector panel: a read-only projection of the selected field.

use serde::Serialize;

use screenspec_fields::{Attribute, DataType, FieldDefinition};

/// Prompt shown while no field is selected.
pub const EMPTY_PROMPT: &str = "画面の項目をクリックして詳細を表示してください";

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    Destructive,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn outline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Outline,
        }
    }

    /// 必須 (destructive) or 任意 (secondary).
    pub fn required(required: bool) -> Self {
        if required {
            Self {
                text: "必須".into(),
                variant: BadgeVariant::Destructive,
            }
        } else {
            Self {
                text: "任意".into(),
                variant: BadgeVariant::Secondary,
            }
        }
    }

    pub fn data_type(data_type: DataType) -> Self {
        Self::outline(data_type.label())
    }
}

/// One row of the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", content = "value", rename_all = "snake_case")]
pub enum DetailRow {
    Id(String),
    PhysicalName(String),
    DataType(DataType),
    Length(u32),
    /// Binary required/optional indicator.
    Required(Badge),
    DefaultValue(String),
    InputFormat(String),
    /// Candidate values as badges, in display order.
    ValueRange(Vec<Badge>),
    /// Rendered as a highlighted callout.
    Remarks(String),
}

impl DetailRow {
    pub fn attribute(&self) -> Attribute {
        match self {
            DetailRow::Id(_) => Attribute::Id,
            DetailRow::PhysicalName(_) => Attribute::PhysicalName,
            DetailRow::DataType(_) => Attribute::DataType,
            DetailRow::Length(_) => Attribute::Length,
            DetailRow::Required(_) => Attribute::Required,
            DetailRow::DefaultValue(_) => Attribute::DefaultValue,
            DetailRow::InputFormat(_) => Attribute::InputFormat,
            DetailRow::ValueRange(_) => Attribute::ValueRange,
            DetailRow::Remarks(_) => Attribute::Remarks,
        }
    }

    pub fn label(&self) -> &'static str {
        self.attribute().label()
    }
}

/// What the inspector shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InspectorPanel {
    Empty { prompt: &'static str },
    Field { title: String, rows: Vec<DetailRow> },
}

impl InspectorPanel {
    /// Project the currently inspected field.
    ///
    /// Rows follow [`screenspec_fields::visible_attributes`] for the field's
    /// type and skip attributes absent from the record. An empty value
    /// range counts as absent.
    pub fn project(field: Option<&FieldDefinition>) -> Self {
        let Some(field) = field else {
            return InspectorPanel::Empty {
                prompt: EMPTY_PROMPT,
            };
        };

        let rows = field
            .visible_attributes()
            .into_iter()
            .filter_map(|attr| row_for(field, attr))
            .collect();

        InspectorPanel::Field {
            title: field.logical_name.clone(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, InspectorPanel::Empty { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            InspectorPanel::Field { title, .. } => Some(title),
            InspectorPanel::Empty { .. } => None,
        }
    }

    pub fn rows(&self) -> &[DetailRow] {
        match self {
            InspectorPanel::Field { rows, .. } => rows,
            InspectorPanel::Empty { .. } => &[],
        }
    }

    pub fn row(&self, attribute: Attribute) -> Option<&DetailRow> {
        self.rows().iter().find(|r| r.attribute() == attribute)
    }
}

fn row_for(field: &FieldDefinition, attr: Attribute) -> Option<DetailRow> {
    match attr {
        // Shown as the panel title.
        Attribute::LogicalName => None,
        Attribute::Id => Some(DetailRow::Id(field.id.clone())),
        Attribute::PhysicalName => Some(DetailRow::PhysicalName(field.physical_name.clone())),
        Attribute::DataType => Some(DetailRow::DataType(field.data_type())),
        Attribute::Length => field.length().map(DetailRow::Length),
        Attribute::Required => Some(DetailRow::Required(Badge::required(field.required))),
        Attribute::DefaultValue => field.default_value.clone().map(DetailRow::DefaultValue),
        Attribute::InputFormat => field.input_format.clone().map(DetailRow::InputFormat),
        Attribute::ValueRange => field
            .value_range()
            .filter(|range| !range.is_empty())
            .map(|range| DetailRow::ValueRange(range.iter().map(Badge::outline).collect())),
        Attribute::Remarks => field.remarks.clone().map(DetailRow::Remarks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenspec_fields::{sample_fields, FieldKind};

    fn sample(id: &str) -> FieldDefinition {
        sample_fields().into_iter().find(|f| f.id == id).unwrap()
    }

    #[test]
    fn no_selection_shows_prompt() {
        let panel = InspectorPanel::project(None);
        assert!(panel.is_empty());
        assert_eq!(
            panel,
            InspectorPanel::Empty {
                prompt: EMPTY_PROMPT
            }
        );
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn text_field_shows_length() {
        let panel = InspectorPanel::project(Some(&sample("user_name")));
        assert_eq!(panel.title(), Some("ユーザー名"));
        assert_eq!(panel.row(Attribute::Length), Some(&DetailRow::Length(50)));
        assert_eq!(
            panel.row(Attribute::Required),
            Some(&DetailRow::Required(Badge::required(true)))
        );
        assert!(panel.row(Attribute::ValueRange).is_none());
        assert!(panel.row(Attribute::DefaultValue).is_none());
    }

    #[test]
    fn date_field_has_no_length_row() {
        let panel = InspectorPanel::project(Some(&sample("birth_date")));
        assert!(panel.row(Attribute::Length).is_none());
        assert_eq!(
            panel.row(Attribute::InputFormat),
            Some(&DetailRow::InputFormat("YYYY/MM/DD".into()))
        );
    }

    #[test]
    fn choice_field_renders_range_as_badges() {
        let panel = InspectorPanel::project(Some(&sample("gender")));
        let Some(DetailRow::ValueRange(badges)) = panel.row(Attribute::ValueRange) else {
            panic!("expected value range row");
        };
        let texts: Vec<_> = badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["男性", "女性", "その他"]);
        assert!(badges.iter().all(|b| b.variant == BadgeVariant::Outline));
        assert_eq!(
            panel.row(Attribute::Remarks),
            Some(&DetailRow::Remarks("統計情報として使用".into()))
        );
    }

    #[test]
    fn optional_field_badge() {
        let badge = Badge::required(false);
        assert_eq!(badge.text, "任意");
        assert_eq!(badge.variant, BadgeVariant::Secondary);
    }

    #[test]
    fn empty_range_and_absent_remarks_omitted() {
        let field = FieldDefinition::new("category", "カテゴリー", "category").with_kind(
            FieldKind::Choice {
                value_range: Vec::new(),
            },
        );
        let panel = InspectorPanel::project(Some(&field));
        assert!(panel.row(Attribute::ValueRange).is_none());
        assert!(panel.row(Attribute::Remarks).is_none());
        let attrs: Vec<_> = panel.rows().iter().map(DetailRow::attribute).collect();
        assert_eq!(
            attrs,
            vec![
                Attribute::Id,
                Attribute::PhysicalName,
                Attribute::DataType,
                Attribute::Required
            ]
        );
    }
}
