//! The hand-authored user registration design.

use serde::Serialize;

use screenspec_fields::{sample_fields, FieldDefinition};

use crate::markup::{Control, PreviewRegion};

/// A fixed layout described by structured regions instead of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedSampleLayout {
    pub title: String,
    pub heading: String,
    pub regions: Vec<PreviewRegion>,
    pub submit_label: String,
    pub fields: Vec<FieldDefinition>,
}

impl FixedSampleLayout {
    pub fn user_registration() -> Self {
        let regions = vec![
            PreviewRegion::new(
                "user_name",
                "ユーザー名",
                Control::Input {
                    input_type: "text".into(),
                    placeholder: Some("山田太郎".into()),
                },
            )
            .with_required_marker(),
            PreviewRegion::new(
                "email",
                "メールアドレス",
                Control::Input {
                    input_type: "email".into(),
                    placeholder: Some("yamada@example.com".into()),
                },
            )
            .with_required_marker(),
            PreviewRegion::new(
                "birth_date",
                "生年月日",
                Control::Input {
                    input_type: "date".into(),
                    placeholder: None,
                },
            ),
            PreviewRegion::new(
                "gender",
                "性別",
                Control::Select {
                    options: vec![
                        "選択してください".into(),
                        "男性".into(),
                        "女性".into(),
                        "その他".into(),
                    ],
                },
            ),
        ];

        Self {
            title: "ユーザー登録画面".into(),
            heading: "ユーザー登録".into(),
            regions,
            submit_label: "登録".into(),
            fields: sample_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_a_field() {
        let sample = FixedSampleLayout::user_registration();
        let region_ids: Vec<_> = sample.regions.iter().map(|r| r.field_id.as_str()).collect();
        let field_ids: Vec<_> = sample.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(region_ids, field_ids);
    }

    #[test]
    fn required_markers_follow_fields() {
        let sample = FixedSampleLayout::user_registration();
        for (region, field) in sample.regions.iter().zip(&sample.fields) {
            assert_eq!(region.required_marker, field.required, "{}", field.id);
        }
    }
}
