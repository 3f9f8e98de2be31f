//! Built-in field definitions for the user registration sample screen.

use crate::store::FieldDefaults;
use crate::types::{FieldDefinition, FieldKind};

/// The hand-authored user registration fields, in screen order.
pub fn sample_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("user_name", "ユーザー名", "user_name")
            .with_kind(FieldKind::Text { length: Some(50) })
            .with_required(true)
            .with_input_format("全角・半角文字")
            .with_remarks("ログイン時に表示される名前"),
        FieldDefinition::new("email", "メールアドレス", "email")
            .with_kind(FieldKind::Text { length: Some(100) })
            .with_required(true)
            .with_input_format("email形式")
            .with_remarks("ログイン認証に使用"),
        FieldDefinition::new("birth_date", "生年月日", "birth_date")
            .with_kind(FieldKind::Date)
            .with_input_format("YYYY/MM/DD")
            .with_remarks("年齢計算に使用"),
        FieldDefinition::new("gender", "性別", "gender")
            .with_kind(FieldKind::Choice {
                value_range: vec!["男性".into(), "女性".into(), "その他".into()],
            })
            .with_remarks("統計情報として使用"),
    ]
}

/// [`sample_fields`] as collection defaults.
pub fn sample_defaults() -> FieldDefaults {
    sample_fields()
        .into_iter()
        .fold(FieldDefaults::new(), FieldDefaults::field)
}
