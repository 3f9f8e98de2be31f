//! End-to-end editor sessions against the in-memory collection.

use screenspec_fields::{
    sample_defaults, Attribute, DataType, EditorEvent, EditorOutcome, FieldChange,
    FieldCollection, FieldEditor, FieldStore, FieldsError,
};

fn collection() -> FieldCollection {
    FieldCollection::builder()
        .with_defaults(sample_defaults())
        .build()
        .unwrap()
}

#[test_log::test]
fn create_choice_field_and_upsert() {
    let mut store = collection();
    let mut editor = FieldEditor::new_field();

    editor.set_attribute(Attribute::Id, "prefecture").unwrap();
    editor.set_attribute(Attribute::LogicalName, "都道府県").unwrap();
    editor.set_attribute(Attribute::PhysicalName, "prefecture").unwrap();
    editor.set_attribute(Attribute::DataType, "選択").unwrap();
    assert!(editor.visible_attributes().contains(&Attribute::ValueRange));
    assert!(!editor.visible_attributes().contains(&Attribute::Length));

    for value in ["東京都", " 大阪府 ", "", "北海道"] {
        editor
            .handle(EditorEvent::RangeInput(value.to_string()))
            .unwrap();
        let outcome = editor.handle(EditorEvent::AddPendingRangeValue).unwrap();
        assert_eq!(outcome, EditorOutcome::Editing);
    }
    editor.remove_range_value(0).unwrap();

    let EditorOutcome::Saved(saved) = editor.handle(EditorEvent::Submit).unwrap() else {
        panic!("expected save");
    };
    assert_eq!(saved.value_range().unwrap(), ["大阪府", "北海道"]);

    store.upsert(saved);
    assert_eq!(store.len(), 5);
    assert_eq!(store.list().last().unwrap().id, "prefecture");
}

#[test_log::test]
fn edit_existing_field_replaces_record() {
    let mut store = collection();
    let original = store.get("user_name").cloned().unwrap();
    let mut editor = FieldEditor::edit(&original);

    editor.set_attribute(Attribute::Length, "80").unwrap();
    editor
        .handle(EditorEvent::Change(FieldChange::DataType(DataType::Number)))
        .unwrap();
    let saved = editor.save().unwrap();
    store.upsert(saved);

    let stored = store.get("user_name").unwrap();
    assert_eq!(stored.data_type(), DataType::Number);
    assert_eq!(stored.length(), Some(80));
    assert_eq!(store.len(), 4);
    assert_eq!(original.length(), Some(50));
}

#[test_log::test]
fn out_of_range_removal_reports_precondition() {
    let store = collection();
    let mut editor = FieldEditor::edit(store.get("gender").unwrap());
    let err = editor.remove_range_value(10).unwrap_err();
    assert!(matches!(
        err,
        FieldsError::RangeIndexOutOfBounds { index: 10, len: 3 }
    ));
    assert_eq!(editor.draft().value_range().unwrap().len(), 3);
}
