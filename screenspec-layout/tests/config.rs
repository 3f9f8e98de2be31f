//! Configuration precedence and template table overrides.

use std::fs;
use std::time::Duration;

use screenspec_layout::{DesignerConfig, GenerateRequest, LayoutError, LayoutGenerator};
use serial_test::serial;
use tempfile::TempDir;

const TEMPLATE_TABLE: &str = r#"
default: contact
templates:
  - name: contact
    triggers: [問い合わせ]
    title: お問い合わせ画面
    description: 問い合わせ内容を送信する画面です。
    markup: |-
      <form>
        <div data-field-id="subject"><label>件名</label><input type="text" /></div>
        <div data-field-id="body"><label>本文</label><textarea></textarea></div>
        <button type="submit">送信</button>
      </form>
    fields:
      - id: subject
        logical_name: 件名
        physical_name: subject
        data_type: text
        required: true
      - id: body
        logical_name: 本文
        physical_name: body
        data_type: textarea
"#;

#[test]
#[serial]
fn file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("screenspec.yaml");
    fs::write(&config_path, "generation_latency_ms: 250\n").unwrap();

    let config = DesignerConfig::load(Some(config_path.as_path())).unwrap();
    assert_eq!(config.generation_latency(), Duration::from_millis(250));
    assert!(config.template_file.is_none());
}

#[test]
#[serial]
fn environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("screenspec.yaml");
    fs::write(&config_path, "generation_latency_ms: 250\n").unwrap();

    std::env::set_var("SCREENSPEC_GENERATION_LATENCY_MS", "0");
    let config = DesignerConfig::load(Some(config_path.as_path()));
    std::env::remove_var("SCREENSPEC_GENERATION_LATENCY_MS");

    assert_eq!(config.unwrap().generation_latency(), Duration::ZERO);
}

#[test]
#[serial]
fn missing_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.yaml");
    let config = DesignerConfig::load(Some(absent.as_path())).unwrap();
    assert_eq!(config, DesignerConfig::default());
}

#[test_log::test(tokio::test)]
#[serial]
async fn template_file_replaces_builtin_table() {
    let temp_dir = TempDir::new().unwrap();
    let table_path = temp_dir.path().join("templates.yaml");
    fs::write(&table_path, TEMPLATE_TABLE).unwrap();

    let config = DesignerConfig {
        generation_latency_ms: 0,
        template_file: Some(table_path),
        default_template: None,
    };
    let matcher = config.build_matcher().unwrap();
    let request = GenerateRequest::new("窓口", "商品について").unwrap();
    let layout = matcher.generate(&request).await.unwrap();

    assert_eq!(layout.title, "窓口");
    assert_eq!(layout.field_ids().collect::<Vec<_>>(), vec!["subject", "body"]);
}

#[test]
#[serial]
fn inconsistent_template_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let table_path = temp_dir.path().join("templates.yaml");
    fs::write(
        &table_path,
        TEMPLATE_TABLE.replace(r#"data-field-id="body""#, r#"data-field-id="message""#),
    )
    .unwrap();

    let config = DesignerConfig {
        template_file: Some(table_path),
        ..Default::default()
    };
    let err = config.build_matcher().unwrap_err();
    assert!(matches!(
        err,
        LayoutError::InconsistentTemplate { markup_only, fields_only, .. }
            if markup_only == vec!["message"] && fields_only == vec!["body"]
    ));
}
