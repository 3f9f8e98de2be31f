//! Markup inspection.
//!
//! Layout markup tags each field's wrapper element with `data-field-id`.
//! These helpers read that markup back into structured preview regions,
//! without executing or mutating it.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{LayoutError, Result};

/// Attribute that ties a markup element to a field definition.
pub const FIELD_ID_ATTR: &str = "data-field-id";

const REGION_SELECTOR: &str = "[data-field-id]";
const LABEL_SELECTOR: &str = "label";
const MARKER_SELECTOR: &str = "span";
const CONTROL_SELECTOR: &str = "input, select, textarea";
const OPTION_SELECTOR: &str = "option";
const HEADING_SELECTOR: &str = "h1, h2, h3";
const BUTTON_SELECTOR: &str = "button";

/// A form control as drawn in the preview. Controls carry no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "kebab-case")]
pub enum Control {
    Input {
        input_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Select {
        options: Vec<String>,
    },
    TextArea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// A tagged region without a recognised control.
    None,
}

/// One clickable region of a rendered layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRegion {
    pub field_id: String,
    pub label: String,
    /// Whether the label shows the `*` required marker.
    pub required_marker: bool,
    pub control: Control,
}

impl PreviewRegion {
    pub fn new(field_id: impl Into<String>, label: impl Into<String>, control: Control) -> Self {
        Self {
            field_id: field_id.into(),
            label: label.into(),
            required_marker: false,
            control,
        }
    }

    pub fn with_required_marker(mut self) -> Self {
        self.required_marker = true;
        self
    }
}

fn selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| LayoutError::Selector {
        selector: s.to_string(),
        message: e.to_string(),
    })
}

/// Field ids tagged in the markup, in document order.
pub fn field_ids(markup: &str) -> Result<Vec<String>> {
    let fragment = Html::parse_fragment(markup);
    let regions = selector(REGION_SELECTOR)?;
    Ok(fragment
        .select(&regions)
        .filter_map(|el| el.value().attr(FIELD_ID_ATTR))
        .map(str::to_string)
        .collect())
}

/// Compare the ids tagged in markup against a field list.
///
/// Returns `(markup_only, fields_only)`, both sorted. Both empty means the
/// two are consistent.
pub fn id_mismatch<'a>(
    markup: &str,
    field_ids_in_list: impl IntoIterator<Item = &'a str>,
) -> Result<(Vec<String>, Vec<String>)> {
    let in_markup: BTreeSet<String> = field_ids(markup)?.into_iter().collect();
    let in_fields: BTreeSet<String> = field_ids_in_list.into_iter().map(str::to_string).collect();
    let markup_only = in_markup.difference(&in_fields).cloned().collect();
    let fields_only = in_fields.difference(&in_markup).cloned().collect();
    Ok((markup_only, fields_only))
}

/// Read every tagged region of the markup.
pub fn regions(markup: &str) -> Result<Vec<PreviewRegion>> {
    let fragment = Html::parse_fragment(markup);
    let region_sel = selector(REGION_SELECTOR)?;
    let label_sel = selector(LABEL_SELECTOR)?;
    let marker_sel = selector(MARKER_SELECTOR)?;
    let control_sel = selector(CONTROL_SELECTOR)?;
    let option_sel = selector(OPTION_SELECTOR)?;

    let mut out = Vec::new();
    for el in fragment.select(&region_sel) {
        let Some(field_id) = el.value().attr(FIELD_ID_ATTR) else {
            continue;
        };
        let label_el = el.select(&label_sel).next();
        let label = label_el.map(direct_text).unwrap_or_default();
        let required_marker = label_el
            .map(|l| l.select(&marker_sel).any(|s| element_text(s) == "*"))
            .unwrap_or(false);
        let control = el
            .select(&control_sel)
            .next()
            .map(|c| control_of(c, &option_sel))
            .unwrap_or(Control::None);

        trace!(field_id, %label, "read preview region");
        out.push(PreviewRegion {
            field_id: field_id.to_string(),
            label,
            required_marker,
            control,
        });
    }
    Ok(out)
}

/// Text of the first heading, if any.
pub fn heading(markup: &str) -> Result<Option<String>> {
    first_text(markup, HEADING_SELECTOR)
}

/// Text of the first button, if any.
pub fn submit_label(markup: &str) -> Result<Option<String>> {
    first_text(markup, BUTTON_SELECTOR)
}

/// Disabled controls never dispatch `click`, so pointer events must pass
/// through them to the tagged wrapper.
const CLICK_THROUGH_STYLE: &str =
    "<style>[data-field-id] :is(input, select, textarea, button) { pointer-events: none; }</style>";

/// Make the native controls of a layout inert.
///
/// The markup is wrapped in a disabled fieldset, so controls accept no
/// input and cannot submit the form. A scoped style lets clicks on a
/// control fall through to its `data-field-id` wrapper, which stays the
/// selection target.
pub fn inert(markup: &str) -> String {
    format!("{CLICK_THROUGH_STYLE}\n<fieldset disabled class=\"contents\">\n{markup}\n</fieldset>")
}

fn first_text(markup: &str, sel: &str) -> Result<Option<String>> {
    let fragment = Html::parse_fragment(markup);
    let sel = selector(sel)?;
    Ok(fragment
        .select(&sel)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty()))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text nodes directly under an element, so a label's `*` marker is excluded.
fn direct_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|node| node.value().as_text())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn control_of(el: ElementRef<'_>, option_sel: &Selector) -> Control {
    let placeholder = el.value().attr("placeholder").map(str::to_string);
    match el.value().name() {
        "input" => Control::Input {
            input_type: el.value().attr("type").unwrap_or("text").to_string(),
            placeholder,
        },
        "select" => Control::Select {
            options: el.select(option_sel).map(element_text).collect(),
        },
        "textarea" => Control::TextArea { placeholder },
        _ => Control::None,
    }
}
