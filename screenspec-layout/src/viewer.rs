//! Layout viewer and selection state.
//!
//! The viewer draws a layout as an inert preview and keeps the id of the
//! currently inspected field. That id is the single source the inspector
//! panel reads from.

use serde::Serialize;
use tracing::{debug, warn};

use screenspec_fields::{FieldCollection, FieldDefinition, FieldStore};

use crate::error::Result;
use crate::inspector::InspectorPanel;
use crate::layout::GeneratedLayout;
use crate::markup::{self, PreviewRegion};
use crate::sample::FixedSampleLayout;

/// What the viewer can draw.
#[derive(Debug, Clone)]
pub enum LayoutSource {
    Generated(GeneratedLayout),
    Sample(FixedSampleLayout),
}

/// A layout prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLayout {
    pub title: String,
    pub description: Option<String>,
    pub heading: Option<String>,
    /// Selectable regions in document order.
    pub regions: Vec<PreviewRegion>,
    pub submit_label: Option<String>,
    /// Source markup, when the layout came from a template.
    pub markup: Option<String>,
}

impl RenderedLayout {
    fn from_generated(layout: &GeneratedLayout) -> Result<Self> {
        Ok(Self {
            title: layout.title.clone(),
            description: Some(layout.description.clone()),
            heading: markup::heading(&layout.markup)?,
            regions: markup::regions(&layout.markup)?,
            submit_label: markup::submit_label(&layout.markup)?,
            markup: Some(layout.markup.clone()),
        })
    }

    fn from_sample(sample: &FixedSampleLayout) -> Self {
        Self {
            title: sample.title.clone(),
            description: None,
            heading: Some(sample.heading.clone()),
            regions: sample.regions.clone(),
            submit_label: Some(sample.submit_label.clone()),
            markup: None,
        }
    }

    /// Page heading, e.g. `画面設計書 - 商品登録`.
    pub fn page_title(&self) -> String {
        format!("画面設計書 - {}", self.title)
    }

    /// Markup with every native control disabled and click-through.
    pub fn inert_markup(&self) -> Option<String> {
        self.markup.as_deref().map(markup::inert)
    }
}

/// A rendered layout, its field collection and the current selection.
#[derive(Debug, Clone)]
pub struct LayoutViewer {
    rendered: RenderedLayout,
    fields: FieldCollection,
    selected: Option<String>,
}

impl LayoutViewer {
    /// Render a layout with a collection seeded from its own fields.
    pub fn render(source: LayoutSource) -> Result<Self> {
        let (rendered, fields) = match &source {
            LayoutSource::Generated(layout) => (
                RenderedLayout::from_generated(layout)?,
                layout.field_collection()?,
            ),
            LayoutSource::Sample(sample) => (
                RenderedLayout::from_sample(sample),
                FieldCollection::from_fields(sample.fields.clone())?,
            ),
        };
        debug!(
            title = %rendered.title,
            regions = rendered.regions.len(),
            fields = fields.len(),
            "layout rendered"
        );
        Ok(Self::with_fields(rendered, fields))
    }

    /// The fixed user registration sample.
    pub fn sample() -> Result<Self> {
        Self::render(LayoutSource::Sample(FixedSampleLayout::user_registration()))
    }

    /// Pair an already rendered layout with an externally owned collection.
    pub fn with_fields(rendered: RenderedLayout, fields: FieldCollection) -> Self {
        Self {
            rendered,
            fields,
            selected: None,
        }
    }

    pub fn rendered(&self) -> &RenderedLayout {
        &self.rendered
    }

    /// Resolve a clicked element id against the collection.
    ///
    /// An unknown id clears the selection; it is not an error.
    pub fn select(&mut self, element_id: &str) -> Option<&FieldDefinition> {
        if self.fields.contains(element_id) {
            debug!(id = element_id, "field selected");
            self.selected = Some(element_id.to_string());
        } else {
            warn!(id = element_id, "selected element has no field definition");
            self.selected = None;
        }
        self.selected()
    }

    /// The currently inspected field.
    pub fn selected(&self) -> Option<&FieldDefinition> {
        self.selected.as_deref().and_then(|id| self.fields.get(id))
    }

    pub fn inspector(&self) -> InspectorPanel {
        InspectorPanel::project(self.selected())
    }

    pub fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldCollection {
        &mut self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateTable;
    use screenspec_fields::{Attribute, FieldKind};

    #[test]
    fn sample_viewer_selects_known_ids() {
        let mut viewer = LayoutViewer::sample().unwrap();
        assert_eq!(viewer.rendered().page_title(), "画面設計書 - ユーザー登録画面");
        assert!(viewer.inspector().is_empty());

        let field = viewer.select("gender").unwrap();
        assert_eq!(field.logical_name, "性別");
        assert_eq!(viewer.inspector().title(), Some("性別"));
    }

    #[test]
    fn unknown_id_clears_selection() {
        let mut viewer = LayoutViewer::sample().unwrap();
        viewer.select("email");
        assert!(viewer.select("zip_code").is_none());
        assert!(viewer.selected().is_none());
        assert!(viewer.inspector().is_empty());
    }

    #[test]
    fn selection_reflects_upserted_record() {
        let mut viewer = LayoutViewer::sample().unwrap();
        viewer.select("user_name");
        let updated = viewer
            .fields()
            .get("user_name")
            .cloned()
            .unwrap()
            .with_kind(FieldKind::Text { length: Some(20) });
        viewer.fields_mut().upsert(updated);
        assert_eq!(viewer.selected().unwrap().length(), Some(20));
        assert!(viewer.inspector().row(Attribute::Length).is_some());
    }

    #[test]
    fn generated_layout_regions_come_from_markup() {
        let table = TemplateTable::builtin().unwrap();
        let layout = table.get("product_registration").unwrap().instantiate("商品登録");
        let viewer = LayoutViewer::render(LayoutSource::Generated(layout)).unwrap();
        let rendered = viewer.rendered();

        assert_eq!(rendered.heading.as_deref(), Some("商品登録"));
        assert_eq!(rendered.submit_label.as_deref(), Some("商品を登録"));
        let ids: Vec<_> = rendered.regions.iter().map(|r| r.field_id.as_str()).collect();
        assert_eq!(ids, vec!["product_name", "price", "category", "description", "image"]);
        assert!(rendered.regions[1].required_marker);
        let inert = rendered.inert_markup().unwrap();
        assert!(inert.contains("<fieldset disabled"));
        assert!(inert.contains("pointer-events: none"));
        assert_eq!(viewer.fields().len(), 5);
    }
}
