//! The designer workflow.
//!
//! Joins the viewer's field collection to the editor: editor sessions are
//! opened from navigation intents and saved drafts are upserted back into
//! the collection the viewer reads from.

use tracing::{debug, info};

use screenspec_fields::{
    EditorEvent, EditorOutcome, FieldDefinition, FieldEditor, FieldStore,
};

use crate::error::Result;
use crate::inspector::InspectorPanel;
use crate::layout::GeneratedLayout;
use crate::navigation::NavigationIntent;
use crate::viewer::{LayoutSource, LayoutViewer};

#[derive(Debug, Clone)]
pub struct Designer {
    viewer: LayoutViewer,
}

impl Designer {
    /// Start on the fixed user registration sample.
    pub fn new() -> Result<Self> {
        Ok(Self {
            viewer: LayoutViewer::sample()?,
        })
    }

    pub fn viewer(&self) -> &LayoutViewer {
        &self.viewer
    }

    /// Show a generated layout in the viewer and ask the host to switch to it.
    pub fn show_layout(&mut self, layout: GeneratedLayout) -> Result<NavigationIntent> {
        info!(title = %layout.title, fields = layout.fields.len(), "showing generated layout");
        self.viewer = LayoutViewer::render(LayoutSource::Generated(layout))?;
        Ok(NavigationIntent::Viewer)
    }

    pub fn select(&mut self, element_id: &str) -> Option<&FieldDefinition> {
        self.viewer.select(element_id)
    }

    pub fn inspector(&self) -> InspectorPanel {
        self.viewer.inspector()
    }

    /// Intent to edit the currently inspected field.
    pub fn edit_selected(&self) -> Option<NavigationIntent> {
        self.viewer
            .selected()
            .map(|f| NavigationIntent::editor_for(&f.id))
    }

    /// Open an editor for an editor intent. Other intents yield `None`.
    ///
    /// An id unknown to the collection opens a blank new field.
    pub fn open_editor(&self, intent: &NavigationIntent) -> Option<FieldEditor> {
        match intent {
            NavigationIntent::EditorForId { id } => Some(match self.viewer.fields().get(id) {
                Some(field) => FieldEditor::edit(field),
                None => {
                    debug!(%id, "no field to edit, starting a new one");
                    FieldEditor::new_field()
                }
            }),
            NavigationIntent::EditorNew => Some(FieldEditor::new_field()),
            _ => None,
        }
    }

    /// Route an editor event. Saving upserts the draft.
    ///
    /// Returns the view to go to once the session ends, or `None` while it
    /// is still editing. An incomplete draft fails with a validation error
    /// and the session stays open.
    pub fn handle_editor_event(
        &mut self,
        editor: &mut FieldEditor,
        event: EditorEvent,
    ) -> Result<Option<NavigationIntent>> {
        match editor.handle(event)? {
            EditorOutcome::Editing => Ok(None),
            EditorOutcome::Saved(field) => {
                self.viewer.fields_mut().upsert(field);
                Ok(Some(NavigationIntent::Viewer))
            }
            EditorOutcome::Cancelled => Ok(Some(NavigationIntent::Viewer)),
        }
    }
}
