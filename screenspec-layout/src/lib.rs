//! Layout generation, viewing and inspection
//!
//! `screenspec-layout` turns a screen title and free-text requirements into
//! a [`GeneratedLayout`], renders layouts as inert previews and projects
//! the selected field into an [`InspectorPanel`].
//!
//! # Architecture
//!
//! - **Injectable templates**: [`TemplateTable`] is data loaded from YAML; the matcher only selects
//! - **Latest-only generation**: [`GenerationSession`] applies a result only for the newest request token
//! - **Markup join**: layout regions carry `data-field-id`, resolved against a [`FieldCollection`](screenspec_fields::FieldCollection)
//! - **Intents, not routing**: the [`Designer`] returns [`NavigationIntent`]s for the host to act on

pub mod config;
pub mod designer;
pub mod error;
pub mod export;
pub mod inspector;
pub mod layout;
pub mod markup;
pub mod matcher;
pub mod navigation;
pub mod sample;
pub mod session;
pub mod template;
pub mod viewer;

pub use config::DesignerConfig;
pub use designer::Designer;
pub use error::{LayoutError, Result};
pub use export::{export_as_file, export_filename, ExportFile, HTML_MIME_TYPE};
pub use inspector::{Badge, BadgeVariant, DetailRow, InspectorPanel, EMPTY_PROMPT};
pub use layout::{FieldCard, GenerateRequest, GeneratedLayout};
pub use markup::{Control, PreviewRegion, FIELD_ID_ATTR};
pub use matcher::{LayoutGenerator, TemplateMatcher, DEFAULT_LATENCY};
pub use navigation::NavigationIntent;
pub use sample::FixedSampleLayout;
pub use session::{GenerationSession, RequestToken};
pub use template::{LayoutTemplate, TemplateTable};
pub use viewer::{LayoutSource, LayoutViewer, RenderedLayout};
