//! Navigation intents.
//!
//! The designer never changes views itself. It emits an intent and the
//! host decides how to get there.

use serde::{Deserialize, Serialize};

/// A view the designer asks the host to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum NavigationIntent {
    Home,
    Viewer,
    Generator,
    EditorForId { id: String },
    EditorNew,
}

impl NavigationIntent {
    pub fn editor_for(id: impl Into<String>) -> Self {
        NavigationIntent::EditorForId { id: id.into() }
    }

    /// Route path for the intent.
    pub fn path(&self) -> String {
        match self {
            NavigationIntent::Home => "/".to_string(),
            NavigationIntent::Viewer => "/design-viewer".to_string(),
            NavigationIntent::Generator => "/specification-creator".to_string(),
            NavigationIntent::EditorForId { id } => {
                format!("/field-editor?fieldId={}", urlencoding::encode(id))
            }
            NavigationIntent::EditorNew => "/field-editor?new=true".to_string(),
        }
    }

    /// Parse a route path. Unknown paths yield `None`.
    ///
    /// A `/field-editor` path without a field id opens a new field.
    pub fn from_path(path: &str) -> Option<Self> {
        let (route, query) = path.split_once('?').unwrap_or((path, ""));
        match route {
            "/" => Some(NavigationIntent::Home),
            "/design-viewer" => Some(NavigationIntent::Viewer),
            "/specification-creator" => Some(NavigationIntent::Generator),
            "/field-editor" => {
                let field_id = query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(k, _)| *k == "fieldId")
                    .and_then(|(_, v)| urlencoding::decode(v).ok())
                    .map(|v| v.into_owned())
                    .filter(|v| !v.is_empty());
                Some(match field_id {
                    Some(id) => NavigationIntent::EditorForId { id },
                    None => NavigationIntent::EditorNew,
                })
            }
            _ => None,
        }
    }
}
