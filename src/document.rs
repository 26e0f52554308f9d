//! Project documents: the exported/imported form of a page configuration.
//!
//! A document is a JSON object carrying a `theme` and a `layout`:
//!
//! ```json
//! {
//!   "version": "1",
//!   "theme": { "primaryColor": "#6366f1", "borderRadius": "8px", ... },
//!   "layout": [ { "id": "...", "type": "header" }, ... ]
//! }
//! ```
//!
//! Imports are validated structurally before they are handed to the
//! editor, so a malformed file can never partially replace the live page.

use crate::models::{Layout, Snapshot, ThemeConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current document format version.
pub const DOCUMENT_VERSION: &str = "1";

/// Reasons an import is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input is not valid JSON
    #[error("Document is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Top-level value is not an object
    #[error("Document must be a JSON object")]
    NotAnObject,

    /// A required top-level field is absent or null
    #[error("Document is missing required field '{0}'")]
    MissingField(&'static str),

    /// A required field is present but has the wrong shape
    #[error("Document field '{field}' is malformed: {source}")]
    Malformed {
        /// Field that failed to decode
        field: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

/// Serializable project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    /// Format version
    #[serde(default = "default_version")]
    pub version: String,
    /// When the document was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Theme settings
    pub theme: ThemeConfig,
    /// Sections in render order
    pub layout: Layout,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl ProjectDocument {
    /// Wraps a copy of `snapshot`, stamped with the current time.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            version: default_version(),
            exported_at: Some(Utc::now()),
            theme: snapshot.theme.clone(),
            layout: snapshot.layout.clone(),
        }
    }

    /// Unwraps the configuration carried by this document.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(self.theme, self.layout)
    }

    /// Parses and validates a document.
    ///
    /// Both `theme` and `layout` must be present; a document missing either
    /// is rejected with [`ImportError::MissingField`].
    pub fn from_json(text: &str) -> Result<Self, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
        let mut object = match value {
            serde_json::Value::Object(object) => object,
            _ => return Err(ImportError::NotAnObject),
        };

        let theme = take_field(&mut object, "theme")?;
        let layout = take_field(&mut object, "layout")?;

        let theme: ThemeConfig = serde_json::from_value(theme)
            .map_err(|source| ImportError::Malformed { field: "theme", source })?;
        let layout: Layout = serde_json::from_value(layout)
            .map_err(|source| ImportError::Malformed { field: "layout", source })?;

        let version = match object.remove("version") {
            Some(serde_json::Value::String(v)) => v,
            _ => default_version(),
        };
        let exported_at = object
            .remove("exportedAt")
            .and_then(|v| serde_json::from_value(v).ok());

        Ok(Self {
            version,
            exported_at,
            theme,
            layout,
        })
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Removes a required field, treating `null` as absent.
fn take_field(
    object: &mut serde_json::Map<String, serde_json::Value>,
    field: &'static str,
) -> Result<serde_json::Value, ImportError> {
    match object.remove(field) {
        None | Some(serde_json::Value::Null) => Err(ImportError::MissingField(field)),
        Some(value) => Ok(value),
    }
}
