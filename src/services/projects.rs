//! Project file I/O service.
//!
//! Centralizes reading and writing project documents so every caller gets
//! the same validation, error messages and atomic-write behavior.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::document::ProjectDocument;
use crate::models::Snapshot;

/// File extension used for project documents.
pub const PROJECT_EXTENSION: &str = "json";

/// Service for managing project file I/O.
pub struct ProjectService;

impl ProjectService {
    /// Loads and validates a project document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use pagesmith::services::ProjectService;
    ///
    /// let document = ProjectService::load(Path::new("landing.json"))?;
    /// println!("{} sections", document.layout.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<ProjectDocument> {
        let text = Self::read(path)?;
        ProjectDocument::from_json(&text)
            .with_context(|| format!("Failed to load project from {}", path.display()))
    }

    /// Reads a project file without validating it.
    pub fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))
    }

    /// Saves a snapshot as a project document.
    ///
    /// Writes to a temp file and renames it into place so the target is
    /// never left half-written.
    pub fn save(snapshot: &Snapshot, path: &Path) -> Result<()> {
        let document = ProjectDocument::from_snapshot(snapshot);
        let content = document
            .to_json()
            .context("Failed to serialize project document")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create project directory: {}", parent.display())
            })?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        debug!(path = %path.display(), "Saved project");
        Ok(())
    }

    /// Lists project files in `dir`, sorted by file name.
    ///
    /// A missing directory yields an empty list.
    pub fn list(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read projects directory: {}", dir.display()))?;

        let mut projects = Vec::new();
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            let is_project = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION));
            if is_project {
                projects.push(path);
            }
        }

        projects.sort();
        Ok(projects)
    }

    /// Path for a project called `name` inside `dir`.
    #[must_use]
    pub fn path_for(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{PROJECT_EXTENSION}", sanitize_filename(name)))
    }
}

/// Sanitizes a project name for use as a filename.
///
/// # Examples
///
/// ```
/// # use pagesmith::services::projects::sanitize_filename;
/// assert_eq!(sanitize_filename("Spring Launch"), "spring_launch");
/// assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .replace(['/', '\\', ':', ' '], "_")
        .to_lowercase()
}
