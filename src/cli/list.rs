//! Project listing command.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::services::ProjectService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List projects in the projects directory
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Directory to scan instead of the configured projects directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the listing.
#[derive(Debug, Serialize)]
struct ProjectEntry {
    name: String,
    path: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style_preset: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => load_config()?
                .projects_dir()
                .map_err(|e| CliError::io(format!("Failed to resolve projects directory: {e:#}")))?,
        };

        let paths = ProjectService::list(&dir).map_err(|e| CliError::io(format!("{e:#}")))?;

        let entries: Vec<ProjectEntry> = paths
            .iter()
            .map(|path| {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let document = ProjectService::load(path).ok();
                ProjectEntry {
                    name,
                    path: path.display().to_string(),
                    valid: document.is_some(),
                    sections: document.as_ref().map(|d| d.layout.len()),
                    style_preset: document
                        .as_ref()
                        .map(|d| d.theme.style_preset.to_string()),
                }
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        if entries.is_empty() {
            println!("No projects found in {}", dir.display());
            return Ok(());
        }

        println!("Projects in {}:", dir.display());
        for entry in &entries {
            match (entry.sections, &entry.style_preset) {
                (Some(sections), Some(preset)) => {
                    println!("  {:<24} {sections} sections, {preset}", entry.name);
                }
                _ => println!("  {:<24} ✗ invalid", entry.name),
            }
        }
        Ok(())
    }
}
