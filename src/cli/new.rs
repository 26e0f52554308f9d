//! Project creation command.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::models::Snapshot;
use crate::services::ProjectService;
use clap::Args;
use std::path::{Path, PathBuf};

/// Create a new project with the starter layout
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Project file, or a bare name to create it in the projects directory
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let path = resolve_target(&self.file, &config)?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Project already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let mut snapshot = Snapshot::starter();
        snapshot.set_theme_fields(config.defaults.theme_update());

        ProjectService::save(&snapshot, &path)
            .map_err(|e| CliError::io(format!("Failed to create project: {e:#}")))?;

        println!("✓ Created project: {}", path.display());
        println!(
            "  Sections: {}",
            snapshot
                .layout
                .kinds()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }
}

/// A bare name such as `launch` lands in the projects directory as
/// `launch.json`; anything that looks like a path is used as given.
fn resolve_target(file: &Path, config: &Config) -> CliResult<PathBuf> {
    let is_bare_name = file.extension().is_none()
        && file.parent().is_none_or(|p| p.as_os_str().is_empty());

    if !is_bare_name {
        return Ok(file.to_path_buf());
    }

    let dir = config
        .projects_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve projects directory: {e:#}")))?;
    Ok(ProjectService::path_for(&dir, &file.to_string_lossy()))
}
