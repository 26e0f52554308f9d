//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, DefaultsConfig, EditorConfig};
use crate::models::{is_hex_color, BorderRadius, StylePreset};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory for projects created by name
    #[arg(long, value_name = "DIR")]
    projects_dir: Option<PathBuf>,

    /// Default primary color for new projects (#RGB or #RRGGBB)
    #[arg(long, value_name = "HEX")]
    primary_color: Option<String>,

    /// Default style preset for new projects
    #[arg(long, value_name = "PRESET")]
    preset: Option<String>,

    /// Default border radius for new projects (0px, 4px, 8px, 16px, 24px, 99px)
    #[arg(long, value_name = "RADIUS")]
    radius: Option<String>,

    /// Start new projects in dark mode
    #[arg(long, value_name = "BOOL")]
    dark: Option<bool>,

    /// Default font family for new projects
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Number of undo steps kept while editing (1-30)
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    defaults: DefaultsConfig,
    editor: EditorConfig,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    projects_dir: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config)
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.projects_dir.is_none()
            && self.primary_color.is_none()
            && self.preset.is_none()
            && self.radius.is_none()
            && self.dark.is_none()
            && self.font.is_none()
            && self.history_limit.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --projects-dir, \
                 --primary-color, --preset, --radius, --dark, --font, or --history-limit",
            ));
        }

        let mut config = load_config()?;

        if let Some(path) = &self.projects_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create projects directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.projects_dir = Some(path.clone());
        }

        if let Some(color) = &self.primary_color {
            if !is_hex_color(color) {
                return Err(CliError::validation(format!(
                    "Invalid primary color '{color}'. Expected #RGB or #RRGGBB"
                )));
            }
            config.defaults.primary_color = Some(color.to_lowercase());
        }

        if let Some(preset) = &self.preset {
            let preset: StylePreset = preset
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config.defaults.style_preset = Some(preset);
        }

        if let Some(radius) = &self.radius {
            let radius: BorderRadius = radius
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config.defaults.border_radius = Some(radius);
        }

        if let Some(dark) = self.dark {
            config.defaults.dark_mode = Some(dark);
        }

        if let Some(font) = &self.font {
            config.defaults.font_family = Some(font.trim().to_string());
        }

        if let Some(limit) = self.history_limit {
            config.editor.history_limit = limit;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("{e:#}")))?
        .display()
        .to_string();
    let projects_dir = config
        .projects_dir()
        .map_err(|e| CliError::io(format!("{e:#}")))?
        .display()
        .to_string();

    print_json(&ConfigOutput {
        config_file,
        paths: PathsOutput { projects_dir },
        defaults: config.defaults.clone(),
        editor: config.editor.clone(),
    })
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    let projects_dir = config
        .projects_dir()
        .map_err(|e| CliError::io(format!("{e:#}")))?;
    let defaults = &config.defaults;
    let or_builtin = |value: Option<String>| value.unwrap_or_else(|| "(built-in)".to_string());

    println!("Pagesmith Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    println!("  Projects Directory: {}", projects_dir.display());
    println!();

    println!("Defaults:");
    println!("  Primary Color: {}", or_builtin(defaults.primary_color.clone()));
    println!(
        "  Border Radius: {}",
        or_builtin(defaults.border_radius.map(|r| r.to_string()))
    );
    println!(
        "  Style Preset:  {}",
        or_builtin(defaults.style_preset.map(|p| p.to_string()))
    );
    println!(
        "  Dark Mode:     {}",
        or_builtin(defaults.dark_mode.map(|d| d.to_string()))
    );
    println!("  Font Family:   {}", or_builtin(defaults.font_family.clone()));
    println!();

    println!("Editor:");
    println!("  History Limit: {}", config.editor.history_limit);
    println!();

    Ok(())
}
