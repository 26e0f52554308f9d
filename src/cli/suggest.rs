//! Theme suggestion command.

use crate::assistant::{request_suggestion, AutoConfigSuggestion, CssThemeAdvisor};
use crate::cli::common::{load_project, print_json, CliError, CliResult};
use crate::editor::Editor;
use crate::services::ProjectService;
use clap::Args;
use std::path::PathBuf;

/// Suggest a theme from a description or pasted CSS
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Description or CSS to analyze
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the input from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub from: Option<PathBuf>,

    /// Apply the suggestion to this project and save it
    #[arg(long, value_name = "FILE")]
    pub apply: Option<PathBuf>,

    /// Output the suggestion as JSON
    #[arg(long)]
    pub json: bool,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self) -> CliResult<()> {
        let input = self.read_input()?;
        if input.trim().is_empty() {
            return Err(CliError::validation(
                "Provide text to analyze, or --from with a file",
            ));
        }

        let advisor = CssThemeAdvisor::new()
            .map_err(|e| CliError::io(format!("Failed to initialize theme advisor: {e:#}")))?;
        let suggestion = request_suggestion(&advisor, &input);

        if self.json {
            print_json(&suggestion)?;
        } else {
            print_suggestion(&suggestion);
        }

        if let Some(path) = &self.apply {
            let document = load_project(path)?;
            let mut editor = Editor::from_snapshot(document.into_snapshot());
            if editor.apply_suggestion(&suggestion) {
                ProjectService::save(editor.snapshot(), path)
                    .map_err(|e| CliError::io(format!("Failed to save project: {e:#}")))?;
                if !self.json {
                    println!("\n✓ Applied to {}", path.display());
                }
            } else if !self.json {
                println!("\nNothing to apply; {} unchanged", path.display());
            }
        }

        Ok(())
    }

    fn read_input(&self) -> CliResult<String> {
        match &self.from {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display()))),
            None => Ok(self.text.join(" ")),
        }
    }
}

fn print_suggestion(suggestion: &AutoConfigSuggestion) {
    if suggestion.is_empty() {
        println!("No suggestion for this input");
        return;
    }

    println!("Suggestion:");
    if let Some(color) = &suggestion.primary_color {
        println!("  Primary color: {color}");
    }
    if let Some(radius) = suggestion.border_radius {
        println!("  Border radius: {radius}");
    }
    if let Some(preset) = suggestion.style_preset {
        println!("  Style preset:  {preset}");
    }
    if let Some(dark) = suggestion.dark_mode {
        println!("  Mode:          {}", if dark { "dark" } else { "light" });
    }
    if let Some(font) = &suggestion.font_family {
        println!("  Font family:   {font}");
    }
    if !suggestion.sections.is_empty() {
        let kinds: Vec<_> = suggestion.sections.iter().map(|k| k.as_str()).collect();
        println!("  Sections:      {}", kinds.join(", "));
    }
    if suggestion.primary_color.is_none() {
        println!("  (no primary color found, theme fields will not be applied)");
    }
}
