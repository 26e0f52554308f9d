//! Project display command.

use crate::cli::common::{load_project, print_json, CliResult};
use crate::document::ProjectDocument;
use clap::Args;
use std::path::PathBuf;

/// Show a project's theme and section order
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to project file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output the project document as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let document = load_project(&self.file)?;

        if self.json {
            print_json(&document)
        } else {
            print_document(&document);
            Ok(())
        }
    }
}

fn print_document(document: &ProjectDocument) {
    let theme = &document.theme;

    println!("Theme:");
    println!("  Primary color: {}", theme.primary_color);
    println!("  Border radius: {}", theme.border_radius);
    println!("  Style preset:  {}", theme.style_preset);
    println!(
        "  Mode:          {}",
        if theme.dark_mode { "dark" } else { "light" }
    );
    println!("  Font family:   {}", theme.font_family);

    println!("\nLayout ({} sections):", document.layout.len());
    for (idx, section) in document.layout.sections().iter().enumerate() {
        println!("  {:>2}. {:<13} {}", idx + 1, section.kind.as_str(), section.id);
    }

    if let Some(exported_at) = document.exported_at {
        println!("\nExported: {}", exported_at.to_rfc3339());
    }
}
