//! Validation command for project files.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::document::{ImportError, ProjectDocument};
use crate::models::is_hex_color;
use crate::services::ProjectService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a project file before importing it
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to project file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Per-area check status: "passed", "warning" or "failed".
#[derive(Debug, Serialize)]
pub struct ValidationChecks {
    /// Document shape (JSON object with theme and layout)
    pub structure: String,
    /// Theme values
    pub theme: String,
    /// Layout sections
    pub sections: String,
}

impl ValidationChecks {
    fn all_passed() -> Self {
        Self {
            structure: "passed".to_string(),
            theme: "passed".to_string(),
            sections: "passed".to_string(),
        }
    }
}

/// One problem found in the file.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Description
    pub message: String,
}

/// Full validation report.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True if the file can be imported
    pub valid: bool,
    /// Section count when the file parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<usize>,
    /// Errors and warnings
    pub errors: Vec<ValidationMessage>,
    /// Per-area status
    pub checks: ValidationChecks,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let text = ProjectService::read(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;
        let response = build_response(&text);

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Structure: {}", response.checks.structure);
            println!("  Theme:     {}", response.checks.theme);
            println!("  Sections:  {}", response.checks.sections);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" { "  ✗" } else { "  ⚠" };
                    println!("{prefix} {}", msg.message);
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && response.errors.iter().any(|m| m.severity == "warning") {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

/// Checks `text` the same way an import would, then looks for values that
/// import accepts but are probably mistakes.
pub fn build_response(text: &str) -> ValidationResponse {
    let mut checks = ValidationChecks::all_passed();
    let mut messages = Vec::new();

    let document = match ProjectDocument::from_json(text) {
        Ok(document) => document,
        Err(err) => {
            match &err {
                ImportError::Malformed { field, .. } if *field == "theme" => {
                    checks.theme = "failed".to_string();
                }
                ImportError::Malformed { .. } => checks.sections = "failed".to_string(),
                _ => checks.structure = "failed".to_string(),
            }
            messages.push(ValidationMessage {
                severity: "error".to_string(),
                message: err.to_string(),
            });
            return ValidationResponse {
                valid: false,
                sections: None,
                errors: messages,
                checks,
            };
        }
    };

    if !is_hex_color(&document.theme.primary_color) {
        checks.theme = "warning".to_string();
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message: format!(
                "Primary color '{}' is not a hex color",
                document.theme.primary_color
            ),
        });
    }

    if document.theme.font_family.trim().is_empty() {
        checks.theme = "warning".to_string();
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message: "Font family is empty".to_string(),
        });
    }

    if document.layout.is_empty() {
        checks.sections = "warning".to_string();
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message: "Layout has no sections".to_string(),
        });
    }

    for (idx, section) in document.layout.sections().iter().enumerate() {
        if section.kind.is_reserved() {
            checks.sections = "warning".to_string();
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                message: format!(
                    "Section {} uses reserved type '{}'",
                    idx + 1,
                    section.kind
                ),
            });
        }
    }

    let mut seen = std::collections::HashSet::new();
    for section in document.layout.sections() {
        if !seen.insert(section.id.as_str()) {
            checks.sections = "warning".to_string();
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                message: format!("Duplicate section id '{}'", section.id),
            });
        }
    }

    ValidationResponse {
        valid: true,
        sections: Some(document.layout.len()),
        errors: messages,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let text = r##"{"theme":{"primaryColor":"#112233","borderRadius":"8px","stylePreset":"clay","darkMode":false,"fontFamily":"Inter"},
            "layout":[{"id":"a","type":"header"},{"id":"b","type":"footer"}]}"##;
        let response = build_response(text);
        assert!(response.valid);
        assert_eq!(response.sections, Some(2));
        assert!(response.errors.is_empty());
        assert_eq!(response.checks.sections, "passed");
    }

    #[test]
    fn test_missing_layout_fails_structure() {
        let response = build_response(r#"{"theme":{}}"#);
        assert!(!response.valid);
        assert_eq!(response.checks.structure, "failed");
    }

    #[test]
    fn test_unknown_section_type_fails_sections() {
        let text = r##"{"theme":{"primaryColor":"#112233","borderRadius":"8px","stylePreset":"clay","darkMode":false,"fontFamily":"Inter"},
            "layout":[{"id":"a","type":"banner"}]}"##;
        let response = build_response(text);
        assert!(!response.valid);
        assert_eq!(response.checks.sections, "failed");
    }

    #[test]
    fn test_reserved_and_duplicate_sections_warn() {
        let text = r##"{"theme":{"primaryColor":"tomato","borderRadius":"8px","stylePreset":"clay","darkMode":false,"fontFamily":"Inter"},
            "layout":[{"id":"a","type":"cta"},{"id":"a","type":"hero"}]}"##;
        let response = build_response(text);
        assert!(response.valid);
        assert_eq!(response.checks.theme, "warning");
        assert_eq!(response.checks.sections, "warning");
        assert_eq!(response.errors.len(), 3);
    }
}
