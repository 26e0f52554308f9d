//! Scripted editing command.
//!
//! Runs an edit script against a project in a single session, so `undo`
//! and `redo` lines see every earlier command in the same script.

use crate::assistant::CssThemeAdvisor;
use crate::cli::common::{load_config, load_project, print_json, CliError, CliResult};
use crate::editor::Editor;
use crate::script::{parse_script, run_script, StepOutcome};
use crate::services::ProjectService;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Apply an edit script to a project
#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Path to project file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Script file to run (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Write the result here instead of back to FILE
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the script without saving
    #[arg(long)]
    pub dry_run: bool,

    /// Output a JSON report
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StepReport {
    line: usize,
    changed: bool,
    summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditReport {
    steps: Vec<StepReport>,
    undo_depth: usize,
    redo_depth: usize,
    saved_to: Option<String>,
}

impl EditArgs {
    /// Execute the edit command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let document = load_project(&self.file)?;
        let script = self.read_script()?;

        let commands = parse_script(&script)
            .map_err(|e| CliError::validation(format!("Invalid edit script: {e}")))?;

        let advisor = CssThemeAdvisor::new()
            .map_err(|e| CliError::io(format!("Failed to initialize theme advisor: {e:#}")))?;

        let mut editor =
            Editor::with_history_limit(document.into_snapshot(), config.editor.history_limit);
        let outcomes = run_script(&mut editor, &commands, &advisor);
        info!(
            commands = commands.len(),
            changed = outcomes.iter().filter(|o| o.changed).count(),
            "Ran edit script"
        );

        let target = self.output.as_ref().unwrap_or(&self.file);
        let saved_to = if self.dry_run {
            None
        } else {
            ProjectService::save(editor.snapshot(), target)
                .map_err(|e| CliError::io(format!("Failed to save project: {e:#}")))?;
            Some(target.display().to_string())
        };

        if self.json {
            let report = EditReport {
                steps: outcomes.iter().map(StepReport::from).collect(),
                undo_depth: editor.history().past_len(),
                redo_depth: editor.history().future_len(),
                saved_to,
            };
            return print_json(&report);
        }

        for outcome in &outcomes {
            println!("{outcome}");
        }
        println!(
            "\n{} commands, {} changed the page (undo depth {}, redo depth {})",
            outcomes.len(),
            outcomes.iter().filter(|o| o.changed).count(),
            editor.history().past_len(),
            editor.history().future_len()
        );
        match saved_to {
            Some(path) => println!("✓ Saved: {path}"),
            None => println!("Dry run: nothing written"),
        }

        Ok(())
    }

    fn read_script(&self) -> CliResult<String> {
        match &self.script {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read script {}: {e}", path.display()))
            }),
            None => {
                let mut script = String::new();
                std::io::stdin()
                    .read_to_string(&mut script)
                    .map_err(|e| CliError::io(format!("Failed to read script from stdin: {e}")))?;
                Ok(script)
            }
        }
    }
}

impl From<&StepOutcome> for StepReport {
    fn from(outcome: &StepOutcome) -> Self {
        Self {
            line: outcome.line,
            changed: outcome.changed,
            summary: outcome.summary.clone(),
        }
    }
}
