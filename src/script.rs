//! Line-oriented edit scripts.
//!
//! Each non-blank line is one command; `#` starts a comment line.
//!
//! ```text
//! # warm dark theme with pricing
//! theme primary-color #f97316
//! theme dark on
//! theme radius 16px
//! add pricing
//! remove @2
//! undo
//! redo
//! suggest glassmorphism with a footer
//! ```
//!
//! `remove` takes either a section id or `@N`, the 1-based position of a
//! section at the time the command runs.

use crate::assistant::{request_suggestion, ThemeAdvisor};
use crate::editor::Editor;
use crate::models::{
    is_hex_color, BorderRadius, SectionId, SectionKind, StylePreset, ThemeUpdate,
};
use std::fmt;
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    /// What was wrong
    pub message: String,
}

impl ScriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Which section a `remove` command targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRef {
    /// By identifier
    Id(SectionId),
    /// By 1-based position
    Position(usize),
}

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Merge theme fields
    Theme(ThemeUpdate),
    /// Append a section
    Add(SectionKind),
    /// Remove a section
    Remove(SectionRef),
    /// Step back
    Undo,
    /// Step forward
    Redo,
    /// Ask the advisor and apply its suggestion
    Suggest(String),
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Source line of the command
    pub line: usize,
    /// Whether the live page changed
    pub changed: bool,
    /// Human-readable summary
    pub summary: String,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.changed { "✓" } else { "·" };
        write!(f, "{marker} [{}] {}", self.line, self.summary)
    }
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<(usize, EditCommand)>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands.push((line_no, parse_line(line_no, line)?));
    }

    Ok(commands)
}

/// Parses a single trimmed, non-comment line.
pub fn parse_line(line_no: usize, line: &str) -> Result<EditCommand, ScriptError> {
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim()));

    match verb.to_lowercase().as_str() {
        "undo" => expect_no_args(line_no, "undo", rest).map(|()| EditCommand::Undo),
        "redo" => expect_no_args(line_no, "redo", rest).map(|()| EditCommand::Redo),
        "add" => {
            let kind = rest
                .parse::<SectionKind>()
                .map_err(|e| ScriptError::new(line_no, e.to_string()))?;
            Ok(EditCommand::Add(kind))
        }
        "remove" => parse_remove(line_no, rest),
        "theme" => parse_theme(line_no, rest),
        "suggest" => {
            if rest.is_empty() {
                return Err(ScriptError::new(line_no, "suggest needs a description"));
            }
            Ok(EditCommand::Suggest(rest.to_string()))
        }
        other => Err(ScriptError::new(
            line_no,
            format!("Unknown command '{other}'. Expected theme, add, remove, undo, redo or suggest"),
        )),
    }
}

fn expect_no_args(line_no: usize, verb: &str, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::new(
            line_no,
            format!("{verb} takes no arguments (got '{rest}')"),
        ))
    }
}

fn parse_remove(line_no: usize, rest: &str) -> Result<EditCommand, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::new(line_no, "remove needs a section id or @position"));
    }

    if let Some(position) = rest.strip_prefix('@') {
        let position: usize = position
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                ScriptError::new(line_no, format!("Invalid section position '{rest}'"))
            })?;
        return Ok(EditCommand::Remove(SectionRef::Position(position)));
    }

    Ok(EditCommand::Remove(SectionRef::Id(SectionId::from(rest))))
}

fn parse_theme(line_no: usize, rest: &str) -> Result<EditCommand, ScriptError> {
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .map(|(f, v)| (f, v.trim()))
        .ok_or_else(|| ScriptError::new(line_no, "theme needs a field and a value"))?;

    let update = ThemeUpdate::default();
    let update = match field.to_lowercase().as_str() {
        "primary-color" | "color" => {
            if !is_hex_color(value) {
                return Err(ScriptError::new(
                    line_no,
                    format!("Invalid color '{value}'. Expected #RGB or #RRGGBB"),
                ));
            }
            update.with_primary_color(value.to_lowercase())
        }
        "radius" | "border-radius" => update.with_border_radius(
            value
                .parse::<BorderRadius>()
                .map_err(|e| ScriptError::new(line_no, e.to_string()))?,
        ),
        "preset" | "style" => update.with_style_preset(
            value
                .parse::<StylePreset>()
                .map_err(|e| ScriptError::new(line_no, e.to_string()))?,
        ),
        "dark" | "dark-mode" => update.with_dark_mode(parse_switch(line_no, value)?),
        "font" | "font-family" => update.with_font_family(value),
        other => {
            return Err(ScriptError::new(
                line_no,
                format!(
                    "Unknown theme field '{other}'. Expected primary-color, radius, preset, dark or font"
                ),
            ))
        }
    };

    Ok(EditCommand::Theme(update))
}

fn parse_switch(line_no: usize, value: &str) -> Result<bool, ScriptError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ScriptError::new(
            line_no,
            format!("Expected on/off, got '{value}'"),
        )),
    }
}

impl EditCommand {
    /// Runs the command against `editor`.
    ///
    /// `advisor` is only consulted by `suggest`.
    pub fn apply(&self, editor: &mut Editor, advisor: &dyn ThemeAdvisor) -> (bool, String) {
        match self {
            Self::Theme(update) => {
                let changed = editor.update_theme(update.clone());
                let summary = if changed {
                    "Updated theme".to_string()
                } else {
                    "Theme already matches".to_string()
                };
                (changed, summary)
            }
            Self::Add(kind) => {
                let id = editor.add_section(*kind);
                (true, format!("Added {kind} section ({id})"))
            }
            Self::Remove(target) => {
                let id = match target {
                    SectionRef::Id(id) => Some(id.clone()),
                    SectionRef::Position(pos) => pos
                        .checked_sub(1)
                        .and_then(|idx| editor.snapshot().layout.sections().get(idx))
                        .map(|s| s.id.clone()),
                };
                match id {
                    Some(id) if editor.remove_section(&id) => (true, format!("Removed section {id}")),
                    _ => (false, "No matching section".to_string()),
                }
            }
            Self::Undo => {
                let changed = editor.undo();
                (changed, if changed { "Undo" } else { "Nothing to undo" }.to_string())
            }
            Self::Redo => {
                let changed = editor.redo();
                (changed, if changed { "Redo" } else { "Nothing to redo" }.to_string())
            }
            Self::Suggest(text) => {
                let suggestion = request_suggestion(advisor, text);
                let changed = editor.apply_suggestion(&suggestion);
                let summary = if changed {
                    "Applied suggestion".to_string()
                } else {
                    "No change suggested".to_string()
                };
                (changed, summary)
            }
        }
    }
}

/// Runs parsed commands in order and reports what each did.
pub fn run_script(
    editor: &mut Editor,
    commands: &[(usize, EditCommand)],
    advisor: &dyn ThemeAdvisor,
) -> Vec<StepOutcome> {
    commands
        .iter()
        .map(|(line, command)| {
            let (changed, summary) = command.apply(editor, advisor);
            StepOutcome {
                line: *line,
                changed,
                summary,
            }
        })
        .collect()
}
