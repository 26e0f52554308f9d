//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use pagesmith::models::{
    BorderRadius, Layout, SectionItem, SectionKind, Snapshot, StylePreset, ThemeConfig,
};
use pagesmith::services::ProjectService;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the pagesmith binary
pub fn pagesmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pagesmith")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share config between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(pagesmith_bin());
    cmd.env("PAGESMITH_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Creates a snapshot with deterministic section ids.
///
/// Sections: header (`s1`), hero (`s2`), features (`s3`).
pub fn test_snapshot_basic() -> Snapshot {
    let theme = ThemeConfig {
        primary_color: "#112233".to_string(),
        border_radius: BorderRadius::Medium,
        style_preset: StylePreset::Modern,
        dark_mode: false,
        font_family: "Inter".to_string(),
    };
    let layout = Layout::from(vec![
        SectionItem::with_id("s1", SectionKind::Header),
        SectionItem::with_id("s2", SectionKind::Hero),
        SectionItem::with_id("s3", SectionKind::Features),
    ]);
    Snapshot::new(theme, layout)
}

/// Writes `snapshot` as a project document.
pub fn write_project_file(snapshot: &Snapshot, path: &Path) -> anyhow::Result<()> {
    ProjectService::save(snapshot, path)
}

/// Creates a temp dir holding `page.json` with the given snapshot.
///
/// Keep the returned TempDir alive for as long as the file is needed.
pub fn create_temp_project_file(snapshot: &Snapshot) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("page.json");
    write_project_file(snapshot, &path).expect("Failed to write project file");
    (path, temp_dir)
}

/// Creates a temp dir holding a file with raw content.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Reads a project file back as JSON.
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).expect("Failed to read file");
    serde_json::from_str(&text).expect("File should contain JSON")
}

/// Section types of a project document, in order.
pub fn layout_types(document: &serde_json::Value) -> Vec<String> {
    document["layout"]
        .as_array()
        .expect("layout should be an array")
        .iter()
        .map(|s| s["type"].as_str().unwrap_or_default().to_string())
        .collect()
}
