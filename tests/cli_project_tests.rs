//! End-to-end tests for `pagesmith new`, `show` and `list`.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// New Command Tests
// ============================================================================

#[test]
fn test_new_creates_starter_project() {
    let config_dir = tempfile::TempDir::new().unwrap();
    let path = config_dir.path().join("site").join("landing.json");

    let output = isolated_command(&["new", path.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "New should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let document = read_json(&path);
    assert_eq!(layout_types(&document), vec!["header", "hero", "features"]);
    assert_eq!(document["theme"]["primaryColor"], "#6366f1");
    assert_eq!(document["theme"]["borderRadius"], "8px");
    assert_eq!(document["theme"]["stylePreset"], "modern");
    assert_eq!(document["theme"]["darkMode"], false);
    assert_eq!(document["theme"]["fontFamily"], "Inter");
    assert_eq!(document["version"], "1");
}

#[test]
fn test_new_refuses_to_overwrite_without_force() {
    let (path, _temp_dir) = create_temp_project_file(&test_snapshot_basic());
    let config_dir = tempfile::TempDir::new().unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let output = isolated_command(&["new", path.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
    assert_eq!(before, fs::read_to_string(&path).unwrap());

    let output = isolated_command(
        &["new", path.to_str().unwrap(), "--force"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_json(&path)["theme"]["primaryColor"], "#6366f1");
}

#[test]
fn test_new_applies_configured_defaults() {
    let config_dir = tempfile::TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[defaults]\nprimary_color = \"#0ea5e9\"\nstyle_preset = \"ios\"\ndark_mode = true\n",
    )
    .unwrap();
    let path = config_dir.path().join("page.json");

    let output = isolated_command(&["new", path.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let document = read_json(&path);
    assert_eq!(document["theme"]["primaryColor"], "#0ea5e9");
    assert_eq!(document["theme"]["stylePreset"], "ios");
    assert_eq!(document["theme"]["darkMode"], true);
    assert_eq!(document["theme"]["borderRadius"], "8px");
}

#[test]
fn test_new_bare_name_goes_to_projects_dir() {
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(&["new", "Spring Launch"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let expected = config_dir.path().join("projects").join("spring_launch.json");
    assert!(expected.exists(), "Project should be created in projects dir");
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_human_readable() {
    let (path, _temp_dir) = create_temp_project_file(&test_snapshot_basic());
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(&["show", path.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#112233"));
    assert!(stdout.contains("Layout (3 sections)"));
    assert!(stdout.contains("header"));
    assert!(stdout.contains("s2"));
}

#[test]
fn test_show_json() {
    let (path, _temp_dir) = create_temp_project_file(&test_snapshot_basic());
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(
        &["show", path.to_str().unwrap(), "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let document: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(document["theme"]["primaryColor"], "#112233");
    assert_eq!(layout_types(&document), vec!["header", "hero", "features"]);
}

#[test]
fn test_show_rejects_invalid_project() {
    let (path, _temp_dir) = create_temp_file("page.json", "[1, 2, 3]");
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(&["show", path.to_str().unwrap()], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON object"));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_projects_json() {
    let projects = tempfile::TempDir::new().unwrap();
    let config_dir = tempfile::TempDir::new().unwrap();
    write_project_file(&test_snapshot_basic(), &projects.path().join("alpha.json")).unwrap();
    fs::write(projects.path().join("broken.json"), "{}").unwrap();

    let output = isolated_command(
        &["list", "--dir", projects.path().to_str().unwrap(), "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let entries: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "alpha");
    assert_eq!(entries[0]["valid"], true);
    assert_eq!(entries[0]["sections"], 3);
    assert_eq!(entries[1]["name"], "broken");
    assert_eq!(entries[1]["valid"], false);
}

#[test]
fn test_list_uses_configured_projects_dir() {
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(&["new", "launch"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(&["list"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("launch"));
    assert!(stdout.contains("3 sections"));
}

#[test]
fn test_list_empty_dir() {
    let projects = tempfile::TempDir::new().unwrap();
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(
        &["list", "--dir", projects.path().to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No projects found"));
}
