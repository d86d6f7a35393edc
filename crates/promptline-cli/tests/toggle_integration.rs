//! Integration tests for the toggle/list/probe commands.
//!
//! These tests run the application use cases against real theme files in
//! temporary directories: `FileConfigStore` + `TerminalStatus` + use case.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use promptline_cli::application::ports::{ConfigStore, ToggleError};
use promptline_cli::application::probe_segment::ProbeSegmentUseCase;
use promptline_cli::application::toggle_segment::{
    ToggleOutcome, ToggleRequest, ToggleSegmentUseCase,
};
use promptline_cli::infrastructure::storage::config::FileConfigStore;
use promptline_cli::infrastructure::terminal::TerminalStatus;
use promptline_core::{Document, FakeEnvironment, SegmentType};
use tempfile::TempDir;

const AWS_SPOTIFY: &str = r##"final_space: true
blocks:
  - type: prompt
    alignment: left
    segments:
      - type: aws
        enabled: true
        style: powerline
        foreground: "#ffffff"
        background: "#FFA400"
      - type: spotify
        enabled: false
        style: plain
"##;

fn theme(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write theme");
    path
}

fn run(store: &FileConfigStore, request: ToggleRequest) -> (Result<ToggleOutcome, ToggleError>, String) {
    let mut status = TerminalStatus::new(Vec::new(), false);
    let result = ToggleSegmentUseCase::new(store).execute(request, &mut status);
    let output = String::from_utf8(status.into_inner()).expect("utf-8 output");
    (result, output)
}

fn states(document: &Document) -> Vec<(SegmentType, bool)> {
    document
        .segments()
        .map(|s| (s.segment_type(), s.is_enabled()))
        .collect()
}

#[test]
fn test_toggle_spotify_turns_it_on_and_persists() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(&dir, "theme.omp.yaml", AWS_SPOTIFY));

    // Act
    let (result, output) = run(&store, ToggleRequest::Toggle(SegmentType::Spotify));

    // Assert
    assert!(result.is_ok());
    assert_eq!(output, "Spotify segment turned ON.\n");
    let reloaded = store.load().expect("reload");
    assert_eq!(
        states(&reloaded),
        vec![(SegmentType::Aws, true), (SegmentType::Spotify, true)]
    );
}

#[test]
fn test_toggle_keeps_parameters_and_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(&dir, "theme.yaml", AWS_SPOTIFY));
    let original = store.load().unwrap();

    let (result, _) = run(&store, ToggleRequest::Toggle(SegmentType::Aws));
    assert!(result.is_ok());

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.settings, original.settings);
    assert_eq!(reloaded.blocks[0].properties, original.blocks[0].properties);
    for (before, after) in original.segments().zip(reloaded.segments()) {
        assert_eq!(before.segment_type(), after.segment_type());
        assert_eq!(before.properties(), after.properties());
    }
    assert!(!reloaded.blocks[0].segments[0].is_enabled());
}

#[test]
fn test_toggle_twice_restores_file_contents_semantically() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(&dir, "theme.yaml", AWS_SPOTIFY));
    let original = store.load().unwrap();

    run(&store, ToggleRequest::Toggle(SegmentType::Spotify)).0.unwrap();
    run(&store, ToggleRequest::Toggle(SegmentType::Spotify)).0.unwrap();

    assert_eq!(store.load().unwrap(), original);
}

#[test]
fn test_toggle_missing_segment_leaves_file_untouched() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = theme(&dir, "theme.yaml", AWS_SPOTIFY);
    let store = FileConfigStore::new(&path);

    // Act
    let (result, output) = run(&store, ToggleRequest::Toggle(SegmentType::Weather));

    // Assert
    assert!(matches!(result, Err(ToggleError::SegmentNotFound(_))));
    assert_eq!(output, "");
    assert_eq!(fs::read_to_string(&path).unwrap(), AWS_SPOTIFY);
}

#[test]
fn test_list_ordered_prints_enabled_first_then_by_name() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let content = r#"{
  "blocks": [
    { "segments": [
      { "type": "battery", "enabled": false },
      { "type": "aws", "enabled": true },
      { "type": "git", "enabled": true }
    ] }
  ]
}"#;
    let path = theme(&dir, "theme.json", content);
    let store = FileConfigStore::new(&path);

    // Act
    let (result, output) = run(&store, ToggleRequest::List { ordered: true });

    // Assert
    assert_eq!(result.unwrap(), ToggleOutcome::Listed { count: 3 });
    assert_eq!(output, "Aws -> ON.\nGit -> ON.\nBattery -> OFF.\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_list_unordered_prints_document_order() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(&dir, "theme.yaml", AWS_SPOTIFY));

    let (result, output) = run(&store, ToggleRequest::List { ordered: false });

    assert!(result.is_ok());
    assert_eq!(output, "Aws -> ON.\nSpotify -> OFF.\n");
}

#[test]
fn test_toml_theme_toggles_and_stays_toml() {
    let dir = TempDir::new().unwrap();
    let content = r#"final_space = true

[[blocks]]
type = "prompt"

[[blocks.segments]]
type = "git"
enabled = true
style = "powerline"
"#;
    let path = theme(&dir, "theme.toml", content);
    let store = FileConfigStore::new(&path);

    run(&store, ToggleRequest::Toggle(SegmentType::Git)).0.unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let reparsed: toml::Value = toml::from_str(&written).expect("still valid TOML");
    assert_eq!(
        reparsed["blocks"][0]["segments"][0]["enabled"].as_bool(),
        Some(false)
    );
}

#[test]
fn test_malformed_theme_is_reported_and_untouched() {
    let dir = TempDir::new().unwrap();
    let path = theme(&dir, "theme.yaml", "blocks: [ { segments: [ { type: aws, enabled: maybe } ] } ]\n");
    let store = FileConfigStore::new(&path);

    let (result, output) = run(&store, ToggleRequest::Toggle(SegmentType::Aws));

    assert!(matches!(result, Err(ToggleError::ConfigMalformed { .. })));
    assert_eq!(output, "");
}

#[test]
fn test_help_request_does_not_need_a_theme() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(dir.path().join("absent.yaml"));

    let (result, output) = run(&store, ToggleRequest::Help);

    assert_eq!(result.unwrap(), ToggleOutcome::HelpRequested);
    assert_eq!(output, "");
}

#[cfg(unix)]
#[test]
fn test_write_failure_reports_in_memory_toggle() {
    use std::os::unix::fs::PermissionsExt;

    // Arrange: a read-only directory blocks the temporary file
    let dir = TempDir::new().unwrap();
    let path = theme(&dir, "theme.yaml", AWS_SPOTIFY);
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    let store = FileConfigStore::new(&path);
    if tempfile::NamedTempFile::new_in(dir.path()).is_ok() {
        // Running with privileges that ignore directory permissions.
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    // Act
    let (result, output) = run(&store, ToggleRequest::Toggle(SegmentType::Spotify));

    // Assert
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
    let err = result.expect_err("write must fail");
    assert!(matches!(err, ToggleError::ConfigWriteFailed { .. }));
    assert!(err.to_string().contains("in memory"));
    assert_eq!(output, "Spotify segment turned ON.\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), AWS_SPOTIFY);
}

#[test]
fn test_probe_oci_resolves_region_from_profile_section() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(
        &dir,
        "theme.yaml",
        "blocks:\n  - segments:\n      - type: oci\n        enabled: true\n",
    ));
    let env = FakeEnvironment::new()
        .with_var("OCI_CLI_PROFILE", "DEFAULT")
        .with_var("OCI_CLI_CONFIG_FILE", "/home/me/.oci/config")
        .with_file("/home/me/.oci/config", "[DEFAULT]\nregion=us-phoenix-1\n");
    let mut status = TerminalStatus::new(Vec::new(), false);

    // Act
    let report = ProbeSegmentUseCase::new(&store, Arc::new(env))
        .execute(SegmentType::Oci, &mut status)
        .expect("probe succeeds");

    // Assert
    assert!(report.active);
    assert_eq!(
        report.data,
        vec![
            ("Profile", "DEFAULT".to_string()),
            ("Region", "us-phoenix-1".to_string())
        ]
    );
    let output = String::from_utf8(status.into_inner()).unwrap();
    assert_eq!(
        output,
        "Oci segment is ON.\n  Profile: DEFAULT\n  Region: us-phoenix-1\n"
    );
}

#[test]
fn test_probe_oci_without_profile_is_inactive() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(theme(
        &dir,
        "theme.yaml",
        "blocks:\n  - segments:\n      - type: oci\n",
    ));
    let mut status = TerminalStatus::new(Vec::new(), false);

    let report = ProbeSegmentUseCase::new(&store, Arc::new(FakeEnvironment::new()))
        .execute(SegmentType::Oci, &mut status)
        .unwrap();

    assert!(!report.active);
    assert!(report.data.is_empty());
    assert_eq!(String::from_utf8(status.into_inner()).unwrap(), "Oci segment is OFF.\n");
}
