//! BDD-style tests for loading pipeline settings from TOML.

use std::path::PathBuf;

use docpipe_settings::{CONFIG_FILE_NAME, PipelineSettings, Stage};
use tempfile::TempDir;

#[test]
fn given_empty_file_then_every_value_is_default() {
    let settings = PipelineSettings::parse("").unwrap();
    assert_eq!(settings, PipelineSettings::default());
    assert_eq!(settings.top_words, 100);
    assert_eq!(settings.top_ngrams, 100);
}

#[test]
fn given_shared_dir_then_stage_dirs_move_with_it() {
    let settings = PipelineSettings::parse(r#"shared_dir = "/srv/pipe""#).unwrap();
    assert_eq!(settings.raw_dir(), PathBuf::from("/srv/pipe/raw"));
    assert_eq!(settings.status_dir(), PathBuf::from("/srv/pipe/status"));
}

#[test]
fn given_full_file_then_all_keys_are_read() {
    let toml = r#"
shared_dir = "/srv/pipe"
processed_dir = "/mnt/records"
poll_interval_ms = 250
top_words = 20
top_ngrams = 10
"#;
    let settings = PipelineSettings::parse(toml).unwrap();
    assert_eq!(settings.poll_interval_ms, 250);
    assert_eq!(settings.top_words, 20);
    assert_eq!(settings.top_ngrams, 10);
    let analyze = settings.stage_paths(Stage::Analyze);
    assert_eq!(analyze.input_dir, PathBuf::from("/mnt/records"));
    assert_eq!(analyze.output_dir, PathBuf::from("/srv/pipe/analysis"));
}

#[test]
fn given_unknown_key_then_parsing_fails() {
    let err = PipelineSettings::parse("shared = \"/x\"").unwrap_err();
    assert!(err.to_string().contains("shared"));
}

#[test]
fn given_wrong_type_then_parsing_fails() {
    assert!(PipelineSettings::parse("poll_interval_ms = \"fast\"").is_err());
}

#[test]
fn given_config_file_in_directory_then_it_is_discovered_and_loaded() {
    let tmp = TempDir::new().unwrap();
    assert!(PipelineSettings::discover(tmp.path()).is_none());

    let path = tmp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "top_words = 5\n").unwrap();

    let found = PipelineSettings::discover(tmp.path()).unwrap();
    assert_eq!(found, path);
    let settings = PipelineSettings::from_file(&found).unwrap();
    assert_eq!(settings.top_words, 5);
}

#[test]
fn given_broken_file_then_load_reports_invalid_data() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.toml");
    std::fs::write(&path, "top_words = [").unwrap();
    let err = PipelineSettings::from_file(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn given_stage_overrides_then_only_that_stage_moves() {
    let mut settings = PipelineSettings::default();
    settings.set_input_dir(Stage::Process, PathBuf::from("/in"));
    settings.set_output_dir(Stage::Analyze, PathBuf::from("/out"));

    assert_eq!(settings.stage_paths(Stage::Process).input_dir, PathBuf::from("/in"));
    assert_eq!(
        settings.stage_paths(Stage::Process).output_dir,
        PathBuf::from("/shared/processed")
    );
    assert_eq!(settings.stage_paths(Stage::Analyze).output_dir, PathBuf::from("/out"));
}
