// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the configuration module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::tempdir;

fn sample_remote() -> RemoteConfig {
    RemoteConfig {
        endpoint: "https://script.google.com/macros/s/abc123/exec".to_string(),
        sheet: "vocab".to_string(),
        timeout_secs: 10,
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let config = Config {
        remote: Some(sample_remote()),
    };

    config.save(dir.path()).unwrap();
    let loaded = Config::load(dir.path()).unwrap();

    let remote = loaded.remote.unwrap();
    assert_eq!(remote.endpoint, sample_remote().endpoint);
    assert_eq!(remote.sheet, "vocab");
    assert_eq!(remote.timeout_secs, 10);
}

#[test]
fn test_load_missing_config_fails() {
    let dir = tempdir().unwrap();
    assert!(Config::load(dir.path()).is_err());
}

#[test]
fn test_timeout_defaults_when_absent() {
    let dir = tempdir().unwrap();
    let raw = r#"
[remote]
endpoint = "https://example.com/exec"
sheet = "vocab"
"#;
    std::fs::write(dir.path().join("config.toml"), raw).unwrap();

    let loaded = Config::load(dir.path()).unwrap();
    assert_eq!(loaded.remote.unwrap().timeout_secs, 10);
}

#[test]
fn test_remote_filters_placeholder_endpoint() {
    let config = Config {
        remote: Some(RemoteConfig {
            endpoint: PLACEHOLDER_ENDPOINT.to_string(),
            sheet: "vocab".to_string(),
            timeout_secs: 10,
        }),
    };
    assert!(config.remote().is_none());
    assert!(!config.is_remote_mode());
}

#[test]
fn test_remote_filters_empty_endpoint() {
    let config = Config {
        remote: Some(RemoteConfig {
            endpoint: String::new(),
            sheet: "vocab".to_string(),
            timeout_secs: 10,
        }),
    };
    assert!(config.remote().is_none());
}

#[test]
fn test_remote_mode_with_real_endpoint() {
    let config = Config {
        remote: Some(sample_remote()),
    };
    assert!(config.is_remote_mode());
}

#[test]
fn test_no_remote_section_is_local_only() {
    let config = Config::default();
    assert!(config.remote().is_none());
    assert!(!config.is_remote_mode());
}

#[test]
fn test_init_work_dir() {
    let dir = tempdir().unwrap();

    let work_dir = init_work_dir(dir.path(), Some(sample_remote())).unwrap();
    assert!(work_dir.is_dir());
    assert!(work_dir.join("config.toml").is_file());

    let loaded = Config::load(&work_dir).unwrap();
    assert!(loaded.is_remote_mode());
}

#[test]
fn test_init_twice_fails() {
    let dir = tempdir().unwrap();
    init_work_dir(dir.path(), None).unwrap();

    assert!(matches!(
        init_work_dir(dir.path(), None),
        Err(Error::AlreadyInitialized(_))
    ));
}

#[test]
fn test_derived_paths() {
    let work_dir = Path::new("/tmp/.cram");
    assert_eq!(get_db_path(work_dir), work_dir.join("state.db"));
    assert_eq!(get_queue_path(work_dir), work_dir.join("offline-queue.jsonl"));
}
