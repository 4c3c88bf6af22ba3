//! Integration tests for stinger-config.
//!
//! These tests verify output-directory preparation against a real filesystem.

use stinger_config::{ConfigError, RenderConfig};
use tempfile::TempDir;

#[test]
fn prepare_creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("mobile").join("assets").join("sounds");
    let config = RenderConfig::new(&target);

    assert!(!target.exists());
    let dir = config.prepare_output_dir().expect("should create output dir");
    assert_eq!(dir, target);
    assert!(target.is_dir());
}

#[test]
fn prepare_is_repeatable() {
    let temp = TempDir::new().unwrap();
    let config = RenderConfig::new(temp.path().join("sounds"));

    config.prepare_output_dir().unwrap();
    config.prepare_output_dir().unwrap();
}

#[test]
fn prepare_validates_before_touching_disk() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("never");
    let config = RenderConfig::new(&target).with_sample_rate(0);

    let err = config.prepare_output_dir().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSampleRate(0)));
    assert!(!target.exists(), "invalid config must not create directories");
}

#[test]
fn clip_paths_live_in_output_dir() {
    let temp = TempDir::new().unwrap();
    let config = RenderConfig::new(temp.path());

    let path = config.clip_path("civilian_win");
    assert_eq!(path.parent(), Some(temp.path()));
    assert_eq!(path.file_name().unwrap(), "civilian_win.wav");
}
