//! Output locations for rendered clips.
//!
//! Clips are written as `<output_dir>/<patch name>.wav`. The default output
//! directory is `sounds/`, relative to the working directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use stinger_config::paths;
//!
//! let dir = paths::ensure_dir("sounds")?;
//! let wav = paths::clip_path(&dir, "civilian_win");
//! assert!(wav.ends_with("civilian_win.wav"));
//! # Ok::<(), stinger_config::ConfigError>(())
//! ```

use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Default output directory name.
pub const DEFAULT_OUTPUT_DIR: &str = "sounds";

/// File extension of rendered clips.
pub const CLIP_EXTENSION: &str = "wav";

/// Path of the clip named `name` inside `dir`.
pub fn clip_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(name).with_extension(CLIP_EXTENSION)
}

/// Ensure `dir` exists as a directory.
///
/// Creates the directory and any parent directories if they don't exist.
///
/// # Errors
///
/// Returns [`ConfigError::CreateDir`] if the directory cannot be created and
/// [`ConfigError::NotADirectory`] if the path is taken by something else.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
    let dir = dir.as_ref();

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::create_dir(dir, e))?;
    } else if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }

    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clip_path_appends_extension() {
        let path = clip_path("/out", "undercover_win");
        assert_eq!(path, PathBuf::from("/out/undercover_win.wav"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("sounds");

        let dir = ensure_dir(&target).unwrap();
        assert_eq!(dir, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_dir(temp.path()).is_ok());
        assert!(ensure_dir(temp.path()).is_ok());
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(ref p) if p == &file));
    }

    #[test]
    fn test_ensure_dir_under_file_fails_to_create() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();

        let err = ensure_dir(file.join("sounds")).unwrap_err();
        assert!(matches!(err, ConfigError::CreateDir { .. }), "got {err:?}");
    }
}
