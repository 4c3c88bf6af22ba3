//! Render configuration for stinger.
//!
//! [`RenderConfig`] carries the two settings the generator needs, the sample
//! rate and the output directory, and is handed to the renderer when it is
//! constructed.
//!
//! # Example
//!
//! ```rust,no_run
//! use stinger_config::RenderConfig;
//!
//! let config = RenderConfig::new("assets/sounds");
//! let dir = config.prepare_output_dir()?;
//! println!("writing to {}", dir.display());
//! # Ok::<(), stinger_config::ConfigError>(())
//! ```

mod error;

/// Output locations for rendered clips.
pub mod paths;

pub use error::ConfigError;
pub use paths::{DEFAULT_OUTPUT_DIR, clip_path, ensure_dir};

use std::path::{Path, PathBuf};
use stinger_synth::DEFAULT_SAMPLE_RATE;

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Directory the clips are written into.
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RenderConfig {
    /// Default sample rate, writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Check the settings before any rendering happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }

    /// Validate and make sure the output directory exists.
    pub fn prepare_output_dir(&self) -> Result<PathBuf, ConfigError> {
        self.validate()?;
        ensure_dir(&self.output_dir)
    }

    /// Destination of the clip named `name`.
    pub fn clip_path(&self, name: &str) -> PathBuf {
        clip_path(&self.output_dir, name)
    }
}
