//! Output layer for stinger.
//!
//! This crate provides:
//!
//! - **PCM encoding**: [`to_pcm_i16`] quantizes normalized samples to 16-bit
//! - **WAV file I/O**: [`write_wav`] writes mono 16-bit files, [`read_pcm16`]
//!   and [`read_wav_info`] read them back
//! - **Rendering**: [`ClipRenderer`] turns patches into files in the
//!   configured output directory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stinger_config::RenderConfig;
//! use stinger_io::ClipRenderer;
//!
//! let renderer = ClipRenderer::new(RenderConfig::new("sounds"));
//! for clip in renderer.render_all()? {
//!     println!("{} -> {}", clip.name, clip.path.display());
//! }
//! ```

mod render;
mod wav;

pub use render::{ClipRenderer, RenderedClip};
pub use wav::{
    PCM16_FULL_SCALE, WavInfo, encode_wav, pcm16_mono_spec, read_pcm16, read_wav_info,
    sample_to_i16, to_pcm_i16, write_wav, write_wav_to,
};

use stinger_config::ConfigError;

/// Error types for rendering and file output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Output configuration or directory error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience result type for output operations.
pub type Result<T> = std::result::Result<T, Error>;
