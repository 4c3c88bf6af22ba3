//! Patch rendering to disk.

use crate::Result;
use crate::wav::write_wav;
use std::path::PathBuf;
use stinger_config::RenderConfig;
use stinger_synth::{Clip, Patch};

/// Summary of one written clip.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedClip {
    /// Patch name.
    pub name: &'static str,
    /// File the clip was written to.
    pub path: PathBuf,
    /// Number of samples written.
    pub num_samples: usize,
    /// Peak absolute amplitude before quantization.
    pub peak: f32,
}

/// Renders patches and writes them as WAV files.
///
/// All settings come from the [`RenderConfig`] given at construction; the
/// renderer holds no other state, so each patch gets its own fresh mix.
///
/// # Example
///
/// ```rust,no_run
/// use stinger_config::RenderConfig;
/// use stinger_io::ClipRenderer;
/// use stinger_synth::Patch;
///
/// let renderer = ClipRenderer::new(RenderConfig::new("sounds"));
/// let written = renderer.render(&Patch::civilian_win())?;
/// println!("wrote {}", written.path.display());
/// # Ok::<(), stinger_io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClipRenderer {
    config: RenderConfig,
}

impl ClipRenderer {
    /// Create a renderer for `config`.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Synthesize a patch in memory without touching the filesystem.
    pub fn synthesize(&self, patch: &Patch) -> Clip {
        patch.render(self.config.sample_rate)
    }

    /// Render `patch` and write it into the output directory.
    ///
    /// The output directory is created if missing. Any I/O failure is
    /// returned; nothing is retried.
    pub fn render(&self, patch: &Patch) -> Result<RenderedClip> {
        let dir = self.config.prepare_output_dir()?;
        tracing::debug!(dir = %dir.display(), patch = patch.name, "render: output ready");

        let clip = self.synthesize(patch);
        let path = self.config.clip_path(clip.name);
        write_wav(&path, &clip.samples, clip.sample_rate)?;

        tracing::info!(
            path = %path.display(),
            samples = clip.len(),
            peak = clip.peak(),
            "wrote clip"
        );

        Ok(RenderedClip {
            name: clip.name,
            path,
            num_samples: clip.len(),
            peak: clip.peak(),
        })
    }

    /// Render every built-in patch in order, stopping at the first failure.
    pub fn render_all(&self) -> Result<Vec<RenderedClip>> {
        Patch::all().iter().map(|patch| self.render(patch)).collect()
    }
}
