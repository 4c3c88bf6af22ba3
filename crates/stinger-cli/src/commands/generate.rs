//! Clip generation command.

use stinger_config::RenderConfig;
use stinger_io::ClipRenderer;
use stinger_synth::Patch;

/// Render every built-in patch into the configured output directory.
///
/// Prints one line before each patch and a closing line once all files are
/// written. The first failure aborts the run.
pub fn run(config: RenderConfig) -> anyhow::Result<()> {
    let renderer = ClipRenderer::new(config);

    for patch in Patch::all() {
        println!("Generating {} Sound...", patch.title);
        let written = renderer.render(&patch)?;
        tracing::debug!(
            path = %written.path.display(),
            samples = written.num_samples,
            "generate: clip written"
        );
    }

    println!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_both_clips() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("sounds");

        run(RenderConfig::new(&out)).unwrap();

        assert!(out.join("civilian_win.wav").is_file());
        assert!(out.join("undercover_win.wav").is_file());
    }

    #[test]
    fn test_run_reports_unwritable_dir() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("sounds");
        std::fs::write(&blocker, b"not a dir").unwrap();

        assert!(run(RenderConfig::new(&blocker)).is_err());
    }
}
