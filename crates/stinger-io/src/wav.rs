//! 16-bit PCM encoding and WAV file reading and writing.

use crate::Result;
use hound::{SampleFormat, WavReader, WavWriter};
use std::io::{Cursor, Seek, Write};
use std::path::Path;

/// Full-scale value a sample of 1.0 maps to.
pub const PCM16_FULL_SCALE: f32 = i16::MAX as f32;

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
}

impl WavInfo {
    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}

impl From<hound::WavSpec> for WavInfo {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            num_frames: 0,
        }
    }
}

/// Header used for every clip: mono, 16-bit integer PCM.
pub fn pcm16_mono_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Quantize one sample: `round(s * 32767)`, clamped to the `i16` range.
#[inline]
pub fn sample_to_i16(sample: f32) -> i16 {
    (sample * PCM16_FULL_SCALE)
        .round()
        .clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}

/// Quantize a buffer to 16-bit PCM.
///
/// Values are not re-normalized; anything past full scale saturates.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| sample_to_i16(s)).collect()
}

/// Quantize `samples` into an open writer and finalize the header.
fn write_pcm16<W: Write + Seek>(mut wav: WavWriter<W>, samples: &[f32]) -> Result<()> {
    for sample in to_pcm_i16(samples) {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encode `samples` as a mono 16-bit WAV stream into `writer`.
pub fn write_wav_to<W: Write + Seek>(writer: W, samples: &[f32], sample_rate: u32) -> Result<()> {
    write_pcm16(WavWriter::new(writer, pcm16_mono_spec(sample_rate))?, samples)
}

/// Encode `samples` as an in-memory mono 16-bit WAV file.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav_to(&mut cursor, samples, sample_rate)?;
    Ok(cursor.into_inner())
}

/// Write samples to a mono 16-bit WAV file.
///
/// # Example
/// ```ignore
/// let samples = vec![0.0f32; 44100]; // 1 second of silence
/// write_wav("silence.wav", &samples, 44100)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    write_pcm16(WavWriter::create(path, pcm16_mono_spec(sample_rate))?, samples)
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.len()) / u64::from(spec.channels);

    Ok(WavInfo {
        num_frames,
        ..WavInfo::from(spec)
    })
}

/// Read a 16-bit WAV file and return its raw PCM samples along with metadata.
pub fn read_pcm16<P: AsRef<Path>>(path: P) -> Result<(Vec<i16>, WavInfo)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let info = WavInfo {
        num_frames: samples.len() as u64 / u64::from(spec.channels),
        ..WavInfo::from(spec)
    };
    Ok((samples, info))
}
