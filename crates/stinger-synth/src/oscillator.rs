//! Fixed-length waveform rendering.
//!
//! Unlike a streaming oscillator, a [`Tone`] renders a whole voice in one
//! call: sample `i` is the waveform evaluated at `t = i / sample_rate`, so the
//! first sample always sits on the time origin.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::convert::Infallible;
use core::f64::consts::TAU;
use core::str::FromStr;
use libm::{fabs, floor, round, sin};

/// Convert a duration in seconds to a sample count, rounding to the nearest
/// sample. Negative durations yield zero samples.
#[inline]
pub fn seconds_to_samples(seconds: f32, sample_rate: u32) -> usize {
    let samples = round(f64::from(seconds) * f64::from(sample_rate));
    if samples > 0.0 { samples as usize } else { 0 }
}

/// Waveform shapes available to [`Tone`].
///
/// The set is closed. Names that do not match a variant resolve to
/// [`Waveform::Sine`] (see [`Waveform::from_name`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine.
    #[default]
    Sine,
    /// Period-normalized triangle in [-1, 1].
    Triangle,
    /// Rising ramp in [-2, 0): the centered ramp shifted down by one, so the
    /// waveform carries a constant negative offset.
    Sawtooth,
}

impl Waveform {
    /// Resolve a waveform by name.
    ///
    /// Recognizes `"sine"`, `"triangle"` and `"sawtooth"`. Anything else falls
    /// back to [`Waveform::Sine`] without reporting an error.
    ///
    /// ```rust
    /// use stinger_synth::Waveform;
    ///
    /// assert_eq!(Waveform::from_name("triangle"), Waveform::Triangle);
    /// assert_eq!(Waveform::from_name("square"), Waveform::Sine);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "triangle" => Waveform::Triangle,
            "sawtooth" => Waveform::Sawtooth,
            _ => Waveform::Sine,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }

    /// Evaluate the waveform after `cycles` periods (`frequency * t`).
    ///
    /// Sine and triangle stay in [-1, 1]; the sawtooth spans [-2, 0).
    #[inline]
    pub fn value_at(self, cycles: f64) -> f64 {
        match self {
            Waveform::Sine => sin(TAU * cycles),
            Waveform::Triangle => 2.0 * fabs(2.0 * centered_fraction(cycles)) - 1.0,
            Waveform::Sawtooth => 2.0 * centered_fraction(cycles) - 1.0,
        }
    }
}

impl FromStr for Waveform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Distance from the nearest whole cycle, in [-0.5, 0.5).
#[inline]
fn centered_fraction(cycles: f64) -> f64 {
    cycles - floor(cycles + 0.5)
}

/// A single oscillator voice: waveform, pitch, length and level.
///
/// # Example
///
/// ```rust
/// use stinger_synth::{Tone, Waveform};
///
/// let tone = Tone::new(Waveform::Triangle, 261.63, 0.6, 0.2);
/// let samples = tone.render(44100);
/// assert_eq!(samples.len(), 26460);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    /// Waveform shape.
    pub waveform: Waveform,
    /// Frequency in Hz.
    pub frequency: f32,
    /// Length in seconds.
    pub duration: f32,
    /// Peak amplitude scalar.
    pub volume: f32,
}

impl Tone {
    /// Create a tone description.
    pub fn new(waveform: Waveform, frequency: f32, duration: f32, volume: f32) -> Self {
        Self {
            waveform,
            frequency,
            duration,
            volume,
        }
    }

    /// Number of samples [`render`](Self::render) produces at `sample_rate`.
    pub fn len(&self, sample_rate: u32) -> usize {
        seconds_to_samples(self.duration, sample_rate)
    }

    /// Render the raw (unenveloped) waveform.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let num_samples = self.len(sample_rate);
        let freq = f64::from(self.frequency);
        let volume = f64::from(self.volume);
        let rate = f64::from(sample_rate);

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / rate;
                (self.waveform.value_at(freq * t) * volume) as f32
            })
            .collect()
    }
}
