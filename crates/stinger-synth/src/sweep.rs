//! Gliding sine oscillator.
//!
//! The pitch follows an exponential glide from `start_hz` to `end_hz` and then
//! holds at `end_hz`. Phase is integrated sample by sample, so the waveform
//! stays continuous where the glide ends.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::envelope::EnvelopeCurve;
use crate::oscillator::seconds_to_samples;
use core::f64::consts::TAU;
use libm::{pow, sin};

/// Frequency-sweep voice with a built-in exponential decay.
///
/// # Example
///
/// ```rust
/// use stinger_synth::Sweep;
///
/// let thud = Sweep::new(60.0, 10.0, 1.0, 0.5, 3.0);
/// let samples = thud.render(1.5, 44100);
/// assert_eq!(samples.len(), 66150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Frequency at `t = 0`, in Hz.
    pub start_hz: f32,
    /// Frequency reached at the end of the glide and held afterwards, in Hz.
    pub end_hz: f32,
    /// Glide length in seconds.
    pub glide: f32,
    /// Overall amplitude scalar.
    pub amplitude: f32,
    /// Exponential decay rate per second applied over the whole voice.
    pub decay_rate: f32,
}

impl Sweep {
    /// Create a sweep description.
    pub fn new(start_hz: f32, end_hz: f32, glide: f32, amplitude: f32, decay_rate: f32) -> Self {
        Self {
            start_hz,
            end_hz,
            glide,
            amplitude,
            decay_rate,
        }
    }

    /// Instantaneous frequency `t` seconds into the voice.
    #[inline]
    pub fn frequency_at(&self, t: f64) -> f64 {
        let start = f64::from(self.start_hz);
        let end = f64::from(self.end_hz);
        let glide = f64::from(self.glide);

        if t < glide {
            start * pow(end / start, t / glide)
        } else {
            end
        }
    }

    /// Render `duration` seconds of the decayed sweep.
    pub fn render(&self, duration: f32, sample_rate: u32) -> Vec<f32> {
        let num_samples = seconds_to_samples(duration, sample_rate);
        let dt = 1.0 / f64::from(sample_rate);
        let amplitude = f64::from(self.amplitude);

        let mut phase = 0.0f64;
        let mut samples: Vec<f32> = (0..num_samples)
            .map(|i| {
                phase += TAU * self.frequency_at(i as f64 * dt) * dt;
                (sin(phase) * amplitude) as f32
            })
            .collect();

        EnvelopeCurve::exp_decay(self.decay_rate, num_samples, sample_rate).apply_to(&mut samples);
        samples
    }
}
