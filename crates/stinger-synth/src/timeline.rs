//! Offset mixing onto a growable output buffer.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::oscillator::seconds_to_samples;

/// Composite buffer that voices are summed into at arbitrary start offsets.
///
/// Placing a voice that runs past the end extends the buffer with zeros;
/// existing samples never move.
///
/// # Example
///
/// ```rust
/// use stinger_synth::Timeline;
///
/// let mut timeline = Timeline::new(1.0, 100);
/// timeline.place(0.5, &[1.0; 80]);
/// assert_eq!(timeline.len(), 130);
/// assert_eq!(timeline.samples()[49], 0.0);
/// assert_eq!(timeline.samples()[50], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Timeline {
    /// Create a silent timeline `duration` seconds long.
    pub fn new(duration: f32, sample_rate: u32) -> Self {
        Self::with_len(seconds_to_samples(duration, sample_rate), sample_rate)
    }

    /// Create a silent timeline of `len` samples.
    pub fn with_len(len: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; len],
            sample_rate,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Current length in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the timeline holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mixed samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the timeline and return its buffer.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Sum `voice` into the timeline starting `start` seconds in.
    pub fn place(&mut self, start: f32, voice: &[f32]) {
        self.place_at(seconds_to_samples(start, self.sample_rate), voice);
    }

    /// Sum `voice` into the timeline starting at sample `start`.
    pub fn place_at(&mut self, start: usize, voice: &[f32]) {
        let end = start + voice.len();
        if end > self.samples.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = self.samples.len(), to = end, "timeline grow");
            self.samples.resize(end, 0.0);
        }

        for (out, &sample) in self.samples[start..end].iter_mut().zip(voice) {
            *out += sample;
        }
    }
}
