//! Gain curves for shaping rendered voices.
//!
//! An [`EnvelopeCurve`] is a per-sample gain vector assembled from
//! [`Segment`]s. [`Shape`] names the envelope variants the patches use and
//! builds the matching curve for a voice of a given length.
//!
//! Linear segments include both endpoints: a ramp of `n` samples from `a` to
//! `b` starts exactly at `a` and ends exactly at `b`.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::oscillator::seconds_to_samples;
use libm::expf;

/// One monotonic piece of an envelope curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Straight line from `from` to `to` over `len` samples, endpoints included.
    Linear {
        /// Gain of the first sample.
        from: f32,
        /// Gain of the last sample.
        to: f32,
        /// Segment length in samples.
        len: usize,
    },
    /// Constant gain.
    Hold {
        /// Gain held for the whole segment.
        level: f32,
        /// Segment length in samples.
        len: usize,
    },
    /// `exp(-rate * t)` with `t` restarting at zero for this segment.
    ExpDecay {
        /// Decay rate per second.
        rate: f32,
        /// Segment length in samples.
        len: usize,
    },
}

impl Segment {
    /// Segment length in samples.
    pub fn len(&self) -> usize {
        match *self {
            Segment::Linear { len, .. } | Segment::Hold { len, .. } | Segment::ExpDecay { len, .. } => {
                len
            }
        }
    }

    /// True when the segment contributes no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(&self, out: &mut Vec<f32>, sample_rate: u32) {
        match *self {
            Segment::Linear { from, to, len } => out.extend(ramp(from, to, len)),
            Segment::Hold { level, len } => out.extend(core::iter::repeat_n(level, len)),
            Segment::ExpDecay { rate, len } => {
                let rate_per_sample = rate / sample_rate as f32;
                out.extend((0..len).map(|i| expf(-rate_per_sample * i as f32)));
            }
        }
    }
}

/// Evenly spaced values from `from` to `to`, both included.
fn ramp(from: f32, to: f32, len: usize) -> impl Iterator<Item = f32> {
    let steps = len.saturating_sub(1).max(1) as f32;
    (0..len).map(move |i| {
        if i + 1 == len && len > 1 {
            to
        } else {
            from + (to - from) * (i as f32 / steps)
        }
    })
}

/// Per-sample gain multipliers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvelopeCurve {
    gains: Vec<f32>,
}

impl EnvelopeCurve {
    /// Concatenate `segments` into one curve.
    pub fn from_segments(segments: &[Segment], sample_rate: u32) -> Self {
        let total = segments.iter().map(Segment::len).sum();
        let mut gains = Vec::with_capacity(total);
        for segment in segments {
            segment.write(&mut gains, sample_rate);
        }
        Self { gains }
    }

    /// Pure exponential decay `exp(-rate * i / sample_rate)` over `len` samples.
    pub fn exp_decay(rate: f32, len: usize, sample_rate: u32) -> Self {
        Self::from_segments(&[Segment::ExpDecay { rate, len }], sample_rate)
    }

    /// Gain values.
    pub fn gains(&self) -> &[f32] {
        &self.gains
    }

    /// Curve length in samples.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    /// True when the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Multiply the curve into `voice`.
    ///
    /// When the lengths differ the longer side is cut to the shorter one: a
    /// long curve is only read up to the voice length, a short curve
    /// truncates the voice.
    pub fn apply_to(&self, voice: &mut Vec<f32>) {
        voice.truncate(self.gains.len());
        for (sample, gain) in voice.iter_mut().zip(&self.gains) {
            *sample *= gain;
        }
    }
}

/// Attack/decay/sustain/release envelope laid over a fixed-length voice.
///
/// All times are in seconds. The release always occupies the last
/// `release` samples of the voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    /// Attack time (0 to 1).
    pub attack: f32,
    /// Decay time (1 to sustain).
    pub decay: f32,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f32,
    /// Release time (sustain to 0).
    pub release: f32,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.1,
        }
    }
}

impl Adsr {
    /// Create an envelope. `sustain` is clamped to [0, 1].
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain: sustain.clamp(0.0, 1.0),
            release,
        }
    }

    /// Segment lengths `(attack, decay, release)` in samples for a voice of
    /// `len` samples.
    ///
    /// Durations round to the nearest sample, like every other length in the
    /// crate. If the three segments do not fit, they fall back to 10%, 10%
    /// and 20% of the voice length.
    pub fn segment_lengths(&self, len: usize, sample_rate: u32) -> (usize, usize, usize) {
        let attack = seconds_to_samples(self.attack, sample_rate);
        let decay = seconds_to_samples(self.decay, sample_rate);
        let release = seconds_to_samples(self.release, sample_rate);

        if attack + decay + release > len {
            (len / 10, len / 10, len / 5)
        } else {
            (attack, decay, release)
        }
    }

    /// Build the gain curve for a voice of `len` samples.
    pub fn curve(&self, len: usize, sample_rate: u32) -> EnvelopeCurve {
        let (attack, decay, release) = self.segment_lengths(len, sample_rate);
        let mut gains = vec![1.0; len];

        let decay_end = attack + decay;
        for (g, v) in gains[..attack].iter_mut().zip(ramp(0.0, 1.0, attack)) {
            *g = v;
        }
        for (g, v) in gains[attack..decay_end]
            .iter_mut()
            .zip(ramp(1.0, self.sustain, decay))
        {
            *g = v;
        }
        let release_start = len - release;
        if release_start > decay_end {
            gains[decay_end..release_start].fill(self.sustain);
        }
        // Release always covers the last `release` samples.
        for (g, v) in gains[release_start..]
            .iter_mut()
            .zip(ramp(self.sustain, 0.0, release))
        {
            *g = v;
        }

        EnvelopeCurve { gains }
    }
}

/// Envelope variants available to patch voices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Generic ADSR.
    Adsr(Adsr),
    /// `exp(-rate * t)` over the whole voice.
    ExpDecay {
        /// Decay rate per second.
        rate: f32,
    },
    /// Linear 0 to 1 attack, then `exp(-rate * t)` with `t` restarting at the
    /// end of the attack.
    AttackExpDecay {
        /// Attack time in seconds.
        attack: f32,
        /// Decay rate per second.
        rate: f32,
    },
    /// Linear 0 to 1 attack, then a linear fall to 0 over the rest of the voice.
    AttackDecayLinear {
        /// Attack time in seconds.
        attack: f32,
    },
}

impl Shape {
    /// Build the curve for a voice of `len` samples.
    ///
    /// The split shapes return `None` when the attack alone covers the whole
    /// voice; such voices are left unshaped.
    pub fn curve(&self, len: usize, sample_rate: u32) -> Option<EnvelopeCurve> {
        match *self {
            Shape::Adsr(adsr) => Some(adsr.curve(len, sample_rate)),
            Shape::ExpDecay { rate } => Some(EnvelopeCurve::exp_decay(rate, len, sample_rate)),
            Shape::AttackExpDecay { attack, rate } => {
                let attack = seconds_to_samples(attack, sample_rate);
                (len > attack).then(|| {
                    EnvelopeCurve::from_segments(
                        &[
                            Segment::Linear { from: 0.0, to: 1.0, len: attack },
                            Segment::ExpDecay { rate, len: len - attack },
                        ],
                        sample_rate,
                    )
                })
            }
            Shape::AttackDecayLinear { attack } => {
                let attack = seconds_to_samples(attack, sample_rate);
                (len > attack).then(|| {
                    EnvelopeCurve::from_segments(
                        &[
                            Segment::Linear { from: 0.0, to: 1.0, len: attack },
                            Segment::Linear { from: 1.0, to: 0.0, len: len - attack },
                        ],
                        sample_rate,
                    )
                })
            }
        }
    }

    /// Shape `voice` in place.
    pub fn apply(&self, voice: &mut Vec<f32>, sample_rate: u32) {
        if let Some(curve) = self.curve(voice.len(), sample_rate) {
            curve.apply_to(voice);
        }
    }
}
