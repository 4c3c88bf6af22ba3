//! Fixed sound-effect recipes.
//!
//! A [`Patch`] lists voices, each with a sound source, an optional envelope
//! and a start time. [`Patch::render`] synthesizes every voice, sums them on
//! a [`Timeline`] and normalizes the result into a [`Clip`].

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::envelope::Shape;
use crate::normalize::{normalize, peak};
use crate::oscillator::{Tone, Waveform};
use crate::sweep::Sweep;
use crate::timeline::Timeline;

/// C major arpeggio (C4, E4, G4, C5).
const CIVILIAN_ARPEGGIO_HZ: [f32; 4] = [261.63, 329.63, 392.00, 523.25];
const CIVILIAN_NOTE_SECS: f32 = 0.6;
const CIVILIAN_STAGGER_SECS: f32 = 0.1;
const CIVILIAN_TAIL_SECS: f32 = 0.5;

/// Dissonant cluster (C#3, G3, C4).
const UNDERCOVER_CLUSTER_HZ: [f32; 3] = [138.59, 196.00, 261.63];
const UNDERCOVER_SECS: f32 = 3.0;
const UNDERCOVER_BASS_SECS: f32 = 1.5;

/// What produces a voice's raw samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// Fixed-pitch oscillator.
    Tone(Tone),
    /// Frequency sweep rendered for `duration` seconds.
    Sweep {
        /// Sweep parameters.
        sweep: Sweep,
        /// Voice length in seconds.
        duration: f32,
    },
}

impl Source {
    /// Render the raw samples.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        match self {
            Source::Tone(tone) => tone.render(sample_rate),
            Source::Sweep { sweep, duration } => sweep.render(*duration, sample_rate),
        }
    }
}

/// One voice of a patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSpec {
    /// Sound source.
    pub source: Source,
    /// Envelope laid over the rendered source, if any.
    pub shape: Option<Shape>,
    /// Start time in seconds.
    pub start: f32,
}

impl VoiceSpec {
    /// Render and shape this voice.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let mut samples = self.source.render(sample_rate);
        if let Some(shape) = &self.shape {
            shape.apply(&mut samples, sample_rate);
        }
        samples
    }
}

/// A named sound-effect recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// File stem of the rendered clip.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Initial timeline length in seconds.
    pub duration: f32,
    /// Voices, mixed in order.
    pub voices: Vec<VoiceSpec>,
}

impl Patch {
    /// Bright staggered triangle arpeggio topped with a high sine ding.
    pub fn civilian_win() -> Self {
        let last_start = CIVILIAN_STAGGER_SECS * (CIVILIAN_ARPEGGIO_HZ.len() - 1) as f32;
        let duration = last_start + CIVILIAN_NOTE_SECS + CIVILIAN_TAIL_SECS;

        let mut voices: Vec<VoiceSpec> = CIVILIAN_ARPEGGIO_HZ
            .iter()
            .enumerate()
            .map(|(i, &freq)| VoiceSpec {
                source: Source::Tone(Tone::new(Waveform::Triangle, freq, CIVILIAN_NOTE_SECS, 0.2)),
                shape: Some(Shape::AttackExpDecay {
                    attack: 0.05,
                    rate: 5.0,
                }),
                start: i as f32 * CIVILIAN_STAGGER_SECS,
            })
            .collect();

        voices.push(VoiceSpec {
            source: Source::Tone(Tone::new(Waveform::Sine, 1046.50, 0.5, 0.2)),
            shape: Some(Shape::ExpDecay { rate: 8.0 }),
            start: 0.4,
        });

        Self {
            name: "civilian_win",
            title: "Civilian Win",
            duration,
            voices,
        }
    }

    /// Swelling sawtooth cluster over a sinking bass thud.
    pub fn undercover_win() -> Self {
        let mut voices: Vec<VoiceSpec> = UNDERCOVER_CLUSTER_HZ
            .iter()
            .map(|&freq| VoiceSpec {
                source: Source::Tone(Tone::new(Waveform::Sawtooth, freq, UNDERCOVER_SECS, 0.15)),
                shape: Some(Shape::AttackDecayLinear { attack: 1.0 }),
                start: 0.0,
            })
            .collect();

        voices.push(VoiceSpec {
            source: Source::Sweep {
                sweep: Sweep::new(60.0, 10.0, 1.0, 0.5, 3.0),
                duration: UNDERCOVER_BASS_SECS,
            },
            shape: None,
            start: 0.0,
        });

        Self {
            name: "undercover_win",
            title: "Undercover Win",
            duration: UNDERCOVER_SECS,
            voices,
        }
    }

    /// Every built-in patch, in generation order.
    pub fn all() -> Vec<Patch> {
        vec![Self::civilian_win(), Self::undercover_win()]
    }

    /// Look up a built-in patch by name.
    pub fn by_name(name: &str) -> Option<Patch> {
        Self::all().into_iter().find(|p| p.name == name)
    }

    /// Mix all voices onto a fresh timeline without normalizing.
    pub fn mix(&self, sample_rate: u32) -> Timeline {
        let mut timeline = Timeline::new(self.duration, sample_rate);
        for voice in &self.voices {
            timeline.place(voice.start, &voice.render(sample_rate));
        }
        timeline
    }

    /// Synthesize the finished, normalized clip.
    pub fn render(&self, sample_rate: u32) -> Clip {
        let mut samples = self.mix(sample_rate).into_samples();
        normalize(&mut samples);
        Clip {
            name: self.name,
            sample_rate,
            samples,
        }
    }
}

/// A rendered, normalized mono clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    /// Name of the patch that produced it.
    pub name: &'static str,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Samples in [-1, 1].
    pub samples: Vec<f32>,
}

impl Clip {
    /// Length in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the clip holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Peak absolute amplitude.
    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }
}
