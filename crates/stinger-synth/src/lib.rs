//! Stinger Synth - offline synthesis of short sound-effect clips
//!
//! This crate renders fixed-length voices, shapes them with gain envelopes,
//! mixes them at time offsets and normalizes the result. Everything is a pure
//! function of its inputs; file output lives in `stinger-io`.
//!
//! # Core Components
//!
//! ## Oscillators
//!
//! - [`Tone`] - Fixed-pitch voice (sine, triangle or sawtooth)
//! - [`Waveform`] - Closed set of waveform shapes with a sine fallback for unknown names
//! - [`Sweep`] - Sine voice gliding between two pitches, phase-integrated
//!
//! ```rust
//! use stinger_synth::{Tone, Waveform};
//!
//! let samples = Tone::new(Waveform::Triangle, 261.63, 0.6, 0.2).render(44100);
//! assert_eq!(samples.len(), 26460);
//! ```
//!
//! ## Envelopes
//!
//! - [`Adsr`] - Attack-decay-sustain-release over a fixed-length voice
//! - [`Shape`] - Envelope variants used by patches
//! - [`EnvelopeCurve`] / [`Segment`] - Piecewise gain curves
//!
//! ## Mixing
//!
//! - [`Timeline`] - Sums voices at start offsets, growing as needed
//! - [`normalize`] - Scales a buffer down to full scale
//!
//! ## Patches
//!
//! - [`Patch`] - Named recipe of voices; [`Patch::civilian_win`] and
//!   [`Patch::undercover_win`] are built in
//! - [`Clip`] - Rendered, normalized output
//!
//! ```rust
//! use stinger_synth::Patch;
//!
//! let clip = Patch::civilian_win().render(44100);
//! assert!(clip.peak() <= 1.0);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! stinger-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod envelope;
pub mod normalize;
pub mod oscillator;
pub mod patch;
pub mod sweep;
pub mod timeline;

// Re-export main types at crate root
pub use envelope::{Adsr, EnvelopeCurve, Segment, Shape};
pub use normalize::{normalize, peak};
pub use oscillator::{Tone, Waveform, seconds_to_samples};
pub use patch::{Clip, Patch, Source, VoiceSpec};
pub use sweep::Sweep;
pub use timeline::Timeline;

/// Sample rate the built-in patches are designed for.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
