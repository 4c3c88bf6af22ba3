//! Integration tests for stinger-synth crate.
//!
//! Tests cover the two built-in patches end to end: buffer lengths, voice
//! placement, energy distribution, and normalization.

use stinger_synth::{
    Patch, Shape, Source, Sweep, Timeline, Tone, VoiceSpec, Waveform, normalize, peak,
    seconds_to_samples,
};

const SR: u32 = 44100;

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

// ---------------------------------------------------------------------------
// 1. Civilian win
// ---------------------------------------------------------------------------

#[test]
fn civilian_win_length_covers_arpeggio_and_tail() {
    let clip = Patch::civilian_win().render(SR);
    let minimum = seconds_to_samples(0.3 + 0.6 + 0.5, SR);
    assert!(
        clip.len() >= minimum,
        "clip has {} samples, expected at least {minimum}",
        clip.len()
    );
}

#[test]
fn civilian_win_peak_within_full_scale() {
    let clip = Patch::civilian_win().render(SR);
    assert!(clip.peak() <= 1.0 + 1e-6, "peak {}", clip.peak());
}

#[test]
fn civilian_win_starts_on_attack_zero() {
    let clip = Patch::civilian_win().render(SR);
    assert_eq!(clip.samples[0], 0.0);
}

#[test]
fn civilian_win_each_note_enters_at_its_offset() {
    // Before the second note enters, only the first arpeggio voice sounds.
    let patch = Patch::civilian_win();
    let mixed = patch.mix(SR);
    let first_voice = patch.voices[0].render(SR);
    let second_start = seconds_to_samples(0.1, SR);

    for i in 0..second_start {
        assert_eq!(mixed.samples()[i], first_voice[i], "mismatch at {i}");
    }
}

#[test]
fn civilian_win_fades_out_before_end() {
    let clip = Patch::civilian_win().render(SR);
    let tail = &clip.samples[clip.len() - seconds_to_samples(0.5, SR)..];
    assert!(tail.iter().all(|&s| s == 0.0), "slack region should be silent");
}

// ---------------------------------------------------------------------------
// 2. Undercover win
// ---------------------------------------------------------------------------

#[test]
fn undercover_win_length_is_three_seconds() {
    let clip = Patch::undercover_win().render(SR);
    assert_eq!(clip.len(), seconds_to_samples(3.0, SR));
}

#[test]
fn undercover_win_peak_within_full_scale() {
    let clip = Patch::undercover_win().render(SR);
    assert!(clip.peak() <= 1.0 + 1e-6, "peak {}", clip.peak());
}

#[test]
fn undercover_bass_energy_confined_to_first_second_and_a_half() {
    let patch = Patch::undercover_win();
    let bass = patch
        .voices
        .iter()
        .find(|v| matches!(v.source, Source::Sweep { .. }))
        .expect("undercover patch has a bass sweep");

    let mut timeline = Timeline::new(patch.duration, SR);
    timeline.place(bass.start, &bass.render(SR));

    let split = seconds_to_samples(1.5, SR);
    assert!(rms(&timeline.samples()[..split]) > 0.01);
    assert!(timeline.samples()[split..].iter().all(|&s| s == 0.0));
}

#[test]
fn undercover_cluster_swells_then_fades() {
    let patch = Patch::undercover_win();
    let cluster = patch.voices[0].render(SR);
    let second = SR as usize;

    let start = rms(&cluster[..second / 10]);
    let peak_region = rms(&cluster[second - second / 10..second + second / 10]);
    let end = rms(&cluster[cluster.len() - second / 10..]);

    assert!(peak_region > start * 5.0, "start {start}, middle {peak_region}");
    assert!(peak_region > end * 5.0, "middle {peak_region}, end {end}");
}

#[test]
fn undercover_cluster_carries_negative_offset() {
    // Each saw sits on a -1 offset, so the swelling cluster pulls the whole
    // clip below zero.
    let clip = Patch::undercover_win().render(SR);
    let mean = clip.samples.iter().sum::<f32>() / clip.len() as f32;
    assert!(mean < -0.15, "mean {mean}");

    let middle = seconds_to_samples(1.0, SR);
    assert!(clip.samples[middle - 100..middle + 100].iter().all(|&s| s < 0.1));
}

// ---------------------------------------------------------------------------
// 3. Composition rules
// ---------------------------------------------------------------------------

#[test]
fn mixing_order_does_not_change_result() {
    let mut patch = Patch::civilian_win();
    let forward = patch.mix(SR);
    patch.voices.reverse();
    let backward = patch.mix(SR);

    for (a, b) in forward.samples().iter().zip(backward.samples()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn loud_patch_is_normalized_to_unity() {
    let loud = Patch {
        name: "loud",
        title: "Loud",
        duration: 0.2,
        voices: (0..4)
            .map(|_| VoiceSpec {
                source: Source::Tone(Tone::new(Waveform::Sine, 220.0, 0.2, 0.9)),
                shape: None,
                start: 0.0,
            })
            .collect(),
    };

    assert!(peak(loud.mix(SR).samples()) > 3.0);
    let clip = loud.render(SR);
    assert!((clip.peak() - 1.0).abs() < 1e-6);
}

#[test]
fn voice_past_end_grows_clip() {
    let patch = Patch {
        name: "late",
        title: "Late",
        duration: 0.5,
        voices: vec![VoiceSpec {
            source: Source::Sweep {
                sweep: Sweep::new(200.0, 100.0, 0.1, 0.5, 1.0),
                duration: 0.4,
            },
            shape: Some(Shape::ExpDecay { rate: 2.0 }),
            start: 0.3,
        }],
    };

    let clip = patch.render(SR);
    assert_eq!(
        clip.len(),
        seconds_to_samples(0.3, SR) + seconds_to_samples(0.4, SR)
    );
}

#[test]
fn normalize_after_mix_is_stable() {
    let mut samples = Patch::undercover_win().mix(SR).into_samples();
    normalize(&mut samples);
    let snapshot = samples.clone();
    normalize(&mut samples);
    assert_eq!(samples, snapshot);
}
