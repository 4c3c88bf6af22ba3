//! Peak limiting before quantization.

use libm::fabsf;

/// Largest absolute sample value, or 0.0 for an empty buffer.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &s| acc.max(fabsf(s)))
}

/// Scale `samples` down so the peak does not exceed full scale.
///
/// Buffers whose peak is already at or below 1.0 are left untouched; quiet
/// material is never amplified. Returns the divisor applied (1.0 when the
/// buffer was not changed).
pub fn normalize(samples: &mut [f32]) -> f32 {
    let peak = peak(samples);
    if peak <= 1.0 {
        return 1.0;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(peak, "normalize: rescaling");

    for sample in samples.iter_mut() {
        *sample /= peak;
    }
    peak
}
