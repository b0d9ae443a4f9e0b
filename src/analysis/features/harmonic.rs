// Harmonic module - spectral energy near musical pitch fundamentals
//
// Measures what fraction of a magnitude spectrum's mass sits within +/-2%
// of any of the 88 piano-key fundamental frequencies. The frequency axis
// and the 16000-bin prefix are fixed conventions the empirical tables were
// measured under: the axis always spans 0..22050 Hz regardless of the
// actual sample rate, and the prefix is a fixed index count, not a
// frequency cutoff.

use once_cell::sync::Lazy;

/// Nominal top of the frequency axis in Hz (fixed, not sample-rate derived)
pub const AXIS_MAX_HZ: f32 = 22050.0;

/// Number of leading (frequency, magnitude) pairs considered
pub const BIN_PREFIX: usize = 16000;

/// Relative half-width of the match window around each fundamental
const MATCH_TOLERANCE: f32 = 0.02;

/// The 88 piano-key fundamental frequencies in Hz (A0 through C8),
/// equal temperament anchored at A4 = 440 Hz
pub static PIANO_KEYS: Lazy<[f32; 88]> = Lazy::new(|| {
    let mut keys = [0.0_f32; 88];
    for (i, key) in keys.iter_mut().enumerate() {
        let n = i as f32 + 1.0;
        *key = 440.0 * 2.0_f32.powf((n - 49.0) / 12.0);
    }
    keys
});

/// Percentage of total spectral magnitude near piano-key fundamentals
///
/// Walks the first [`BIN_PREFIX`] bins of the spectrum against a linearly
/// spaced frequency axis from 0 to [`AXIS_MAX_HZ`] inclusive, accumulating
/// the magnitude of every bin whose frequency falls strictly inside the
/// +/-2% window around any fundamental (open interval on both sides).
/// Result is in [0, 100]; an all-zero spectrum yields 0.
pub fn harmonic_content(spectrum: &[f32]) -> f32 {
    let total: f32 = spectrum.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let axis_step = AXIS_MAX_HZ / (spectrum.len() - 1) as f32;
    let mut harmonic_energy = 0.0;
    for (bin, &magnitude) in spectrum.iter().take(BIN_PREFIX).enumerate() {
        let frequency = bin as f32 * axis_step;
        let near_fundamental = PIANO_KEYS.iter().any(|&f0| {
            frequency > (1.0 - MATCH_TOLERANCE) * f0 && frequency < (1.0 + MATCH_TOLERANCE) * f0
        });
        if near_fundamental {
            harmonic_energy += magnitude;
        }
    }

    100.0 * harmonic_energy / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::fft::TRANSFORM_LEN;

    #[test]
    fn test_piano_keys_span_and_order() {
        assert!((PIANO_KEYS[0] - 27.5).abs() < 0.01, "A0 should be 27.5 Hz");
        assert!((PIANO_KEYS[48] - 440.0).abs() < 0.01, "A4 should be 440 Hz");
        assert!((PIANO_KEYS[87] - 4186.0).abs() < 0.1, "C8 should be ~4186 Hz");
        for pair in PIANO_KEYS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_zero_spectrum_yields_zero() {
        let spectrum = vec![0.0; TRANSFORM_LEN / 2 + 1];
        assert_eq!(harmonic_content(&spectrum), 0.0);
    }

    #[test]
    fn test_result_bounded_by_hundred() {
        // Flat spectrum: every bin has equal mass, only near-fundamental
        // bins count, so the result must be well below 100
        let spectrum = vec![1.0; TRANSFORM_LEN / 2 + 1];
        let content = harmonic_content(&spectrum);
        assert!((0.0..=100.0).contains(&content));
        assert!(content < 50.0);
    }

    #[test]
    fn test_energy_at_fundamental_counts() {
        let len = TRANSFORM_LEN / 2 + 1;
        let axis_step = AXIS_MAX_HZ / (len - 1) as f32;
        // Put all mass in the bin closest to A4 (440 Hz)
        let bin = (440.0 / axis_step).round() as usize;
        let mut spectrum = vec![0.0; len];
        spectrum[bin] = 10.0;
        assert!((harmonic_content(&spectrum) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_energy_between_fundamentals_does_not_count() {
        let len = TRANSFORM_LEN / 2 + 1;
        let axis_step = AXIS_MAX_HZ / (len - 1) as f32;
        // Midpoint between A4 (440) and A#4 (~466.16) is outside both 2% windows
        let bin = (452.9 / axis_step).round() as usize;
        let mut spectrum = vec![0.0; len];
        spectrum[bin] = 10.0;
        assert_eq!(harmonic_content(&spectrum), 0.0);
    }

    #[test]
    fn test_bins_past_prefix_ignored() {
        let len = TRANSFORM_LEN / 2 + 1;
        let mut spectrum = vec![0.0; len];
        // One matched bin inside the prefix, heavy mass far past it
        let axis_step = AXIS_MAX_HZ / (len - 1) as f32;
        let matched = (440.0 / axis_step).round() as usize;
        spectrum[matched] = 1.0;
        spectrum[BIN_PREFIX + 100] = 99.0;
        // Harmonic energy counts only the matched bin, total counts both
        assert!((harmonic_content(&spectrum) - 1.0).abs() < 1e-3);
    }
}
