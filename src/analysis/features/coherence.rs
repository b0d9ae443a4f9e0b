// Coherence module - Welch magnitude-squared coherence estimation
//
// Estimates the frequency-domain linear correlation between the waveform
// and a white-noise reference. Standard Welch segmentation: Hann window,
// 256-sample segments, 50% overlap, per-segment mean removal. The
// estimator is deterministic given the same two input sequences; the
// stochastic part of the coherence statistics comes only from the noise
// reference drawn by the caller.
//
// Cxy(f) = |Pxy(f)|^2 / (Pxx(f) * Pyy(f)), in [0, 1] per frequency bin.
// Welch scaling constants cancel in the ratio and are omitted.

use rustfft::{num_complex::Complex, FftPlanner};
use std::sync::{Arc, Mutex};

/// Welch segment length (frequency resolution of the coherence curve)
pub const SEGMENT_LEN: usize = 256;

/// Welch coherence estimator with pre-planned FFTs
pub struct CoherenceEstimator {
    fft_planner: Arc<Mutex<FftPlanner<f32>>>,
}

impl CoherenceEstimator {
    pub fn new() -> Self {
        Self {
            fft_planner: Arc::new(Mutex::new(FftPlanner::new())),
        }
    }

    /// Magnitude-squared coherence between two equal-length signals
    ///
    /// Returns one value per non-negative frequency bin
    /// (`segment_len / 2 + 1` values). Signals shorter than
    /// [`SEGMENT_LEN`] are analyzed as a single shortened segment. Bins
    /// where either auto-spectrum vanishes yield 0.0 rather than NaN.
    ///
    /// # Panics
    /// Panics if the two signals have different lengths; the caller always
    /// draws the reference at the signal's length.
    pub fn estimate(&self, x: &[f32], y: &[f32]) -> Vec<f32> {
        assert_eq!(x.len(), y.len(), "coherence inputs must be equal length");

        let seg_len = SEGMENT_LEN.min(x.len()).max(1);
        let hop = (seg_len / 2).max(1);
        let bins = seg_len / 2 + 1;
        let window = hann_window(seg_len);

        let fft = {
            let mut planner = self.fft_planner.lock().unwrap();
            planner.plan_fft_forward(seg_len)
        };

        let mut pxx = vec![0.0_f32; bins];
        let mut pyy = vec![0.0_f32; bins];
        let mut pxy = vec![Complex::new(0.0_f32, 0.0_f32); bins];

        let mut start = 0;
        while start + seg_len <= x.len() {
            let spec_x = windowed_spectrum(&x[start..start + seg_len], &window, fft.as_ref());
            let spec_y = windowed_spectrum(&y[start..start + seg_len], &window, fft.as_ref());
            for bin in 0..bins {
                pxx[bin] += spec_x[bin].norm_sqr();
                pyy[bin] += spec_y[bin].norm_sqr();
                pxy[bin] += spec_x[bin] * spec_y[bin].conj();
            }
            start += hop;
        }

        (0..bins)
            .map(|bin| {
                let denom = pxx[bin] * pyy[bin];
                if denom > 0.0 {
                    (pxy[bin].norm_sqr() / denom).clamp(0.0, 1.0)
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl Default for CoherenceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hann window of the given length
fn hann_window(len: usize) -> Vec<f32> {
    if len == 1 {
        return vec![1.0];
    }
    (0..len)
        .map(|i| {
            0.5 * (1.0 - ((2.0 * std::f32::consts::PI * i as f32) / (len as f32 - 1.0)).cos())
        })
        .collect()
}

/// Mean-removed, windowed FFT of one segment (non-negative bins only)
fn windowed_spectrum(
    segment: &[f32],
    window: &[f32],
    fft: &dyn rustfft::Fft<f32>,
) -> Vec<Complex<f32>> {
    let mean = segment.iter().sum::<f32>() / segment.len() as f32;
    let mut buffer: Vec<Complex<f32>> = segment
        .iter()
        .zip(window)
        .map(|(&s, &w)| Complex::new((s - mean) * w, 0.0))
        .collect();
    fft.process(&mut buffer);
    buffer.truncate(segment.len() / 2 + 1);
    buffer
}
