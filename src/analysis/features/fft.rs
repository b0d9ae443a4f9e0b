// FFT module - fixed-length magnitude spectrum computation
//
// The harmonic content statistic uses one real-input DFT of the whole
// trimmed waveform at a fixed transform length, zero-padded or truncated
// as needed. No window is applied: the statistic compares raw magnitude
// mass near reference fundamentals against total magnitude mass, and
// windowing would change both sides of that ratio.

use rustfft::{num_complex::Complex, FftPlanner};
use std::sync::{Arc, Mutex};

/// Fixed transform length for the harmonic content spectrum
pub const TRANSFORM_LEN: usize = 65536;

/// FFT processor that computes the non-negative-frequency magnitude
/// spectrum of a waveform at [`TRANSFORM_LEN`] points
pub struct FftProcessor {
    fft_planner: Arc<Mutex<FftPlanner<f32>>>,
    transform_len: usize,
}

impl FftProcessor {
    pub fn new() -> Self {
        Self {
            fft_planner: Arc::new(Mutex::new(FftPlanner::new())),
            transform_len: TRANSFORM_LEN,
        }
    }

    /// Compute the magnitude spectrum of `audio`
    ///
    /// The input is truncated to [`TRANSFORM_LEN`] samples if longer, or
    /// zero-padded if shorter, then transformed. Only non-negative
    /// frequencies are returned (size = TRANSFORM_LEN / 2 + 1), exploiting
    /// the symmetry of a real-valued input.
    pub fn compute_magnitude_spectrum(&self, audio: &[f32]) -> Vec<f32> {
        let mut buffer: Vec<Complex<f32>> = Vec::with_capacity(self.transform_len);

        for &sample in audio.iter().take(self.transform_len) {
            buffer.push(Complex::new(sample, 0.0));
        }
        while buffer.len() < self.transform_len {
            buffer.push(Complex::new(0.0, 0.0));
        }

        let fft = {
            let mut planner = self.fft_planner.lock().unwrap();
            planner.plan_fft_forward(self.transform_len)
        };
        fft.process(&mut buffer);

        buffer[..self.transform_len / 2 + 1]
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}

impl Default for FftProcessor {
    fn default() -> Self {
        Self::new()
    }
}
