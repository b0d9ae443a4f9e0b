// FeatureExtractor - acoustic statistics for category classification
//
// This module turns a raw mono waveform into the fixed 4-dimensional
// statistic vector the classifier consumes.
//
// Module organization:
// - types: Data structures (Features struct)
// - temporal: Zero trimming, segmentation, framed ZCR median
// - coherence: Welch magnitude-squared coherence vs. a noise reference
// - fft: Fixed-length magnitude spectrum
// - harmonic: Spectral energy near piano-key fundamentals
// - noise: Injectable Gaussian noise source
// - mod.rs: Coordinator (FeatureExtractor)
//
// Statistics extracted, in classifier order:
// 1. Coherence median: median coherence against fresh white noise
// 2. Coherence range: max - min of the same coherence curve
// 3. Harmonic content: % of spectral mass near the 88 piano-key pitches
// 4. ZCR median: median per-segment zero-crossing rate over 50 segments
//
// The two coherence statistics are stochastic on purpose: the reference
// noise is drawn fresh per call, so repeated calls on identical input may
// differ slightly. Tests pin the noise source's seed.

pub mod coherence;
pub mod fft;
pub mod harmonic;
pub mod noise;
pub mod temporal;
mod types;

pub use noise::NoiseSource;
pub use types::Features;

use crate::error::FeatureError;
use coherence::CoherenceEstimator;
use fft::FftProcessor;
use temporal::{median, trim_zeros, zcr_median};

/// FeatureExtractor coordinates the statistic extraction pipeline
///
/// Construction fixes the sample rate; `extract` may then be called for
/// any number of waveforms recorded at that rate.
pub struct FeatureExtractor {
    sample_rate: u32,
    fft_processor: FftProcessor,
    coherence_estimator: CoherenceEstimator,
}

impl FeatureExtractor {
    /// Create a new FeatureExtractor
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz (must be > 0)
    pub fn new(sample_rate: u32) -> Result<Self, FeatureError> {
        if sample_rate == 0 {
            return Err(FeatureError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            fft_processor: FftProcessor::new(),
            coherence_estimator: CoherenceEstimator::new(),
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Extract the four statistics from a waveform
    ///
    /// Pipeline:
    /// 1. Trim leading/trailing exact-zero samples (interior zeros kept)
    /// 2. Median per-segment zero-crossing rate over 50 segments
    /// 3. Welch coherence against a noise reference of the trimmed length
    /// 4. Harmonic content from the 65536-point magnitude spectrum
    ///
    /// # Arguments
    /// * `samples` - Mono PCM waveform
    /// * `noise` - Gaussian source for the coherence reference
    ///
    /// # Errors
    /// `FeatureError::EmptySignal` if nothing remains after trimming.
    pub fn extract(
        &self,
        samples: &[f32],
        noise: &mut NoiseSource,
    ) -> Result<Features, FeatureError> {
        let trimmed = trim_zeros(samples);
        if trimmed.is_empty() {
            return Err(FeatureError::EmptySignal);
        }

        let zcr = zcr_median(trimmed);

        let reference = noise.gaussian(trimmed.len());
        let coherence_curve = self.coherence_estimator.estimate(trimmed, &reference);
        let coherence_median = median(&coherence_curve);
        let coherence_max = coherence_curve.iter().cloned().fold(f32::MIN, f32::max);
        let coherence_min = coherence_curve.iter().cloned().fold(f32::MAX, f32::min);

        let spectrum = self.fft_processor.compute_magnitude_spectrum(trimmed);
        let harmonic = harmonic::harmonic_content(&spectrum);

        Ok(Features {
            coherence_median,
            coherence_range: coherence_max - coherence_min,
            harmonic_content: harmonic,
            zcr_median: zcr,
        })
    }
}
