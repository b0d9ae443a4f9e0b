// Analysis - feature extraction and category classification
//
// This module hosts the two algorithmic components of the categorizer, in
// dependency order:
// - features: turns a raw waveform into a fixed 4-dimensional statistic vector
// - classifier: scores that vector against per-feature probability tables
//   and picks the winning category
//
// The coordinator function below runs both stages for callers that only
// want a label for a waveform.

pub mod classifier;
pub mod features;

pub use classifier::{classify, Category, Classification, ScoreVector};
pub use features::{FeatureExtractor, Features, NoiseSource};

use crate::config::ClassifierConfig;
use crate::error::FeatureError;

/// Run the full pipeline: extract features from a waveform, then classify
///
/// The noise source feeds the coherence statistics' white-noise reference;
/// production callers use [`NoiseSource::from_entropy`], tests pass a
/// seeded source for determinism.
///
/// # Arguments
/// * `samples` - Mono PCM waveform (caller-owned, read once)
/// * `sample_rate` - Sample rate in Hz (must be > 0)
/// * `config` - Immutable tables and weights
/// * `noise` - Gaussian noise source for the coherence reference
pub fn classify_waveform(
    samples: &[f32],
    sample_rate: u32,
    config: &ClassifierConfig,
    noise: &mut NoiseSource,
) -> Result<Classification, FeatureError> {
    let extractor = FeatureExtractor::new(sample_rate)?;
    let features = extractor.extract(samples, noise).map_err(|err| {
        crate::error::log_feature_error(&err, "classify_waveform");
        err
    })?;
    tracing::debug!(
        "[Analysis] features: coherence_median={:.4} coherence_range={:.4} harmonic_content={:.2} zcr_median={:.4}",
        features.coherence_median,
        features.coherence_range,
        features.harmonic_content,
        features.zcr_median
    );
    Ok(classify(&features, config))
}
