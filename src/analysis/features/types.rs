// Types module - Data structures for audio features
//
// This module defines the statistic vector produced by the feature
// extraction pipeline and consumed by the classifier.

/// The four acoustic statistics extracted from a waveform
///
/// Field order is significant: it is the order the classifier's tables and
/// weights are aligned with (see [`Features::as_array`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// Median magnitude-squared coherence against a white-noise reference
    ///
    /// Coherence is in [0, 1] per frequency bin. Tonal, structured signals
    /// decorrelate from noise differently than broadband ones.
    pub coherence_median: f32,

    /// Spread (max - min) of the coherence curve, in [0, 1]
    pub coherence_range: f32,

    /// Percentage of spectral energy near piano-key fundamentals (0 to 100)
    ///
    /// High values indicate musical pitch content; broadband noise spreads
    /// its energy away from the 88 reference fundamentals.
    pub harmonic_content: f32,

    /// Median per-segment zero-crossing rate (>= 0)
    ///
    /// A coarse noisiness/pitch proxy: high values indicate noise-like or
    /// high-frequency content.
    pub zcr_median: f32,
}

impl Features {
    /// The statistics in their fixed classifier-facing order:
    /// (coherence_median, coherence_range, harmonic_content, zcr_median)
    pub fn as_array(&self) -> [f32; 4] {
        [
            self.coherence_median,
            self.coherence_range,
            self.harmonic_content,
            self.zcr_median,
        ]
    }
}
