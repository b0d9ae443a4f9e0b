// Audio Categorizer Core - statistical audio category classification
// Hand-engineered acoustic statistics scored against empirical probability tables

// Module declarations
pub mod analysis;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use analysis::classifier::{classify, Category, Classification, ScoreVector};
pub use analysis::classify_waveform;
pub use analysis::features::{FeatureExtractor, Features, NoiseSource};
pub use config::{ClassifierConfig, ProbabilityTable};
pub use error::{ConfigError, FeatureError};

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Verify all modules are accessible
        // This ensures the crate compiles with proper module hierarchy
    }
}
