// Error types for the audio categorizer
//
// This module defines custom error types for feature extraction and
// configuration loading, providing structured error handling with numeric
// error codes.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling at the
/// crate boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log a feature extraction error with structured context
pub fn log_feature_error(err: &FeatureError, context: &str) {
    error!(
        "Feature error in {}: code={}, component=FeatureExtractor, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Log a configuration error with structured context
pub fn log_config_error(err: &ConfigError, context: &str) {
    error!(
        "Config error in {}: code={}, component=ClassifierConfig, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Feature extraction errors
///
/// These errors cover malformed waveform input. A negative-infinity score
/// produced by a zero probability downstream is deliberately NOT an error;
/// it propagates through the score accumulator and disqualifies the
/// affected category.
///
/// Error code range: 1001-1002
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Waveform contains no samples after trimming leading/trailing zeros
    EmptySignal,

    /// Sample rate must be positive
    InvalidSampleRate { rate: u32 },
}

impl ErrorCode for FeatureError {
    fn code(&self) -> i32 {
        match self {
            FeatureError::EmptySignal => 1001,
            FeatureError::InvalidSampleRate { .. } => 1002,
        }
    }

    fn message(&self) -> String {
        match self {
            FeatureError::EmptySignal => {
                "Waveform is empty after trimming leading/trailing zero samples".to_string()
            }
            FeatureError::InvalidSampleRate { rate } => {
                format!("Sample rate must be greater than 0 (got {})", rate)
            }
        }
    }
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FeatureError {}

/// Configuration errors
///
/// A probability table that violates its structural invariants is fatal at
/// load time and never silently repaired.
///
/// Error code range: 2001-2004
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Probability table has no breakpoints
    EmptyTable,

    /// Breakpoints are not strictly increasing (unsorted or duplicated)
    NonAscendingBreakpoints { breakpoint: f32 },

    /// A probability vector does not have one entry per category
    WrongVectorLength { len: usize },

    /// A probability entry is negative
    NegativeProbability { value: f32 },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> i32 {
        match self {
            ConfigError::EmptyTable => 2001,
            ConfigError::NonAscendingBreakpoints { .. } => 2002,
            ConfigError::WrongVectorLength { .. } => 2003,
            ConfigError::NegativeProbability { .. } => 2004,
        }
    }

    fn message(&self) -> String {
        match self {
            ConfigError::EmptyTable => "Probability table has no breakpoints".to_string(),
            ConfigError::NonAscendingBreakpoints { breakpoint } => {
                format!(
                    "Breakpoints must be strictly increasing (violation at {})",
                    breakpoint
                )
            }
            ConfigError::WrongVectorLength { len } => {
                format!("Probability vector must have 5 entries (got {})", len)
            }
            ConfigError::NegativeProbability { value } => {
                format!("Probability entries must be non-negative (got {})", value)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConfigError {}
