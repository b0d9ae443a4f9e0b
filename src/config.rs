//! Classifier configuration: probability tables and feature weights
//!
//! This module provides the immutable configuration consumed by the
//! piecewise log-likelihood classifier. The built-in defaults are the
//! empirical tables shipped with the crate; an optional JSON file can
//! override them at startup. Configuration is loaded once, validated, and
//! never mutated afterwards, so it can be shared freely across threads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::classifier::CATEGORY_COUNT;
use crate::error::ConfigError;

/// Number of feature dimensions: coherence median, coherence range,
/// harmonic content, ZCR median. Positionally aligned with
/// [`crate::analysis::features::Features::as_array`].
pub const FEATURE_COUNT: usize = 4;

/// Ordered mapping from ascending breakpoint values to one probability
/// vector per category.
///
/// Invariants (enforced by [`ProbabilityTable::validate`]):
/// - at least one breakpoint
/// - breakpoints strictly increasing
/// - every vector has exactly [`CATEGORY_COUNT`] non-negative entries
///
/// Probability entries are relative empirical frequencies, not normalized
/// probabilities; only their logarithms' relative magnitudes matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    entries: Vec<(f32, Vec<f32>)>,
}

impl ProbabilityTable {
    /// Build a table from `(breakpoint, probability vector)` pairs,
    /// validating the structural invariants.
    pub fn new(entries: Vec<(f32, Vec<f32>)>) -> Result<Self, ConfigError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Breakpoint/vector pairs in ascending breakpoint order
    pub fn entries(&self) -> &[(f32, Vec<f32>)] {
        &self.entries
    }

    /// Check the structural invariants, failing fast on the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut prev: Option<f32> = None;
        for (breakpoint, vector) in &self.entries {
            if let Some(prev) = prev {
                if *breakpoint <= prev {
                    return Err(ConfigError::NonAscendingBreakpoints {
                        breakpoint: *breakpoint,
                    });
                }
            }
            prev = Some(*breakpoint);

            if vector.len() != CATEGORY_COUNT {
                return Err(ConfigError::WrongVectorLength { len: vector.len() });
            }
            for &value in vector {
                if value < 0.0 {
                    return Err(ConfigError::NegativeProbability { value });
                }
            }
        }
        Ok(())
    }
}

/// Complete classifier configuration
///
/// One [`ProbabilityTable`] per feature dimension plus one weight per
/// dimension, both in feature order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub tables: [ProbabilityTable; FEATURE_COUNT],
    pub weights: [f32; FEATURE_COUNT],
}

impl ClassifierConfig {
    /// Build a configuration from explicit tables and weights, validating
    /// every table.
    pub fn new(
        tables: [ProbabilityTable; FEATURE_COUNT],
        weights: [f32; FEATURE_COUNT],
    ) -> Result<Self, ConfigError> {
        let config = Self { tables, weights };
        config.validate()?;
        Ok(config)
    }

    /// Validate all four probability tables
    pub fn validate(&self) -> Result<(), ConfigError> {
        for table in &self.tables {
            table.validate()?;
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    ///
    /// A missing or unparseable file logs a warning and falls back to the
    /// built-in defaults. A file that parses but violates the table
    /// invariants is a hard error: broken tables are never silently
    /// repaired.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        };
        if let Err(err) = config.validate() {
            crate::error::log_config_error(&err, "load_from_file");
            return Err(err);
        }
        Ok(config)
    }
}

fn table(entries: &[(f32, [f32; CATEGORY_COUNT])]) -> ProbabilityTable {
    ProbabilityTable {
        entries: entries.iter().map(|(b, v)| (*b, v.to_vec())).collect(),
    }
}

impl Default for ClassifierConfig {
    /// Built-in empirical tables and weights
    ///
    /// Vectors are per-category observation counts in the fixed order
    /// (Effects, Human, Music, Nature, Urban). The vector attached to the
    /// final breakpoint never contributes to a score (statistics at or
    /// above it contribute nothing); it only closes the last interval.
    fn default() -> Self {
        Self {
            tables: [
                // Coherence median
                table(&[
                    (0.040, [2.0, 1.0, 1.0, 3.0, 2.0]),
                    (0.055, [3.0, 2.0, 1.0, 4.0, 3.0]),
                    (0.070, [4.0, 3.0, 2.0, 6.0, 5.0]),
                    (0.085, [2.0, 5.0, 4.0, 3.0, 4.0]),
                    (0.100, [1.0, 3.0, 6.0, 1.0, 2.0]),
                    (0.130, [1.0, 1.0, 2.0, 1.0, 1.0]),
                    (0.200, [1.0, 1.0, 1.0, 1.0, 1.0]),
                ]),
                // Coherence range
                table(&[
                    (0.15, [1.0, 1.0, 2.0, 1.0, 1.0]),
                    (0.22, [2.0, 2.0, 4.0, 2.0, 2.0]),
                    (0.30, [4.0, 3.0, 5.0, 3.0, 4.0]),
                    (0.38, [5.0, 4.0, 2.0, 6.0, 5.0]),
                    (0.46, [3.0, 6.0, 1.0, 4.0, 3.0]),
                    (0.55, [1.0, 2.0, 1.0, 2.0, 2.0]),
                    (0.70, [1.0, 1.0, 1.0, 1.0, 1.0]),
                ]),
                // Harmonic content (%). No music recording in the reference
                // corpus fell below 2% harmonic energy, hence the zero entry.
                table(&[
                    (2.0, [4.0, 3.0, 0.0, 5.0, 4.0]),
                    (5.0, [5.0, 4.0, 1.0, 6.0, 5.0]),
                    (10.0, [3.0, 5.0, 2.0, 3.0, 4.0]),
                    (18.0, [2.0, 3.0, 5.0, 1.0, 2.0]),
                    (30.0, [1.0, 2.0, 7.0, 1.0, 1.0]),
                    (50.0, [1.0, 1.0, 4.0, 1.0, 1.0]),
                    (80.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
                ]),
                // ZCR median
                table(&[
                    (0.03, [2.0, 4.0, 3.0, 1.0, 1.0]),
                    (0.06, [3.0, 6.0, 5.0, 2.0, 2.0]),
                    (0.10, [4.0, 3.0, 4.0, 3.0, 4.0]),
                    (0.16, [5.0, 2.0, 2.0, 5.0, 6.0]),
                    (0.24, [3.0, 1.0, 1.0, 6.0, 4.0]),
                    (0.35, [2.0, 1.0, 1.0, 3.0, 2.0]),
                    (0.50, [1.0, 1.0, 1.0, 1.0, 1.0]),
                ]),
            ],
            weights: [1.5, 1.0, 2.0, 1.25],
        }
    }
}
