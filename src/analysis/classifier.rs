// Classifier - piecewise weighted log-likelihood category scoring
//
// Each of the four acoustic statistics is looked up in its probability
// table, the matched probability vector is log-weighted, and the four
// contributions are summed into one score vector. The category with the
// highest accumulated score wins; ties go to the lowest ordinal.
//
// The bracket search carries two quirks that the empirical tables were
// built against and that must not be "fixed": the final two breakpoints
// are never tested directly, and a matched interval contributes the
// vector of the breakpoint ABOVE its lower edge. See the comments on
// `table_contribution`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::features::Features;
use crate::config::{ClassifierConfig, ProbabilityTable};

/// The five semantic audio categories, in fixed ordinal order
///
/// Every probability vector and score vector in the crate is indexed by
/// this order. `Category::ALL` is the single source of the ordering; it is
/// never re-derived elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Effects,
    Human,
    Music,
    Nature,
    Urban,
}

impl Category {
    /// All categories in ordinal order
    pub const ALL: [Category; 5] = [
        Category::Effects,
        Category::Human,
        Category::Music,
        Category::Nature,
        Category::Urban,
    ];

    /// Position of this category in the shared ordering
    pub fn index(self) -> usize {
        match self {
            Category::Effects => 0,
            Category::Human => 1,
            Category::Music => 2,
            Category::Nature => 3,
            Category::Urban => 4,
        }
    }

    /// Human-readable category name
    pub fn name(self) -> &'static str {
        match self {
            Category::Effects => "Effects",
            Category::Human => "Human",
            Category::Music => "Music",
            Category::Nature => "Nature",
            Category::Urban => "Urban",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of categories; the length of every probability and score vector
pub const CATEGORY_COUNT: usize = Category::ALL.len();

/// Per-category score accumulator, indexed by `Category::ALL` order
pub type ScoreVector = [f32; CATEGORY_COUNT];

/// Classification result: the winning category and the raw scores
///
/// Scores are a relative heuristic, not normalized log-probabilities.
/// Negative infinity in a slot means the category was disqualified by a
/// zero probability entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub scores: ScoreVector,
}

/// Classify a feature vector against the configured tables and weights
///
/// Accumulates one log-weighted contribution per feature dimension and
/// returns the argmax category (first maximum in ordinal order on ties)
/// together with the raw score vector.
pub fn classify(features: &Features, config: &ClassifierConfig) -> Classification {
    let stats = features.as_array();
    let mut scores: ScoreVector = [0.0; CATEGORY_COUNT];

    for ((stat, table), weight) in stats.iter().zip(&config.tables).zip(&config.weights) {
        let contribution = table_contribution(*stat, table, *weight);
        for (score, value) in scores.iter_mut().zip(&contribution) {
            *score += value;
        }
    }

    Classification {
        category: argmax(&scores),
        scores,
    }
}

/// Compute one feature dimension's contribution to the score vector
///
/// Edge policies, which the shipped tables depend on:
/// - `stat >= last breakpoint`: zero vector (saturating edge, no
///   information rather than log of zero)
/// - `stat <= first breakpoint`: `weight * ln(v_0)` element-wise; a zero
///   probability yields negative infinity, which must propagate
/// - otherwise: scan ascending over every breakpoint except the final two
///   for `b_i < stat < b_{i+1}` and contribute `weight * ln(v_{i+1})` -
///   the vector of the breakpoint above the interval's lower edge
/// - no rule fires (stat exactly on an interior breakpoint, or inside the
///   interval the truncated scan never reaches): zero vector fallback
///
/// Whether the truncated scan range is intentional saturation or an
/// off-by-one inherited by the tables is unknown; it is kept as-is for
/// compatibility.
fn table_contribution(stat: f32, table: &ProbabilityTable, weight: f32) -> ScoreVector {
    let entries = table.entries();
    let n = entries.len();

    if stat >= entries[n - 1].0 {
        return [0.0; CATEGORY_COUNT];
    }
    if stat <= entries[0].0 {
        return weighted_log(&entries[0].1, weight);
    }
    for i in 0..n.saturating_sub(2) {
        if entries[i].0 < stat && stat < entries[i + 1].0 {
            return weighted_log(&entries[i + 1].1, weight);
        }
    }
    [0.0; CATEGORY_COUNT]
}

/// Element-wise `weight * ln(p)` over a probability vector
///
/// `ln(0.0)` is negative infinity under IEEE semantics and is deliberately
/// not clamped: it dominates the affected category's running score and
/// excludes it from winning the argmax.
fn weighted_log(vector: &[f32], weight: f32) -> ScoreVector {
    let mut out = [0.0; CATEGORY_COUNT];
    for (slot, &p) in out.iter_mut().zip(vector) {
        *slot = weight * p.ln();
    }
    out
}

/// First category with the maximum score, in ordinal order
fn argmax(scores: &ScoreVector) -> Category {
    let mut best = Category::ALL[0];
    let mut best_score = scores[0];
    for (category, &score) in Category::ALL.iter().zip(scores.iter()).skip(1) {
        if score > best_score {
            best = *category;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
