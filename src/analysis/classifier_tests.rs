use super::*;
use crate::config::{ClassifierConfig, FEATURE_COUNT};

/// Helper to create a Features struct for testing
fn create_features(
    coherence_median: f32,
    coherence_range: f32,
    harmonic_content: f32,
    zcr_median: f32,
) -> Features {
    Features {
        coherence_median,
        coherence_range,
        harmonic_content,
        zcr_median,
    }
}

/// Features with the same value in every dimension
fn uniform_features(value: f32) -> Features {
    create_features(value, value, value, value)
}

/// One scripted table repeated across all four dimensions
fn uniform_config(entries: &[(f32, [f32; CATEGORY_COUNT])], weights: [f32; FEATURE_COUNT]) -> ClassifierConfig {
    let table = ProbabilityTable::new(
        entries
            .iter()
            .map(|(b, v)| (*b, v.to_vec()))
            .collect(),
    )
    .unwrap();
    ClassifierConfig::new(
        [table.clone(), table.clone(), table.clone(), table],
        weights,
    )
    .unwrap()
}

/// Scripted scenario: three breakpoints, index 0 favored
/// at or below the first breakpoint
fn scripted_config() -> ClassifierConfig {
    uniform_config(
        &[
            (-1.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (0.0, [5.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    )
}

#[test]
fn test_category_ordering_is_stable() {
    assert_eq!(
        Category::ALL,
        [
            Category::Effects,
            Category::Human,
            Category::Music,
            Category::Nature,
            Category::Urban,
        ]
    );
    for (i, category) in Category::ALL.iter().enumerate() {
        assert_eq!(category.index(), i);
    }
}

#[test]
fn test_all_stats_above_final_breakpoint_scores_zero() {
    let config = scripted_config();
    let result = classify(&uniform_features(10.0), &config);

    assert_eq!(result.scores, [0.0; CATEGORY_COUNT]);
    // All-zero scores tie-break to the first category in ordinal order
    assert_eq!(result.category, Category::Effects);
}

#[test]
fn test_stat_at_final_breakpoint_scores_zero() {
    let config = scripted_config();
    let result = classify(&uniform_features(1.0), &config);
    assert_eq!(result.scores, [0.0; CATEGORY_COUNT]);
}

#[test]
fn test_all_stats_below_first_breakpoint_uses_first_vector() {
    // Scripted scenario: features (-2,-2,-2,-2) against tables
    // {-1:[1,1,1,1,1], 0:[5,1,1,1,1], 1:[1,1,1,1,1]} with unit weights.
    // stat <= b0 contributes the vector AT the first breakpoint, which is
    // all ones here, so every score is ln(1) = 0 and the winner is the
    // category at index 0 by the ordinal tie-break.
    let config = scripted_config();
    let result = classify(&uniform_features(-2.0), &config);
    assert_eq!(result.scores, [0.0; CATEGORY_COUNT]);
    assert_eq!(result.category, Category::Effects);
}

#[test]
fn test_bracket_between_first_two_breakpoints_uses_upper_vector() {
    // stat in (-1, 0) matches the bracket at the first breakpoint and
    // contributes the vector ABOVE the interval's lower edge: [5,1,1,1,1].
    // Four dimensions, unit weights: index 0 accumulates 4*ln(5).
    let config = scripted_config();
    let result = classify(&uniform_features(-0.5), &config);

    let expected = 4.0 * 5.0_f32.ln();
    assert!((result.scores[0] - expected).abs() < 1e-5);
    for &score in &result.scores[1..] {
        assert!(score.abs() < 1e-6);
    }
    assert_eq!(result.category, Category::Effects);
}

#[test]
fn test_scripted_scenario_selects_index_zero() {
    // End-to-end scripted scenario: stat -2 is at or below the first
    // breakpoint of every table, weights all 1. With these tables the
    // winning category is the one at index 0.
    let config = uniform_config(
        &[
            (-1.0, [5.0, 1.0, 1.0, 1.0, 1.0]),
            (0.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    let result = classify(&uniform_features(-2.0), &config);

    assert_eq!(result.category, Category::Effects);
    assert!(result.scores[0] > result.scores[1]);
}

#[test]
fn test_zero_probability_disqualifies_category() {
    // Music has probability zero in the first vector: its score must be
    // negative infinity and it must never win, whatever the other
    // dimensions contribute.
    let config = uniform_config(
        &[
            (0.0, [1.0, 1.0, 0.0, 1.0, 1.0]),
            (1.0, [1.0, 1.0, 9.0, 1.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    let result = classify(&uniform_features(-1.0), &config);

    assert_eq!(result.scores[Category::Music.index()], f32::NEG_INFINITY);
    assert_ne!(result.category, Category::Music);
}

#[test]
fn test_stat_on_interior_breakpoint_contributes_zero_vector() {
    // Strict comparisons on both sides of the bracket mean a stat equal
    // to an interior breakpoint matches no rule; the safe fallback is a
    // zero-vector contribution.
    let config = uniform_config(
        &[
            (-1.0, [2.0, 3.0, 4.0, 5.0, 6.0]),
            (0.0, [6.0, 5.0, 4.0, 3.0, 2.0]),
            (1.0, [9.0, 9.0, 9.0, 9.0, 9.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    let result = classify(&uniform_features(0.0), &config);
    assert_eq!(result.scores, [0.0; CATEGORY_COUNT]);
}

#[test]
fn test_scan_never_reaches_last_interval() {
    // The bracket scan skips the final two breakpoints, so a stat inside
    // the last interval (between b_{n-2} and b_{n-1}) matches nothing and
    // falls back to the zero vector.
    let config = uniform_config(
        &[
            (-1.0, [2.0, 3.0, 4.0, 5.0, 6.0]),
            (0.0, [6.0, 5.0, 4.0, 3.0, 2.0]),
            (1.0, [9.0, 9.0, 9.0, 9.0, 9.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    let result = classify(&uniform_features(1.5), &config);
    assert_eq!(result.scores, [0.0; CATEGORY_COUNT]);
}

#[test]
fn test_weights_scale_contributions() {
    let config = uniform_config(
        &[
            (0.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [std::f32::consts::E, 1.0, 1.0, 1.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0, 2.0, 3.0, 4.0],
    );
    // stat 0.5 brackets (b0, b1) in every dimension and contributes
    // weight * ln(e) = weight to index 0
    let result = classify(&uniform_features(0.5), &config);
    assert!((result.scores[0] - 10.0).abs() < 1e-5);
}

#[test]
fn test_classifier_symmetry_under_table_relabeling() {
    // Swapping two categories' columns in every table must swap the
    // prediction the same way, stats held fixed.
    let original = uniform_config(
        &[
            (0.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [7.0, 1.0, 2.0, 1.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    // Same table with Effects and Nature columns swapped
    let swapped = uniform_config(
        &[
            (0.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [1.0, 1.0, 2.0, 7.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );

    let features = uniform_features(0.5);
    let a = classify(&features, &original);
    let b = classify(&features, &swapped);

    assert_eq!(a.category, Category::Effects);
    assert_eq!(b.category, Category::Nature);
    assert_eq!(a.scores[Category::Effects.index()], b.scores[Category::Nature.index()]);
    assert_eq!(a.scores[Category::Nature.index()], b.scores[Category::Effects.index()]);
}

#[test]
fn test_tie_breaks_to_lowest_ordinal() {
    let config = uniform_config(
        &[
            (0.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
            (1.0, [1.0, 3.0, 3.0, 1.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0, 1.0]),
        ],
        [1.0; FEATURE_COUNT],
    );
    // Human and Music tie; Human has the lower ordinal
    let result = classify(&uniform_features(0.5), &config);
    assert_eq!(result.category, Category::Human);
}
