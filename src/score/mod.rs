// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Weighted ranking score over solver-reported metrics.

use crate::model::{SeatingMetrics, SeatingPlan, Weights};

/// Combines the six metrics into a single score.
///
/// Violations subtract, satisfactions add; nothing is clamped, so the result
/// may be zero or negative. The returned value keeps full precision — use
/// [`format_score`] for the one-decimal display form.
pub fn weighted_score(metrics: &SeatingMetrics, weights: &Weights) -> f64 {
    -(metrics.must_not_violations as f64) * weights.must_not
        + metrics.wants_satisfied as f64 * weights.wants
        - metrics.adjacent_singles as f64 * weights.adjacent_singles
        - metrics.same_gender_adjacencies as f64 * weights.same_gender_adj
        + metrics.alternating_tables as f64 * weights.alternating_tables
        - metrics.split_couples as f64 * weights.split_couples
}

/// Display form, truncated to one decimal digit.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

/// The metrics pane lines: weighted score, the six counts, attempts made.
pub fn metrics_summary(plan: &SeatingPlan, weights: &Weights) -> Vec<String> {
    let metrics = plan.metrics();
    vec![
        format!(
            "Weighted score: {}",
            format_score(weighted_score(metrics, weights))
        ),
        format!("Must-not violations: {}", metrics.must_not_violations),
        format!("Wants satisfied: {}", metrics.wants_satisfied),
        format!("Adjacent singles: {}", metrics.adjacent_singles),
        format!(
            "Same-gender adjacencies: {}",
            metrics.same_gender_adjacencies
        ),
        format!("Alternating tables: {}", metrics.alternating_tables),
        format!("Split couples: {}", metrics.split_couples),
        format!("Attempts made: {}", plan.attempts_made()),
    ]
}

#[cfg(test)]
mod tests {
    use super::{format_score, metrics_summary, weighted_score};
    use crate::model::{SeatingMetrics, SeatingPlan, Weights};

    fn example_metrics() -> SeatingMetrics {
        SeatingMetrics {
            must_not_violations: 2,
            wants_satisfied: 3,
            adjacent_singles: 1,
            same_gender_adjacencies: 0,
            alternating_tables: 4,
            split_couples: 1,
        }
    }

    #[test]
    fn combines_the_six_weighted_terms() {
        let weights = Weights {
            must_not: 10.0,
            wants: 5.0,
            adjacent_singles: 3.0,
            same_gender_adj: 3.0,
            alternating_tables: 2.0,
            split_couples: 8.0,
        };

        // −20 + 15 − 3 − 0 + 8 − 8
        let score = weighted_score(&example_metrics(), &weights);
        assert_eq!(score, -8.0);
        assert_eq!(format_score(score), "-8.0");
    }

    #[test]
    fn zero_metrics_score_zero() {
        let score = weighted_score(&SeatingMetrics::default(), &Weights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn default_weights_match_the_shipped_profile() {
        let metrics = SeatingMetrics {
            wants_satisfied: 2,
            adjacent_singles: 1,
            ..SeatingMetrics::default()
        };
        // 2·5 − 1·3 with every other count at zero.
        assert_eq!(weighted_score(&metrics, &Weights::default()), 7.0);
    }

    #[test]
    fn display_form_keeps_one_decimal_digit() {
        assert_eq!(format_score(1.25), "1.2");
        assert_eq!(format_score(-0.04), "-0.0");
        assert_eq!(format_score(12.0), "12.0");
    }

    #[test]
    fn summary_lists_score_counts_and_attempts() {
        let plan = SeatingPlan::new(Vec::new(), example_metrics(), 57);
        let lines = metrics_summary(&plan, &Weights::default());

        assert_eq!(lines[0], "Weighted score: -8.0");
        assert_eq!(lines[1], "Must-not violations: 2");
        assert_eq!(lines.last().map(String::as_str), Some("Attempts made: 57"));
        assert_eq!(lines.len(), 8);
    }
}
