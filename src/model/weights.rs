// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// User-tunable multipliers for the six solver metrics.
///
/// Values are practically non-negative but not validated; the score simply
/// multiplies them through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub must_not: f64,
    pub wants: f64,
    pub adjacent_singles: f64,
    pub same_gender_adj: f64,
    pub alternating_tables: f64,
    pub split_couples: f64,
}

impl Default for Weights {
    /// The default profile shipped with the planner UI.
    fn default() -> Self {
        Self {
            must_not: 10.0,
            wants: 5.0,
            adjacent_singles: 3.0,
            same_gender_adj: 3.0,
            alternating_tables: 2.0,
            split_couples: 8.0,
        }
    }
}
