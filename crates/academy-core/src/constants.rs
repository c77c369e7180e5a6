// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Localized display strings and analytics defaults for the academy platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in a single flat list.

/// Localized (Hebrew) display strings rendered by the academy UI
pub mod display {
    /// Rendered by delta formatting when a metric did not change
    pub const NO_CHANGE: &str = "ללא שינוי";
    /// Placeholder for a goal's current value when nothing was measured yet
    pub const MISSING_VALUE: &str = "---";
    /// Display name used when a ranked trainee has no known name
    pub const UNKNOWN_TRAINEE: &str = "לא ידוע";
}

/// Defaults for analytics computations
pub mod defaults {
    /// Number of histogram bins for distribution charts
    pub const DISTRIBUTION_BIN_COUNT: usize = 5;
    /// Upper bound accepted for configured histogram bins
    pub const MAX_DISTRIBUTION_BIN_COUNT: usize = 50;
    /// Decimal places used for formatted deltas
    pub const DELTA_DECIMALS: usize = 2;
    /// Decimal places used for histogram bin labels
    pub const BIN_LABEL_DECIMALS: usize = 1;
    /// Upper bound on bin label decimals for very narrow bins
    pub const MAX_BIN_LABEL_DECIMALS: usize = 6;
}

/// Progress and score scale bounds
pub mod scale {
    /// Minimum progress/score percentage
    pub const MIN_PERCENT: f64 = 0.0;
    /// Maximum progress/score percentage
    pub const MAX_PERCENT: f64 = 100.0;
}

/// Rating tier thresholds on the 0-100 score scale
pub mod rating_tiers {
    /// Lowest score considered "solid"
    pub const SOLID_MIN: u8 = 40;
    /// Lowest score considered "strong"
    pub const STRONG_MIN: u8 = 65;
    /// Lowest score considered "elite"
    pub const ELITE_MIN: u8 = 85;
}
