// ABOUTME: Goal record setting a target value for one metric for one trainee
// ABOUTME: Achievement fields are frozen by the application once the target is reached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metric::MetricKey;

/// A target value for one metric for one trainee
///
/// `achieved_at` and `achieved_value` are written exactly once by the
/// application; a later regression of `current_value` never un-achieves a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Record identifier
    pub id: String,
    /// Trainee identifier
    pub user_id: String,
    /// Metric the goal targets
    pub metric_key: MetricKey,
    /// Value at goal creation time
    #[serde(default)]
    pub baseline_value: Option<f64>,
    /// Value the trainee is working towards
    pub target_value: f64,
    /// Latest observed value
    #[serde(default)]
    pub current_value: Option<f64>,
    /// When the goal was achieved
    #[serde(default)]
    pub achieved_at: Option<DateTime<Utc>>,
    /// Value captured at the moment of achievement
    #[serde(default)]
    pub achieved_value: Option<f64>,
    /// When the trainee was shown the achievement celebration
    #[serde(default)]
    pub notified_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create an open goal with no observations yet
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        metric_key: MetricKey,
        target_value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            metric_key,
            baseline_value: None,
            target_value,
            current_value: None,
            achieved_at: None,
            achieved_value: None,
            notified_at: None,
        }
    }

    /// Set the baseline value (builder style)
    #[must_use]
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline_value = Some(baseline);
        self
    }

    /// Set the current value (builder style)
    #[must_use]
    pub fn with_current(mut self, current: f64) -> Self {
        self.current_value = Some(current);
        self
    }

    /// Mark the goal achieved at the given instant with the given value (builder style)
    #[must_use]
    pub fn with_achievement(mut self, achieved_at: DateTime<Utc>, value: f64) -> Self {
        self.achieved_at = Some(achieved_at);
        self.achieved_value = Some(value);
        self
    }

    /// Whether the goal has been achieved
    #[must_use]
    pub const fn is_achieved(&self) -> bool {
        self.achieved_at.is_some()
    }
}
