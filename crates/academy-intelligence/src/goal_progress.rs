// ABOUTME: Goal progress engine computing a 0-100 progress percentage and status per goal
// ABOUTME: Achieved goals are terminal; progress is measured from baseline toward target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Progress
//!
//! Status moves `not_started -> in_progress -> achieved`. Achievement is
//! frozen by the application (`achieved_at`), so an achieved goal reports 100
//! even if the latest measurement regressed.

use academy_core::constants::display::MISSING_VALUE;
use academy_core::constants::scale::{MAX_PERCENT, MIN_PERCENT};
use academy_core::models::{Goal, MetricKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metric_registry::MetricRegistry;

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// No measurable progress yet
    NotStarted,
    /// Some progress toward the target
    InProgress,
    /// Target reached and frozen
    Achieved,
}

/// Derived progress view of one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal identifier
    pub goal_id: String,
    /// Metric the goal targets
    pub metric: MetricKey,
    /// Progress percentage in `[0, 100]`
    pub progress: f64,
    /// Lifecycle status
    pub status: GoalStatus,
    /// `"{current} / {target} {unit}"`
    pub progress_text: String,
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_PERCENT, MAX_PERCENT)
    } else {
        MIN_PERCENT
    }
}

fn progress_text(goal: &Goal) -> String {
    let current = goal
        .current_value
        .map_or_else(|| MISSING_VALUE.to_owned(), |value| value.to_string());
    format!(
        "{current} / {target} {unit}",
        target = goal.target_value,
        unit = MetricRegistry::unit(goal.metric_key)
    )
}

/// Progress and status of a goal
#[must_use]
pub fn calculate_goal_progress(goal: &Goal) -> GoalProgress {
    let lower_is_better = MetricRegistry::is_lower_better(goal.metric_key);
    let target = goal.target_value;

    let (progress, status) = if goal.achieved_at.is_some() {
        (MAX_PERCENT, GoalStatus::Achieved)
    } else if let (Some(current), Some(baseline)) = (goal.current_value, goal.baseline_value) {
        let total_distance = (target - baseline).abs();
        let progress = if total_distance == 0.0 {
            MIN_PERCENT
        } else {
            let improvement = if lower_is_better {
                baseline - current
            } else {
                current - baseline
            };
            clamp_percent((improvement / total_distance * MAX_PERCENT).round())
        };
        let status = if progress > MIN_PERCENT {
            GoalStatus::InProgress
        } else {
            GoalStatus::NotStarted
        };
        (progress, status)
    } else if let Some(current) = goal.current_value.filter(|value| *value != 0.0) {
        let progress = if lower_is_better {
            clamp_percent(target / current * MAX_PERCENT)
        } else if target == 0.0 {
            MIN_PERCENT
        } else {
            clamp_percent(current / target * MAX_PERCENT)
        };
        (progress, GoalStatus::InProgress)
    } else {
        (MIN_PERCENT, GoalStatus::NotStarted)
    };

    debug!(goal_id = %goal.id, metric = %goal.metric_key, progress, ?status, "Calculated goal progress");

    GoalProgress {
        goal_id: goal.id.clone(),
        metric: goal.metric_key,
        progress,
        status,
        progress_text: progress_text(goal),
    }
}

/// Whether the current value meets or passes the target in the improving direction
///
/// Callers use this to decide when to persist `achieved_at`/`achieved_value`.
#[must_use]
pub fn is_target_reached(goal: &Goal) -> bool {
    goal.current_value.is_some_and(|current| {
        if MetricRegistry::is_lower_better(goal.metric_key) {
            current <= goal.target_value
        } else {
            current >= goal.target_value
        }
    })
}

/// Status counts and average progress over a set of goals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    /// Number of goals
    pub total: usize,
    /// Achieved goals
    pub achieved: usize,
    /// Goals in progress
    pub in_progress: usize,
    /// Goals not started
    pub not_started: usize,
    /// Mean progress percentage (0 when there are no goals)
    pub average_progress: f64,
}

/// Summarize progress over a set of goals
#[must_use]
pub fn summarize_goals(goals: &[Goal]) -> GoalSummary {
    let mut summary = goals
        .iter()
        .map(calculate_goal_progress)
        .fold(GoalSummary::default(), |mut summary, progress| {
            summary.total += 1;
            summary.average_progress += progress.progress;
            match progress.status {
                GoalStatus::Achieved => summary.achieved += 1,
                GoalStatus::InProgress => summary.in_progress += 1,
                GoalStatus::NotStarted => summary.not_started += 1,
            }
            summary
        });

    if summary.total > 0 {
        summary.average_progress /= summary.total as f64;
    }
    summary
}
