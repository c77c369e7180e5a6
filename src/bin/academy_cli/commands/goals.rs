// ABOUTME: Goal progress command printing per-goal progress and a summary
// ABOUTME: Also lists achieved goals whose celebration has not been shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use academy_insights::datasets::load_goals;
use academy_insights::errors::AppResult;
use academy_insights::intelligence::{
    calculate_goal_progress, pending_celebrations, summarize_goals, GoalProgress,
};
use academy_insights::models::Goal;
use serde_json::json;
use tracing::info;

use crate::helpers::output::print_json;

/// Print progress for every goal, optionally restricted to one trainee
pub fn progress(goals_path: &Path, user_id: Option<&str>) -> AppResult<()> {
    let goals: Vec<Goal> = load_goals(goals_path)?
        .into_iter()
        .filter(|goal| user_id.is_none_or(|user| goal.user_id == user))
        .collect();

    let progress: Vec<GoalProgress> = goals.iter().map(calculate_goal_progress).collect();
    let pending: Vec<&str> = pending_celebrations(&goals)
        .into_iter()
        .map(|goal| goal.id.as_str())
        .collect();

    info!(goals = goals.len(), pending = pending.len(), "Calculated goal progress");
    print_json(&json!({
        "goals": progress,
        "summary": summarize_goals(&goals),
        "pending_celebrations": pending,
    }))
}
