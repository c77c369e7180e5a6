// ABOUTME: Trainee report command
// ABOUTME: Loads assessments, goals and names, then prints the composed report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use academy_insights::config::AnalyticsConfig;
use academy_insights::datasets::{load_assessments, load_goals, load_optional_display_names};
use academy_insights::errors::AppResult;
use academy_insights::reports::TraineeReport;

use crate::helpers::output::print_json;

/// Build and print a trainee report
pub fn build(
    assessments_path: &Path,
    goals_path: &Path,
    user_id: &str,
    names_path: Option<&Path>,
    config: &AnalyticsConfig,
) -> AppResult<()> {
    let assessments = load_assessments(assessments_path)?;
    let goals = load_goals(goals_path)?;
    let names = load_optional_display_names(names_path)?;

    let report = TraineeReport::build(user_id, &assessments, &goals, &names, config)?;
    print_json(&report)
}
