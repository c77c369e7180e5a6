// ABOUTME: Cohort analysis commands: assessment comparison, rankings and group statistics
// ABOUTME: Each command loads the assessments export and prints a JSON result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use academy_insights::config::AnalyticsConfig;
use academy_insights::datasets::{load_assessments, load_optional_display_names};
use academy_insights::errors::{AppError, AppResult};
use academy_insights::intelligence::{
    calculate_group_statistics, calculate_rankings, cohort_values, compare_assessments,
    create_distribution_bins, latest_assessment_per_user, recent_assessments_for_user,
    MetricRegistry,
};
use academy_insights::models::MetricKey;
use serde_json::json;
use tracing::info;

use crate::helpers::output::print_json;

/// Compare a trainee's two most recent assessments
pub fn compare(assessments_path: &Path, user_id: &str) -> AppResult<()> {
    let assessments = load_assessments(assessments_path)?;
    let recent = recent_assessments_for_user(&assessments, user_id, 2);

    let [newer, older] = recent.as_slice() else {
        return Err(AppError::not_found(format!(
            "Two assessments for trainee '{user_id}' (found {})",
            recent.len()
        )));
    };

    info!(user_id, older = %older.id, newer = %newer.id, "Comparing assessments");
    print_json(&compare_assessments(older, newer))
}

/// Rank the cohort's latest assessments on one metric
pub fn rank(assessments_path: &Path, metric: MetricKey, names_path: Option<&Path>) -> AppResult<()> {
    let assessments = load_assessments(assessments_path)?;
    let names = load_optional_display_names(names_path)?;
    let latest = latest_assessment_per_user(&assessments);
    let definition = MetricRegistry::definition(metric);

    let rankings = calculate_rankings(
        latest.iter().copied(),
        &names,
        metric,
        definition.lower_is_better,
    );

    info!(metric = %metric, trainees = latest.len(), ranked = rankings.len(), "Ranked cohort");
    print_json(&json!({
        "metric": metric,
        "label": definition.label,
        "unit": definition.unit,
        "lower_is_better": definition.lower_is_better,
        "cohort_size": rankings.len(),
        "rankings": rankings,
    }))
}

/// Group statistics and distribution bins for one metric
pub fn stats(assessments_path: &Path, metric: MetricKey, config: &AnalyticsConfig) -> AppResult<()> {
    let assessments = load_assessments(assessments_path)?;
    let latest = latest_assessment_per_user(&assessments);
    let values = cohort_values(latest.iter().copied(), metric);

    let statistics = calculate_group_statistics(&values);
    let bins = create_distribution_bins(&values, config.distribution_bin_count);

    info!(metric = %metric, values = values.len(), bins = bins.len(), "Computed group statistics");
    print_json(&json!({
        "metric": metric,
        "label": MetricRegistry::label(metric),
        "unit": MetricRegistry::unit(metric),
        "statistics": statistics,
        "distribution": bins,
    }))
}
