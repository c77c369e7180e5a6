// ABOUTME: Per-trainee report combining comparison, goal progress, cohort standing and rating
// ABOUTME: Composes the analytics engines over rows loaded from exported datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Trainee Report
//!
//! The coach-facing summary of one trainee. Cohort standing always uses each
//! trainee's latest assessment, so a trainee's older sessions never compete
//! against their newer ones.

use std::collections::HashMap;

use academy_core::constants::display::UNKNOWN_TRAINEE;
use academy_core::errors::{AppError, AppResult};
use academy_core::models::{Assessment, Goal, MetricKey};
use academy_intelligence::config::AnalyticsConfig;
use academy_intelligence::{
    calculate_goal_progress, compare_assessments, find_user_ranking, latest_assessment_per_user,
    pending_celebrations, rank_all_metrics, rate_assessment, recent_assessments_for_user,
    summarize_goals, AssessmentRating, ComparisonResult, GoalProgress, GoalSummary,
    MetricRegistry,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A trainee's position in the cohort for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStanding {
    /// Metric ranked
    pub metric: MetricKey,
    /// Hebrew display label
    pub label: String,
    /// Trainee's latest value
    pub value: f64,
    /// Competition rank, 1 is best
    pub rank: usize,
    /// Percentage of the cohort the trainee strictly outperforms
    pub percentile: u32,
    /// Number of ranked trainees
    pub cohort_size: usize,
}

/// Coach-facing summary of one trainee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeReport {
    /// Trainee identifier
    pub user_id: String,
    /// Display name (placeholder when unknown)
    pub display_name: String,
    /// Number of assessments on record
    pub assessment_count: usize,
    /// Latest assessment identifier
    pub latest_assessment_id: Option<String>,
    /// Latest versus previous assessment
    pub comparison: Option<ComparisonResult>,
    /// Progress of each goal
    pub goals: Vec<GoalProgress>,
    /// Aggregate goal progress
    pub goal_summary: GoalSummary,
    /// Achieved goals whose celebration has not been shown
    pub pending_celebrations: Vec<String>,
    /// Cohort standing per measured metric, in registry order
    pub standings: Vec<MetricStanding>,
    /// Rating of the latest assessment
    pub rating: Option<AssessmentRating>,
}

impl TraineeReport {
    /// Build a trainee report
    ///
    /// `cohort` holds every trainee's assessments (including this one's);
    /// `goals` may contain other trainees' goals, which are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the trainee has neither assessments nor goals
    pub fn build(
        user_id: &str,
        cohort: &[Assessment],
        goals: &[Goal],
        display_names: &HashMap<String, String>,
        config: &AnalyticsConfig,
    ) -> AppResult<Self> {
        let trainee_goals: Vec<Goal> = goals
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect();
        let assessment_count = cohort
            .iter()
            .filter(|assessment| assessment.user_id == user_id)
            .count();

        if assessment_count == 0 && trainee_goals.is_empty() {
            return Err(AppError::not_found(format!("Trainee '{user_id}'")));
        }

        let recent = recent_assessments_for_user(cohort, user_id, 2);
        let latest = recent.first().copied();
        let comparison = match recent.as_slice() {
            [newer, older] => Some(compare_assessments(older, newer)),
            _ => None,
        };

        let latest_per_user = latest_assessment_per_user(cohort);
        let rankings = rank_all_metrics(&latest_per_user, display_names);
        let standings: Vec<MetricStanding> = rankings
            .iter()
            .filter_map(|(metric, entries)| {
                find_user_ranking(entries, user_id).map(|entry| MetricStanding {
                    metric: *metric,
                    label: MetricRegistry::label(*metric).to_owned(),
                    value: entry.value,
                    rank: entry.rank,
                    percentile: entry.percentile,
                    cohort_size: entries.len(),
                })
            })
            .collect();

        let rating = latest.map(|assessment| {
            let benchmarks = config.benchmarks(&latest_per_user);
            rate_assessment(assessment, &benchmarks)
        });

        let progress: Vec<GoalProgress> = trainee_goals.iter().map(calculate_goal_progress).collect();
        let celebrations = pending_celebrations(&trainee_goals)
            .into_iter()
            .map(|goal| goal.id.clone())
            .collect();

        info!(
            user_id,
            assessments = assessment_count,
            goals = trainee_goals.len(),
            standings = standings.len(),
            "Built trainee report"
        );

        Ok(Self {
            user_id: user_id.to_owned(),
            display_name: display_names
                .get(user_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_TRAINEE.to_owned()),
            assessment_count,
            latest_assessment_id: latest.map(|assessment| assessment.id.clone()),
            comparison,
            goals: progress,
            goal_summary: summarize_goals(&trainee_goals),
            pending_celebrations: celebrations,
            standings,
            rating,
        })
    }
}
