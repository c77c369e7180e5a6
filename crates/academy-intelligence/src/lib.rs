// ABOUTME: Trainee analytics engines for the academy platform
// ABOUTME: Comparison, goal progress, ranking, statistics, ratings, meal plans and celebrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Safe: cohort sizes and counts fit comfortably in f64

//! # Academy Intelligence
//!
//! Pure, synchronous transforms over assessment and goal rows already fetched
//! by the caller. Nothing here performs I/O or mutates shared state; "not
//! measured" flows through as `None` rather than as an error.

/// Static metric definitions: label, unit and improvement direction
pub mod metric_registry;

/// Assessment-to-assessment deltas and improvement classification
pub mod comparison;

/// Goal progress percentage and status
pub mod goal_progress;

/// Cohort rankings and latest-assessment selection
pub mod ranking;

/// Group statistics and histogram bins
pub mod statistics;

/// Category scores and overall rating for an assessment
pub mod assessment_rating;

/// Typed weekly meal plan decoding
pub mod meal_plan;

/// Celebration de-duplication via `notified_at`
pub mod celebrations;

/// Analytics configuration and validation
pub mod config;

pub use assessment_rating::{
    metric_score, rate_assessment, AssessmentRating, BenchmarkRange, CategoryRating,
    RatingBenchmarks, RatingTier,
};
pub use celebrations::{mark_notified, pending_celebrations, Celebratable};
pub use comparison::{
    calculate_delta, compare_assessments, format_delta, is_improvement, CategoricalChange,
    ComparisonResult, ComparisonSummary, MetricComparison,
};
pub use goal_progress::{
    calculate_goal_progress, is_target_reached, summarize_goals, GoalProgress, GoalStatus,
    GoalSummary,
};
pub use meal_plan::{parse_meal_plan, parse_meal_plan_str};
pub use metric_registry::{MetricDefinition, MetricRegistry};
pub use ranking::{
    calculate_rankings, cohort_values, find_user_ranking, latest_assessment_per_user,
    rank_all_metrics, recent_assessments_for_user, RankingEntry,
};
pub use statistics::{
    calculate_group_statistics, calculate_median, create_distribution_bins, DistributionBin,
    GroupStatistics,
};
