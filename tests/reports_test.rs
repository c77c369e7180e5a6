// ABOUTME: Integration tests for trainee report composition
// ABOUTME: Validates comparison selection, goal progress, cohort standings and ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use academy_insights::config::AnalyticsConfig;
use academy_insights::constants::display::UNKNOWN_TRAINEE;
use academy_insights::errors::ErrorCode;
use academy_insights::intelligence::GoalStatus;
use academy_insights::models::MetricKey;
use academy_insights::reports::TraineeReport;
use common::{goal, init_test_logging, names, timestamp, two_session_cohort};

#[test]
fn test_report_for_trainee_with_history() {
    init_test_logging();
    let cohort = two_session_cohort();
    let goals = vec![
        goal("g1", "trainee-1", MetricKey::Sprint10m, 2.5, 2.0, 2.3),
        goal("g2", "trainee-1", MetricKey::Jump2LegDistance, 180.0, 200.0, 200.0)
            .with_achievement(timestamp("2025-04-10T12:00:00Z"), 200.0),
        goal("other", "trainee-2", MetricKey::Sprint10m, 2.3, 2.0, 2.1),
    ];
    let display_names = names(&[("trainee-1", "דנה")]);

    let report = TraineeReport::build(
        "trainee-1",
        &cohort,
        &goals,
        &display_names,
        &AnalyticsConfig::default(),
    )
    .unwrap();

    assert_eq!(report.display_name, "דנה");
    assert_eq!(report.assessment_count, 2);
    assert_eq!(report.latest_assessment_id.as_deref(), Some("late"));

    let comparison = report.comparison.as_ref().unwrap();
    assert_eq!(comparison.older_assessment_id, "early");
    assert_eq!(comparison.newer_assessment_id, "late");
    assert_eq!(comparison.summary.improvements, 2);

    assert_eq!(report.goals.len(), 2);
    assert_eq!(report.goals[1].status, GoalStatus::Achieved);
    assert_eq!(report.goal_summary.achieved, 1);
    assert_eq!(report.pending_celebrations, vec!["g2".to_owned()]);

    let metrics: Vec<MetricKey> = report.standings.iter().map(|s| s.metric).collect();
    assert_eq!(
        metrics,
        vec![
            MetricKey::Sprint10m,
            MetricKey::Jump2LegDistance,
            MetricKey::FlexibilityHip,
        ]
    );
    let sprint = &report.standings[0];
    assert_eq!(sprint.rank, 2);
    assert_eq!(sprint.percentile, 0);
    assert_eq!(sprint.cohort_size, 2);

    let rating = report.rating.as_ref().unwrap();
    assert_eq!(rating.assessment_id, "late");
    assert!(rating.overall.is_some());
}

#[test]
fn test_single_assessment_has_no_comparison() {
    let cohort = two_session_cohort();
    let report = TraineeReport::build(
        "trainee-2",
        &cohort,
        &[],
        &names(&[]),
        &AnalyticsConfig::default(),
    )
    .unwrap();

    assert_eq!(report.display_name, UNKNOWN_TRAINEE);
    assert!(report.comparison.is_none());
    assert_eq!(report.standings[0].rank, 1);
    assert_eq!(report.goal_summary.total, 0);
}

#[test]
fn test_goals_only_trainee_has_no_rating() {
    let goals = vec![goal("g1", "newcomer", MetricKey::Sprint5m, 1.4, 1.2, 1.3)];
    let report = TraineeReport::build(
        "newcomer",
        &two_session_cohort(),
        &goals,
        &names(&[]),
        &AnalyticsConfig::default(),
    )
    .unwrap();

    assert!(report.rating.is_none());
    assert!(report.standings.is_empty());
    assert_eq!(report.goals.len(), 1);
}

#[test]
fn test_unknown_trainee_is_not_found() {
    let error = TraineeReport::build(
        "ghost",
        &two_session_cohort(),
        &[],
        &names(&[]),
        &AnalyticsConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
