// ABOUTME: Integration tests for cohort rankings and latest-assessment selection
// ABOUTME: Validates competition ranks, percentiles, tie handling and parallel ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use academy_insights::constants::display::UNKNOWN_TRAINEE;
use academy_insights::intelligence::{
    calculate_rankings, cohort_values, find_user_ranking, latest_assessment_per_user,
    rank_all_metrics, MetricRegistry,
};
use academy_insights::models::{Assessment, MetricKey};
use common::{assessment_with, date, init_test_logging, names, sprint_cohort, timestamp};

#[test]
fn test_lower_is_better_ranks_and_percentiles() {
    init_test_logging();
    let cohort = sprint_cohort();
    let latest = latest_assessment_per_user(&cohort);
    let rankings = calculate_rankings(
        latest.iter().copied(),
        &names(&[("t1", "Noa")]),
        MetricKey::Sprint10m,
        true,
    );

    let ranks: Vec<usize> = rankings.iter().map(|entry| entry.rank).collect();
    let percentiles: Vec<u32> = rankings.iter().map(|entry| entry.percentile).collect();
    let users: Vec<&str> = rankings.iter().map(|entry| entry.user_id.as_str()).collect();

    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(percentiles, vec![75, 50, 25, 0]);
    assert_eq!(users, vec!["t1", "t2", "t3", "t4"]);
    assert_eq!(rankings[0].display_name, "Noa");
    assert_eq!(rankings[1].display_name, UNKNOWN_TRAINEE);
}

#[test]
fn test_higher_is_better_reverses_order() {
    let cohort = sprint_cohort();
    let rankings = calculate_rankings(&cohort, &HashMap::new(), MetricKey::Sprint10m, false);
    let users: Vec<&str> = rankings.iter().map(|entry| entry.user_id.as_str()).collect();
    assert_eq!(users, vec!["t4", "t3", "t2", "t1"]);
}

#[test]
fn test_ties_share_rank_and_percentile() {
    let on = date(2025, 4, 1);
    let cohort = vec![
        assessment_with("a", "u1", on, MetricKey::KickPowerKaiser, 90.0),
        assessment_with("b", "u2", on, MetricKey::KickPowerKaiser, 90.0),
        assessment_with("c", "u3", on, MetricKey::KickPowerKaiser, 75.0),
        assessment_with("d", "u4", on, MetricKey::KickPowerKaiser, 60.0),
    ];
    let rankings = calculate_rankings(&cohort, &HashMap::new(), MetricKey::KickPowerKaiser, false);

    let ranks: Vec<usize> = rankings.iter().map(|entry| entry.rank).collect();
    let percentiles: Vec<u32> = rankings.iter().map(|entry| entry.percentile).collect();
    assert_eq!(ranks, vec![1, 1, 3, 4]);
    assert_eq!(percentiles, vec![50, 50, 25, 0]);
}

#[test]
fn test_unmeasured_trainees_are_left_out() {
    let on = date(2025, 4, 1);
    let cohort = vec![
        assessment_with("a", "u1", on, MetricKey::Sprint5m, 1.2),
        assessment_with("b", "u2", on, MetricKey::Jump2LegHeight, 40.0),
        assessment_with("c", "u3", on, MetricKey::Sprint5m, f64::NAN),
    ];
    let rankings = calculate_rankings(&cohort, &HashMap::new(), MetricKey::Sprint5m, true);
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].rank, 1);
    assert_eq!(rankings[0].percentile, 0);

    assert!(calculate_rankings(&[], &HashMap::new(), MetricKey::Sprint5m, true).is_empty());
}

#[test]
fn test_latest_assessment_per_user() {
    let cohort = vec![
        assessment_with("old", "u1", date(2025, 1, 1), MetricKey::Sprint10m, 2.6),
        assessment_with("other", "u2", date(2025, 2, 1), MetricKey::Sprint10m, 2.2),
        assessment_with("new", "u1", date(2025, 3, 1), MetricKey::Sprint10m, 2.3),
        assessment_with("older", "u1", date(2024, 12, 1), MetricKey::Sprint10m, 2.8),
    ];
    let latest = latest_assessment_per_user(&cohort);
    let ids: Vec<&str> = latest.iter().map(|assessment| assessment.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "other"]);
}

#[test]
fn test_same_day_tie_break() {
    let on = date(2025, 5, 1);
    let by_creation = vec![
        Assessment::new("late", "u1", on).with_created_at(timestamp("2025-05-01T18:00:00Z")),
        Assessment::new("early", "u1", on).with_created_at(timestamp("2025-05-01T07:00:00Z")),
    ];
    assert_eq!(latest_assessment_per_user(&by_creation)[0].id, "late");

    let without_creation = vec![Assessment::new("first", "u1", on), Assessment::new("second", "u1", on)];
    assert_eq!(latest_assessment_per_user(&without_creation)[0].id, "second");
}

#[test]
fn test_find_user_ranking_and_cohort_values() {
    let cohort = sprint_cohort();
    let rankings = calculate_rankings(&cohort, &HashMap::new(), MetricKey::Sprint10m, true);

    let entry = find_user_ranking(&rankings, "t3").unwrap();
    assert_eq!(entry.rank, 3);
    assert!(find_user_ranking(&rankings, "missing").is_none());

    let mut values = cohort_values(&cohort, MetricKey::Sprint10m);
    values.sort_by(f64::total_cmp);
    assert_eq!(values, vec![2.0, 2.5, 3.0, 3.5]);
}

#[test]
fn test_rank_all_metrics_matches_single_metric_rankings() {
    let cohort = common::two_session_cohort();
    let latest = latest_assessment_per_user(&cohort);
    let display_names = names(&[("trainee-1", "Dana"), ("trainee-2", "Omer")]);

    let all = rank_all_metrics(&latest, &display_names);
    assert_eq!(all.len(), MetricKey::ALL.len());

    for metric in MetricKey::ALL {
        let expected = calculate_rankings(
            latest.iter().copied(),
            &display_names,
            metric,
            MetricRegistry::is_lower_better(metric),
        );
        assert_eq!(all[&metric], expected, "mismatch for {metric}");
    }

    let sprint = &all[&MetricKey::Sprint10m];
    assert_eq!(sprint[0].user_id, "trainee-2");
    assert_eq!(all[&MetricKey::FlexibilityHip].len(), 1);
    assert!(all[&MetricKey::KickPowerKaiser].is_empty());
}
