// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, assessment and goal builders, and JSON file helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `academy_insights`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Once;

use academy_insights::models::{Assessment, Goal, MetricKey};
use chrono::{DateTime, NaiveDate, Utc};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC timestamp from RFC 3339 text
pub fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Assessment with a single metric measured
pub fn assessment_with(
    id: &str,
    user_id: &str,
    on: NaiveDate,
    metric: MetricKey,
    value: f64,
) -> Assessment {
    Assessment::new(id, user_id, on).with_metric(metric, value)
}

/// Four trainees with 10 meter sprint times 2.0, 2.5, 3.0 and 3.5
pub fn sprint_cohort() -> Vec<Assessment> {
    [("t1", 2.0), ("t2", 2.5), ("t3", 3.0), ("t4", 3.5)]
        .into_iter()
        .enumerate()
        .map(|(index, (user, value))| {
            assessment_with(
                &format!("a{index}"),
                user,
                date(2025, 4, 1),
                MetricKey::Sprint10m,
                value,
            )
        })
        .collect()
}

/// A trainee with two sessions and a rival with one
pub fn two_session_cohort() -> Vec<Assessment> {
    vec![
        Assessment::new("early", "trainee-1", date(2025, 1, 10))
            .with_metric(MetricKey::Sprint10m, 2.4)
            .with_metric(MetricKey::Jump2LegDistance, 180.0)
            .with_metric(MetricKey::FlexibilityHip, 100.0),
        Assessment::new("rival", "trainee-2", date(2025, 3, 1))
            .with_metric(MetricKey::Sprint10m, 2.1)
            .with_metric(MetricKey::Jump2LegDistance, 210.0),
        Assessment::new("late", "trainee-1", date(2025, 4, 10))
            .with_metric(MetricKey::Sprint10m, 2.2)
            .with_metric(MetricKey::Jump2LegDistance, 195.0)
            .with_metric(MetricKey::FlexibilityHip, 100.0),
    ]
}

/// Goal with baseline and current values
pub fn goal(
    id: &str,
    user_id: &str,
    metric: MetricKey,
    baseline: f64,
    target: f64,
    current: f64,
) -> Goal {
    Goal::new(id, user_id, metric, target)
        .with_baseline(baseline)
        .with_current(current)
}

/// Display names keyed by trainee id
pub fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| ((*id).to_owned(), (*name).to_owned()))
        .collect()
}

/// Write a JSON value into a fresh temporary directory
pub fn write_json(dir: &TempDir, file_name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
