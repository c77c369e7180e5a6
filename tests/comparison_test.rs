// ABOUTME: Integration tests for assessment comparison
// ABOUTME: Validates deltas, improvement direction, delta formatting and reversed comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use academy_insights::constants::display::NO_CHANGE;
use academy_insights::intelligence::{
    calculate_delta, compare_assessments, format_delta, is_improvement,
};
use academy_insights::models::{Assessment, CategoricalField, MetricKey};
use common::{date, init_test_logging};

fn older() -> Assessment {
    Assessment::new("old", "trainee-1", date(2025, 1, 5))
        .with_metric(MetricKey::Sprint10m, 2.4)
        .with_metric(MetricKey::Jump2LegDistance, 180.0)
        .with_metric(MetricKey::FlexibilityKnee, 130.0)
        .with_metric(MetricKey::KickPowerKaiser, 70.0)
        .with_categorical(CategoricalField::Coordination, "בינוני")
}

fn newer() -> Assessment {
    Assessment::new("new", "trainee-1", date(2025, 3, 5))
        .with_metric(MetricKey::Sprint10m, 2.2)
        .with_metric(MetricKey::Jump2LegDistance, 172.0)
        .with_metric(MetricKey::FlexibilityKnee, 130.0)
        .with_metric(MetricKey::BlazeSpotTime, 28.0)
        .with_categorical(CategoricalField::Coordination, "טוב")
}

#[test]
fn test_delta_requires_both_values() {
    assert_eq!(calculate_delta(Some(2.0), Some(2.5)), Some(0.5));
    assert_eq!(calculate_delta(None, Some(2.5)), None);
    assert_eq!(calculate_delta(Some(2.0), None), None);
    assert_eq!(calculate_delta(None, None), None);
}

#[test]
fn test_improvement_follows_metric_direction() {
    assert_eq!(is_improvement(MetricKey::Sprint10m, Some(-0.2)), Some(true));
    assert_eq!(is_improvement(MetricKey::Sprint10m, Some(0.2)), Some(false));
    assert_eq!(is_improvement(MetricKey::KickPowerKaiser, Some(5.0)), Some(true));
    assert_eq!(is_improvement(MetricKey::KickPowerKaiser, Some(-5.0)), Some(false));
    assert_eq!(is_improvement(MetricKey::KickPowerKaiser, Some(0.0)), None);
    assert_eq!(is_improvement(MetricKey::KickPowerKaiser, None), None);
}

#[test]
fn test_format_delta_text() {
    assert_eq!(format_delta(None, MetricKey::Sprint10m), "");
    assert_eq!(format_delta(Some(0.0), MetricKey::Sprint10m), NO_CHANGE);
    assert_eq!(format_delta(Some(-0.2), MetricKey::Sprint10m), "-0.20 שנ׳");
    assert_eq!(format_delta(Some(4.5), MetricKey::FlexibilityHip), "+4.50 °");
}

#[test]
fn test_compare_assessments_covers_every_metric() {
    init_test_logging();
    let result = compare_assessments(&older(), &newer());

    assert_eq!(result.older_assessment_id, "old");
    assert_eq!(result.newer_assessment_id, "new");
    assert_eq!(result.metrics.len(), MetricKey::ALL.len());
    assert_eq!(result.categorical.len(), CategoricalField::ALL.len());

    let sprint = result.metric(MetricKey::Sprint10m).unwrap();
    assert!((sprint.delta.unwrap() + 0.2).abs() < 1e-9);
    assert_eq!(sprint.is_improvement, Some(true));

    let jump = result.metric(MetricKey::Jump2LegDistance).unwrap();
    assert_eq!(jump.is_improvement, Some(false));
    assert_eq!(jump.formatted, "-8.00 ס״מ");

    let knee = result.metric(MetricKey::FlexibilityKnee).unwrap();
    assert_eq!(knee.formatted, NO_CHANGE);
    assert_eq!(knee.is_improvement, None);

    let blaze = result.metric(MetricKey::BlazeSpotTime).unwrap();
    assert_eq!(blaze.delta, None);
    assert!(blaze.formatted.is_empty());

    assert_eq!(result.summary.improvements, 1);
    assert_eq!(result.summary.regressions, 1);
    assert_eq!(result.summary.unchanged, 1);

    let coordination = result.categorical(CategoricalField::Coordination).unwrap();
    assert!(coordination.changed);
    assert_eq!(coordination.new_value.as_deref(), Some("טוב"));
    let body = result.categorical(CategoricalField::BodyStructure).unwrap();
    assert!(!body.changed);
}

#[test]
fn test_reversed_comparison_matches_swapped_arguments() {
    let forward = compare_assessments(&older(), &newer());
    let backward = compare_assessments(&newer(), &older());

    assert_eq!(forward.reversed(), backward);

    for (f, b) in forward.metrics.iter().zip(&backward.metrics) {
        match (f.delta, b.delta) {
            (Some(fd), Some(bd)) => assert!((fd + bd).abs() < 1e-9),
            (None, None) => {}
            other => panic!("delta presence differs: {other:?}"),
        }
        assert_eq!(f.is_improvement, b.is_improvement.map(|flag| !flag));
    }
    assert_eq!(forward.summary.improvements, backward.summary.regressions);
    assert_eq!(forward.summary.unchanged, backward.summary.unchanged);
}
