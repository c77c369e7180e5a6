// ABOUTME: Integration tests for group statistics and distribution bins
// ABOUTME: Validates medians, averages, bin boundaries and degenerate inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use academy_insights::intelligence::{
    calculate_group_statistics, calculate_median, create_distribution_bins,
};
use common::init_test_logging;

#[test]
fn test_median_even_and_odd() {
    assert!((calculate_median(&[4.0, 1.0, 3.0, 2.0]).unwrap() - 2.5).abs() < f64::EPSILON);
    assert!((calculate_median(&[5.0, 1.0, 3.0]).unwrap() - 3.0).abs() < f64::EPSILON);
    assert!(calculate_median(&[]).is_none());
}

#[test]
fn test_group_statistics() {
    init_test_logging();
    let stats = calculate_group_statistics(&[2.0, 3.5, 2.5, 3.0]).unwrap();
    assert_eq!(stats.count, 4);
    assert!((stats.min - 2.0).abs() < f64::EPSILON);
    assert!((stats.max - 3.5).abs() < f64::EPSILON);
    assert!((stats.average - 2.75).abs() < 1e-12);
    assert!((stats.median - 2.75).abs() < 1e-12);

    assert!(calculate_group_statistics(&[]).is_none());
}

#[test]
fn test_non_finite_values_are_ignored() {
    let stats = calculate_group_statistics(&[1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
    assert_eq!(stats.count, 2);
    assert!((stats.average - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_bins_cover_range_and_count_every_value() {
    let values = [0.0, 1.0, 2.5, 5.0, 7.5, 9.9, 10.0];
    let bins = create_distribution_bins(&values, 4);

    assert_eq!(bins.len(), 4);
    assert!((bins[0].low - 0.0).abs() < f64::EPSILON);
    assert!((bins[3].high - 10.0).abs() < f64::EPSILON);
    assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), values.len());

    let counts: Vec<usize> = bins.iter().map(|bin| bin.count).collect();
    assert_eq!(counts, vec![2, 1, 1, 3]);
    assert_eq!(bins[0].label, "0.0-2.5");
    assert_eq!(bins[3].label, "7.5-10.0");
}

#[test]
fn test_narrow_range_labels_stay_distinct() {
    let values = [1.00, 1.03, 1.05, 1.08, 1.10];
    let bins = create_distribution_bins(&values, 5);

    assert_eq!(bins.len(), 5);
    let labels: HashSet<&str> = bins.iter().map(|bin| bin.label.as_str()).collect();
    assert_eq!(labels.len(), bins.len(), "labels collide: {bins:?}");
    assert_eq!(bins[0].label, "1.000-1.020");
    assert_eq!(bins[4].label, "1.080-1.100");
    assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), values.len());
}

#[test]
fn test_identical_values_collapse_to_one_bin() {
    let bins = create_distribution_bins(&[5.0, 5.0, 5.0, 5.0, 5.0], 3);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 5);
    assert_eq!(bins[0].label, "5.0-5.0");
}

#[test]
fn test_degenerate_bin_inputs() {
    assert!(create_distribution_bins(&[], 5).is_empty());
    assert!(create_distribution_bins(&[1.0, 2.0], 0).is_empty());
    let single = create_distribution_bins(&[1.0, 2.0, 3.0], 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].count, 3);
}
