// ABOUTME: Group statistics (count, min, max, average, median) and histogram binning
// ABOUTME: Feeds cohort distribution charts for a single metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: bin index and label decimals are clamped

use academy_core::constants::defaults::{BIN_LABEL_DECIMALS, MAX_BIN_LABEL_DECIMALS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Summary statistics over a set of metric values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    /// Number of values
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub average: f64,
    /// Middle value (mean of the two middle values for even counts)
    pub median: f64,
}

/// One histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBin {
    /// Inclusive lower bound
    pub low: f64,
    /// Upper bound (exclusive, except for the last bin)
    pub high: f64,
    /// `"{low}-{high}"` with enough decimals to tell adjacent bins apart
    pub label: String,
    /// Number of values in the bin
    pub count: usize,
}

impl DistributionBin {
    fn new(low: f64, high: f64, decimals: usize) -> Self {
        Self {
            low,
            high,
            label: format!("{low:.decimals$}-{high:.decimals$}"),
            count: 0,
        }
    }
}

/// Decimals needed so that bin edges `width` apart print differently
///
/// One digit past the bin width's leading digit, never fewer than
/// [`BIN_LABEL_DECIMALS`].
fn label_decimals(width: f64) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return BIN_LABEL_DECIMALS;
    }
    let needed = (-width.log10()).ceil() + 1.0;
    needed.clamp(BIN_LABEL_DECIMALS as f64, MAX_BIN_LABEL_DECIMALS as f64) as usize
}

fn finite_sorted(values: &[f64]) -> Vec<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() != values.len() {
        warn!(
            discarded = values.len() - finite.len(),
            "Ignoring non-finite metric values"
        );
    }
    finite.sort_by(f64::total_cmp);
    finite
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    if len % 2 == 0 {
        Some((sorted[len / 2 - 1] + sorted[len / 2]) / 2.0)
    } else {
        Some(sorted[len / 2])
    }
}

/// Median value, `None` for empty input
#[must_use]
pub fn calculate_median(values: &[f64]) -> Option<f64> {
    median_of_sorted(&finite_sorted(values))
}

/// Count, min, max, average and median, `None` for empty input
#[must_use]
pub fn calculate_group_statistics(values: &[f64]) -> Option<GroupStatistics> {
    let sorted = finite_sorted(values);
    let median = median_of_sorted(&sorted)?;
    let count = sorted.len();

    Some(GroupStatistics {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        average: sorted.iter().sum::<f64>() / count as f64,
        median,
    })
}

/// Partition values into equal-width bins over `[min, max]`
///
/// The last bin is closed on both ends so the maximum is counted. When every
/// value is identical a single bin holds them all. Empty input or a zero bin
/// count yields no bins.
#[must_use]
pub fn create_distribution_bins(values: &[f64], bin_count: usize) -> Vec<DistributionBin> {
    let sorted = finite_sorted(values);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    if bin_count == 0 {
        return Vec::new();
    }

    if min == max {
        let mut bin = DistributionBin::new(min, max, BIN_LABEL_DECIMALS);
        bin.count = sorted.len();
        return vec![bin];
    }

    let width = (max - min) / bin_count as f64;
    let last = bin_count - 1;
    let decimals = label_decimals(width);
    let mut bins: Vec<DistributionBin> = (0..bin_count)
        .map(|index| {
            let low = (index as f64).mul_add(width, min);
            let high = if index == last {
                max
            } else {
                ((index + 1) as f64).mul_add(width, min)
            };
            DistributionBin::new(low, high, decimals)
        })
        .collect();

    for value in sorted {
        let index = (((value - min) / width).floor() as usize).min(last);
        bins[index].count += 1;
    }

    bins
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_labels_use_one_decimal() {
        let bins = create_distribution_bins(&[0.0, 10.0], 2);
        let labels: Vec<&str> = bins.iter().map(|bin| bin.label.as_str()).collect();
        assert_eq!(labels, vec!["0.0-5.0", "5.0-10.0"]);
    }

    #[test]
    fn test_label_decimals_follow_bin_width() {
        assert_eq!(label_decimals(2.5), 1);
        assert_eq!(label_decimals(0.5), 2);
        assert_eq!(label_decimals(0.02), 3);
        assert_eq!(label_decimals(0.0), BIN_LABEL_DECIMALS);
        assert_eq!(label_decimals(1e-12), MAX_BIN_LABEL_DECIMALS);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let stats = calculate_group_statistics(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.median - 2.0).abs() < f64::EPSILON);
    }
}
