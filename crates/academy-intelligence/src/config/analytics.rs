// ABOUTME: Analytics configuration: histogram bins and rating benchmark source
// ABOUTME: Validated before use so engines never see a zero or oversized bin count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use academy_core::constants::defaults::{DISTRIBUTION_BIN_COUNT, MAX_DISTRIBUTION_BIN_COUNT};
use academy_core::models::Assessment;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::assessment_rating::RatingBenchmarks;

/// Where rating benchmarks come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkSource {
    /// Static youth academy reference ranges
    #[default]
    Static,
    /// Observed min/max of the cohort being reported on
    Cohort,
}

impl FromStr for BenchmarkSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "cohort" => Ok(Self::Cohort),
            other => Err(ConfigError::Parse(format!(
                "unknown benchmark source '{other}' (expected 'static' or 'cohort')"
            ))),
        }
    }
}

impl fmt::Display for BenchmarkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Cohort => f.write_str("cohort"),
        }
    }
}

/// Analytics configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of histogram bins for distribution charts
    pub distribution_bin_count: usize,
    /// Rating benchmark source
    pub benchmark_source: BenchmarkSource,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            distribution_bin_count: DISTRIBUTION_BIN_COUNT,
            benchmark_source: BenchmarkSource::Static,
        }
    }
}

impl AnalyticsConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the bin count is zero or above the supported maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distribution_bin_count == 0
            || self.distribution_bin_count > MAX_DISTRIBUTION_BIN_COUNT
        {
            return Err(ConfigError::ValueOutOfRange {
                field: "distribution_bin_count",
                min: 1,
                max: MAX_DISTRIBUTION_BIN_COUNT,
                value: self.distribution_bin_count,
            });
        }
        Ok(())
    }

    /// Rating benchmarks for a cohort according to the configured source
    #[must_use]
    pub fn benchmarks(&self, latest: &[&Assessment]) -> RatingBenchmarks {
        match self.benchmark_source {
            BenchmarkSource::Static => RatingBenchmarks::default(),
            BenchmarkSource::Cohort => RatingBenchmarks::from_cohort(latest),
        }
    }
}
