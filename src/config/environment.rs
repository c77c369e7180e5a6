// ABOUTME: Environment-based configuration for the academy analytics binaries
// ABOUTME: Reads ACADEMY_* variables, validates them and logs the effective values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use academy_core::constants::defaults::DISTRIBUTION_BIN_COUNT;
use academy_core::errors::{AppError, AppResult};
use academy_intelligence::config::{AnalyticsConfig, BenchmarkSource};
use tracing::info;

use crate::logging::LoggingConfig;

/// Environment variable holding the histogram bin count
pub const DISTRIBUTION_BINS_VAR: &str = "ACADEMY_DISTRIBUTION_BINS";

/// Environment variable selecting the rating benchmark source
pub const RATING_SOURCE_VAR: &str = "ACADEMY_RATING_SOURCE";

/// Complete runtime configuration
#[derive(Debug, Clone, Default)]
pub struct AcademyConfig {
    /// Analytics engine settings
    pub analytics: AnalyticsConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AcademyConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a variable cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let distribution_bin_count = match env::var(DISTRIBUTION_BINS_VAR) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::config(format!("Invalid {DISTRIBUTION_BINS_VAR} value '{raw}': {e}"))
            })?,
            Err(_) => DISTRIBUTION_BIN_COUNT,
        };

        let benchmark_source = match env::var(RATING_SOURCE_VAR) {
            Ok(raw) => raw
                .parse::<BenchmarkSource>()
                .map_err(|e| AppError::config(format!("Invalid {RATING_SOURCE_VAR}: {e}")))?,
            Err(_) => BenchmarkSource::default(),
        };

        let config = Self {
            analytics: AnalyticsConfig {
                distribution_bin_count,
                benchmark_source,
            },
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the bin count (e.g. from a `--bins` flag)
    #[must_use]
    pub fn with_distribution_bins(mut self, bins: usize) -> Self {
        self.analytics.distribution_bin_count = bins;
        self
    }

    /// Override the benchmark source
    #[must_use]
    pub fn with_benchmark_source(mut self, source: BenchmarkSource) -> Self {
        self.analytics.benchmark_source = source;
        self
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error describing the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        self.analytics
            .validate()
            .map_err(|e| AppError::config(e.to_string()))
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            distribution_bins = self.analytics.distribution_bin_count,
            benchmark_source = %self.analytics.benchmark_source,
            log_level = %self.logging.level,
            "Effective analytics configuration"
        );
    }
}
