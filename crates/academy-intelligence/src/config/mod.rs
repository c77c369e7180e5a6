// ABOUTME: Analytics configuration module for the intelligence engines
// ABOUTME: Re-exports AnalyticsConfig, BenchmarkSource and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod analytics;
mod error;

pub use analytics::{AnalyticsConfig, BenchmarkSource};
pub use error::ConfigError;
