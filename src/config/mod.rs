// ABOUTME: Configuration module for the academy analytics binaries
// ABOUTME: Composes environment-derived analytics and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: analytics and logging settings read from environment variables
//! - **Analytics**: re-exported from `academy-intelligence`

/// Environment configuration
pub mod environment;

pub use academy_intelligence::config::{AnalyticsConfig, BenchmarkSource, ConfigError};
pub use environment::AcademyConfig;
