// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for out-of-range values and unparseable settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analytics configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        /// Setting that failed validation
        field: &'static str,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
        /// Value that was supplied
        value: usize,
    },

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}
