// ABOUTME: Main library entry point for academy trainee analytics
// ABOUTME: Re-exports the analytics engines and adds logging, configuration, datasets and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Academy Insights
//!
//! Analytics core of a youth sports training academy: trainee physical
//! assessments, goal tracking, cohort rankings and administrative reports.
//! The engines are pure in-memory transforms over rows exported from the
//! academy's datastore; this crate wires them to configuration, structured
//! logging, JSON dataset loading and the `academy-cli` binary.
//!
//! ## Architecture
//!
//! - **`academy-core`**: error types, data models and constants
//! - **`academy-intelligence`**: comparison, goal progress, ranking, statistics,
//!   ratings, meal plan decoding and celebration tracking
//! - **this crate**: configuration, logging, dataset loading, trainee reports
//!
//! ## Example Usage
//!
//! ```rust
//! use academy_insights::intelligence::{calculate_goal_progress, GoalStatus};
//! use academy_insights::models::{Goal, MetricKey};
//!
//! let goal = Goal::new("g1", "trainee-1", MetricKey::Sprint10m, 2.0)
//!     .with_baseline(2.5)
//!     .with_current(2.3);
//! let progress = calculate_goal_progress(&goal);
//! assert!((progress.progress - 40.0).abs() < f64::EPSILON);
//! assert_eq!(progress.status, GoalStatus::InProgress);
//! ```

/// Unified error handling (re-exported from `academy-core`)
pub use academy_core::errors;

/// Data models (re-exported from `academy-core`)
pub use academy_core::models;

/// Constants (re-exported from `academy-core`)
pub use academy_core::constants;

/// Analytics engines (re-exported from `academy-intelligence`)
pub use academy_intelligence as intelligence;

/// Environment-based configuration
pub mod config;

/// JSON dataset loading for exported datastore rows
pub mod datasets;

/// Logging configuration and structured logging setup
pub mod logging;

/// Per-trainee report composition
pub mod reports;
