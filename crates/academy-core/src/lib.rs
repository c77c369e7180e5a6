// ABOUTME: Core types and constants for academy trainee analytics
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Academy Core
//!
//! Foundation crate providing shared types and constants for the academy
//! trainee analytics platform.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Localized display strings and analytics defaults
//! - **models**: Assessment, goal, metric key, meal plan and achievement records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Assessment, Goal, `MetricKey`, meal plans, achievements)
pub mod models;
