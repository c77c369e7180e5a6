// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for academy-cli
// ABOUTME: Provides cohort analysis, goal, meal plan and report commands

pub mod analysis;
pub mod goals;
pub mod meal_plan;
pub mod report;
