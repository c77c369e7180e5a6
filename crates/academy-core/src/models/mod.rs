// ABOUTME: Core data models for academy trainee analytics
// ABOUTME: Re-exports assessment, goal, metric key, meal plan and achievement types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Row shapes supplied by the surrounding application's data-access layer.
//! Field names match the datastore columns so exported JSON deserializes
//! directly.
//!
//! ## Core Models
//!
//! - `Assessment`: one trainee's measurements on one date
//! - `MetricKey` / `CategoricalField`: the closed sets of measured fields
//! - `Goal`: a target value for one metric for one trainee
//! - `WeeklyMealPlan`: seven days of four meal categories
//! - `UnlockedAchievement`: an earned achievement awaiting celebration

mod achievement;
mod assessment;
mod goal;
mod meal_plan;
mod metric;

pub use achievement::UnlockedAchievement;
pub use assessment::Assessment;
pub use goal::Goal;
pub use meal_plan::{DayMeals, MealCategory, WeekDay, WeeklyMealPlan};
pub use metric::{CategoricalField, MetricCategory, MetricKey};
