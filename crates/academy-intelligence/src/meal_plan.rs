// ABOUTME: Typed decoder for weekly meal plan JSON blobs before they are persisted
// ABOUTME: Rejects unknown or missing keys, non-string items and blank entries on first mismatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use academy_core::errors::{AppError, AppResult};
use academy_core::models::{MealCategory, WeeklyMealPlan};
use serde_json::json;
use tracing::debug;

/// Decode and validate a weekly meal plan
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the value is not exactly seven days
/// of four meal categories holding string arrays, or when an item is blank.
/// The error details carry the `path` of the first mismatch, such as
/// `tuesday.lunch[1]`, or `.` when the top-level object is at fault.
pub fn parse_meal_plan(value: &serde_json::Value) -> AppResult<WeeklyMealPlan> {
    let plan: WeeklyMealPlan = serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        let message = if path == "." {
            format!("Invalid meal plan structure: {}", e.inner())
        } else {
            format!("Invalid meal plan structure at {path}: {}", e.inner())
        };
        AppError::invalid_format(message).with_details(json!({ "path": path }))
    })?;

    for (day, meals) in plan.days() {
        for category in MealCategory::ALL {
            if let Some(index) = meals
                .items(category)
                .iter()
                .position(|item| item.trim().is_empty())
            {
                let path = format!("{}.{}[{index}]", day.as_str(), category.as_str());
                return Err(
                    AppError::invalid_format(format!("Blank meal plan item at {path}"))
                        .with_details(json!({ "path": path })),
                );
            }
        }
    }

    debug!(items = plan.total_items(), "Decoded weekly meal plan");
    Ok(plan)
}

/// Decode and validate a weekly meal plan from JSON text
///
/// # Errors
///
/// Returns a `SerializationError` for malformed JSON, otherwise the same
/// errors as [`parse_meal_plan`].
pub fn parse_meal_plan_str(json: &str) -> AppResult<WeeklyMealPlan> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    parse_meal_plan(&value)
}
