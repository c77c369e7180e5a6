// ABOUTME: Meal plan validation command
// ABOUTME: Decodes the plan file and prints a per-day breakdown when it is well formed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use academy_insights::datasets::read_text;
use academy_insights::errors::AppResult;
use academy_insights::intelligence::parse_meal_plan_str;
use academy_insights::models::MealCategory;
use serde_json::{json, Value};
use tracing::info;

use crate::helpers::output::print_json;

/// Validate a meal plan file
pub fn validate(path: &Path) -> AppResult<()> {
    let raw = read_text(path, "meal plan")?;
    let plan = parse_meal_plan_str(&raw)?;

    let days: Vec<Value> = plan
        .days()
        .map(|(day, meals)| {
            let categories: Vec<Value> = MealCategory::ALL
                .into_iter()
                .map(|category| {
                    json!({
                        "category": category.as_str(),
                        "label": category.label(),
                        "items": meals.items(category),
                    })
                })
                .collect();
            json!({
                "day": day.as_str(),
                "label": day.label(),
                "item_count": meals.item_count(),
                "meals": categories,
            })
        })
        .collect();

    info!(path = %path.display(), items = plan.total_items(), "Validated meal plan");
    print_json(&json!({
        "valid": true,
        "total_items": plan.total_items(),
        "days": days,
    }))
}
