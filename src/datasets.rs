// ABOUTME: Loads exported datastore rows (assessments, goals, trainee names) from JSON files
// ABOUTME: Maps IO and decoding failures into AppError with the offending path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use academy_core::errors::{AppError, AppResult, ErrorCode};
use academy_core::models::{Assessment, Goal};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// Read a whole text file, mapping IO failures the way every dataset loader does
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file and `StorageError` for other
/// IO failures; both carry the path in their details
pub fn read_text(path: &Path, what: &str) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        let error = if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("{what} file '{}'", path.display()))
        } else {
            AppError::storage(format!("Failed to read {what} file '{}'", path.display()))
        };
        error
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let raw = read_text(path, what)?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid {what} file '{}': {e}", path.display()),
        )
        .with_details(json!({
            "path": path.display().to_string(),
            "line": e.line(),
            "column": e.column(),
        }))
    })
}

/// Load assessment rows from a JSON array
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other IO
/// failures and `InvalidFormat` when the contents do not decode
pub fn load_assessments(path: &Path) -> AppResult<Vec<Assessment>> {
    let assessments: Vec<Assessment> = read_json(path, "assessments")?;
    debug!(path = %path.display(), count = assessments.len(), "Loaded assessments");
    Ok(assessments)
}

/// Load goal rows from a JSON array
///
/// # Errors
///
/// Same conditions as [`load_assessments`]
pub fn load_goals(path: &Path) -> AppResult<Vec<Goal>> {
    let goals: Vec<Goal> = read_json(path, "goals")?;
    debug!(path = %path.display(), count = goals.len(), "Loaded goals");
    Ok(goals)
}

/// Load a `{ "user_id": "display name" }` object
///
/// # Errors
///
/// Same conditions as [`load_assessments`]
pub fn load_display_names(path: &Path) -> AppResult<HashMap<String, String>> {
    let names: HashMap<String, String> = read_json(path, "display names")?;
    debug!(path = %path.display(), count = names.len(), "Loaded display names");
    Ok(names)
}

/// Load display names when a path was given, otherwise an empty map
///
/// # Errors
///
/// Same conditions as [`load_display_names`]
pub fn load_optional_display_names(path: Option<&Path>) -> AppResult<HashMap<String, String>> {
    path.map_or_else(|| Ok(HashMap::new()), load_display_names)
}
