// ABOUTME: JSON output helpers for academy-cli results and errors
// ABOUTME: Results go to stdout, error bodies to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use academy_insights::errors::{AppResult, ErrorResponse};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

/// Print an error body on stderr
pub fn print_error(response: &ErrorResponse) {
    let message = &response.message;
    let rendered = serde_json::to_string_pretty(response)
        .unwrap_or_else(|_| format!("{{\"message\": {message:?}}}"));
    let _ = writeln!(io::stderr().lock(), "{rendered}");
}
