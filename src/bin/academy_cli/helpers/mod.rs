// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for academy-cli
// ABOUTME: Provides JSON output formatting for results and errors

pub mod output;
