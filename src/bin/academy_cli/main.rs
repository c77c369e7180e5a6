// ABOUTME: Academy CLI - command-line access to the trainee analytics engines
// ABOUTME: Loads exported JSON datasets and prints comparisons, rankings, statistics and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compare a trainee's two latest assessments
//! academy-cli compare --assessments assessments.json --user trainee-1
//!
//! # Rank the cohort on the 10 meter sprint
//! academy-cli rank --assessments assessments.json --metric sprint_10m --names names.json
//!
//! # Group statistics with an 8-bin histogram
//! academy-cli stats --assessments assessments.json --metric kick_power_kaiser --bins 8
//!
//! # Goal progress for one trainee
//! academy-cli goals --goals goals.json --user trainee-1
//!
//! # Validate a weekly meal plan
//! academy-cli meal-plan --file plan.json
//!
//! # Full trainee report
//! academy-cli report --assessments assessments.json --goals goals.json --user trainee-1
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use academy_insights::config::{AcademyConfig, BenchmarkSource};
use academy_insights::errors::{AppError, ErrorCode, ErrorResponse};
use academy_insights::models::MetricKey;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "academy-cli",
    about = "Academy trainee analytics CLI",
    long_about = "Command-line access to assessment comparisons, goal progress, cohort rankings and trainee reports over exported JSON datasets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Rating benchmark source override (static or cohort)
    #[arg(long, global = true)]
    rating_source: Option<BenchmarkSource>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compare a trainee's two most recent assessments
    Compare {
        /// Assessments JSON file
        #[arg(long)]
        assessments: PathBuf,

        /// Trainee id
        #[arg(long)]
        user: String,
    },

    /// Rank the cohort on one metric
    Rank {
        /// Assessments JSON file
        #[arg(long)]
        assessments: PathBuf,

        /// Metric key (e.g. `sprint_10m`)
        #[arg(long)]
        metric: MetricKey,

        /// Display names JSON file
        #[arg(long)]
        names: Option<PathBuf>,
    },

    /// Group statistics and distribution bins for one metric
    Stats {
        /// Assessments JSON file
        #[arg(long)]
        assessments: PathBuf,

        /// Metric key (e.g. `sprint_10m`)
        #[arg(long)]
        metric: MetricKey,

        /// Histogram bin count (overrides `ACADEMY_DISTRIBUTION_BINS`)
        #[arg(long)]
        bins: Option<usize>,
    },

    /// Goal progress per goal plus a summary
    Goals {
        /// Goals JSON file
        #[arg(long)]
        goals: PathBuf,

        /// Only this trainee's goals
        #[arg(long)]
        user: Option<String>,
    },

    /// Validate a weekly meal plan
    MealPlan {
        /// Meal plan JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Full report for one trainee
    Report {
        /// Assessments JSON file
        #[arg(long)]
        assessments: PathBuf,

        /// Goals JSON file
        #[arg(long)]
        goals: PathBuf,

        /// Trainee id
        #[arg(long)]
        user: String,

        /// Display names JSON file
        #[arg(long)]
        names: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AcademyConfig::from_env().context("Failed to load configuration")?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config
        .logging
        .init()
        .context("Failed to initialize logging")?;

    if let Some(source) = cli.rating_source {
        config = config.with_benchmark_source(source);
    }

    info!("Academy analytics CLI");
    config.log_summary();

    match cli.command {
        Command::Compare { assessments, user } => {
            commands::analysis::compare(&assessments, &user)?;
        }
        Command::Rank {
            assessments,
            metric,
            names,
        } => {
            commands::analysis::rank(&assessments, metric, names.as_deref())?;
        }
        Command::Stats {
            assessments,
            metric,
            bins,
        } => {
            if let Some(bins) = bins {
                config = config.with_distribution_bins(bins);
                config.validate().context("Invalid --bins value")?;
            }
            commands::analysis::stats(&assessments, metric, &config.analytics)?;
        }
        Command::Goals { goals, user } => {
            commands::goals::progress(&goals, user.as_deref())?;
        }
        Command::MealPlan { file } => {
            commands::meal_plan::validate(&file)?;
        }
        Command::Report {
            assessments,
            goals,
            user,
            names,
        } => {
            commands::report::build(
                &assessments,
                &goals,
                &user,
                names.as_deref(),
                &config.analytics,
            )?;
        }
    }

    Ok(())
}

fn report_error(error: &anyhow::Error) -> ExitCode {
    let (code, details) = error.downcast_ref::<AppError>().map_or_else(
        || (ErrorCode::InternalError, serde_json::Value::Null),
        |app_error| (app_error.code, app_error.details.clone()),
    );
    let response = ErrorResponse {
        code,
        message: format!("{error:#}"),
        details,
    };
    helpers::output::print_error(&response);
    u8::try_from(code.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
