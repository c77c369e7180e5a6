// ABOUTME: Delta and comparison engine between two assessments of the same trainee
// ABOUTME: Computes per-metric deltas, improvement flags, categorical changes and a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment Comparison
//!
//! A metric missing from either assessment produces no delta and is left out
//! of every summary count. A delta of exactly zero is neither an improvement
//! nor a regression; it is counted as unchanged.

use academy_core::constants::{defaults::DELTA_DECIMALS, display::NO_CHANGE};
use academy_core::models::{Assessment, CategoricalField, MetricKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metric_registry::MetricRegistry;

/// Difference `new - old`, or `None` when either side was not measured
#[must_use]
pub fn calculate_delta(old_value: Option<f64>, new_value: Option<f64>) -> Option<f64> {
    match (old_value, new_value) {
        (Some(old), Some(new)) => Some(new - old),
        _ => None,
    }
}

/// Whether a delta is an improvement for the metric's direction
///
/// Returns `None` for a missing or zero delta.
#[must_use]
pub fn is_improvement(metric: MetricKey, delta: Option<f64>) -> Option<bool> {
    let delta = delta?;
    if delta == 0.0 {
        return None;
    }
    if MetricRegistry::is_lower_better(metric) {
        Some(delta < 0.0)
    } else {
        Some(delta > 0.0)
    }
}

/// Render a delta as sign-prefixed text with two decimals and the metric's unit
#[must_use]
pub fn format_delta(delta: Option<f64>, metric: MetricKey) -> String {
    let Some(delta) = delta else {
        return String::new();
    };
    if delta == 0.0 {
        return NO_CHANGE.to_owned();
    }
    let sign = if delta > 0.0 { "+" } else { "" };
    format!(
        "{sign}{delta:.prec$} {unit}",
        prec = DELTA_DECIMALS,
        unit = MetricRegistry::unit(metric)
    )
}

/// Comparison of one numeric metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Metric compared
    pub metric: MetricKey,
    /// Value in the older assessment
    pub old_value: Option<f64>,
    /// Value in the newer assessment
    pub new_value: Option<f64>,
    /// `new - old` when both are present
    pub delta: Option<f64>,
    /// Improvement flag, `None` when the delta is missing or zero
    pub is_improvement: Option<bool>,
    /// Display text for the delta
    pub formatted: String,
}

impl MetricComparison {
    fn new(metric: MetricKey, old_value: Option<f64>, new_value: Option<f64>) -> Self {
        let delta = calculate_delta(old_value, new_value);
        Self {
            metric,
            old_value,
            new_value,
            delta,
            is_improvement: is_improvement(metric, delta),
            formatted: format_delta(delta, metric),
        }
    }
}

/// Before/after pair for one categorical field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalChange {
    /// Field compared
    pub field: CategoricalField,
    /// Level in the older assessment
    pub old_value: Option<String>,
    /// Level in the newer assessment
    pub new_value: Option<String>,
    /// Whether the level differs
    pub changed: bool,
}

impl CategoricalChange {
    fn new(field: CategoricalField, old_value: Option<&str>, new_value: Option<&str>) -> Self {
        Self {
            field,
            changed: old_value != new_value,
            old_value: old_value.map(str::to_owned),
            new_value: new_value.map(str::to_owned),
        }
    }
}

/// Counts of improved, regressed and unchanged metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Metrics that moved in the improving direction
    pub improvements: usize,
    /// Metrics that moved in the worsening direction
    pub regressions: usize,
    /// Metrics measured in both assessments with a zero delta
    pub unchanged: usize,
}

impl ComparisonSummary {
    fn from_metrics(metrics: &[MetricComparison]) -> Self {
        metrics
            .iter()
            .filter(|comparison| comparison.delta.is_some())
            .fold(Self::default(), |mut summary, comparison| {
                match comparison.is_improvement {
                    Some(true) => summary.improvements += 1,
                    Some(false) => summary.regressions += 1,
                    None => summary.unchanged += 1,
                }
                summary
            })
    }
}

/// Full comparison between an older and a newer assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Identifier of the older assessment
    pub older_assessment_id: String,
    /// Identifier of the newer assessment
    pub newer_assessment_id: String,
    /// One entry per registry metric, in display order
    pub metrics: Vec<MetricComparison>,
    /// One entry per categorical field, in display order
    pub categorical: Vec<CategoricalChange>,
    /// Aggregate counts
    pub summary: ComparisonSummary,
}

impl ComparisonResult {
    /// Comparison entry for a metric
    #[must_use]
    pub fn metric(&self, metric: MetricKey) -> Option<&MetricComparison> {
        self.metrics.iter().find(|comparison| comparison.metric == metric)
    }

    /// Categorical entry for a field
    #[must_use]
    pub fn categorical(&self, field: CategoricalField) -> Option<&CategoricalChange> {
        self.categorical.iter().find(|change| change.field == field)
    }

    /// The same comparison taken in the opposite order
    #[must_use]
    pub fn reversed(&self) -> Self {
        let metrics: Vec<MetricComparison> = self
            .metrics
            .iter()
            .map(|comparison| {
                MetricComparison::new(comparison.metric, comparison.new_value, comparison.old_value)
            })
            .collect();
        let categorical = self
            .categorical
            .iter()
            .map(|change| CategoricalChange {
                field: change.field,
                old_value: change.new_value.clone(),
                new_value: change.old_value.clone(),
                changed: change.changed,
            })
            .collect();
        let summary = ComparisonSummary::from_metrics(&metrics);

        Self {
            older_assessment_id: self.newer_assessment_id.clone(),
            newer_assessment_id: self.older_assessment_id.clone(),
            metrics,
            categorical,
            summary,
        }
    }
}

/// Compare two assessments of the same trainee
#[must_use]
pub fn compare_assessments(older: &Assessment, newer: &Assessment) -> ComparisonResult {
    let metrics: Vec<MetricComparison> = MetricKey::ALL
        .into_iter()
        .map(|metric| {
            MetricComparison::new(metric, older.metric_value(metric), newer.metric_value(metric))
        })
        .collect();

    let categorical = CategoricalField::ALL
        .into_iter()
        .map(|field| {
            CategoricalChange::new(
                field,
                older.categorical_value(field),
                newer.categorical_value(field),
            )
        })
        .collect();

    let summary = ComparisonSummary::from_metrics(&metrics);
    debug!(
        older = %older.id,
        newer = %newer.id,
        improvements = summary.improvements,
        regressions = summary.regressions,
        unchanged = summary.unchanged,
        "Compared assessments"
    );

    ComparisonResult {
        older_assessment_id: older.id.clone(),
        newer_assessment_id: newer.id.clone(),
        metrics,
        categorical,
        summary,
    }
}
