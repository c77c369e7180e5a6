// ABOUTME: Converts an assessment into 0-100 category scores and an overall rating tier
// ABOUTME: Scores place each value between a worst and best benchmark, static or cohort-derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: scores are clamped to [0, 100]

//! # Assessment Rating
//!
//! A metric score is the linear position of a value between the benchmark's
//! worst (0) and best (100) reference points. Because the direction is encoded
//! in the ordering of `worst`/`best`, lower-is-better metrics need no special
//! casing. Category scores average the scores of measured metrics; categories
//! with nothing measured stay unrated and do not drag the overall score down.

use std::collections::BTreeMap;

use academy_core::constants::rating_tiers::{ELITE_MIN, SOLID_MIN, STRONG_MIN};
use academy_core::constants::scale::MAX_PERCENT;
use academy_core::models::{Assessment, MetricCategory, MetricKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metric_registry::MetricRegistry;
use crate::statistics::calculate_group_statistics;

/// Reference points for scoring one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRange {
    /// Value scoring 0
    pub worst: f64,
    /// Value scoring 100
    pub best: f64,
}

/// Benchmark ranges for every scored metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBenchmarks {
    ranges: BTreeMap<MetricKey, BenchmarkRange>,
}

impl Default for RatingBenchmarks {
    fn default() -> Self {
        let ranges = MetricKey::ALL
            .into_iter()
            .map(|metric| (metric, Self::reference_range(metric)))
            .collect();
        Self { ranges }
    }
}

impl RatingBenchmarks {
    /// Youth academy reference ranges
    const fn reference_range(metric: MetricKey) -> BenchmarkRange {
        let (worst, best) = match metric {
            MetricKey::Sprint5m => (1.6, 1.0),
            MetricKey::Sprint10m => (2.6, 1.7),
            MetricKey::Sprint20m => (4.3, 2.9),
            MetricKey::Jump2LegDistance => (120.0, 250.0),
            MetricKey::Jump2LegHeight => (20.0, 60.0),
            MetricKey::JumpRightLeg | MetricKey::JumpLeftLeg => (100.0, 220.0),
            MetricKey::BlazeSpotTime => (40.0, 20.0),
            MetricKey::FlexibilityAnkle => (20.0, 50.0),
            MetricKey::FlexibilityKnee => (110.0, 150.0),
            MetricKey::FlexibilityHip => (70.0, 130.0),
            MetricKey::KickPowerKaiser => (40.0, 110.0),
        };
        BenchmarkRange { worst, best }
    }

    /// Benchmarks spanning the observed cohort range
    ///
    /// Metrics where the cohort shows no spread keep their reference range.
    #[must_use]
    pub fn from_cohort(latest: &[&Assessment]) -> Self {
        let mut benchmarks = Self::default();
        for metric in MetricKey::ALL {
            let values: Vec<f64> = latest
                .iter()
                .filter_map(|assessment| assessment.metric_value(metric))
                .collect();
            let Some(stats) = calculate_group_statistics(&values) else {
                continue;
            };
            if stats.min == stats.max {
                continue;
            }
            let range = if MetricRegistry::is_lower_better(metric) {
                BenchmarkRange {
                    worst: stats.max,
                    best: stats.min,
                }
            } else {
                BenchmarkRange {
                    worst: stats.min,
                    best: stats.max,
                }
            };
            benchmarks.ranges.insert(metric, range);
        }
        benchmarks
    }

    /// Override the range for one metric (builder style)
    #[must_use]
    pub fn with_range(mut self, metric: MetricKey, worst: f64, best: f64) -> Self {
        self.ranges.insert(metric, BenchmarkRange { worst, best });
        self
    }

    /// Range for a metric
    #[must_use]
    pub fn range(&self, metric: MetricKey) -> Option<BenchmarkRange> {
        self.ranges.get(&metric).copied()
    }
}

/// Score of a single value against its benchmark, `None` for a degenerate range
#[must_use]
pub fn metric_score(metric: MetricKey, value: f64, benchmarks: &RatingBenchmarks) -> Option<u8> {
    let range = benchmarks.range(metric)?;
    let span = range.best - range.worst;
    if span == 0.0 || !span.is_finite() || !value.is_finite() {
        return None;
    }
    let position = ((value - range.worst) / span).clamp(0.0, 1.0);
    Some((position * MAX_PERCENT).round() as u8)
}

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    /// Below the solid threshold
    Developing,
    /// Solid for the age group
    Solid,
    /// Clearly above the group
    Strong,
    /// Top of the reference range
    Elite,
}

impl RatingTier {
    /// Tier for a score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= ELITE_MIN {
            Self::Elite
        } else if score >= STRONG_MIN {
            Self::Strong
        } else if score >= SOLID_MIN {
            Self::Solid
        } else {
            Self::Developing
        }
    }
}

/// Score for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRating {
    /// Category scored
    pub category: MetricCategory,
    /// Rounded mean of metric scores, `None` when nothing was measured
    pub score: Option<u8>,
    /// Number of metrics that contributed
    pub rated_metrics: usize,
}

/// Rating of a whole assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRating {
    /// Assessment rated
    pub assessment_id: String,
    /// Trainee identifier
    pub user_id: String,
    /// One entry per category, in display order
    pub categories: Vec<CategoryRating>,
    /// Rounded mean of rated category scores
    pub overall: Option<u8>,
    /// Tier of the overall score
    pub tier: Option<RatingTier>,
}

fn rounded_mean(scores: &[u8]) -> Option<u8> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|score| f64::from(*score)).sum();
    Some((sum / scores.len() as f64).round() as u8)
}

/// Rate an assessment against benchmarks
#[must_use]
pub fn rate_assessment(assessment: &Assessment, benchmarks: &RatingBenchmarks) -> AssessmentRating {
    let categories: Vec<CategoryRating> = MetricCategory::ALL
        .into_iter()
        .map(|category| {
            let scores: Vec<u8> = category
                .metrics()
                .filter_map(|metric| {
                    assessment
                        .metric_value(metric)
                        .and_then(|value| metric_score(metric, value, benchmarks))
                })
                .collect();
            CategoryRating {
                category,
                score: rounded_mean(&scores),
                rated_metrics: scores.len(),
            }
        })
        .collect();

    let category_scores: Vec<u8> = categories.iter().filter_map(|rating| rating.score).collect();
    let overall = rounded_mean(&category_scores);

    debug!(assessment = %assessment.id, ?overall, "Rated assessment");

    AssessmentRating {
        assessment_id: assessment.id.clone(),
        user_id: assessment.user_id.clone(),
        categories,
        overall,
        tier: overall.map(RatingTier::from_score),
    }
}
