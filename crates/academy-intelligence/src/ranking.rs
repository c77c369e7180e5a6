// ABOUTME: Cohort ranking engine with competition ranking and outperformance percentiles
// ABOUTME: Selects the latest assessment per trainee and ranks the cohort per metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: percentile is in [0, 100]

//! # Cohort Rankings
//!
//! Ranks use standard competition ranking: tied values share the better rank
//! and the next distinct value takes its 1-based position (1, 1, 3).
//! A trainee's percentile is the share of the cohort they strictly outperform:
//! the worst entry is always 0, and the best entry stays below 100 because it
//! never outperforms itself.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use academy_core::constants::display::UNKNOWN_TRAINEE;
use academy_core::models::{Assessment, MetricKey};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metric_registry::MetricRegistry;

/// One trainee's standing in a cohort for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Trainee identifier
    pub user_id: String,
    /// Display name (placeholder when unknown)
    pub display_name: String,
    /// Metric value from the trainee's latest assessment
    pub value: f64,
    /// Competition rank, 1 is best
    pub rank: usize,
    /// Percentage of the cohort this trainee strictly outperforms
    pub percentile: u32,
}

fn supersedes(candidate: &Assessment, current: &Assessment) -> bool {
    match candidate.assessment_date.cmp(&current.assessment_date) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => match (candidate.created_at, current.created_at) {
            (Some(candidate_created), Some(current_created)) => candidate_created >= current_created,
            _ => true,
        },
    }
}

/// Most recent assessment per trainee, ordered by trainee id
///
/// Same-day assessments are ordered by `created_at`; when that cannot decide,
/// the one appearing last in the input wins.
#[must_use]
pub fn latest_assessment_per_user(assessments: &[Assessment]) -> Vec<&Assessment> {
    let mut latest: BTreeMap<&str, &Assessment> = BTreeMap::new();
    for assessment in assessments {
        latest
            .entry(assessment.user_id.as_str())
            .and_modify(|current| {
                if supersedes(assessment, *current) {
                    *current = assessment;
                }
            })
            .or_insert(assessment);
    }
    latest.into_values().collect()
}

/// A trainee's most recent assessments, newest first, at most `count`
///
/// Uses the same ordering as [`latest_assessment_per_user`].
#[must_use]
pub fn recent_assessments_for_user<'a>(
    assessments: &'a [Assessment],
    user_id: &str,
    count: usize,
) -> Vec<&'a Assessment> {
    let mut remaining: Vec<&Assessment> = assessments
        .iter()
        .filter(|assessment| assessment.user_id == user_id)
        .collect();
    let mut recent = Vec::with_capacity(count.min(remaining.len()));
    while recent.len() < count && !remaining.is_empty() {
        let mut newest = 0;
        for (index, candidate) in remaining.iter().enumerate().skip(1) {
            if supersedes(candidate, remaining[newest]) {
                newest = index;
            }
        }
        recent.push(remaining.remove(newest));
    }
    recent
}

/// Rank a cohort's latest assessments on one metric
///
/// Trainees without a value for the metric are left out.
pub fn calculate_rankings<'a, I>(
    latest: I,
    display_names: &HashMap<String, String>,
    metric: MetricKey,
    lower_is_better: bool,
) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = &'a Assessment>,
{
    let mut measured: Vec<(&Assessment, f64)> = latest
        .into_iter()
        .filter_map(|assessment| {
            assessment
                .metric_value(metric)
                .map(|value| (assessment, value))
        })
        .collect();

    measured.sort_by(|(_, a), (_, b)| {
        if lower_is_better {
            a.total_cmp(b)
        } else {
            b.total_cmp(a)
        }
    });

    let total = measured.len();
    let mut entries = Vec::with_capacity(total);
    let mut group_start = 0;
    while group_start < total {
        let group_value = measured[group_start].1;
        let group_end = measured[group_start..]
            .iter()
            .position(|(_, value)| *value != group_value)
            .map_or(total, |offset| group_start + offset);

        let strictly_worse = total - group_end;
        let percentile = (strictly_worse as f64 / total as f64 * 100.0).round() as u32;

        for (assessment, value) in &measured[group_start..group_end] {
            entries.push(RankingEntry {
                user_id: assessment.user_id.clone(),
                display_name: display_names
                    .get(&assessment.user_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_TRAINEE.to_owned()),
                value: *value,
                rank: group_start + 1,
                percentile,
            });
        }
        group_start = group_end;
    }

    debug!(metric = %metric, ranked = entries.len(), "Calculated cohort rankings");
    entries
}

/// A trainee's entry within a ranking
#[must_use]
pub fn find_user_ranking<'a>(rankings: &'a [RankingEntry], user_id: &str) -> Option<&'a RankingEntry> {
    rankings.iter().find(|entry| entry.user_id == user_id)
}

/// Values of one metric across the cohort's latest assessments
pub fn cohort_values<'a, I>(latest: I, metric: MetricKey) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Assessment>,
{
    latest
        .into_iter()
        .filter_map(|assessment| assessment.metric_value(metric))
        .collect()
}

/// Rankings for every registry metric, computed in parallel
#[must_use]
pub fn rank_all_metrics(
    latest: &[&Assessment],
    display_names: &HashMap<String, String>,
) -> BTreeMap<MetricKey, Vec<RankingEntry>> {
    MetricKey::ALL
        .par_iter()
        .map(|&metric| {
            let rankings = calculate_rankings(
                latest.iter().copied(),
                display_names,
                metric,
                MetricRegistry::is_lower_better(metric),
            );
            (metric, rankings)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_supersedes_prefers_later_creation_on_same_day() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let early = chrono::DateTime::parse_from_rfc3339("2025-05-01T08:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let late = chrono::DateTime::parse_from_rfc3339("2025-05-01T17:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let first = Assessment::new("a", "u", date).with_created_at(late);
        let second = Assessment::new("b", "u", date).with_created_at(early);
        assert!(!supersedes(&second, &first));
        assert!(supersedes(&first, &second));
    }

    #[test]
    fn test_recent_assessments_newest_first() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        let assessments = vec![
            Assessment::new("a1", "u1", day(1)),
            Assessment::new("b1", "u2", day(9)),
            Assessment::new("a3", "u1", day(20)),
            Assessment::new("a2", "u1", day(10)),
        ];
        let recent = recent_assessments_for_user(&assessments, "u1", 2);
        let ids: Vec<&str> = recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a2"]);
        assert!(recent_assessments_for_user(&assessments, "nobody", 2).is_empty());
    }
}
