// ABOUTME: Closed sets of numeric metric keys and categorical fields recorded per assessment
// ABOUTME: Provides string parsing, stable ordering and rating category grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Numeric metric measured during a physical assessment
///
/// The set is closed: every key has exactly one registry definition, so a
/// lookup can never miss. External strings enter through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    /// 5 meter sprint time
    #[serde(rename = "sprint_5m")]
    Sprint5m,
    /// 10 meter sprint time
    #[serde(rename = "sprint_10m")]
    Sprint10m,
    /// 20 meter sprint time
    #[serde(rename = "sprint_20m")]
    Sprint20m,
    /// Standing long jump, both legs
    #[serde(rename = "jump_2leg_distance")]
    Jump2LegDistance,
    /// Vertical jump, both legs
    #[serde(rename = "jump_2leg_height")]
    Jump2LegHeight,
    /// Single leg hop, right leg
    JumpRightLeg,
    /// Single leg hop, left leg
    JumpLeftLeg,
    /// Reaction/agility drill time on Blaze Pod spots
    BlazeSpotTime,
    /// Ankle dorsiflexion angle
    FlexibilityAnkle,
    /// Knee flexion angle
    FlexibilityKnee,
    /// Hip flexion angle
    FlexibilityHip,
    /// Kick power measured on a Kaiser machine
    KickPowerKaiser,
}

impl MetricKey {
    /// Every metric in display order
    pub const ALL: [Self; 12] = [
        Self::Sprint5m,
        Self::Sprint10m,
        Self::Sprint20m,
        Self::Jump2LegDistance,
        Self::Jump2LegHeight,
        Self::JumpRightLeg,
        Self::JumpLeftLeg,
        Self::BlazeSpotTime,
        Self::FlexibilityAnkle,
        Self::FlexibilityKnee,
        Self::FlexibilityHip,
        Self::KickPowerKaiser,
    ];

    /// Datastore column name for this metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sprint5m => "sprint_5m",
            Self::Sprint10m => "sprint_10m",
            Self::Sprint20m => "sprint_20m",
            Self::Jump2LegDistance => "jump_2leg_distance",
            Self::Jump2LegHeight => "jump_2leg_height",
            Self::JumpRightLeg => "jump_right_leg",
            Self::JumpLeftLeg => "jump_left_leg",
            Self::BlazeSpotTime => "blaze_spot_time",
            Self::FlexibilityAnkle => "flexibility_ankle",
            Self::FlexibilityKnee => "flexibility_knee",
            Self::FlexibilityHip => "flexibility_hip",
            Self::KickPowerKaiser => "kick_power_kaiser",
        }
    }

    /// Rating category this metric contributes to
    #[must_use]
    pub const fn category(self) -> MetricCategory {
        match self {
            Self::Sprint5m | Self::Sprint10m | Self::Sprint20m => MetricCategory::Speed,
            Self::Jump2LegDistance
            | Self::Jump2LegHeight
            | Self::JumpRightLeg
            | Self::JumpLeftLeg
            | Self::KickPowerKaiser => MetricCategory::Power,
            Self::BlazeSpotTime => MetricCategory::Agility,
            Self::FlexibilityAnkle | Self::FlexibilityKnee | Self::FlexibilityHip => {
                MetricCategory::Flexibility
            }
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == key)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown metric key: '{key}'")))
    }
}

/// Grouping of metrics used by assessment ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    /// Sprint times
    Speed,
    /// Jumps and kick power
    Power,
    /// Reaction drills
    Agility,
    /// Joint range of motion
    Flexibility,
}

impl MetricCategory {
    /// Every category in display order
    pub const ALL: [Self; 4] = [Self::Speed, Self::Power, Self::Agility, Self::Flexibility];

    /// Metrics belonging to this category, in registry order
    pub fn metrics(self) -> impl Iterator<Item = MetricKey> {
        MetricKey::ALL
            .into_iter()
            .filter(move |metric| metric.category() == self)
    }
}

/// Categorical (level) field recorded per assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    /// Coordination level
    Coordination,
    /// Leg power technique level
    LegPowerTechnique,
    /// Body structure class
    BodyStructure,
}

impl CategoricalField {
    /// Every categorical field in display order
    pub const ALL: [Self; 3] = [
        Self::Coordination,
        Self::LegPowerTechnique,
        Self::BodyStructure,
    ];

    /// Datastore column name for this field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coordination => "coordination",
            Self::LegPowerTechnique => "leg_power_technique",
            Self::BodyStructure => "body_structure",
        }
    }

    /// Hebrew display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coordination => "קואורדינציה",
            Self::LegPowerTechnique => "טכניקת כוח רגליים",
            Self::BodyStructure => "מבנה גוף",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_key() {
        for metric in MetricKey::ALL {
            assert_eq!(metric.as_str().parse::<MetricKey>().unwrap(), metric);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "sprint_100m".parse::<MetricKey>().unwrap_err();
        assert!(err.message.contains("sprint_100m"));
    }

    #[test]
    fn test_serde_names_match_columns() {
        for metric in MetricKey::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.as_str()));
        }
    }

    #[test]
    fn test_every_metric_has_one_category() {
        let total: usize = MetricCategory::ALL
            .into_iter()
            .map(|category| category.metrics().count())
            .sum();
        assert_eq!(total, MetricKey::ALL.len());
    }
}
