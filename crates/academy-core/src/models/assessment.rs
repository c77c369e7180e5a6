// ABOUTME: Assessment record holding one trainee's measurements taken on one date
// ABOUTME: Typed accessors map metric keys and categorical fields onto the row's columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::metric::{CategoricalField, MetricKey};

/// One trainee's physical assessment on one date
///
/// Numeric metrics are `None` when not measured; absence never means zero.
/// Later sessions are new records, never edits of an existing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Record identifier
    pub id: String,
    /// Trainee identifier
    pub user_id: String,
    /// Date the measurements were taken
    pub assessment_date: NaiveDate,
    /// Row creation time, used to order same-day assessments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// 5 meter sprint (seconds)
    #[serde(default)]
    pub sprint_5m: Option<f64>,
    /// 10 meter sprint (seconds)
    #[serde(default)]
    pub sprint_10m: Option<f64>,
    /// 20 meter sprint (seconds)
    #[serde(default)]
    pub sprint_20m: Option<f64>,
    /// Standing long jump (cm)
    #[serde(default)]
    pub jump_2leg_distance: Option<f64>,
    /// Vertical jump (cm)
    #[serde(default)]
    pub jump_2leg_height: Option<f64>,
    /// Right leg hop (cm)
    #[serde(default)]
    pub jump_right_leg: Option<f64>,
    /// Left leg hop (cm)
    #[serde(default)]
    pub jump_left_leg: Option<f64>,
    /// Blaze spot drill (seconds)
    #[serde(default)]
    pub blaze_spot_time: Option<f64>,
    /// Ankle flexibility (degrees)
    #[serde(default)]
    pub flexibility_ankle: Option<f64>,
    /// Knee flexibility (degrees)
    #[serde(default)]
    pub flexibility_knee: Option<f64>,
    /// Hip flexibility (degrees)
    #[serde(default)]
    pub flexibility_hip: Option<f64>,
    /// Kick power on the Kaiser machine
    #[serde(default)]
    pub kick_power_kaiser: Option<f64>,

    /// Coordination level
    #[serde(default)]
    pub coordination: Option<String>,
    /// Leg power technique level
    #[serde(default)]
    pub leg_power_technique: Option<String>,
    /// Body structure class
    #[serde(default)]
    pub body_structure: Option<String>,
}

impl Assessment {
    /// Create an assessment with no measurements
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        assessment_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            assessment_date,
            ..Self::default()
        }
    }

    /// Set a numeric metric (builder style)
    #[must_use]
    pub fn with_metric(mut self, metric: MetricKey, value: f64) -> Self {
        *self.metric_slot(metric) = Some(value);
        self
    }

    /// Set a categorical field (builder style)
    #[must_use]
    pub fn with_categorical(mut self, field: CategoricalField, value: impl Into<String>) -> Self {
        *self.categorical_slot(field) = Some(value.into());
        self
    }

    /// Set the creation timestamp (builder style)
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Measured value for a metric
    ///
    /// Non-finite values are reported as not measured.
    #[must_use]
    pub fn metric_value(&self, metric: MetricKey) -> Option<f64> {
        let raw = match metric {
            MetricKey::Sprint5m => self.sprint_5m,
            MetricKey::Sprint10m => self.sprint_10m,
            MetricKey::Sprint20m => self.sprint_20m,
            MetricKey::Jump2LegDistance => self.jump_2leg_distance,
            MetricKey::Jump2LegHeight => self.jump_2leg_height,
            MetricKey::JumpRightLeg => self.jump_right_leg,
            MetricKey::JumpLeftLeg => self.jump_left_leg,
            MetricKey::BlazeSpotTime => self.blaze_spot_time,
            MetricKey::FlexibilityAnkle => self.flexibility_ankle,
            MetricKey::FlexibilityKnee => self.flexibility_knee,
            MetricKey::FlexibilityHip => self.flexibility_hip,
            MetricKey::KickPowerKaiser => self.kick_power_kaiser,
        };
        raw.filter(|value| value.is_finite())
    }

    /// Recorded level for a categorical field
    #[must_use]
    pub fn categorical_value(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Coordination => self.coordination.as_deref(),
            CategoricalField::LegPowerTechnique => self.leg_power_technique.as_deref(),
            CategoricalField::BodyStructure => self.body_structure.as_deref(),
        }
    }

    /// Number of numeric metrics measured in this assessment
    #[must_use]
    pub fn measured_metric_count(&self) -> usize {
        MetricKey::ALL
            .into_iter()
            .filter(|metric| self.metric_value(*metric).is_some())
            .count()
    }

    fn metric_slot(&mut self, metric: MetricKey) -> &mut Option<f64> {
        match metric {
            MetricKey::Sprint5m => &mut self.sprint_5m,
            MetricKey::Sprint10m => &mut self.sprint_10m,
            MetricKey::Sprint20m => &mut self.sprint_20m,
            MetricKey::Jump2LegDistance => &mut self.jump_2leg_distance,
            MetricKey::Jump2LegHeight => &mut self.jump_2leg_height,
            MetricKey::JumpRightLeg => &mut self.jump_right_leg,
            MetricKey::JumpLeftLeg => &mut self.jump_left_leg,
            MetricKey::BlazeSpotTime => &mut self.blaze_spot_time,
            MetricKey::FlexibilityAnkle => &mut self.flexibility_ankle,
            MetricKey::FlexibilityKnee => &mut self.flexibility_knee,
            MetricKey::FlexibilityHip => &mut self.flexibility_hip,
            MetricKey::KickPowerKaiser => &mut self.kick_power_kaiser,
        }
    }

    fn categorical_slot(&mut self, field: CategoricalField) -> &mut Option<String> {
        match field {
            CategoricalField::Coordination => &mut self.coordination,
            CategoricalField::LegPowerTechnique => &mut self.leg_power_technique,
            CategoricalField::BodyStructure => &mut self.body_structure,
        }
    }
}
