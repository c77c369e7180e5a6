// ABOUTME: Static registry of assessment metric definitions (label, unit, direction)
// ABOUTME: Every MetricKey has exactly one definition and one improvement direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use academy_core::models::MetricKey;
use serde::Serialize;

/// Display and direction metadata for one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    /// Metric key
    pub key: MetricKey,
    /// Hebrew display label
    pub label: &'static str,
    /// Unit string appended to values
    pub unit: &'static str,
    /// Whether smaller values represent better performance
    pub lower_is_better: bool,
}

const SECONDS: &str = "שנ׳";
const CENTIMETERS: &str = "ס״מ";
const DEGREES: &str = "°";
const KMH: &str = "קמ״ש";

// Indexed by `MetricKey` discriminant; order must follow the enum.
const DEFINITIONS: [MetricDefinition; 12] = [
    MetricDefinition {
        key: MetricKey::Sprint5m,
        label: "ספרינט 5 מטר",
        unit: SECONDS,
        lower_is_better: true,
    },
    MetricDefinition {
        key: MetricKey::Sprint10m,
        label: "ספרינט 10 מטר",
        unit: SECONDS,
        lower_is_better: true,
    },
    MetricDefinition {
        key: MetricKey::Sprint20m,
        label: "ספרינט 20 מטר",
        unit: SECONDS,
        lower_is_better: true,
    },
    MetricDefinition {
        key: MetricKey::Jump2LegDistance,
        label: "ניתור למרחק בשתי רגליים",
        unit: CENTIMETERS,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::Jump2LegHeight,
        label: "ניתור לגובה בשתי רגליים",
        unit: CENTIMETERS,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::JumpRightLeg,
        label: "ניתור רגל ימין",
        unit: CENTIMETERS,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::JumpLeftLeg,
        label: "ניתור רגל שמאל",
        unit: CENTIMETERS,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::BlazeSpotTime,
        label: "זריזות Blaze Spot",
        unit: SECONDS,
        lower_is_better: true,
    },
    MetricDefinition {
        key: MetricKey::FlexibilityAnkle,
        label: "גמישות קרסול",
        unit: DEGREES,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::FlexibilityKnee,
        label: "גמישות ברך",
        unit: DEGREES,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::FlexibilityHip,
        label: "גמישות ירך",
        unit: DEGREES,
        lower_is_better: false,
    },
    MetricDefinition {
        key: MetricKey::KickPowerKaiser,
        label: "עוצמת בעיטה (Kaiser)",
        unit: KMH,
        lower_is_better: false,
    },
];

/// Lookup surface over the static metric definitions
pub struct MetricRegistry;

impl MetricRegistry {
    /// Full definition for a metric
    #[must_use]
    pub const fn definition(key: MetricKey) -> &'static MetricDefinition {
        &DEFINITIONS[key as usize]
    }

    /// Every definition in display order
    #[must_use]
    pub const fn all() -> &'static [MetricDefinition] {
        &DEFINITIONS
    }

    /// Hebrew display label
    #[must_use]
    pub const fn label(key: MetricKey) -> &'static str {
        Self::definition(key).label
    }

    /// Unit string
    #[must_use]
    pub const fn unit(key: MetricKey) -> &'static str {
        Self::definition(key).unit
    }

    /// Whether smaller values represent better performance
    #[must_use]
    pub const fn is_lower_better(key: MetricKey) -> bool {
        Self::definition(key).lower_is_better
    }
}
