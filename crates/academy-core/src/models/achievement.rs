// ABOUTME: Unlocked achievement record awaiting or past its celebration
// ABOUTME: Carries the notified_at column that replaces client-side "celebrated" tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An achievement a trainee has earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Record identifier
    pub id: String,
    /// Trainee identifier
    pub user_id: String,
    /// Achievement definition key (e.g. `first_goal_achieved`)
    pub achievement_key: String,
    /// When the achievement was earned
    pub unlocked_at: DateTime<Utc>,
    /// When the celebration was shown, if ever
    #[serde(default)]
    pub notified_at: Option<DateTime<Utc>>,
}
