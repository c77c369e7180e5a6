// ABOUTME: Celebration de-duplication backed by a notified_at column on each record
// ABOUTME: Suppression follows the stored entity, so it holds across devices and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use academy_core::models::{Goal, UnlockedAchievement};
use chrono::{DateTime, Utc};

/// A record that can trigger a one-time celebration
pub trait Celebratable {
    /// Whether the record has earned a celebration
    fn celebration_due(&self) -> bool;

    /// When the celebration was shown, if ever
    fn notified_at(&self) -> Option<DateTime<Utc>>;

    /// Record that the celebration was shown
    fn set_notified_at(&mut self, notified_at: DateTime<Utc>);
}

impl Celebratable for Goal {
    fn celebration_due(&self) -> bool {
        self.is_achieved()
    }

    fn notified_at(&self) -> Option<DateTime<Utc>> {
        self.notified_at
    }

    fn set_notified_at(&mut self, notified_at: DateTime<Utc>) {
        self.notified_at = Some(notified_at);
    }
}

impl Celebratable for UnlockedAchievement {
    fn celebration_due(&self) -> bool {
        true
    }

    fn notified_at(&self) -> Option<DateTime<Utc>> {
        self.notified_at
    }

    fn set_notified_at(&mut self, notified_at: DateTime<Utc>) {
        self.notified_at = Some(notified_at);
    }
}

/// Records whose celebration is due and has not been shown
pub fn pending_celebrations<T: Celebratable>(items: &[T]) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.celebration_due() && item.notified_at().is_none())
        .collect()
}

/// Copy of the record with `notified_at` set
///
/// An already-notified record keeps its original timestamp.
#[must_use]
pub fn mark_notified<T: Celebratable + Clone>(item: &T, now: DateTime<Utc>) -> T {
    let mut updated = item.clone();
    if updated.notified_at().is_none() {
        updated.set_notified_at(now);
    }
    updated
}
