// ABOUTME: Weekly meal plan models: seven days of four meal categories each
// ABOUTME: Serde shapes reject unknown keys so a plan decodes only when its structure is exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Day of the academy week (Sunday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekDay {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl WeekDay {
    /// Every day in week order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// JSON key for this day
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Hebrew display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunday => "ראשון",
            Self::Monday => "שני",
            Self::Tuesday => "שלישי",
            Self::Wednesday => "רביעי",
            Self::Thursday => "חמישי",
            Self::Friday => "שישי",
            Self::Saturday => "שבת",
        }
    }
}

/// Meal category within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snacks between meals
    Snacks,
}

impl MealCategory {
    /// Every category in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// JSON key for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }

    /// Hebrew display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "ארוחת בוקר",
            Self::Lunch => "ארוחת צהריים",
            Self::Dinner => "ארוחת ערב",
            Self::Snacks => "נשנושים",
        }
    }
}

/// Meals planned for a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayMeals {
    /// Breakfast items
    pub breakfast: Vec<String>,
    /// Lunch items
    pub lunch: Vec<String>,
    /// Dinner items
    pub dinner: Vec<String>,
    /// Snack items
    pub snacks: Vec<String>,
}

impl DayMeals {
    /// Items planned for a category
    #[must_use]
    pub fn items(&self, category: MealCategory) -> &[String] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Snacks => &self.snacks,
        }
    }

    /// Number of items planned across all categories
    #[must_use]
    pub fn item_count(&self) -> usize {
        MealCategory::ALL
            .into_iter()
            .map(|category| self.items(category).len())
            .sum()
    }
}

/// A trainee's weekly meal plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklyMealPlan {
    /// Sunday meals
    pub sunday: DayMeals,
    /// Monday meals
    pub monday: DayMeals,
    /// Tuesday meals
    pub tuesday: DayMeals,
    /// Wednesday meals
    pub wednesday: DayMeals,
    /// Thursday meals
    pub thursday: DayMeals,
    /// Friday meals
    pub friday: DayMeals,
    /// Saturday meals
    pub saturday: DayMeals,
}

impl WeeklyMealPlan {
    /// Meals planned for a day
    #[must_use]
    pub const fn day(&self, day: WeekDay) -> &DayMeals {
        match day {
            WeekDay::Sunday => &self.sunday,
            WeekDay::Monday => &self.monday,
            WeekDay::Tuesday => &self.tuesday,
            WeekDay::Wednesday => &self.wednesday,
            WeekDay::Thursday => &self.thursday,
            WeekDay::Friday => &self.friday,
            WeekDay::Saturday => &self.saturday,
        }
    }

    /// Days paired with their meals, in week order
    pub fn days(&self) -> impl Iterator<Item = (WeekDay, &DayMeals)> {
        WeekDay::ALL.into_iter().map(|day| (day, self.day(day)))
    }

    /// Number of items planned across the week
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.days().map(|(_, meals)| meals.item_count()).sum()
    }
}
