//! Achievement model
//!
//! Achievements are seeded once at profile creation with a fixed identity
//! set; entries are never added or removed afterwards, only mutated in place.
//! `is_completed` transitions false to true exactly once, and `completed_at`
//! is stamped at that moment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Logging,
    Nutrition,
    Consistency,
    Social,
    Special,
}

/// Achievement entry within a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    /// Stable key, unique within a profile (e.g. `"streak-7"`)
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    /// Current progress, 0 ..= target_value
    pub progress: i32,
    /// Fixed at creation, always > 0
    pub target_value: i32,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// Point reward granted once on completion
    pub points: i32,
}

impl Achievement {
    /// Seed a fresh, unstarted achievement.
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        category: AchievementCategory,
        target_value: i32,
        points: i32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            progress: 0,
            target_value,
            is_completed: false,
            completed_at: None,
            points,
        }
    }
}
