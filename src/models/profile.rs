//! Gamification profile model
//!
//! One profile per user, owned exclusively by that user and mutated only by
//! the engine. Invariants maintained across every update:
//! - `longest_streak >= streak_days`
//! - `points` is monotonically non-decreasing
//! - `level` is always `rules::levels::level_for_points(points)`

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Achievement, Challenge};
use crate::catalog;

/// Per-user gamification state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamificationProfile {
    pub user_id: Uuid,
    /// Current consecutive-day logging streak
    pub streak_days: i32,
    pub longest_streak: i32,
    /// Calendar date (time-of-day discarded) of the most recent
    /// streak-qualifying log, or None if the user has never logged
    pub last_log_date: Option<NaiveDate>,
    pub points: i32,
    pub level: i32,
    pub achievements: Vec<Achievement>,
    pub active_challenges: Vec<Challenge>,
    pub completed_challenges: Vec<Challenge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GamificationProfile {
    /// Fresh profile with the seed achievement set and empty challenge sets.
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            streak_days: 0,
            longest_streak: 0,
            last_log_date: None,
            points: 0,
            level: 1,
            achievements: catalog::seed_achievements(),
            active_challenges: Vec::new(),
            completed_challenges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn active_challenge(&self, id: &str) -> Option<&Challenge> {
        self.active_challenges.iter().find(|c| c.id == id)
    }

    pub fn completed_challenge(&self, id: &str) -> Option<&Challenge> {
        self.completed_challenges.iter().find(|c| c.id == id)
    }
}

/// Partial update for a profile: only fields set to `Some` are written, all
/// other persisted fields are preserved untouched by the store.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub streak_days: Option<i32>,
    pub longest_streak: Option<i32>,
    pub last_log_date: Option<NaiveDate>,
    pub points: Option<i32>,
    pub level: Option<i32>,
    pub achievements: Option<Vec<Achievement>>,
    pub active_challenges: Option<Vec<Challenge>>,
    pub completed_challenges: Option<Vec<Challenge>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.streak_days.is_none()
            && self.longest_streak.is_none()
            && self.last_log_date.is_none()
            && self.points.is_none()
            && self.level.is_none()
            && self.achievements.is_none()
            && self.active_challenges.is_none()
            && self.completed_challenges.is_none()
    }
}
