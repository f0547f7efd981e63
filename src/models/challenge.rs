//! Challenge model and catalog templates
//!
//! A challenge lives in the profile's active set while incomplete and is
//! relocated to the completed set the instant its progress reaches the
//! target; the relocation happens exactly once and never reverses.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog-defined challenge description, external to any user's profile.
/// Copied into a [`Challenge`] when a user joins.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChallengeTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, message = "target must be at least 1"))]
    pub target_value: i32,
    #[validate(range(min = 0, message = "reward cannot be negative"))]
    pub points: i32,
    /// Window length in days; end_date = join date + duration_days
    #[validate(range(min = 1, message = "window must be at least one day"))]
    pub duration_days: i64,
}

/// Challenge entry within a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    /// Fixed at join time
    pub start_date: NaiveDate,
    /// Fixed at join time
    pub end_date: NaiveDate,
    pub target_value: i32,
    /// 0 ..= target_value, monotonically non-decreasing
    pub current_progress: i32,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub points: i32,
}

impl Challenge {
    /// Copy a catalog template into a fresh challenge joined on `start_date`.
    pub fn from_template(template: &ChallengeTemplate, start_date: NaiveDate) -> Self {
        Self {
            id: template.id.clone(),
            title: template.title.clone(),
            start_date,
            end_date: start_date + Duration::days(template.duration_days),
            target_value: template.target_value,
            current_progress: 0,
            is_completed: false,
            completed_at: None,
            points: template.points,
        }
    }
}
