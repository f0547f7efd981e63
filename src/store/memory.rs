//! In-memory profile store
//!
//! Backing store for unit and integration tests, and for running the engine
//! without a database. Supports failure injection so tests can assert the
//! engine's write-before-commit behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::ProfileStore;
use crate::models::{GamificationProfile, ProfileUpdate};

/// HashMap-backed store.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<Uuid, GamificationProfile>>,
    failing: AtomicBool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every store call fails until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("profile store unavailable");
        }
        Ok(())
    }

    /// Snapshot a stored profile, bypassing failure injection. Test hook.
    pub async fn stored(&self, user_id: Uuid) -> Option<GamificationProfile> {
        self.profiles.lock().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GamificationProfile>> {
        self.check_available()?;
        Ok(self.profiles.lock().await.get(&user_id).cloned())
    }

    async fn create(&self, profile: &GamificationProfile) -> anyhow::Result<()> {
        self.check_available()?;
        let mut profiles = self.profiles.lock().await;
        if profiles.contains_key(&profile.user_id) {
            anyhow::bail!("profile already exists for {}", profile.user_id);
        }
        profiles.insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn update(&self, user_id: Uuid, update: ProfileUpdate) -> anyhow::Result<()> {
        self.check_available()?;
        let mut profiles = self.profiles.lock().await;
        let profile = profiles
            .get_mut(&user_id)
            .ok_or_else(|| anyhow::anyhow!("no profile for {}", user_id))?;

        if let Some(streak_days) = update.streak_days {
            profile.streak_days = streak_days;
        }
        if let Some(longest_streak) = update.longest_streak {
            profile.longest_streak = longest_streak;
        }
        if let Some(last_log_date) = update.last_log_date {
            profile.last_log_date = Some(last_log_date);
        }
        if let Some(points) = update.points {
            profile.points = points;
        }
        if let Some(level) = update.level {
            profile.level = level;
        }
        if let Some(achievements) = update.achievements {
            profile.achievements = achievements;
        }
        if let Some(active) = update.active_challenges {
            profile.active_challenges = active;
        }
        if let Some(completed) = update.completed_challenges {
            profile.completed_challenges = completed;
        }
        profile.updated_at = Utc::now();
        Ok(())
    }
}
