//! Gamification engine
//!
//! Owns the rules that mutate a user's gamification profile in response to
//! logging events. Every operation follows the same shape: authorize against
//! the identity collaborator, compute the next state from the caller's
//! profile, issue one remote write, and only then hand the new state back.
//! On a failed write the caller's profile is untouched, so a failed call
//! leaves no partial local mutation behind.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::identity::IdentityProvider;
use crate::models::{
    AchievementCategory, Challenge, ChallengeTemplate, GamificationProfile, ProfileUpdate,
};
use crate::notify::{GamificationEvent, Notifier};
use crate::rules::{levels, streaks};
use crate::store::ProfileStore;
use validator::Validate;

/// The gamification engine with its three injected collaborators.
pub struct GamificationEngine<S, N, I> {
    store: S,
    notifier: N,
    identity: I,
}

impl<S, N, I> GamificationEngine<S, N, I>
where
    S: ProfileStore,
    N: Notifier,
    I: IdentityProvider,
{
    pub fn new(store: S, notifier: N, identity: I) -> Self {
        Self {
            store,
            notifier,
            identity,
        }
    }

    /// Fetch the current user's profile, creating and seeding one on first
    /// access.
    pub async fn load_profile(&self) -> EngineResult<GamificationProfile> {
        let user_id = self.authorize()?;

        let existing = self
            .store
            .get(user_id)
            .await
            .map_err(Self::storage_error)?;
        if let Some(profile) = existing {
            return Ok(profile);
        }

        let profile = GamificationProfile::new(user_id);
        self.store
            .create(&profile)
            .await
            .map_err(Self::storage_error)?;
        tracing::debug!(%user_id, "seeded new gamification profile");
        Ok(profile)
    }

    /// Record a streak-qualifying logging action for today.
    ///
    /// Logging twice on the same calendar day is a no-op after the first
    /// call: streak fields stay put and no bonus is awarded again.
    pub async fn record_daily_activity(
        &self,
        profile: &GamificationProfile,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;
        self.record_activity_on(profile, Utc::now().date_naive())
            .await
    }

    async fn record_activity_on(
        &self,
        profile: &GamificationProfile,
        today: NaiveDate,
    ) -> EngineResult<GamificationProfile> {
        let (new_streak, change) =
            streaks::advance(profile.streak_days, profile.last_log_date, today);

        if change == streaks::StreakChange::Unchanged {
            return Ok(profile.clone());
        }

        let mut next = profile.clone();
        next.streak_days = new_streak;
        next.longest_streak = next.longest_streak.max(new_streak);
        next.last_log_date = Some(today);

        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    streak_days: Some(next.streak_days),
                    longest_streak: Some(next.longest_streak),
                    last_log_date: Some(today),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();
        tracing::debug!(user_id = %profile.user_id, streak = new_streak, ?change, "streak advanced");

        if let streaks::StreakChange::Reset { previous } = change {
            self.notifier.notify(GamificationEvent::StreakReset {
                previous_streak: previous,
            });
        }

        let bonus = streaks::bonus(new_streak);
        if bonus > 0 {
            next = self.award_points(&next, bonus).await?;
        }
        if streaks::is_milestone(new_streak) {
            self.notifier.notify(GamificationEvent::StreakMilestone {
                streak_days: new_streak,
            });
        }

        // Consistency achievements unlock when the streak reaches their
        // target day count.
        for &threshold in streaks::CONSISTENCY_THRESHOLDS {
            if new_streak < threshold {
                continue;
            }
            let candidate = next
                .achievements
                .iter()
                .find(|a| {
                    a.category == AchievementCategory::Consistency
                        && a.target_value == threshold
                        && !a.is_completed
                })
                .map(|a| a.id.clone());
            if let Some(id) = candidate {
                next = self.complete_achievement(&next, &id).await?;
            }
        }

        Ok(next)
    }

    /// Add points to the profile and recompute the level.
    ///
    /// A level never rises without a corresponding point total: level is
    /// always derived from points, never stored as independent truth.
    pub async fn award_points(
        &self,
        profile: &GamificationProfile,
        amount: i32,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;
        if amount < 0 {
            return Err(EngineError::Validation(
                "award amount cannot be negative".to_string(),
            ));
        }

        let mut next = profile.clone();
        next.points = profile.points + amount;
        next.level = levels::level_for_points(next.points);

        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    points: Some(next.points),
                    level: Some(next.level),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();

        if next.level > profile.level {
            self.notifier.notify(GamificationEvent::LevelUp {
                new_level: next.level,
            });
        }

        Ok(next)
    }

    /// Complete an achievement outright.
    ///
    /// Unknown ids and already-completed achievements are silent no-ops, so
    /// redundant calls are always safe.
    pub async fn complete_achievement(
        &self,
        profile: &GamificationProfile,
        achievement_id: &str,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;

        let Some(idx) = profile
            .achievements
            .iter()
            .position(|a| a.id == achievement_id)
        else {
            return Ok(profile.clone());
        };
        if profile.achievements[idx].is_completed {
            return Ok(profile.clone());
        }

        let mut next = profile.clone();
        {
            let achievement = &mut next.achievements[idx];
            achievement.progress = achievement.target_value;
            achievement.is_completed = true;
            achievement.completed_at = Some(Utc::now());
        }

        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    achievements: Some(next.achievements.clone()),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();

        let unlocked = next.achievements[idx].clone();
        let reward = unlocked.points;
        self.notifier.notify(GamificationEvent::AchievementUnlocked {
            achievement: unlocked,
        });

        self.award_points(&next, reward).await
    }

    /// Advance an achievement's progress by `delta`.
    ///
    /// Reaching the target has the same side effects as
    /// [`complete_achievement`](Self::complete_achievement). Non-positive
    /// deltas are rejected: silently accepting them would allow progress to
    /// stall or regress unnoticed.
    pub async fn advance_achievement(
        &self,
        profile: &GamificationProfile,
        achievement_id: &str,
        delta: i32,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;
        if delta <= 0 {
            return Err(EngineError::Validation(
                "progress delta must be positive".to_string(),
            ));
        }

        let Some(idx) = profile
            .achievements
            .iter()
            .position(|a| a.id == achievement_id)
        else {
            return Ok(profile.clone());
        };
        let achievement = &profile.achievements[idx];
        if achievement.is_completed {
            return Ok(profile.clone());
        }

        let new_progress = (achievement.progress + delta).min(achievement.target_value);
        if new_progress == achievement.target_value {
            return self.complete_achievement(profile, achievement_id).await;
        }

        let mut next = profile.clone();
        next.achievements[idx].progress = new_progress;
        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    achievements: Some(next.achievements.clone()),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();

        Ok(next)
    }

    /// Join a challenge from the catalog.
    ///
    /// Joining a challenge that is already active or already completed is a
    /// silent no-op; a completed challenge never returns to the active set.
    pub async fn join_challenge(
        &self,
        profile: &GamificationProfile,
        template: &ChallengeTemplate,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;
        template
            .validate()
            .map_err(|e| EngineError::Validation(e.to_string()))?;

        if profile.active_challenge(&template.id).is_some()
            || profile.completed_challenge(&template.id).is_some()
        {
            return Ok(profile.clone());
        }

        let mut next = profile.clone();
        next.active_challenges
            .push(Challenge::from_template(template, Utc::now().date_naive()));

        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    active_challenges: Some(next.active_challenges.clone()),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();
        tracing::debug!(user_id = %profile.user_id, challenge = %template.id, "challenge joined");

        Ok(next)
    }

    /// Advance an active challenge's progress by `delta`.
    ///
    /// On reaching the target the challenge moves from the active to the
    /// completed set in a single update covering both collections, then the
    /// reward is awarded.
    pub async fn advance_challenge(
        &self,
        profile: &GamificationProfile,
        challenge_id: &str,
        delta: i32,
    ) -> EngineResult<GamificationProfile> {
        self.authorize_owner(profile)?;
        if delta <= 0 {
            return Err(EngineError::Validation(
                "progress delta must be positive".to_string(),
            ));
        }

        if profile.completed_challenge(challenge_id).is_some() {
            return Ok(profile.clone());
        }
        let Some(idx) = profile
            .active_challenges
            .iter()
            .position(|c| c.id == challenge_id)
        else {
            return Ok(profile.clone());
        };

        let challenge = &profile.active_challenges[idx];
        let new_progress = (challenge.current_progress + delta).min(challenge.target_value);

        let mut next = profile.clone();
        if new_progress == challenge.target_value {
            let mut done = next.active_challenges.remove(idx);
            done.current_progress = new_progress;
            done.is_completed = true;
            done.completed_at = Some(Utc::now());
            let reward = done.points;
            next.completed_challenges.push(done);

            self.store
                .update(
                    profile.user_id,
                    ProfileUpdate {
                        active_challenges: Some(next.active_challenges.clone()),
                        completed_challenges: Some(next.completed_challenges.clone()),
                        ..Default::default()
                    },
                )
                .await
                .map_err(Self::storage_error)?;
            next.updated_at = Utc::now();
            tracing::debug!(user_id = %profile.user_id, challenge = %challenge_id, "challenge completed");

            return self.award_points(&next, reward).await;
        }

        next.active_challenges[idx].current_progress = new_progress;
        self.store
            .update(
                profile.user_id,
                ProfileUpdate {
                    active_challenges: Some(next.active_challenges.clone()),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::storage_error)?;
        next.updated_at = Utc::now();

        Ok(next)
    }

    fn authorize(&self) -> EngineResult<Uuid> {
        self.identity
            .current_user()
            .ok_or(EngineError::NotAuthenticated)
    }

    fn authorize_owner(&self, profile: &GamificationProfile) -> EngineResult<Uuid> {
        let user_id = self.authorize()?;
        if user_id != profile.user_id {
            return Err(EngineError::NotAuthenticated);
        }
        Ok(user_id)
    }

    fn storage_error(err: anyhow::Error) -> EngineError {
        tracing::error!(error = ?err, "profile store failure");
        EngineError::StorageUnavailable(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Anonymous, FixedIdentity};
    use crate::notify::NullNotifier;
    use crate::store::InMemoryProfileStore;

    #[tokio::test]
    async fn anonymous_cannot_load_profile() {
        let engine = GamificationEngine::new(InMemoryProfileStore::new(), NullNotifier, Anonymous);
        let result = engine.load_profile().await;
        assert!(matches!(result, Err(EngineError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn operations_reject_foreign_profile() {
        let engine = GamificationEngine::new(
            InMemoryProfileStore::new(),
            NullNotifier,
            FixedIdentity::new(Uuid::new_v4()),
        );
        let other = GamificationProfile::new(Uuid::new_v4());
        let result = engine.award_points(&other, 10).await;
        assert!(matches!(result, Err(EngineError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn negative_award_is_rejected() {
        let user_id = Uuid::new_v4();
        let engine = GamificationEngine::new(
            InMemoryProfileStore::new(),
            NullNotifier,
            FixedIdentity::new(user_id),
        );
        let profile = engine.load_profile().await.unwrap();
        let result = engine.award_points(&profile, -1).await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[tokio::test]
    async fn streak_reset_after_gap() {
        let user_id = Uuid::new_v4();
        let engine = GamificationEngine::new(
            InMemoryProfileStore::new(),
            NullNotifier,
            FixedIdentity::new(user_id),
        );
        let mut profile = engine.load_profile().await.unwrap();
        profile.streak_days = 14;
        profile.longest_streak = 14;
        profile.last_log_date = Some(Utc::now().date_naive() - chrono::Duration::days(3));

        let today = Utc::now().date_naive();
        let next = engine.record_activity_on(&profile, today).await.unwrap();
        assert_eq!(next.streak_days, 1);
        assert_eq!(next.longest_streak, 14);
        assert_eq!(next.last_log_date, Some(today));
        // no bonus on the first day of a fresh streak
        assert_eq!(next.points, profile.points);
    }
}
