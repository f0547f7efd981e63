//! Persistence collaborator for gamification profiles
//!
//! The engine only ever issues three calls: fetch a profile, create one, or
//! apply a partial update. A partial update writes exactly the fields the
//! engine changed and must leave every other persisted field untouched.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{GamificationProfile, ProfileUpdate};

pub use memory::InMemoryProfileStore;
pub use postgres::PostgresProfileStore;

/// Storage contract for gamification profiles.
///
/// Implementations report failures through `anyhow::Error`; the engine wraps
/// them as `EngineError::StorageUnavailable` and leaves the caller's
/// in-memory profile untouched.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a user, if one exists.
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GamificationProfile>>;

    /// Persist a freshly created profile.
    async fn create(&self, profile: &GamificationProfile) -> anyhow::Result<()>;

    /// Apply a partial update to an existing profile. Fields left as `None`
    /// must be preserved as stored.
    async fn update(&self, user_id: Uuid, update: ProfileUpdate) -> anyhow::Result<()>;
}

#[async_trait]
impl<T> ProfileStore for std::sync::Arc<T>
where
    T: ProfileStore + ?Sized,
{
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GamificationProfile>> {
        (**self).get(user_id).await
    }

    async fn create(&self, profile: &GamificationProfile) -> anyhow::Result<()> {
        (**self).create(profile).await
    }

    async fn update(&self, user_id: Uuid, update: ProfileUpdate) -> anyhow::Result<()> {
        (**self).update(user_id, update).await
    }
}
