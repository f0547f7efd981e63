//! Postgres profile store
//!
//! One row per user. Nested collections (achievements, challenges) live in
//! JSONB columns; partial updates use COALESCE so unspecified fields keep
//! their stored values in a single atomic statement.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::ProfileStore;
use crate::config::DatabaseConfig;
use crate::models::{Achievement, Challenge, GamificationProfile, ProfileUpdate};

/// Profile row as stored
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    streak_days: i32,
    longest_streak: i32,
    last_log_date: Option<NaiveDate>,
    points: i32,
    level: i32,
    achievements: Json<Vec<Achievement>>,
    active_challenges: Json<Vec<Challenge>>,
    completed_challenges: Json<Vec<Challenge>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for GamificationProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            streak_days: row.streak_days,
            longest_streak: row.longest_streak,
            last_log_date: row.last_log_date,
            points: row.points,
            level: row.level,
            achievements: row.achievements.0,
            active_challenges: row.active_challenges.0,
            completed_challenges: row.completed_challenges.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Run the schema migrations for this store.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GamificationProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, streak_days, longest_streak, last_log_date,
                   points, level, achievements, active_challenges,
                   completed_challenges, created_at, updated_at
            FROM gamification_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GamificationProfile::from))
    }

    async fn create(&self, profile: &GamificationProfile) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO gamification_profiles (
                user_id, streak_days, longest_streak, last_log_date,
                points, level, achievements, active_challenges,
                completed_challenges, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(profile.user_id)
        .bind(profile.streak_days)
        .bind(profile.longest_streak)
        .bind(profile.last_log_date)
        .bind(profile.points)
        .bind(profile.level)
        .bind(Json(&profile.achievements))
        .bind(Json(&profile.active_challenges))
        .bind(Json(&profile.completed_challenges))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, user_id: Uuid, update: ProfileUpdate) -> anyhow::Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE gamification_profiles SET
                streak_days = COALESCE($2, streak_days),
                longest_streak = COALESCE($3, longest_streak),
                last_log_date = COALESCE($4, last_log_date),
                points = COALESCE($5, points),
                level = COALESCE($6, level),
                achievements = COALESCE($7, achievements),
                active_challenges = COALESCE($8, active_challenges),
                completed_challenges = COALESCE($9, completed_challenges),
                updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(update.streak_days)
        .bind(update.longest_streak)
        .bind(update.last_log_date)
        .bind(update.points)
        .bind(update.level)
        .bind(update.achievements.map(Json))
        .bind(update.active_challenges.map(Json))
        .bind(update.completed_challenges.map(Json))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            anyhow::bail!("no profile for {}", user_id);
        }

        Ok(())
    }
}
