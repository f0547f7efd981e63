//! NutriQuest Gamification Engine
//!
//! This crate owns the gamification profile of a NutriQuest user (points,
//! level, streak, achievements, challenges) and the rules that mutate it in
//! response to logging events. Persistence, presentation, and identity are
//! injected collaborators; the engine itself has no HTTP or UI surface.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod models;
pub mod notify;
pub mod rules;
pub mod store;

// Re-export commonly used items
pub use engine::GamificationEngine;
pub use error::{EngineError, EngineResult};
pub use models::{
    Achievement, AchievementCategory, Challenge, ChallengeTemplate, GamificationProfile,
    ProfileUpdate,
};
pub use notify::{GamificationEvent, Notifier};
pub use store::ProfileStore;
