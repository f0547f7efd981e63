//! Data models for the gamification engine

pub mod achievement;
pub mod challenge;
pub mod profile;

pub use achievement::{Achievement, AchievementCategory};
pub use challenge::{Challenge, ChallengeTemplate};
pub use profile::{GamificationProfile, ProfileUpdate};
