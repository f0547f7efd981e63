//! Seed achievements and the challenge-template catalog
//!
//! Achievement IDs are stable kebab-case strings; they are the identity of
//! each entry within a profile and must never change across versions.

use crate::models::{Achievement, AchievementCategory, ChallengeTemplate};

pub const FIRST_LOG: &str = "first-log";
pub const STREAK_7: &str = "streak-7";
pub const STREAK_30: &str = "streak-30";
pub const MACRO_PERFECT: &str = "macro-perfect";
pub const BARCODE_10: &str = "barcode-10";
pub const PROFILE_COMPLETE: &str = "profile-complete";

/// The fixed achievement set created with every new profile.
///
/// This list is the canonical source of truth: entries are seeded once at
/// profile creation and only mutated in place afterwards.
pub fn seed_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            FIRST_LOG,
            "First Bite",
            "Log your first meal",
            AchievementCategory::Logging,
            1,
            50,
        ),
        Achievement::new(
            STREAK_7,
            "Week One",
            "Log food seven days in a row",
            AchievementCategory::Consistency,
            7,
            100,
        ),
        Achievement::new(
            STREAK_30,
            "Habit Formed",
            "Log food thirty days in a row",
            AchievementCategory::Consistency,
            30,
            250,
        ),
        Achievement::new(
            MACRO_PERFECT,
            "Macro Perfect",
            "Hit every macro target in a single day",
            AchievementCategory::Nutrition,
            1,
            75,
        ),
        Achievement::new(
            BARCODE_10,
            "Scanner",
            "Scan ten product barcodes",
            AchievementCategory::Logging,
            10,
            60,
        ),
        Achievement::new(
            PROFILE_COMPLETE,
            "All Set",
            "Complete your onboarding profile",
            AchievementCategory::Special,
            1,
            25,
        ),
    ]
}

/// Challenge templates available for joining.
pub fn available_challenges() -> Vec<ChallengeTemplate> {
    vec![
        ChallengeTemplate {
            id: "hydration-week".to_string(),
            title: "Hydration Week".to_string(),
            description: "Log water intake every day for a week".to_string(),
            target_value: 7,
            points: 150,
            duration_days: 7,
        },
        ChallengeTemplate {
            id: "veggie-five".to_string(),
            title: "Five-a-Day".to_string(),
            description: "Log five servings of vegetables in one day, five times".to_string(),
            target_value: 5,
            points: 120,
            duration_days: 14,
        },
        ChallengeTemplate {
            id: "protein-streak".to_string(),
            title: "Protein Streak".to_string(),
            description: "Hit your protein target ten days within the month".to_string(),
            target_value: 10,
            points: 200,
            duration_days: 30,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    #[test]
    fn seed_set_has_unique_ids() {
        let seeds = seed_achievements();
        let ids: HashSet<_> = seeds.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn seed_targets_and_rewards_are_positive() {
        for a in seed_achievements() {
            assert!(a.target_value > 0, "{} has non-positive target", a.id);
            assert!(a.points > 0, "{} has non-positive reward", a.id);
        }
    }

    #[test]
    fn streak_seeds_match_consistency_thresholds() {
        let seeds = seed_achievements();
        let streak_7 = seeds.iter().find(|a| a.id == STREAK_7).unwrap();
        let streak_30 = seeds.iter().find(|a| a.id == STREAK_30).unwrap();
        assert_eq!(streak_7.target_value, 7);
        assert_eq!(streak_30.target_value, 30);
        assert_eq!(streak_7.category, AchievementCategory::Consistency);
        assert_eq!(streak_30.category, AchievementCategory::Consistency);
    }

    #[test]
    fn catalog_templates_are_valid() {
        for t in available_challenges() {
            assert!(t.validate().is_ok(), "{} fails validation", t.id);
        }
    }
}
