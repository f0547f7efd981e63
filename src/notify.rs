//! Presentation collaborator
//!
//! The engine emits fire-and-forget events for the UI layer (toasts, modals,
//! confetti). No return value is consumed and a notifier must never fail.

use serde::Serialize;

use crate::models::Achievement;

/// Events surfaced to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GamificationEvent {
    /// An achievement just completed; shown exactly once.
    AchievementUnlocked { achievement: Achievement },
    /// The streak reached a celebrated length (7, 30, 100, multiples of 10).
    StreakMilestone { streak_days: i32 },
    /// A gap of two or more days broke the streak.
    StreakReset { previous_streak: i32 },
    /// Points crossed a level threshold.
    LevelUp { new_level: i32 },
}

/// Presentation collaborator contract.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: GamificationEvent);
}

/// Notifier that logs events through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: GamificationEvent) {
        match &event {
            GamificationEvent::AchievementUnlocked { achievement } => {
                tracing::info!(id = %achievement.id, points = achievement.points, "achievement unlocked");
            }
            GamificationEvent::StreakMilestone { streak_days } => {
                tracing::info!(streak_days, "streak milestone");
            }
            GamificationEvent::StreakReset { previous_streak } => {
                tracing::info!(previous_streak, "streak reset");
            }
            GamificationEvent::LevelUp { new_level } => {
                tracing::info!(new_level, "level up");
            }
        }
    }
}

/// Notifier that drops every event.
#[derive(Debug, Default, Clone)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: GamificationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let json = serde_json::to_value(GamificationEvent::LevelUp { new_level: 3 }).unwrap();
        assert_eq!(json["type"], "level_up");
        assert_eq!(json["new_level"], 3);
    }
}
