//! Level progression
//!
//! Level is a pure function of lifetime points, recomputed on every award
//! and never stored as independent truth.

/// Ascending point thresholds; index `i` is the floor of level `i + 1`.
///
/// Points beyond the last threshold still map to the last level: the ladder
/// is intentionally closed at eleven tiers.
pub const LEVEL_THRESHOLDS: &[i32] = &[
    0, 100, 250, 450, 700, 1000, 1350, 1750, 2200, 2700, 3250,
];

/// Level for a lifetime point total.
///
/// Scans the threshold table from the top; the floor is level 1 even for a
/// total below the first threshold (which cannot happen for non-negative
/// points, since the first threshold is 0).
pub fn level_for_points(points: i32) -> i32 {
    for (i, threshold) in LEVEL_THRESHOLDS.iter().enumerate().rev() {
        if points >= *threshold {
            return (i + 1) as i32;
        }
    }
    1
}

/// Points still needed to reach the next level, or None at the top tier.
pub fn points_to_next_level(points: i32) -> Option<i32> {
    let level = level_for_points(points) as usize;
    LEVEL_THRESHOLDS.get(level).map(|next| next - points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_at_thresholds() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(249), 2);
        assert_eq!(level_for_points(250), 3);
        assert_eq!(level_for_points(1000), 6);
        assert_eq!(level_for_points(3250), 11);
    }

    #[test]
    fn level_caps_at_last_tier() {
        assert_eq!(level_for_points(3251), 11);
        assert_eq!(level_for_points(99999), 11);
        assert_eq!(level_for_points(i32::MAX), 11);
    }

    #[test]
    fn points_to_next() {
        assert_eq!(points_to_next_level(0), Some(100));
        assert_eq!(points_to_next_level(90), Some(10));
        assert_eq!(points_to_next_level(100), Some(150));
        assert_eq!(points_to_next_level(3250), None);
        assert_eq!(points_to_next_level(99999), None);
    }

    proptest! {
        #[test]
        fn level_is_monotonic(points in 0i32..10_000, bump in 0i32..1_000) {
            let before = level_for_points(points);
            let after = level_for_points(points + bump);
            prop_assert!(after >= before);
        }

        #[test]
        fn level_stays_in_range(points in 0i32..1_000_000) {
            let level = level_for_points(points);
            prop_assert!(level >= 1);
            prop_assert!(level <= LEVEL_THRESHOLDS.len() as i32);
        }

        #[test]
        fn level_matches_threshold_floor(points in 0i32..10_000) {
            let level = level_for_points(points) as usize;
            prop_assert!(points >= LEVEL_THRESHOLDS[level - 1]);
            if let Some(next) = LEVEL_THRESHOLDS.get(level) {
                prop_assert!(points < *next);
            }
        }
    }
}
