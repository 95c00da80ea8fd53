//! Scoring module - line score, levels and fall speed
//!
//! Scoring is flat: every cleared row is worth the same, with no bonus for
//! clearing several at once. Levels advance one at a time once the cumulative
//! row count reaches `level * 10`.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, MIN_DROP_MS, POINTS_PER_ROW, ROWS_PER_LEVEL};

/// Outcome of a progression update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progression {
    /// Cumulative rows cleared including this step
    pub total_cleared: u32,
    pub level: u32,
    /// Fall interval for `level`, in milliseconds
    pub drop_time_ms: u32,
}

impl Progression {
    pub fn leveled_up_from(&self, previous_level: u32) -> bool {
        self.level > previous_level
    }
}

/// Points for clearing `rows` rows in one step
pub fn line_clear_score(rows: u32) -> u32 {
    rows.saturating_mul(POINTS_PER_ROW)
}

/// Fall interval for a level, with the default 1000ms base
pub fn drop_interval_ms(level: u32) -> u32 {
    drop_interval_from(BASE_DROP_MS, level)
}

/// Fall interval for a level: `base` minus 100ms per level above 1, floored at 100ms
pub fn drop_interval_from(base_ms: u32, level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    base_ms.saturating_sub(reduction).max(MIN_DROP_MS)
}

/// Fold a step's cleared rows into the running totals.
///
/// Only meaningful when `rows_cleared > 0`; callers skip it otherwise.
/// At most one level is gained per call.
pub fn update_level_and_speed(total_cleared: u32, level: u32, rows_cleared: u32) -> Progression {
    update_level_and_speed_from(BASE_DROP_MS, total_cleared, level, rows_cleared)
}

/// [`update_level_and_speed`] with a configurable base interval
pub fn update_level_and_speed_from(
    base_ms: u32,
    total_cleared: u32,
    level: u32,
    rows_cleared: u32,
) -> Progression {
    let total_cleared = total_cleared.saturating_add(rows_cleared);
    let level = if total_cleared >= level.saturating_mul(ROWS_PER_LEVEL) {
        level + 1
    } else {
        level
    };

    Progression {
        total_cleared,
        level,
        drop_time_ms: drop_interval_from(base_ms, level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_are_flat() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 20);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(5), 600);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(25), 100); // Floor at 100
    }

    #[test]
    fn test_level_up_at_threshold() {
        let p = update_level_and_speed(8, 1, 2);
        assert_eq!(
            p,
            Progression {
                total_cleared: 10,
                level: 2,
                drop_time_ms: 900
            }
        );
        assert!(p.leveled_up_from(1));
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let p = update_level_and_speed(0, 5, 1);
        assert_eq!(p.total_cleared, 1);
        assert_eq!(p.level, 5);
        assert_eq!(p.drop_time_ms, 600);
        assert!(!p.leveled_up_from(5));
    }

    #[test]
    fn test_only_one_level_per_step() {
        let p = update_level_and_speed(9, 1, 40);
        assert_eq!(p.level, 2);
    }

    #[test]
    fn test_custom_base() {
        assert_eq!(drop_interval_from(500, 3), 300);
        assert_eq!(drop_interval_from(500, 9), 100);
        assert_eq!(update_level_and_speed_from(500, 9, 1, 1).drop_time_ms, 400);
    }
}
