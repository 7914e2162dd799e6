use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, RuleViolation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Snatch,
    CleanJerk,
}

impl Movement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snatch => "snatch",
            Self::CleanJerk => "clean_jerk",
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attempt of one movement. Weights are signed whole kilograms encoded
/// the way the platform records them: positive = good lift, negative = failed
/// lift of that magnitude, `0` = the lifter is taking no further attempt,
/// `None` = not entered yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiftSlot {
    pub declaration: Option<i32>,
    pub change1: Option<i32>,
    pub change2: Option<i32>,
    pub actual_lift: Option<i32>,
    pub lift_time: Option<NaiveDateTime>,
}

impl LiftSlot {
    /// The weight currently requested for this attempt: the last non-zero
    /// entry of change2, change1, declaration, in that order.
    pub fn declared_changes(&self) -> Option<i32> {
        [self.change2, self.change1, self.declaration]
            .into_iter()
            .flatten()
            .find(|&v| v != 0)
    }

    pub fn is_resolved(&self) -> bool {
        self.actual_lift.is_some()
    }

    pub fn is_success(&self) -> bool {
        self.actual_lift.is_some_and(|v| v > 0)
    }

    /// Weight credited to the lifter for this attempt (0 unless good).
    pub fn good_weight(&self) -> i32 {
        self.actual_lift.filter(|&v| v > 0).unwrap_or(0)
    }
}

/// The six attempts of one athlete, three per movement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptRecord {
    pub snatch: [LiftSlot; 3],
    pub clean_jerk: [LiftSlot; 3],
}

impl AttemptRecord {
    pub fn slots(&self, movement: Movement) -> &[LiftSlot; 3] {
        match movement {
            Movement::Snatch => &self.snatch,
            Movement::CleanJerk => &self.clean_jerk,
        }
    }

    pub fn slots_mut(&mut self, movement: Movement) -> &mut [LiftSlot; 3] {
        match movement {
            Movement::Snatch => &mut self.snatch,
            Movement::CleanJerk => &mut self.clean_jerk,
        }
    }

    /// Attempt numbers are 1-based, as announced on the platform.
    pub fn slot(&self, movement: Movement, attempt: u8) -> Result<&LiftSlot> {
        match attempt {
            1..=3 => Ok(&self.slots(movement)[attempt as usize - 1]),
            _ => Err(RuleViolation::InvalidAttemptNumber { attempt }),
        }
    }

    pub fn slot_mut(&mut self, movement: Movement, attempt: u8) -> Result<&mut LiftSlot> {
        match attempt {
            1..=3 => Ok(&mut self.slots_mut(movement)[attempt as usize - 1]),
            _ => Err(RuleViolation::InvalidAttemptNumber { attempt }),
        }
    }

    pub fn attempts_done(&self) -> usize {
        self.snatch
            .iter()
            .chain(self.clean_jerk.iter())
            .filter(|s| s.is_resolved())
            .count()
    }

    pub fn movement_finished(&self, movement: Movement) -> bool {
        self.slots(movement).iter().all(|s| s.is_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_changes_prefers_latest_change() {
        let slot = LiftSlot {
            declaration: Some(100),
            change1: Some(103),
            change2: Some(105),
            ..Default::default()
        };
        assert_eq!(slot.declared_changes(), Some(105));
    }

    #[test]
    fn test_declared_changes_skips_zero_entries() {
        let slot = LiftSlot {
            declaration: Some(100),
            change1: Some(0),
            change2: None,
            ..Default::default()
        };
        assert_eq!(slot.declared_changes(), Some(100));
    }

    #[test]
    fn test_declared_changes_empty_slot() {
        assert_eq!(LiftSlot::default().declared_changes(), None);
    }

    #[test]
    fn test_good_weight_ignores_failed_lifts() {
        let failed = LiftSlot {
            actual_lift: Some(-120),
            ..Default::default()
        };
        assert_eq!(failed.good_weight(), 0);
        assert!(failed.is_resolved());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_slot_rejects_out_of_range_attempt() {
        let record = AttemptRecord::default();
        assert_eq!(
            record.slot(Movement::Snatch, 4),
            Err(RuleViolation::InvalidAttemptNumber { attempt: 4 })
        );
        assert_eq!(
            record.slot(Movement::Snatch, 0),
            Err(RuleViolation::InvalidAttemptNumber { attempt: 0 })
        );
    }
}
