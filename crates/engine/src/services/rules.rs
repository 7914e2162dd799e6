//! Progression rules for weight declarations, changes and lift results.
//!
//! Every setter validates against the current state of the same slot plus the
//! automatic progression carried over from the previous attempt of the same
//! movement, and mutates nothing when it rejects. The qualifying-gap check is
//! the one rule that warns instead of rejecting.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{Result, RuleViolation};
use crate::models::{Athlete, AttemptRecord, LiftSlot, Movement, Rulebook};

use super::scoring;

/// Minimum legal weight for an attempt: one more than a successful previous
/// attempt, the same weight after a miss. The first attempt of a movement is
/// unconstrained.
pub fn automatic_progression(
    record: &AttemptRecord,
    movement: Movement,
    attempt: u8,
) -> Result<Option<i32>> {
    record.slot(movement, attempt)?;
    if attempt == 1 {
        return Ok(None);
    }
    let previous = record.slot(movement, attempt - 1)?;
    Ok(previous
        .actual_lift
        .map(|lift| if lift > 0 { lift + 1 } else { lift.abs() }))
}

pub fn set_declaration(
    record: &mut AttemptRecord,
    movement: Movement,
    attempt: u8,
    value: Option<i32>,
) -> Result<()> {
    let required = automatic_progression(record, movement, attempt)?;
    if value == Some(0) {
        let slot = record.slot_mut(movement, attempt)?;
        slot.declaration = Some(0);
        mark_withdrawn(slot);
        return Ok(());
    }
    if let (Some(declared), Some(required)) = (value, required)
        && declared < required
    {
        return Err(RuleViolation::DeclarationTooSmall {
            movement,
            attempt,
            declared,
            required,
        });
    }
    record.slot_mut(movement, attempt)?.declaration = value;
    Ok(())
}

pub fn set_change1(
    record: &mut AttemptRecord,
    movement: Movement,
    attempt: u8,
    value: Option<i32>,
) -> Result<()> {
    let required = automatic_progression(record, movement, attempt)?;
    if value == Some(0) {
        let slot = record.slot_mut(movement, attempt)?;
        slot.change1 = Some(0);
        mark_withdrawn(slot);
        return Ok(());
    }
    if let Some(change) = value {
        validate_change(movement, attempt, change, required)?;
    }
    record.slot_mut(movement, attempt)?.change1 = value;
    Ok(())
}

pub fn set_change2(
    record: &mut AttemptRecord,
    movement: Movement,
    attempt: u8,
    value: Option<i32>,
) -> Result<()> {
    let required = automatic_progression(record, movement, attempt)?;
    if value == Some(0) {
        let slot = record.slot_mut(movement, attempt)?;
        slot.change2 = Some(0);
        mark_withdrawn(slot);
        return Ok(());
    }
    if let Some(change) = value {
        validate_change(movement, attempt, change, required)?;
    }
    record.slot_mut(movement, attempt)?.change2 = value;
    Ok(())
}

/// Records a lift result. A positive value is a good lift, a negative one a
/// miss at that magnitude, `0` withdraws the attempt and `None` clears the
/// field (blank re-entry is always accepted).
pub fn set_actual_lift(
    record: &mut AttemptRecord,
    movement: Movement,
    attempt: u8,
    value: Option<i32>,
    now: NaiveDateTime,
) -> Result<()> {
    let required = automatic_progression(record, movement, attempt)?;
    match value {
        None => {
            let slot = record.slot_mut(movement, attempt)?;
            slot.actual_lift = None;
            slot.lift_time = None;
            Ok(())
        }
        Some(0) => {
            mark_withdrawn(record.slot_mut(movement, attempt)?);
            Ok(())
        }
        Some(lifted) => {
            match record.slot(movement, attempt)?.declared_changes() {
                // Freeform entry: results keyed in without a declaration
                // chain (e.g. reloading a finished session) only have to
                // respect the progression.
                None => {
                    if let Some(required) = required
                        && lifted.abs() < required
                    {
                        return Err(RuleViolation::LiftValueBelowProgression {
                            movement,
                            attempt,
                            lifted,
                            required,
                        });
                    }
                }
                Some(requested) => {
                    if let Some(required) = required
                        && requested < required
                    {
                        return Err(RuleViolation::ChangeTooSmall {
                            movement,
                            attempt,
                            change: requested,
                            required,
                        });
                    }
                    if lifted.abs() != requested {
                        return Err(RuleViolation::LiftValueNotWhatWasRequested {
                            movement,
                            attempt,
                            lifted,
                            requested,
                        });
                    }
                }
            }
            let slot = record.slot_mut(movement, attempt)?;
            slot.actual_lift = Some(lifted);
            slot.lift_time = Some(now);
            Ok(())
        }
    }
}

fn mark_withdrawn(slot: &mut LiftSlot) {
    slot.actual_lift = Some(0);
    slot.lift_time = None;
}

// Snatch and clean & jerk changes are validated through separate arms: the
// two movements have carried different change restrictions in past rulebooks
// and are kept distinct rather than folded into one path.
fn validate_change(
    movement: Movement,
    attempt: u8,
    change: i32,
    required: Option<i32>,
) -> Result<()> {
    let Some(required) = required else {
        return Ok(());
    };
    match movement {
        Movement::Snatch => {
            if change < required {
                return Err(RuleViolation::ChangeTooSmall {
                    movement,
                    attempt,
                    change,
                    required,
                });
            }
        }
        Movement::CleanJerk => {
            if change < required {
                return Err(RuleViolation::ChangeTooSmall {
                    movement,
                    attempt,
                    change,
                    required,
                });
            }
        }
    }
    Ok(())
}

/// The weight this athlete will take for their next attempt of `movement`:
/// the pending slot's last declared value, or its automatic progression when
/// nothing is declared yet. `None` once the movement is finished.
pub fn next_requested_weight(record: &AttemptRecord, movement: Movement) -> Option<i32> {
    for attempt in 1..=3u8 {
        let slot = record.slot(movement, attempt).ok()?;
        if slot.is_resolved() {
            continue;
        }
        if let Some(requested) = slot.declared_changes() {
            return Some(requested);
        }
        return automatic_progression(record, movement, attempt)
            .ok()
            .flatten();
    }
    None
}

/// Emitted when an athlete's projected total falls too far below their
/// pre-registered qualifying total (20 kg for men, 15 kg for women by
/// default). Informational only; the mutation that triggered it stands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct QualifyingGapWarning {
    pub qualifying_total: i32,
    pub projected_total: i32,
    pub allowed_gap: i32,
}

pub fn qualifying_gap_warning(
    athlete: &Athlete,
    record: &AttemptRecord,
    rulebook: &Rulebook,
) -> Option<QualifyingGapWarning> {
    if !rulebook.qualifying_gap_enabled || athlete.qualifying_total <= 0 {
        return None;
    }

    // No projection until every movement contributes: both openers must be
    // declared before the check fires, so weigh-in entry can proceed one
    // movement at a time without spurious warnings.
    let snatch = projected_weight(record, Movement::Snatch)?;
    let clean_jerk = projected_weight(record, Movement::CleanJerk)?;

    let projected_total = snatch + clean_jerk;
    let allowed_gap = rulebook.gap_for(athlete.gender);
    if athlete.qualifying_total - projected_total <= allowed_gap {
        return None;
    }

    let warning = QualifyingGapWarning {
        qualifying_total: athlete.qualifying_total,
        projected_total,
        allowed_gap,
    };
    tracing::warn!(
        athlete = %athlete.full_name(),
        qualifying_total = warning.qualifying_total,
        projected_total = warning.projected_total,
        allowed_gap = warning.allowed_gap,
        "projected total too far below qualifying total"
    );
    Some(warning)
}

/// A movement's contribution to the projected total: the pending request
/// while attempts remain, the best lifted weight once the movement is over,
/// nothing at all while the movement is still undeclared.
fn projected_weight(record: &AttemptRecord, movement: Movement) -> Option<i32> {
    if let Some(requested) = next_requested_weight(record, movement) {
        return Some(requested);
    }
    record
        .slots(movement)
        .iter()
        .any(LiftSlot::is_resolved)
        .then(|| scoring::best_of(record.slots(movement)))
}
