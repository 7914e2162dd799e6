use serde::Serialize;
use thiserror::Error;

use crate::models::Movement;

/// A progression-rule violation. Every variant carries the numeric context
/// the caller needs to re-prompt for a corrected value; the state that was
/// being mutated is left untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum RuleViolation {
    #[error("{movement} attempt {attempt}: declared {declared} kg, progression requires {required} kg")]
    DeclarationTooSmall {
        movement: Movement,
        attempt: u8,
        declared: i32,
        required: i32,
    },

    #[error("{movement} attempt {attempt}: change to {change} kg, progression requires {required} kg")]
    ChangeTooSmall {
        movement: Movement,
        attempt: u8,
        change: i32,
        required: i32,
    },

    #[error("{movement} attempt {attempt}: lifted {lifted} kg but {requested} kg was requested")]
    LiftValueNotWhatWasRequested {
        movement: Movement,
        attempt: u8,
        lifted: i32,
        requested: i32,
    },

    #[error("{movement} attempt {attempt}: lifted {lifted} kg, progression requires {required} kg")]
    LiftValueBelowProgression {
        movement: Movement,
        attempt: u8,
        lifted: i32,
        required: i32,
    },

    #[error("attempt number {attempt} is out of range (1..=3)")]
    InvalidAttemptNumber { attempt: u8 },
}

pub type Result<T> = std::result::Result<T, RuleViolation>;

impl RuleViolation {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DeclarationTooSmall { .. } => "DeclarationTooSmall",
            Self::ChangeTooSmall { .. } => "ChangeTooSmall",
            Self::LiftValueNotWhatWasRequested { .. } => "LiftValueNotWhatWasRequested",
            Self::LiftValueBelowProgression { .. } => "LiftValueBelowProgression",
            Self::InvalidAttemptNumber { .. } => "InvalidAttemptNumber",
        }
    }
}
