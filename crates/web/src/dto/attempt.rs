use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use engine::models::AttemptRecord;
use engine::services::rules::QualifyingGapWarning;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttemptField {
    Declaration,
    Change1,
    Change2,
    ActualLift,
}

/// One field entry on one attempt. The value is the raw text from the
/// marshal's keyboard: blank clears the field, `0` withdraws the attempt, a
/// signed integer is a weight in kilograms (negative = missed lift).
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttemptEntryRequest {
    pub field: AttemptField,
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptEntryResponse {
    pub athlete_id: Uuid,
    pub attempts: AttemptRecord,
    /// Present when the entry leaves the projected total too far below the
    /// qualifying total; the entry itself has been accepted.
    pub warning: Option<QualifyingGapWarning>,
}
