use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Gender, Rulebook};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub club: String,
    pub lot_number: i32,
    /// Mutable until weigh-in closes; the category must be re-resolved
    /// whenever this changes.
    pub bodyweight: Option<Decimal>,
    /// Pre-registered entry total, 0 when none was submitted.
    pub qualifying_total: i32,
    pub team_member: bool,
    pub invited: bool,
    pub custom_score: Option<f64>,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Invited lifters compete outside the numeric ranking, either by an
    /// explicit flag or by being born before the invitation cutoff year.
    pub fn is_invited(&self, rulebook: &Rulebook) -> bool {
        self.invited
            || rulebook
                .invitation_birth_year
                .is_some_and(|cutoff| self.birth_year < cutoff)
    }

    pub fn age_in(&self, year: i32) -> i32 {
        year - self.birth_year
    }
}
