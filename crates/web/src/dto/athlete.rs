use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use engine::models::{Athlete, AttemptRecord, Category, Gender};

/// Distinguishes an absent PATCH field (`None`, leave unchanged) from an
/// explicit `null` (`Some(None)`, clear the value).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub gender: Gender,
    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: i32,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub club: String,
    pub lot_number: i32,
    pub bodyweight: Option<Decimal>,
    #[serde(default)]
    pub qualifying_total: i32,
    #[serde(default)]
    pub team_member: bool,
    #[serde(default)]
    pub invited: bool,
    pub custom_score: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub club: Option<String>,
    pub lot_number: Option<i32>,
    /// Weigh-in entry; changing it re-resolves the athlete's category and
    /// an explicit `null` clears it again.
    #[serde(default, deserialize_with = "double_option")]
    pub bodyweight: Option<Option<Decimal>>,
    pub qualifying_total: Option<i32>,
    pub team_member: Option<bool>,
    pub invited: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub custom_score: Option<Option<f64>>,
}


#[derive(Debug, Serialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete: Athlete,
    /// Resolved from gender and bodyweight; absent until weigh-in.
    pub category: Option<Category>,
    pub attempts: AttemptRecord,
}
