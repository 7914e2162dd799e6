use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use engine::models::Gender;
use engine::services::ranking::{RankedEntry, RankingCriterion, TeamScore};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RankingFilter {
    #[serde(default)]
    pub criterion: RankingCriterion,
    pub gender: Option<Gender>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankingResponse {
    pub criterion: RankingCriterion,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamRankingResponse {
    pub criterion: RankingCriterion,
    /// Ranked entries grouped so each team's lifters are adjacent.
    pub entries: Vec<RankedEntry>,
    pub teams: Vec<TeamScore>,
}
