use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::dto::ranking::{RankingFilter, RankingResponse, TeamRankingResponse};
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    params(RankingFilter),
    responses(
        (status = 200, description = "Session ranking for the chosen criterion", body = RankingResponse)
    ),
    tag = "rankings"
)]
pub async fn get_session_ranking(
    State(state): State<AppState>,
    Query(filter): Query<RankingFilter>,
) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::session_ranking(&meet, &filter)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/categories",
    params(RankingFilter),
    responses(
        (status = 200, description = "Per-category ranking with team points", body = RankingResponse)
    ),
    tag = "rankings"
)]
pub async fn get_category_ranking(
    State(state): State<AppState>,
    Query(filter): Query<RankingFilter>,
) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::category_ranking(&meet, &filter)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/teams",
    params(RankingFilter),
    responses(
        (status = 200, description = "Team-grouped ranking and team totals", body = TeamRankingResponse)
    ),
    tag = "rankings"
)]
pub async fn get_team_ranking(
    State(state): State<AppState>,
    Query(filter): Query<RankingFilter>,
) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::team_ranking(&meet, &filter)).into_response())
}
