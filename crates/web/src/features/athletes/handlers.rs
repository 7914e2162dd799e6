use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;
use validator::Validate;

use engine::models::Movement;

use crate::dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::attempt::{AttemptEntryRequest, AttemptEntryResponse};
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete registered", body = AthleteResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    Json(request): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    request.validate()?;
    let mut meet = state.write().await;
    let response = services::create_athlete(&mut meet, request);
    tracing::info!(athlete = %response.athlete.full_name(), "athlete registered");
    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "All registered athletes, lot order", body = [AthleteResponse])
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(state): State<AppState>) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::list_athletes(&meet)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(("id" = Uuid, Path, description = "Athlete id")),
    responses(
        (status = 200, description = "Athlete with category and attempts", body = AthleteResponse),
        (status = 404, description = "Unknown athlete")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::get_athlete(&meet, id)?).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/athletes/{id}",
    params(("id" = Uuid, Path, description = "Athlete id")),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Updated athlete; category re-resolved on bodyweight change", body = AthleteResponse),
        (status = 404, description = "Unknown athlete")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    request.validate()?;
    let mut meet = state.write().await;
    Ok(Json(services::update_athlete(&mut meet, id, request)?).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}/attempts/{movement}/{attempt}",
    params(
        ("id" = Uuid, Path, description = "Athlete id"),
        ("movement" = String, Path, description = "snatch or clean_jerk"),
        ("attempt" = u8, Path, description = "Attempt number, 1..=3")
    ),
    request_body = AttemptEntryRequest,
    responses(
        (status = 200, description = "Entry accepted; may carry a qualifying-gap warning", body = AttemptEntryResponse),
        (status = 404, description = "Unknown athlete"),
        (status = 422, description = "Progression rule violated; state unchanged")
    ),
    tag = "athletes"
)]
pub async fn enter_attempt(
    State(state): State<AppState>,
    Path((id, movement, attempt)): Path<(Uuid, Movement, u8)>,
    Json(request): Json<AttemptEntryRequest>,
) -> Result<Response, WebError> {
    let mut meet = state.write().await;
    let response = services::enter_attempt(&mut meet, id, movement, attempt, request)?;
    Ok(Json(response).into_response())
}
