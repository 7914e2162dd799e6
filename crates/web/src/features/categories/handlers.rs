use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::dto::category::{CategoryListResponse, ReloadCategoriesRequest};
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Active categories, sorted by gender and lower bound", body = CategoryListResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, WebError> {
    let meet = state.read().await;
    Ok(Json(services::list_categories(&meet)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories/reload",
    request_body = ReloadCategoriesRequest,
    responses(
        (status = 200, description = "Catalog snapshot replaced", body = CategoryListResponse)
    ),
    tag = "categories"
)]
pub async fn reload_categories(
    State(state): State<AppState>,
    Json(request): Json<ReloadCategoriesRequest>,
) -> Result<Response, WebError> {
    let mut meet = state.write().await;
    let response = services::reload_categories(&mut meet, request);
    tracing::info!(count = response.categories.len(), "category catalog reloaded");
    Ok(Json(response).into_response())
}
