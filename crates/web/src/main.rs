use std::sync::Arc;

use anyhow::Context;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod dto;
mod error;
mod features;
mod state;

use config::Config;
use state::Meet;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::enter_attempt,
        features::categories::handlers::list_categories,
        features::categories::handlers::reload_categories,
        features::rankings::handlers::get_session_ranking,
        features::rankings::handlers::get_category_ranking,
        features::rankings::handlers::get_team_ranking,
    ),
    components(
        schemas(
            dto::athlete::CreateAthleteRequest,
            dto::athlete::UpdateAthleteRequest,
            dto::athlete::AthleteResponse,
            dto::attempt::AttemptField,
            dto::attempt::AttemptEntryRequest,
            dto::attempt::AttemptEntryResponse,
            dto::category::ReloadCategoriesRequest,
            dto::category::CategoryListResponse,
            dto::ranking::RankingResponse,
            dto::ranking::TeamRankingResponse,
            engine::models::Athlete,
            engine::models::AttemptRecord,
            engine::models::Category,
            engine::models::Gender,
            engine::models::LiftSlot,
            engine::models::Movement,
            engine::models::Rulebook,
            engine::models::SinclairCoefficients,
            engine::services::ranking::RankedEntry,
            engine::services::ranking::RankingCriterion,
            engine::services::ranking::TeamScore,
            engine::services::rules::QualifyingGapWarning,
        )
    ),
    tags(
        (name = "athletes", description = "Registration, weigh-in and attempt entry"),
        (name = "categories", description = "Bodyweight category catalog"),
        (name = "rankings", description = "Session, category and team rankings"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting competition scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let state = Arc::new(RwLock::new(Meet::new()));
    tracing::info!("Meet state initialized with seed categories");

    let app = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
