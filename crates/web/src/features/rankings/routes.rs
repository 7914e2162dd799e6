use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_category_ranking, get_session_ranking, get_team_ranking};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session_ranking))
        .route("/categories", get(get_category_ranking))
        .route("/teams", get(get_team_ranking))
}
