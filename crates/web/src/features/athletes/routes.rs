use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::handlers::{create_athlete, enter_attempt, get_athlete, list_athletes, update_athlete};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/:id", get(get_athlete).patch(update_athlete))
        .route("/:id/attempts/:movement/:attempt", put(enter_attempt))
}
