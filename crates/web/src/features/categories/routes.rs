use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{list_categories, reload_categories};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/reload", post(reload_categories))
}
