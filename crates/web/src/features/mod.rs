use axum::Router;

use crate::state::AppState;

pub mod athletes;
pub mod categories;
pub mod rankings;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/athletes", athletes::routes::routes())
        .nest("/categories", categories::routes::routes())
        .nest("/rankings", rankings::routes::routes())
}
