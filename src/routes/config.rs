use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::config::{get_schedule, update_schedule};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_schedule))
        .route("/", put(update_schedule))
}
