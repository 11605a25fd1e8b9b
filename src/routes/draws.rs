use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::draws::{check_bets, get_by_number, get_latest};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/latest", get(get_latest))
        .route("/:numero", get(get_by_number))
        .route("/:numero/check", post(check_bets))
}
