use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::bets::{create_bet, delete_bet, get_bet, list_bets};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bets))
        .route("/", post(create_bet))
        .route("/:id", get(get_bet))
        .route("/:id", delete(delete_bet))
}
