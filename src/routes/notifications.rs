use axum::{routing::get, Router};

use crate::handlers::notifications::run_notifications;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/run", get(run_notifications))
}
