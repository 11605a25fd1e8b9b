use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Malformed upstream payload: {0}")]
    MalformedUpstream(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sorteio não encontrado")]
    DrawNotFound,

    #[error("Apostas salvas não encontradas")]
    BetNotFound,

    #[error("Invalid bet data")]
    InvalidBetData,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::Upstream(_) | AppError::UpstreamStatus(_) => {
                (StatusCode::BAD_GATEWAY, "Lottery service unavailable")
            }
            AppError::MalformedUpstream(_) => (StatusCode::BAD_GATEWAY, "Malformed lottery data"),
            AppError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error")
            }
            AppError::DrawNotFound => (StatusCode::NOT_FOUND, "Drawing not found"),
            AppError::BetNotFound => (StatusCode::NOT_FOUND, "Saved bets not found"),
            AppError::InvalidBetData => (StatusCode::BAD_REQUEST, "Invalid bet data"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
