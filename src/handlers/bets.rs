use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::errors::{AppError, Result};
use crate::models::bet::{CreateSavedBet, SavedBet, SavedBetResponse};
use crate::state::AppState;

const COMBINATION_SIZE: usize = 6;

pub async fn list_bets(State(state): State<AppState>) -> Result<Json<Vec<SavedBetResponse>>> {
    let bets = sqlx::query_as::<_, SavedBet>(
        "SELECT * FROM megasena_apostas ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(bets.into_iter().map(SavedBetResponse::from).collect()))
}

pub async fn create_bet(
    State(state): State<AppState>,
    Json(payload): Json<CreateSavedBet>,
) -> Result<Json<SavedBetResponse>> {
    if payload.apostas.is_empty()
        || payload
            .apostas
            .iter()
            .any(|c| c.numbers.len() != COMBINATION_SIZE)
    {
        return Err(AppError::InvalidBetData);
    }

    let nome = match payload.nome.filter(|n| !n.trim().is_empty()) {
        Some(nome) => nome,
        None => {
            // "Aposta N" when no name was given, numbered after the existing rows
            let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM megasena_apostas")
                .fetch_one(&state.pool)
                .await?;
            format!("Aposta {}", count + 1)
        }
    };

    let apostas = serde_json::to_string(&payload.apostas)?;

    let result = sqlx::query(
        "INSERT INTO megasena_apostas (nome, apostas, notificar_email) VALUES (?, ?, ?)",
    )
    .bind(&nome)
    .bind(&apostas)
    .bind(&payload.notificar_email)
    .execute(&state.pool)
    .await?;

    let bet = sqlx::query_as::<_, SavedBet>("SELECT * FROM megasena_apostas WHERE id = ?")
        .bind(result.last_insert_id())
        .fetch_one(&state.pool)
        .await?;

    tracing::info!("saved bets '{}' (id {})", bet.nome, bet.id);
    Ok(Json(bet.into()))
}

pub async fn get_bet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SavedBetResponse>> {
    let bet = sqlx::query_as::<_, SavedBet>("SELECT * FROM megasena_apostas WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::BetNotFound)?;

    Ok(Json(bet.into()))
}

pub async fn delete_bet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let result = sqlx::query("DELETE FROM megasena_apostas WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::BetNotFound);
    }

    tracing::info!("deleted saved bets id {}", id);
    Ok(StatusCode::NO_CONTENT)
}
