use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::cache::DrawKey;
use crate::errors::Result;
use crate::lottery::evaluator::{evaluate, MatchResult};
use crate::models::bet::CheckRequest;
use crate::models::draw::DrawResult;
use crate::state::AppState;

/// Latest drawing. Always asks upstream so a fresh drawing is never missed;
/// on upstream failure the last cached value (if any) is served instead.
pub async fn get_latest(State(state): State<AppState>) -> Result<Json<DrawResult>> {
    let draw = load_latest(&state).await?;
    Ok(Json(draw))
}

pub async fn get_by_number(
    State(state): State<AppState>,
    Path(numero): Path<i64>,
) -> Result<Json<DrawResult>> {
    let draw = load_draw(&state, numero).await?;
    Ok(Json(draw))
}

/// Checks a set of combinations against one drawing.
pub async fn check_bets(
    State(state): State<AppState>,
    Path(numero): Path<i64>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<Vec<MatchResult>>> {
    let draw = load_draw(&state, numero).await?;
    let results = payload
        .apostas
        .iter()
        .map(|combination| evaluate(&draw, combination))
        .collect();
    Ok(Json(results))
}

pub async fn load_latest(state: &AppState) -> Result<DrawResult> {
    match state.lottery.latest().await {
        Ok(draw) => {
            state.cache.store(&draw, true);
            Ok(draw)
        }
        Err(err) => {
            if let Some(cached) = state.cache.get(&DrawKey::Latest) {
                tracing::warn!("upstream fetch failed, serving cached latest: {}", err);
                return Ok(cached);
            }
            Err(err)
        }
    }
}

// Drawings never change once published, so a cache hit skips the upstream
// call entirely.
async fn load_draw(state: &AppState, numero: i64) -> Result<DrawResult> {
    if let Some(cached) = state.cache.get(&DrawKey::Drawing(numero)) {
        return Ok(cached);
    }
    let draw = state.lottery.by_number(numero).await?;
    state.cache.store(&draw, false);
    Ok(draw)
}
