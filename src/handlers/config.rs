use axum::{extract::State, response::Json};

use crate::errors::Result;
use crate::models::config::DrawSchedule;
use crate::state::AppState;

pub async fn get_schedule(State(state): State<AppState>) -> Result<Json<DrawSchedule>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT data_sorteio FROM megasena_config WHERE id = 1")
            .fetch_optional(&state.pool)
            .await?;

    let schedule = row
        .and_then(|(blob,)| blob)
        .and_then(|blob| serde_json::from_str(&blob).ok())
        .unwrap_or_default();

    Ok(Json(schedule))
}

pub async fn update_schedule(
    State(state): State<AppState>,
    Json(payload): Json<DrawSchedule>,
) -> Result<Json<DrawSchedule>> {
    let blob = serde_json::to_string(&payload)?;

    let result = sqlx::query("UPDATE megasena_config SET data_sorteio = ? WHERE id = 1")
        .bind(&blob)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        sqlx::query("INSERT INTO megasena_config (id, data_sorteio) VALUES (1, ?)")
            .bind(&blob)
            .execute(&state.pool)
            .await?;
    }

    tracing::info!("draw schedule updated");
    Ok(Json(payload))
}
