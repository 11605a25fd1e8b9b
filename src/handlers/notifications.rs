use axum::{extract::State, response::Json};

use crate::errors::Result;
use crate::handlers::draws::load_latest;
use crate::models::bet::SavedBet;
use crate::models::notification::RunSummary;
use crate::notify::decider;
use crate::state::AppState;

/// Runs the notification decider for the latest drawing: every saved record
/// with a subscription e-mail gets the result at most once per drawing.
pub async fn run_notifications(State(state): State<AppState>) -> Result<Json<RunSummary>> {
    let draw = load_latest(&state).await?;

    let records = sqlx::query_as::<_, SavedBet>(
        "SELECT * FROM megasena_apostas WHERE notificar_email IS NOT NULL",
    )
    .fetch_all(&state.pool)
    .await?;

    if records.is_empty() {
        tracing::info!("no subscribed e-mails for drawing {}", draw.drawing_id);
        return Ok(Json(RunSummary::default()));
    }

    let summary = decider::run(&draw, &records, &state.pool, state.sink.as_ref()).await;
    tracing::info!(
        "notification run for drawing {}: {} sent, {} skipped, {} failed",
        draw.drawing_id,
        summary.sent,
        summary.skipped,
        summary.failed
    );

    Ok(Json(summary))
}
