use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `megasena_email_enviado` log. Append-only; the unique key on
/// (email, concurso) is what makes notification delivery at-most-once per
/// recipient and drawing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SentNotification {
    pub id: i64,
    pub email: String,
    pub concurso: i64,
    pub data_envio: DateTime<Utc>,
}

/// A fully rendered e-mail ready for dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationAction {
    pub recipient: String,
    pub subject: String,
    pub html: String,
    pub is_winner: bool,
}

/// Outcome of one notification run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub sent: u32,
    pub skipped: u32,
    pub failed: u32,
}
