//! Notification decider: one pass over the saved bets with a notification
//! e-mail, at most one dispatch per (recipient, drawing).
//!
//! Delivery is best-effort single pass. The sent-log append happens only
//! after the sink reports success; if the process dies between the send and
//! the append, the next run may re-notify that one recipient. The unique key
//! on (email, concurso) in the log is the actual dedup guard.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::lottery::evaluator::match_count;
use crate::models::bet::{BetCombination, SavedBet};
use crate::models::draw::DrawResult;
use crate::models::notification::{NotificationAction, RunSummary, SentNotification};
use crate::notify::sink::NotificationSink;
use crate::notify::template;

/// Lookup and append over the sent-notification log.
#[async_trait]
pub trait SentStore: Send + Sync {
    async fn was_sent(&self, email: &str, drawing_id: i64) -> Result<bool, sqlx::Error>;
    async fn mark_sent(&self, email: &str, drawing_id: i64) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl SentStore for MySqlPool {
    async fn was_sent(&self, email: &str, drawing_id: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query_as::<_, SentNotification>(
            "SELECT * FROM megasena_email_enviado WHERE email = ? AND concurso = ?",
        )
        .bind(email)
        .bind(drawing_id)
        .fetch_optional(self)
        .await?;
        Ok(row.is_some())
    }

    async fn mark_sent(&self, email: &str, drawing_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO megasena_email_enviado (email, concurso, data_envio) VALUES (?, ?, NOW())",
        )
        .bind(email)
        .bind(drawing_id)
        .execute(self)
        .await?;
        Ok(())
    }
}

/// True when any combination matched every drawn number. Stops scanning at
/// the first winning combination.
pub fn has_winning_combination(draw: &DrawResult, combinations: &[BetCombination]) -> bool {
    let cardinality = draw.drawn_numbers.len();
    if cardinality == 0 {
        return false;
    }
    combinations
        .iter()
        .any(|c| match_count(&c.numbers, &draw.drawn_numbers) == cardinality)
}

pub fn subject_for(draw: &DrawResult, is_winner: bool) -> String {
    if is_winner {
        format!(
            "Parabéns! Você é o mais novo milionário - Mega-Sena #{}",
            draw.drawing_id
        )
    } else {
        format!(
            "Resultado Mega-Sena #{} - {}",
            draw.drawing_id, draw.draw_date
        )
    }
}

/// Builds the e-mail for one saved record, or `None` when the record has no
/// subscription.
pub fn decide(draw: &DrawResult, record: &SavedBet) -> Option<NotificationAction> {
    let email = record.notificar_email.as_deref()?;
    let combinations = record.combinations();
    let is_winner = has_winning_combination(draw, &combinations);
    Some(NotificationAction {
        recipient: email.to_string(),
        subject: subject_for(draw, is_winner),
        html: template::render(draw, &combinations),
        is_winner,
    })
}

/// Runs the decider over every saved record. A failure on one recipient is
/// logged and the loop moves on; nothing here aborts the batch.
pub async fn run(
    draw: &DrawResult,
    records: &[SavedBet],
    store: &dyn SentStore,
    sink: &dyn NotificationSink,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for record in records {
        let Some(action) = decide(draw, record) else {
            continue;
        };

        match store.was_sent(&action.recipient, draw.drawing_id).await {
            Ok(true) => {
                tracing::info!(
                    "e-mail already sent to {} for drawing {}, skipping",
                    action.recipient,
                    draw.drawing_id
                );
                summary.skipped += 1;
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(
                    "failed to check sent log for {}: {}",
                    action.recipient,
                    e
                );
                summary.failed += 1;
                continue;
            }
        }

        if let Err(e) = sink.send(&action.recipient, &action.subject, &action.html).await {
            tracing::error!("failed to send result e-mail to {}: {}", action.recipient, e);
            summary.failed += 1;
            continue;
        }

        // Append after the send succeeded; a failure here only risks a
        // duplicate on the next run, never a lost notification.
        if let Err(e) = store.mark_sent(&action.recipient, draw.drawing_id).await {
            tracing::error!(
                "sent e-mail to {} but failed to record it: {}",
                action.recipient,
                e
            );
        }
        summary.sent += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::sink::SinkError;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn draw() -> DrawResult {
        DrawResult {
            drawing_id: 2700,
            draw_date: "01/02/2025".to_string(),
            drawn_numbers: strings(&["04", "08", "15", "16", "23", "42"]),
            ..Default::default()
        }
    }

    fn record(id: i32, email: Option<&str>, combos: &[&[&str]]) -> SavedBet {
        let apostas: Vec<BetCombination> = combos
            .iter()
            .map(|numbers| BetCombination {
                label: String::new(),
                numbers: strings(numbers),
            })
            .collect();
        SavedBet {
            id,
            nome: format!("Aposta {id}"),
            apostas: serde_json::to_string(&apostas).unwrap(),
            notificar_email: email.map(|e| e.to_string()),
            created_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct MemorySentStore {
        sent: Mutex<HashSet<(String, i64)>>,
    }

    impl MemorySentStore {
        fn with(email: &str, drawing_id: i64) -> Self {
            let store = Self::default();
            store
                .sent
                .lock()
                .unwrap()
                .insert((email.to_string(), drawing_id));
            store
        }
    }

    #[async_trait]
    impl SentStore for MemorySentStore {
        async fn was_sent(&self, email: &str, drawing_id: i64) -> Result<bool, sqlx::Error> {
            Ok(self
                .sent
                .lock()
                .unwrap()
                .contains(&(email.to_string(), drawing_id)))
        }

        async fn mark_sent(&self, email: &str, drawing_id: i64) -> Result<(), sqlx::Error> {
            self.sent
                .lock()
                .unwrap()
                .insert((email.to_string(), drawing_id));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<(String, String)>>,
        fail_for: Option<String>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), SinkError> {
            if self.fail_for.as_deref() == Some(to) {
                return Err(SinkError::Rejected(500));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }

    #[test]
    fn winner_iff_some_combination_fully_matches() {
        let d = draw();
        let losing = record(1, Some("a@b.com"), &[&["01", "02", "03", "05", "06", "07"]]);
        let winning = record(
            2,
            Some("a@b.com"),
            &[
                &["01", "02", "03", "05", "06", "07"],
                &["04", "08", "15", "16", "23", "42"],
            ],
        );

        assert!(!decide(&d, &losing).unwrap().is_winner);
        assert!(decide(&d, &winning).unwrap().is_winner);
    }

    #[test]
    fn subject_variant_follows_winner_flag() {
        let d = draw();
        assert!(subject_for(&d, true).starts_with("Parabéns!"));
        assert_eq!(
            subject_for(&d, false),
            "Resultado Mega-Sena #2700 - 01/02/2025"
        );
    }

    #[test]
    fn records_without_email_produce_no_action() {
        assert!(decide(&draw(), &record(1, None, &[&["04", "08", "15", "16", "23", "42"]])).is_none());
    }

    #[tokio::test]
    async fn already_notified_recipients_are_skipped() {
        let d = draw();
        let records = vec![record(1, Some("a@b.com"), &[&["01", "02", "03", "05", "06", "07"]])];
        let store = MemorySentStore::with("a@b.com", 2700);
        let sink = RecordingSink::default();

        let summary = run(&d, &records, &store, &sink).await;

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.sent, 0);
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_runs_notify_each_pair_once() {
        let d = draw();
        let records = vec![record(1, Some("a@b.com"), &[&["01", "02", "03", "05", "06", "07"]])];
        let store = MemorySentStore::default();
        let sink = RecordingSink::default();

        let first = run(&d, &records, &store, &sink).await;
        let second = run(&d, &records, &store, &sink).await;

        assert_eq!(first.sent, 1);
        assert_eq!(second.sent, 0);
        assert_eq!(second.skipped, 1);
        assert_eq!(sink.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn one_failed_dispatch_does_not_stop_the_batch() {
        let d = draw();
        let records = vec![
            record(1, Some("fail@b.com"), &[&["01", "02", "03", "05", "06", "07"]]),
            record(2, Some("ok@b.com"), &[&["04", "08", "15", "16", "23", "42"]]),
        ];
        let store = MemorySentStore::default();
        let sink = RecordingSink {
            fail_for: Some("fail@b.com".to_string()),
            ..Default::default()
        };

        let summary = run(&d, &records, &store, &sink).await;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.sent, 1);

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "ok@b.com");
        assert!(sent[0].1.starts_with("Parabéns!"));

        // the failed recipient stays unmarked so a later run can retry it
        let log = store.sent.lock().unwrap();
        assert!(log.contains(&("ok@b.com".to_string(), 2700)));
        assert!(!log.contains(&("fail@b.com".to_string(), 2700)));
    }
}
