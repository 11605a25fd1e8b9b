use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_SENDER: &str = "Resultado da Mega <megasena@filipemoreno.com.br>";

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected message: status {0}")]
    Rejected(u16),
}

/// Outbound e-mail channel. The decider only ever sees this seam, so tests
/// swap in an in-memory sink.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), SinkError>;
}

/// Sink backed by the Resend HTTP API.
pub struct ResendSink {
    http: reqwest::Client,
    api_key: String,
    sender: String,
}

impl ResendSink {
    pub fn new(api_key: String, sender: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            sender,
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var("RESEND_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("RESEND_API_KEY not set; e-mail dispatch will fail");
            String::new()
        });
        let sender =
            std::env::var("RESEND_SENDER").unwrap_or_else(|_| DEFAULT_SENDER.to_string());
        Self::new(api_key, sender)
    }
}

#[async_trait]
impl NotificationSink for ResendSink {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), SinkError> {
        let response = self
            .http
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.sender,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
