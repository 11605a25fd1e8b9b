use reqwest::StatusCode;

use crate::errors::{AppError, Result};
use crate::models::draw::DrawResult;

const DEFAULT_API_URL: &str = "https://servicebus2.caixa.gov.br/portaldeloterias/api/megasena";

/// Client for the Caixa lottery portal API. Read-only: latest drawing or
/// drawing by number. Responses are trusted; a missing drawing surfaces as
/// `DrawNotFound` and anything undecodable as `MalformedUpstream`.
#[derive(Clone)]
pub struct CaixaClient {
    http: reqwest::Client,
    base_url: String,
}

impl CaixaClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LOTTERY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub async fn latest(&self) -> Result<DrawResult> {
        self.fetch(&self.base_url).await
    }

    pub async fn by_number(&self, numero: i64) -> Result<DrawResult> {
        self.fetch(&format!("{}/{}", self.base_url, numero)).await
    }

    async fn fetch(&self, url: &str) -> Result<DrawResult> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::DrawNotFound);
        }
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let draw: DrawResult = response
            .json()
            .await
            .map_err(|e| AppError::MalformedUpstream(e.to_string()))?;

        // The portal answers 200 with an empty body shape for unknown
        // drawings; no drawing number means no drawing.
        if draw.drawing_id == 0 {
            return Err(AppError::DrawNotFound);
        }

        Ok(draw)
    }
}
