//! HTTP client for the scoring service.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::upstream::UpstreamConfig;
use crate::domain::scoreboard::GameSnapshot;
use crate::error::AppError;

/// Result of one poll of the scoring service.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// 200 with a snapshot body.
    Snapshot(GameSnapshot),
    /// 404: the game is known to the URL only; no scores published yet.
    NotStarted,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("scoring service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("scoring service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Seam between the view cycle and the scoring service.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self, game_id: &str) -> Result<FetchOutcome, FetchError>;
}

pub struct HttpSnapshotSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSnapshotSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self, game_id: &str) -> Result<FetchOutcome, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("game_id", game_id)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(FetchOutcome::NotStarted),
            status if status.is_success() => {
                // Field-level absence is tolerated by the snapshot's serde
                // defaults; an unparseable body is a hard error for the tick.
                Ok(FetchOutcome::Snapshot(response.json().await?))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(FetchError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
