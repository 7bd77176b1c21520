use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

use super::protocol::{HEADER_BIN_VERSIONING, HEADER_MASTER_KEY, LeaderboardDocument, ReadBinResponse};
use crate::config::StoreConfig;
use crate::leaderboard::types::ScoreEntry;

/// Upper bound on a single store request. The store has no SLA; without a
/// bound a stalled connection would hang the submission indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure of a single store operation.
///
/// Upstream status and body are carried for server-side logging; callers must
/// not echo them to clients.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store read returned status {status}")]
    ReadFailed { status: StatusCode, body: String },
    #[error("store write returned status {status}")]
    WriteFailed { status: StatusCode, body: String },
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the external document store.
///
/// One instance is shared across all requests; it holds the connection pool
/// and the store credentials. Each operation issues exactly one outbound
/// call: no retries, no caching.
#[derive(Clone)]
pub struct StoreClient {
    http_client: reqwest::Client,
    config: Arc<StoreConfig>,
}

impl StoreClient {
    pub fn new(config: Arc<StoreConfig>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the current leaderboard from the store.
    ///
    /// A document without a `leaders` field yields an empty board. Any
    /// non-success status is a `ReadFailed` with the upstream body attached
    /// for diagnostics.
    pub async fn fetch_leaderboard(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let response = self
            .http_client
            .get(self.config.read_url())
            .header(HEADER_MASTER_KEY, &self.config.master_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::ReadFailed { status, body });
        }

        let envelope: ReadBinResponse = response.json().await?;
        Ok(envelope.record.leaders)
    }

    /// Overwrites the stored leaderboard with `leaders`.
    ///
    /// Full replace, not a patch; versioning is disabled so the previous
    /// state is not retained. A failed write leaves the merged board
    /// discarded with nothing to roll back.
    pub async fn persist_leaderboard(&self, leaders: &[ScoreEntry]) -> Result<(), StoreError> {
        let document = LeaderboardDocument {
            leaders: leaders.to_vec(),
        };

        let response = self
            .http_client
            .put(self.config.write_url())
            .header(HEADER_MASTER_KEY, &self.config.master_key)
            .header(HEADER_BIN_VERSIONING, "false")
            .timeout(REQUEST_TIMEOUT)
            .json(&document)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::WriteFailed { status, body });
        }

        Ok(())
    }
}
