// Cluster status via the \xff\xff/status/json special key

use bytes::Bytes;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::config::TransactionConfig;
use crate::decoder;
use crate::error::{ReadError, StatusError};
use crate::models::StatusSnapshot;
use crate::store::{ReadOptions, Transactor};

/// Special key holding the status document (mr-status JSON format).
pub const STATUS_JSON_KEY: &[u8] = b"\xff\xff/status/json";

/// Status bytes together with the version they were read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatus {
    pub bytes: Bytes,
    pub read_version: i64,
}

pub struct StatusRepo<T> {
    store: T,
    timeout: Duration,
    retry_limit: Option<i32>,
}

impl<T: Transactor> StatusRepo<T> {
    pub fn new(store: T, config: &TransactionConfig) -> Self {
        Self {
            store,
            timeout: Duration::from_millis(config.timeout_ms),
            retry_limit: Some(config.retry_limit),
        }
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    /// Read the status document and the read version in one transaction.
    #[instrument(skip(self, cancel), fields(repo = "status", operation = "fetch_snapshot"))]
    pub async fn fetch_snapshot(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RawStatus, StatusError> {
        let opts = ReadOptions {
            timeout: Some(self.timeout),
            retry_limit: self.retry_limit,
        };
        let txn = self.store.read_with_version(STATUS_JSON_KEY, &opts);
        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReadError::Cancelled),
            r = tokio::time::timeout(self.timeout, txn) => {
                r.unwrap_or(Err(ReadError::TimedOut {
                    timeout_ms: self.timeout.as_millis() as u64,
                }))
            }
        };

        let read = read.map_err(|e| {
            warn!(error = %e, "status read failed");
            StatusError::Read(e)
        })?;
        let bytes = read.value.ok_or_else(|| {
            warn!(read_version = read.read_version, "status key missing");
            StatusError::Read(ReadError::MissingKey)
        })?;

        debug!(
            read_version = read.read_version,
            bytes = bytes.len(),
            "status read"
        );
        Ok(RawStatus {
            bytes,
            read_version: read.read_version,
        })
    }

    /// Fetch and decode in one call.
    pub async fn get_status(
        &self,
        cancel: &CancellationToken,
    ) -> Result<StatusSnapshot, StatusError> {
        let raw = self.fetch_snapshot(cancel).await?;
        decoder::decode(&raw.bytes, raw.read_version)
    }
}
