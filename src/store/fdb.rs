// FoundationDB-backed store. Uses the client's own retry loop (Database::run).

use async_trait::async_trait;
use bytes::Bytes;
use foundationdb::options::TransactionOption;
use foundationdb::{Database, FdbBindingError};
use std::time::Duration;
use tracing::instrument;

use super::{ReadOptions, Transactor, VersionedRead};
use crate::error::ReadError;

/// `transaction_timed_out`, raised once `TransactionOption::Timeout` expires.
const TRANSACTION_TIMED_OUT: i32 = 1031;

pub struct FdbStore {
    db: Database,
}

impl FdbStore {
    /// Open the database described by `cluster_file`, or the client default when `None`.
    /// The FoundationDB network must already be booted.
    pub fn open(cluster_file: Option<&str>) -> Result<Self, ReadError> {
        let db = Database::new(cluster_file).map_err(ReadError::backend)?;
        Ok(Self { db })
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Transactor for FdbStore {
    #[instrument(skip(self, key, opts), fields(store = "fdb", key_len = key.len()))]
    async fn read_with_version(
        &self,
        key: &[u8],
        opts: &ReadOptions,
    ) -> Result<VersionedRead, ReadError> {
        let key = key.to_vec();
        let opts = *opts;
        self.db
            .run(|trx, _maybe_committed| {
                let key = key.clone();
                async move {
                    if let Some(timeout) = opts.timeout {
                        let ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
                        trx.set_option(TransactionOption::Timeout(ms))?;
                    }
                    if let Some(limit) = opts.retry_limit {
                        trx.set_option(TransactionOption::RetryLimit(limit))?;
                    }
                    let read_version = trx.get_read_version().await?;
                    let value = trx.get(&key, false).await?;
                    Ok(VersionedRead {
                        value: value.map(|v| Bytes::copy_from_slice(&v)),
                        read_version,
                    })
                }
            })
            .await
            .map_err(|e| read_error(e, opts.timeout))
    }
}

fn read_error(err: FdbBindingError, timeout: Option<Duration>) -> ReadError {
    match err.get_fdb_error().map(|e| e.code()) {
        Some(TRANSACTION_TIMED_OUT) => ReadError::TimedOut {
            timeout_ms: timeout.map_or(0, |t| t.as_millis() as u64),
        },
        _ => ReadError::backend(err),
    }
}
