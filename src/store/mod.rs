// Transactional store seam: one key plus the read version, from one transaction

mod memory;

#[cfg(feature = "fdb")]
mod fdb;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

use crate::error::ReadError;

pub use memory::MemoryStore;

#[cfg(feature = "fdb")]
pub use fdb::FdbStore;

/// Per-transaction options handed down to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Upper bound for the whole transaction, retries included.
    pub timeout: Option<Duration>,
    /// Retry limit for the client's own retry loop; `None` keeps the client default.
    pub retry_limit: Option<i32>,
}

/// Result of a versioned read: the value (if any) and the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedRead {
    pub value: Option<Bytes>,
    pub read_version: i64,
}

/// Read-only transactional access to a multi-version store.
///
/// Implementations must read the version and the key in the same transaction,
/// so that `value` is exactly the state as of `read_version`. Retrying
/// transient failures is the implementation's business; callers do not retry.
#[async_trait]
pub trait Transactor: Send + Sync {
    async fn read_with_version(
        &self,
        key: &[u8],
        opts: &ReadOptions,
    ) -> Result<VersionedRead, ReadError>;
}

#[async_trait]
impl<T: Transactor + ?Sized> Transactor for std::sync::Arc<T> {
    async fn read_with_version(
        &self,
        key: &[u8],
        opts: &ReadOptions,
    ) -> Result<VersionedRead, ReadError> {
        (**self).read_with_version(key, opts).await
    }
}
