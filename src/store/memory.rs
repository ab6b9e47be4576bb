// In-process multi-version store. Version and data are read under one lock.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::instrument;

use super::{ReadOptions, Transactor, VersionedRead};
use crate::error::ReadError;

#[derive(Debug, Default)]
struct MemoryState {
    version: i64,
    data: BTreeMap<Vec<u8>, Bytes>,
    unavailable: bool,
    latency: Duration,
}

/// Cloneable handle; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a single write; the committed version advances by one.
    pub fn set(&self, key: impl Into<Vec<u8>>, value: impl Into<Bytes>) -> Result<i64, ReadError> {
        let mut state = self.write()?;
        state.data.insert(key.into(), value.into());
        state.version += 1;
        Ok(state.version)
    }

    pub fn clear(&self, key: &[u8]) -> Result<i64, ReadError> {
        let mut state = self.write()?;
        state.data.remove(key);
        state.version += 1;
        Ok(state.version)
    }

    /// Advance the committed version without touching data (time passing on an idle cluster).
    pub fn advance_version(&self, by: i64) -> Result<i64, ReadError> {
        let mut state = self.write()?;
        state.version += by.max(0);
        Ok(state.version)
    }

    pub fn version(&self) -> Result<i64, ReadError> {
        Ok(self.read()?.version)
    }

    /// While unavailable every transaction fails with [`ReadError::Unavailable`].
    pub fn set_available(&self, available: bool) -> Result<(), ReadError> {
        self.write()?.unavailable = !available;
        Ok(())
    }

    /// Artificial delay before each transaction observes the store.
    pub fn set_latency(&self, latency: Duration) -> Result<(), ReadError> {
        self.write()?.latency = latency;
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, MemoryState>, ReadError> {
        self.state
            .read()
            .map_err(|e| ReadError::backend(format!("memory store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, MemoryState>, ReadError> {
        self.state
            .write()
            .map_err(|e| ReadError::backend(format!("memory store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl Transactor for MemoryStore {
    #[instrument(skip(self, key, opts), fields(store = "memory", key_len = key.len()))]
    async fn read_with_version(
        &self,
        key: &[u8],
        opts: &ReadOptions,
    ) -> Result<VersionedRead, ReadError> {
        let latency = self.read()?.latency;
        if !latency.is_zero() {
            match opts.timeout {
                Some(t) if t < latency => {
                    tokio::time::sleep(t).await;
                    return Err(ReadError::TimedOut {
                        timeout_ms: t.as_millis() as u64,
                    });
                }
                _ => tokio::time::sleep(latency).await,
            }
        }

        let state = self.read()?;
        if state.unavailable {
            return Err(ReadError::Unavailable);
        }
        Ok(VersionedRead {
            value: state.data.get(key).cloned(),
            read_version: state.version,
        })
    }
}
