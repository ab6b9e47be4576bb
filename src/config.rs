use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub transaction: TransactionConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterConfig {
    /// Path to the fdb.cluster file; the client default is used when unset.
    pub cluster_file: Option<String>,
}

/// Passed to the client's retry loop; the status reader itself never retries.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// -1 means unlimited, as in the client.
    #[serde(default = "default_retry_limit")]
    pub retry_limit: i32,
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_retry_limit() -> i32 {
    3
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_limit: default_retry_limit(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.cluster.cluster_file {
            anyhow::ensure!(
                !path.trim().is_empty(),
                "cluster.cluster_file must be non-empty when set"
            );
        }
        anyhow::ensure!(
            self.transaction.timeout_ms > 0,
            "transaction.timeout_ms must be > 0, got {}",
            self.transaction.timeout_ms
        );
        anyhow::ensure!(
            self.transaction.timeout_ms <= i32::MAX as u64,
            "transaction.timeout_ms must be <= {}, got {}",
            i32::MAX,
            self.transaction.timeout_ms
        );
        anyhow::ensure!(
            self.transaction.retry_limit >= -1,
            "transaction.retry_limit must be >= -1, got {}",
            self.transaction.retry_limit
        );
        Ok(())
    }
}
