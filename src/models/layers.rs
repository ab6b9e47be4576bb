// Layer status published by layers running against the cluster (backup agents)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayersStatus {
    #[serde(rename = "_valid")]
    pub valid: bool,
    pub backup: BackupLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupLayer {
    pub blob_recent_io: BlobRecentIo,
    /// Backup agents keyed by instance id.
    pub instances: HashMap<String, BackupInstance>,
    pub instances_running: i64,
    pub last_updated: f64,
    pub paused: bool,
    /// Backup tags keyed by tag name.
    pub tags: HashMap<String, BackupTagStatus>,
    pub total_workers: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobRecentIo {
    pub bytes_per_second: f64,
    pub bytes_sent: i64,
    pub requests_failed: i64,
    pub requests_successful: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobTotalIo {
    pub bytes_sent: i64,
    pub requests_failed: i64,
    pub requests_successful: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobStats {
    pub recent: BlobRecentIo,
    pub total: BlobTotalIo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupInstance {
    pub blob_stats: BlobStats,
    pub configured_workers: i64,
    pub id: String,
    pub last_updated: f64,
    pub main_thread_cpu_seconds: f64,
    pub memory_usage: i64,
    pub process_cpu_seconds: f64,
    pub resident_size: i64,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupTagStatus {
    pub current_container: String,
    pub current_status: String,
    pub last_restorable_seconds_behind: f64,
    pub last_restorable_version: i64,
    pub mutation_log_bytes_written: i64,
    pub mutation_stream_id: String,
    pub range_bytes_written: i64,
    pub running_backup: bool,
    pub running_backup_is_restorable: bool,
}
