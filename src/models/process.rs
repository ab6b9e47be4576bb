// Per-process status and the roles a process holds

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DiskRate, Frequency, LatencyStatistics, Lag, Locality, RateCounter};

/// Role name reported by storage servers.
pub const STORAGE_ROLE: &str = "storage";
/// Role name reported by transaction logs.
pub const LOG_ROLE: &str = "log";

/// Role kinds with dedicated metric sets. Anything else is kept by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Storage,
    Log,
}

impl RoleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Storage => STORAGE_ROLE,
            RoleKind::Log => LOG_ROLE,
        }
    }

    /// Parse from the wire role name (e.g. "storage", "log").
    pub fn from_role(s: &str) -> Option<Self> {
        match s {
            STORAGE_ROLE => Some(RoleKind::Storage),
            LOG_ROLE => Some(RoleKind::Log),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStatus {
    pub address: String,
    pub class_source: String,
    pub class_type: String,
    pub command_line: String,
    pub cpu: ProcessCpu,
    pub degraded: bool,
    pub disk: ProcessDisk,
    pub excluded: bool,
    pub fault_domain: String,
    pub locality: Locality,
    pub machine_id: String,
    pub memory: ProcessMemory,
    pub messages: Vec<Value>,
    pub network: ProcessNetwork,
    pub roles: Vec<RoleStatus>,
    pub run_loop_busy: f64,
    pub under_maintenance: bool,
    pub uptime_seconds: f64,
    pub version: String,
}

impl ProcessStatus {
    pub fn has_role(&self, kind: RoleKind) -> bool {
        self.roles.iter().any(|r| r.kind() == Some(kind))
    }

    pub fn roles_of(&self, kind: RoleKind) -> impl Iterator<Item = &RoleStatus> {
        self.roles.iter().filter(move |r| r.kind() == Some(kind))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessCpu {
    pub usage_cores: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessDisk {
    pub busy: f64,
    pub free_bytes: i64,
    pub reads: DiskRate,
    pub total_bytes: i64,
    pub writes: DiskRate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessMemory {
    pub available_bytes: i64,
    pub limit_bytes: i64,
    pub rss_bytes: i64,
    pub unused_allocated_memory: i64,
    pub used_bytes: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessNetwork {
    pub connection_errors: Frequency,
    pub connections_closed: Frequency,
    pub connections_established: Frequency,
    pub current_connections: i64,
    pub megabits_received: Frequency,
    pub megabits_sent: Frequency,
    pub tls_policy_failures: Frequency,
}

/// One role held by a process. Fields are the union over role types;
/// a storage role leaves log-only fields at zero and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleStatus {
    pub id: String,
    pub role: String,

    // storage
    pub bytes_queried: RateCounter,
    pub data_lag: Lag,
    pub data_version: i64,
    pub durability_lag: Lag,
    pub durable_version: i64,
    pub fetched_versions: RateCounter,
    pub fetches_from_logs: RateCounter,
    pub finished_queries: RateCounter,
    pub keys_queried: RateCounter,
    pub local_rate: i64,
    pub low_priority_queries: RateCounter,
    pub mutation_bytes: RateCounter,
    pub mutations: RateCounter,
    pub query_queue_max: i64,
    pub read_latency_statistics: LatencyStatistics,
    pub storage_metadata: StorageMetadata,
    pub stored_bytes: i64,
    pub total_queries: RateCounter,

    // storage and log
    pub durable_bytes: RateCounter,
    pub input_bytes: RateCounter,
    pub kvstore_available_bytes: i64,
    pub kvstore_free_bytes: i64,
    pub kvstore_inline_keys: i64,
    pub kvstore_total_bytes: i64,
    pub kvstore_total_nodes: i64,
    pub kvstore_total_size: i64,
    pub kvstore_used_bytes: i64,

    // log
    pub queue_disk_available_bytes: i64,
    pub queue_disk_free_bytes: i64,
    pub queue_disk_total_bytes: i64,
    pub queue_disk_used_bytes: i64,

    // proxies
    pub commit_latency_statistics: LatencyStatistics,
    pub grv_latency_statistics: GrvLatencyStatistics,
}

impl RoleStatus {
    pub fn kind(&self) -> Option<RoleKind> {
        RoleKind::from_role(&self.role)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageMetadata {
    pub created_time_datetime: String,
    pub created_time_timestamp: f64,
}

/// GRV proxy latency, split by transaction priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrvLatencyStatistics {
    pub batch: LatencyStatistics,
    pub default: LatencyStatistics,
}
