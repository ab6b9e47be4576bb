// Cluster-wide self-reported state

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{
    ClientAddress, DataState, Lag, LayersStatus, MachineStatus, ProcessStatus, RoleKind,
    RoleStatus, WorkloadStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterStatus {
    pub active_primary_dc: String,
    pub active_tss_count: i64,
    pub bounce_impact: BounceImpact,
    pub clients: ClientsStatus,
    pub cluster_controller_timestamp: i64,
    pub configuration: ConfigurationStatus,
    pub connection_string: String,
    pub data: DataStatus,
    pub database_available: bool,
    pub database_lock_state: DatabaseLockState,
    pub datacenter_lag: Lag,
    pub degraded_processes: i64,
    pub fault_tolerance: FaultTolerance,
    pub full_replication: bool,
    pub generation: i64,
    pub incompatible_connections: Vec<Value>,
    pub latency_probe: LatencyProbe,
    pub layers: LayersStatus,
    /// Log generations, in the order the cluster reported them.
    pub logs: Vec<LogGenerationStatus>,
    pub machines: HashMap<String, MachineStatus>,
    pub messages: Vec<Value>,
    pub page_cache: PageCache,
    pub processes: HashMap<String, ProcessStatus>,
    /// Hex protocol identifier, e.g. "fdb00b071010000". Never numeric.
    pub protocol_version: String,
    pub qos: QosStatus,
    pub recovery_state: RecoveryState,
    pub workload: WorkloadStatus,
}

impl ClusterStatus {
    /// All roles of `kind` across processes, paired with the owning process id.
    pub fn roles_of(&self, kind: RoleKind) -> impl Iterator<Item = (&str, &RoleStatus)> {
        self.processes
            .iter()
            .flat_map(move |(id, p)| p.roles_of(kind).map(move |r| (id.as_str(), r)))
    }

    /// The log generation currently accepting commits, if reported.
    pub fn current_log_generation(&self) -> Option<&LogGenerationStatus> {
        self.logs.iter().find(|l| l.current)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceImpact {
    pub can_clean_bounce: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientsStatus {
    pub count: i64,
    pub supported_versions: Vec<SupportedClientVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedClientVersion {
    pub client_version: String,
    pub connected_clients: Vec<ClientAddress>,
    pub count: i64,
    pub max_protocol_clients: Vec<ClientAddress>,
    pub max_protocol_count: i64,
    pub protocol_version: String,
    pub source_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationStatus {
    pub backup_worker_enabled: i64,
    pub blob_granules_enabled: i64,
    pub coordinators_count: i64,
    pub excluded_servers: Vec<ExcludedServer>,
    pub log_spill: i64,
    pub perpetual_storage_wiggle: i64,
    pub perpetual_storage_wiggle_engine: String,
    pub perpetual_storage_wiggle_locality: String,
    pub redundancy_mode: String,
    pub storage_engine: String,
    pub storage_migration_type: String,
    pub tenant_mode: String,
    pub usable_regions: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludedServer {
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataStatus {
    pub average_partition_size_bytes: i64,
    pub least_operating_space_bytes_log_server: i64,
    pub least_operating_space_bytes_storage_server: i64,
    pub moving_data: MovingData,
    pub partitions_count: i64,
    pub state: DataState,
    pub system_kv_size_bytes: i64,
    pub team_trackers: Vec<TeamTracker>,
    pub total_disk_used_bytes: i64,
    pub total_kv_size_bytes: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingData {
    pub highest_priority: i64,
    pub in_flight_bytes: i64,
    pub in_queue_bytes: i64,
    pub total_written_bytes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamTracker {
    pub in_flight_bytes: i64,
    pub primary: bool,
    pub state: DataState,
    pub unhealthy_servers: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseLockState {
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultTolerance {
    pub max_zone_failures_without_losing_availability: i64,
    pub max_zone_failures_without_losing_data: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProbe {
    pub batch_priority_transaction_start_seconds: f64,
    pub commit_seconds: f64,
    pub immediate_priority_transaction_start_seconds: f64,
    pub read_seconds: f64,
    pub transaction_start_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogGenerationStatus {
    pub begin_version: i64,
    pub current: bool,
    pub epoch: i64,
    pub log_fault_tolerance: i64,
    pub log_interfaces: Vec<LogInterface>,
    pub log_replication_factor: i64,
    pub log_write_anti_quorum: i64,
    pub possibly_losing_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogInterface {
    pub address: String,
    pub healthy: bool,
    pub id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCache {
    pub log_hit_rate: f64,
    pub storage_hit_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QosStatus {
    pub batch_performance_limited_by: PerformanceLimitedBy,
    pub batch_released_transactions_per_second: f64,
    pub batch_transactions_per_second_limit: f64,
    pub limiting_data_lag_storage_server: Lag,
    pub limiting_durability_lag_storage_server: Lag,
    pub limiting_queue_bytes_storage_server: i64,
    pub performance_limited_by: PerformanceLimitedBy,
    pub released_transactions_per_second: f64,
    pub throttled_tags: ThrottledTags,
    pub transactions_per_second_limit: f64,
    pub worst_data_lag_storage_server: Lag,
    pub worst_durability_lag_storage_server: Lag,
    pub worst_queue_bytes_log_server: i64,
    pub worst_queue_bytes_storage_server: i64,
}

/// Reason the ratekeeper is currently limiting throughput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceLimitedBy {
    pub description: String,
    pub name: String,
    pub reason_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottledTags {
    pub auto: AutoThrottledTags,
    pub manual: ManualThrottledTags,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoThrottledTags {
    pub busy_read: i64,
    pub busy_write: i64,
    pub count: i64,
    pub recommended_only: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualThrottledTags {
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryState {
    pub active_generations: i64,
    pub description: String,
    pub name: String,
    pub seconds_since_last_recovered: f64,
}
