// Status model mirroring the status/json document (mr-status JSON format).
// Wire names are snake_case; the few that are not valid identifiers are renamed per field.

mod client;
mod cluster;
mod layers;
mod machine;
mod metrics;
mod process;
mod workload;

use serde::{Deserialize, Serialize};

pub use client::{
    ClientStatus, ClusterFileStatus, CoordinatorStatus, CoordinatorsStatus, DatabaseStatus,
};
pub use cluster::{
    AutoThrottledTags, BounceImpact, ClientsStatus, ClusterStatus, ConfigurationStatus,
    DataStatus, DatabaseLockState, ExcludedServer, FaultTolerance, LatencyProbe,
    LogGenerationStatus, LogInterface, ManualThrottledTags, MovingData, PageCache,
    PerformanceLimitedBy, QosStatus, RecoveryState, SupportedClientVersion, TeamTracker,
    ThrottledTags,
};
pub use layers::{
    BackupInstance, BackupLayer, BackupTagStatus, BlobRecentIo, BlobStats, BlobTotalIo,
    LayersStatus,
};
pub use machine::{MachineCpu, MachineMemory, MachineNetwork, MachineStatus};
pub use metrics::{
    ClientAddress, DataState, DiskRate, Frequency, LatencyStatistics, Lag, Locality, RateCounter,
};
pub use process::{
    GrvLatencyStatistics, LOG_ROLE, ProcessCpu, ProcessDisk, ProcessMemory, ProcessNetwork,
    ProcessStatus, RoleKind, RoleStatus, STORAGE_ROLE, StorageMetadata,
};
pub use workload::{
    WorkloadBytes, WorkloadKeys, WorkloadOperations, WorkloadStatus, WorkloadTransactions,
};

/// Point-in-time cluster status, as of `read_version`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    /// Version the status was read at. Supplied by the reader, not by the document.
    #[serde(skip_deserializing)]
    pub read_version: i64,
    pub client: ClientStatus,
    pub cluster: ClusterStatus,
}
