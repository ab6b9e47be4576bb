// Cluster-wide workload counters

use serde::{Deserialize, Serialize};

use super::RateCounter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadStatus {
    pub bytes: WorkloadBytes,
    pub keys: WorkloadKeys,
    pub operations: WorkloadOperations,
    pub transactions: WorkloadTransactions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadBytes {
    pub read: RateCounter,
    pub written: RateCounter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadKeys {
    pub read: RateCounter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadOperations {
    pub location_requests: RateCounter,
    pub low_priority_reads: RateCounter,
    pub memory_errors: RateCounter,
    pub read_requests: RateCounter,
    pub reads: RateCounter,
    pub writes: RateCounter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadTransactions {
    pub committed: RateCounter,
    pub conflicted: RateCounter,
    pub rejected_for_queued_too_long: RateCounter,
    pub started: RateCounter,
    pub started_batch_priority: RateCounter,
    pub started_default_priority: RateCounter,
    pub started_immediate_priority: RateCounter,
}
