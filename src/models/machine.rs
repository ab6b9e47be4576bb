// Per-host status aggregating the processes on one machine

use serde::{Deserialize, Serialize};

use super::{Frequency, Locality};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineStatus {
    /// Key of this entry in `cluster.machines`; filled from the map key when the document omits it.
    pub id: String,
    pub address: String,
    pub contributing_workers: i64,
    pub cpu: MachineCpu,
    pub excluded: bool,
    pub locality: Locality,
    pub machine_id: String,
    pub memory: MachineMemory,
    pub network: MachineNetwork,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineCpu {
    pub logical_core_utilization: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineMemory {
    pub committed_bytes: i64,
    pub free_bytes: i64,
    pub total_bytes: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineNetwork {
    pub megabits_received: Frequency,
    pub megabits_sent: Frequency,
    pub tcp_segments_retransmitted: Frequency,
}
