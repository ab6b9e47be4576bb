// Client-side view: cluster file, coordinators, database availability

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientStatus {
    pub cluster_file: ClusterFileStatus,
    pub coordinators: CoordinatorsStatus,
    pub database_status: DatabaseStatus,
    /// Diagnostic entries; shape varies by message and is kept as-is.
    pub messages: Vec<Value>,
    /// Unix seconds at which the client produced the document.
    pub timestamp: i64,
}

impl ClientStatus {
    /// Client timestamp as UTC, or `None` when absent or out of range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        if self.timestamp <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterFileStatus {
    pub path: String,
    pub up_to_date: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorsStatus {
    pub coordinators: Vec<CoordinatorStatus>,
    pub quorum_reachable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorStatus {
    pub address: String,
    pub protocol: String,
    pub reachable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseStatus {
    pub available: bool,
    pub healthy: bool,
}
