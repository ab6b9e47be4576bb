// Recurring metric shapes shared across the status document

use serde::{Deserialize, Serialize};

/// Rate counter: a monotonically increasing counter with its smoothed rate.
/// Every `{counter, hz, roughness}` object in the document decodes into this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCounter {
    pub counter: i64,
    pub hz: f64,
    pub roughness: f64,
}

/// Rate-only metric (`{hz}`), used by network counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frequency {
    pub hz: f64,
}

/// Lag expressed both in wall-clock seconds and in versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lag {
    pub seconds: f64,
    pub versions: i64,
}

/// Disk operation counter with sector rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskRate {
    pub counter: i64,
    pub hz: f64,
    pub sectors: f64,
}

/// Latency distribution in seconds. `count` is the sample count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyStatistics {
    pub count: i64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub p25: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    #[serde(rename = "p99.9")]
    pub p99_9: f64,
}

/// Locality tags reported for a process or machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locality {
    pub data_hall: String,
    pub machineid: String,
    pub processid: String,
    pub zoneid: String,
}

/// Health state shared by the data distribution summary and team trackers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataState {
    pub healthy: bool,
    pub min_replicas_remaining: i64,
    pub name: String,
}

/// Address plus log group of a connected client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientAddress {
    pub address: String,
    pub log_group: String,
}
