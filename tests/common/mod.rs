// Shared test helpers and a representative status document
#![allow(dead_code)]

use fdbstatus::STATUS_JSON_KEY;
use fdbstatus::config::TransactionConfig;
use fdbstatus::status_repo::StatusRepo;
use fdbstatus::store::MemoryStore;

/// Trimmed status/json from a single-region, double-redundancy cluster, plus a
/// few fields no model covers (`future_field`, `experimental`) to exercise leniency.
pub const FULL_STATUS: &str = r#"{
  "client": {
    "cluster_file": { "path": "/etc/foundationdb/fdb.cluster", "up_to_date": true },
    "coordinators": {
      "coordinators": [
        { "address": "10.0.0.1:4500", "protocol": "0fdb00b071010000", "reachable": true },
        { "address": "10.0.0.2:4500", "protocol": "0fdb00b071010000", "reachable": false }
      ],
      "quorum_reachable": true
    },
    "database_status": { "available": true, "healthy": true },
    "messages": [],
    "timestamp": 1700000000
  },
  "cluster": {
    "active_primary_dc": "dc1",
    "active_tss_count": 0,
    "bounce_impact": { "can_clean_bounce": true },
    "clients": {
      "count": 3,
      "supported_versions": [
        {
          "client_version": "7.1.25",
          "connected_clients": [ { "address": "10.0.1.5:51234", "log_group": "default" } ],
          "count": 1,
          "max_protocol_clients": [ { "address": "10.0.1.5:51234", "log_group": "default" } ],
          "max_protocol_count": 1,
          "protocol_version": "fdb00b071010000",
          "source_version": "a8c7d51b0a8d9d3a1b2c"
        }
      ]
    },
    "cluster_controller_timestamp": 1700000001,
    "configuration": {
      "backup_worker_enabled": 0,
      "blob_granules_enabled": 0,
      "coordinators_count": 3,
      "excluded_servers": [ { "address": "10.0.0.9" } ],
      "log_spill": 2,
      "perpetual_storage_wiggle": 0,
      "perpetual_storage_wiggle_engine": "none",
      "perpetual_storage_wiggle_locality": "0",
      "redundancy_mode": "double",
      "storage_engine": "ssd-2",
      "storage_migration_type": "disabled",
      "tenant_mode": "disabled",
      "usable_regions": 1
    },
    "connection_string": "test:abc@10.0.0.1:4500,10.0.0.2:4500,10.0.0.3:4500",
    "data": {
      "average_partition_size_bytes": 125000000,
      "least_operating_space_bytes_log_server": 98765432100,
      "least_operating_space_bytes_storage_server": 87654321000,
      "moving_data": {
        "highest_priority": 0,
        "in_flight_bytes": 0,
        "in_queue_bytes": 0,
        "total_written_bytes": 9123456789
      },
      "partitions_count": 42,
      "state": { "healthy": true, "min_replicas_remaining": 2, "name": "healthy" },
      "system_kv_size_bytes": 1048576,
      "team_trackers": [
        {
          "in_flight_bytes": 0,
          "primary": true,
          "state": { "healthy": true, "min_replicas_remaining": 2, "name": "healthy" },
          "unhealthy_servers": 0
        }
      ],
      "total_disk_used_bytes": 51234567890,
      "total_kv_size_bytes": 23456789012
    },
    "database_available": true,
    "database_lock_state": { "locked": false },
    "datacenter_lag": { "seconds": 0, "versions": 0 },
    "degraded_processes": 0,
    "fault_tolerance": {
      "max_zone_failures_without_losing_availability": 1,
      "max_zone_failures_without_losing_data": 1
    },
    "full_replication": true,
    "generation": 17,
    "incompatible_connections": [ "10.0.9.9:4500" ],
    "latency_probe": {
      "batch_priority_transaction_start_seconds": 0.00123,
      "commit_seconds": 0.0045,
      "immediate_priority_transaction_start_seconds": 0.0004,
      "read_seconds": 0.0006,
      "transaction_start_seconds": 0.0008
    },
    "layers": {
      "_valid": true,
      "backup": {
        "blob_recent_io": {
          "bytes_per_second": 1024.5,
          "bytes_sent": 4096,
          "requests_failed": 1,
          "requests_successful": 99
        },
        "instances": {
          "agent-1": {
            "blob_stats": {
              "recent": { "bytes_per_second": 512.25, "bytes_sent": 2048, "requests_failed": 0, "requests_successful": 10 },
              "total": { "bytes_sent": 123456789, "requests_failed": 2, "requests_successful": 5000 }
            },
            "configured_workers": 10,
            "id": "agent-1",
            "last_updated": 1699999990.5,
            "main_thread_cpu_seconds": 12.75,
            "memory_usage": 104857600,
            "process_cpu_seconds": 20.5,
            "resident_size": 52428800,
            "version": "7.1.25"
          }
        },
        "instances_running": 1,
        "last_updated": 1699999990.5,
        "paused": false,
        "tags": {
          "default": {
            "current_container": "blobstore://backup/default",
            "current_status": "has been started",
            "last_restorable_seconds_behind": 4.5,
            "last_restorable_version": 123456000,
            "running_backup": true,
            "running_backup_is_restorable": true
          }
        },
        "total_workers": 10
      }
    },
    "logs": [
      {
        "begin_version": 100,
        "current": false,
        "epoch": 16,
        "log_fault_tolerance": 1,
        "log_interfaces": [ { "address": "10.0.0.4:4500", "healthy": false, "id": "old-log" } ],
        "log_replication_factor": 2,
        "log_write_anti_quorum": 0,
        "possibly_losing_data": false
      },
      {
        "begin_version": 5000,
        "current": true,
        "epoch": 17,
        "log_fault_tolerance": 1,
        "log_interfaces": [
          { "address": "10.0.0.1:4500", "healthy": true, "id": "a1b2c3" },
          { "address": "10.0.0.2:4500", "healthy": true, "id": "d4e5f6" }
        ],
        "log_replication_factor": 2,
        "log_write_anti_quorum": 0,
        "possibly_losing_data": false
      }
    ],
    "machines": {
      "m-1": {
        "address": "10.0.0.1",
        "contributing_workers": 2,
        "cpu": { "logical_core_utilization": 0.25 },
        "excluded": false,
        "locality": { "data_hall": "", "machineid": "m-1", "processid": "p-1", "zoneid": "z-1" },
        "machine_id": "m-1",
        "memory": { "committed_bytes": 8589934592, "free_bytes": 4294967296, "total_bytes": 17179869184 },
        "network": {
          "megabits_received": { "hz": 12.5 },
          "megabits_sent": { "hz": 10.25 },
          "tcp_segments_retransmitted": { "hz": 0.5 }
        },
        "experimental": { "whatever": [1, 2, 3] }
      }
    },
    "messages": [
      { "name": "unreachable_processes", "description": "Unreachable processes", "unreachable_processes": [ { "address": "10.0.0.7:4500" } ] }
    ],
    "page_cache": { "log_hit_rate": 1, "storage_hit_rate": 0.975 },
    "processes": {
      "p-1": {
        "address": "10.0.0.1:4500",
        "class_source": "command_line",
        "class_type": "storage",
        "command_line": "/usr/sbin/fdbserver --class=storage",
        "cpu": { "usage_cores": 0.35 },
        "disk": {
          "busy": 0.05,
          "free_bytes": 400000000000,
          "reads": { "counter": 12345, "hz": 10.5, "sectors": 80 },
          "total_bytes": 500000000000,
          "writes": { "counter": 67890, "hz": 20.25, "sectors": 160 }
        },
        "excluded": false,
        "fault_domain": "m-1",
        "locality": { "data_hall": "", "machineid": "m-1", "processid": "p-1", "zoneid": "z-1" },
        "machine_id": "m-1",
        "memory": {
          "available_bytes": 8000000000,
          "limit_bytes": 8589934592,
          "rss_bytes": 1500000000,
          "unused_allocated_memory": 65536,
          "used_bytes": 1400000000
        },
        "messages": [ { "name": "io_timeout", "type": "ERROR", "time": 1699999000.5 } ],
        "network": {
          "connection_errors": { "hz": 0 },
          "connections_closed": { "hz": 0.1 },
          "connections_established": { "hz": 0.2 },
          "current_connections": 14,
          "megabits_received": { "hz": 3.5 },
          "megabits_sent": { "hz": 4.5 },
          "tls_policy_failures": { "hz": 0 }
        },
        "roles": [
          {
            "id": "ss-1",
            "role": "storage",
            "bytes_queried": { "counter": 9223372036854775000, "hz": 1500.5, "roughness": 2.5 },
            "data_lag": { "seconds": 0.25, "versions": 250000 },
            "data_version": 123456789012,
            "durability_lag": { "seconds": 5.5, "versions": 5500000 },
            "durable_bytes": { "counter": 111, "hz": 1.5, "roughness": 0.5 },
            "durable_version": 123451289012,
            "fetched_versions": { "counter": 222, "hz": 2.5, "roughness": 0.5 },
            "fetches_from_logs": { "counter": 333, "hz": 3.5, "roughness": 0.5 },
            "finished_queries": { "counter": 444, "hz": 4.5, "roughness": 0.5 },
            "input_bytes": { "counter": 555, "hz": 5.5, "roughness": 0.5 },
            "keys_queried": { "counter": 666, "hz": 6.5, "roughness": 0.5 },
            "kvstore_available_bytes": 400000000000,
            "kvstore_free_bytes": 399000000000,
            "kvstore_inline_keys": 0,
            "kvstore_total_bytes": 500000000000,
            "kvstore_total_nodes": 0,
            "kvstore_total_size": 0,
            "kvstore_used_bytes": 1000000000,
            "local_rate": 100,
            "low_priority_queries": { "counter": 777, "hz": 7.5, "roughness": 0.5 },
            "mutation_bytes": { "counter": 888, "hz": 8.5, "roughness": 0.5 },
            "mutations": { "counter": 999, "hz": 9.5, "roughness": 0.5 },
            "query_queue_max": 12,
            "read_latency_statistics": {
              "count": 100, "max": 0.01, "mean": 0.001, "median": 0.0008, "min": 0.0001,
              "p25": 0.0005, "p90": 0.002, "p95": 0.003, "p99": 0.005, "p99.9": 0.009
            },
            "storage_metadata": {
              "created_time_datetime": "2023-11-14 22:13:20.000 +0000",
              "created_time_timestamp": 1699999999.5
            },
            "stored_bytes": 987654321,
            "total_queries": { "counter": 1234, "hz": 12.5, "roughness": 0.5 },
            "future_field": { "nested": true }
          },
          {
            "id": "tl-1",
            "role": "log",
            "data_version": 123456789999,
            "durable_bytes": { "counter": 1111, "hz": 11.5, "roughness": 1.5 },
            "input_bytes": { "counter": 2222, "hz": 22.5, "roughness": 2.5 },
            "kvstore_used_bytes": 2048,
            "queue_disk_available_bytes": 300000000000,
            "queue_disk_free_bytes": 299000000000,
            "queue_disk_total_bytes": 500000000000,
            "queue_disk_used_bytes": 1000000
          }
        ],
        "run_loop_busy": 0.125,
        "uptime_seconds": 86400.5,
        "version": "7.1.25"
      },
      "p-2": {
        "address": "10.0.0.2:4500",
        "class_type": "stateless",
        "roles": [ { "id": "cp-1", "role": "commit_proxy", "commit_latency_statistics": { "count": 10, "p99": 0.02 } } ],
        "version": "7.1.25"
      }
    },
    "protocol_version": "fdb00b071010000",
    "qos": {
      "batch_performance_limited_by": { "description": "The database is not being saturated by the workload.", "name": "workload", "reason_id": 2 },
      "batch_released_transactions_per_second": 0.5,
      "batch_transactions_per_second_limit": 1000000,
      "limiting_data_lag_storage_server": { "seconds": 0.1, "versions": 100000 },
      "limiting_durability_lag_storage_server": { "seconds": 5.1, "versions": 5100000 },
      "limiting_queue_bytes_storage_server": 1024,
      "performance_limited_by": { "description": "The database is not being saturated by the workload.", "name": "workload", "reason_id": 2 },
      "released_transactions_per_second": 25.5,
      "throttled_tags": {
        "auto": { "busy_read": 1, "busy_write": 2, "count": 3, "recommended_only": 4 },
        "manual": { "count": 5 }
      },
      "transactions_per_second_limit": 1234567.5,
      "worst_data_lag_storage_server": { "seconds": 0.3, "versions": 300000 },
      "worst_durability_lag_storage_server": { "seconds": 6.2, "versions": 6200000 },
      "worst_queue_bytes_log_server": 4096,
      "worst_queue_bytes_storage_server": 2048
    },
    "recovery_state": {
      "active_generations": 1,
      "description": "Recovery complete.",
      "name": "fully_recovered",
      "seconds_since_last_recovered": 3600.5
    },
    "workload": {
      "bytes": {
        "read": { "counter": 10, "hz": 1.5, "roughness": 0.1 },
        "written": { "counter": 20, "hz": 2.5, "roughness": 0.2 }
      },
      "keys": { "read": { "counter": 30, "hz": 3.5, "roughness": 0.3 } },
      "operations": {
        "location_requests": { "counter": 40, "hz": 4.5, "roughness": 0.4 },
        "low_priority_reads": { "counter": 50, "hz": 5.5, "roughness": 0.5 },
        "memory_errors": { "counter": 60, "hz": 6.5, "roughness": 0.6 },
        "read_requests": { "counter": 70, "hz": 7.5, "roughness": 0.7 },
        "reads": { "counter": 80, "hz": 8.5, "roughness": 0.8 },
        "writes": { "counter": 90, "hz": 9.5, "roughness": 0.9 }
      },
      "transactions": {
        "committed": { "counter": 100, "hz": 10.5, "roughness": 1.0 },
        "conflicted": { "counter": 110, "hz": 11.5, "roughness": 1.1 },
        "rejected_for_queued_too_long": { "counter": 120, "hz": 12.5, "roughness": 1.2 },
        "started": { "counter": 130, "hz": 13.5, "roughness": 1.3 },
        "started_batch_priority": { "counter": 140, "hz": 14.5, "roughness": 1.4 },
        "started_default_priority": { "counter": 150, "hz": 15.5, "roughness": 1.5 },
        "started_immediate_priority": { "counter": 160, "hz": 16.5, "roughness": 1.5 }
      }
    }
  }
}"#;

/// Status document from the minimal example in the status format docs.
pub const MINIMAL_STATUS: &str = r#"{"cluster":{"generation":42,"database_available":true},"client":{"database_status":{"available":true,"healthy":true}}}"#;

pub fn test_transaction_config() -> TransactionConfig {
    TransactionConfig {
        timeout_ms: 1000,
        retry_limit: 3,
    }
}

/// Memory store with `status` committed under the status key.
pub fn store_with_status(status: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set(STATUS_JSON_KEY.to_vec(), status.as_bytes().to_vec())
        .unwrap();
    store
}

pub fn repo_with_status(status: &str) -> StatusRepo<MemoryStore> {
    StatusRepo::new(store_with_status(status), &test_transaction_config())
}
