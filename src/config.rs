//! Configuration for the ledger and its delivery sinks

use serde::{Deserialize, Serialize};

/// Configuration for [`AuditLedger`](crate::AuditLedger)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Maximum number of events retained in memory. Oldest events are
    /// evicted once the buffer is full.
    pub capacity: usize,

    /// Capacity of the bounded delivery queue. When full, new events are
    /// dropped from delivery (never from the ledger itself).
    pub queue_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            queue_capacity: 1_024,
        }
    }
}

/// Configuration for [`HttpSink`](crate::HttpSink)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSinkConfig {
    /// Collector endpoint receiving one POST per event
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpSinkConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:9090/api/audit".to_string(),
            timeout_secs: 5,
        }
    }
}
