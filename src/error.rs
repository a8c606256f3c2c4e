//! Error types for brickfund-audit
//!
//! The local append path is infallible; errors only arise from sink
//! configuration and outbound delivery, and delivery errors never reach
//! `record` callers — the dispatcher logs and counts them.

use thiserror::Error;

/// Errors that can occur in the audit system
#[derive(Debug, Error)]
pub enum AuditError {
    /// Sink or ledger configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound delivery failure
    #[error("Delivery via sink '{sink}' failed: {reason}")]
    Delivery { sink: String, reason: String },

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;
