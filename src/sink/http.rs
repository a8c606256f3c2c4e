//! HTTP collector sink
//!
//! Sends one POST per event with the full JSON record to a configured
//! collector endpoint. No authentication, batching, or retry — transport
//! errors and non-2xx responses surface as delivery errors for the
//! dispatcher to count.

use crate::config::HttpSinkConfig;
use crate::error::{AuditError, Result};
use crate::sink::DeliverySink;
use crate::types::AuditEvent;
use async_trait::async_trait;
use std::time::Duration;

/// Sink that POSTs each event to an HTTP collector
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    /// Build a sink from configuration
    pub fn new(config: HttpSinkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuditError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// The collector endpoint this sink posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DeliverySink for HttpSink {
    fn name(&self) -> &str {
        "http"
    }

    async fn deliver(&self, event: &AuditEvent) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|e| AuditError::Delivery {
                sink: "http".to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(AuditError::Delivery {
                sink: "http".to_string(),
                reason: format!("Collector returned {}", response.status()),
            });
        }

        Ok(())
    }
}
