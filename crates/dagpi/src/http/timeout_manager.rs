//! Timeout management for Dagpi requests

use crate::config::TimeoutConfig;
use crate::error::{DagpiError, DagpiResult};
use reqwest::ClientBuilder;
use std::time::Duration;
use tokio::time::timeout;

/// Upper bound past which a total timeout is almost certainly a typo.
const MAX_REASONABLE_TIMEOUT_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone)]
pub struct TimeoutManager {
    config: TimeoutConfig,
}

impl TimeoutManager {
    pub fn new(config: TimeoutConfig) -> Self {
        Self { config }
    }

    /// Apply the connect timeout to a reqwest ClientBuilder.
    /// The total timeout is enforced per request in `execute_with_timeout`.
    pub fn apply_to_client_builder(&self, builder: ClientBuilder) -> ClientBuilder {
        builder.connect_timeout(Duration::from_millis(self.config.connect_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.config.total_ms)
    }

    /// Run a request future under the total timeout, classifying reqwest
    /// timeout and connect failures.
    pub async fn execute_with_timeout<F, T>(&self, operation: F) -> DagpiResult<T>
    where
        F: std::future::Future<Output = Result<T, reqwest::Error>>,
    {
        let request_timeout = self.request_timeout();

        match timeout(request_timeout, operation).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(err)) if err.is_timeout() => Err(DagpiError::Timeout(format!(
                "Request timed out after {}ms",
                request_timeout.as_millis()
            ))),
            Ok(Err(err)) if err.is_connect() => {
                Err(DagpiError::Connection(format!("Connection failed: {}", err)))
            }
            Ok(Err(err)) => Err(DagpiError::Http(err)),
            Err(_) => Err(DagpiError::Timeout(format!(
                "Request timed out after {}ms (total timeout)",
                request_timeout.as_millis()
            ))),
        }
    }

    pub fn config(&self) -> &TimeoutConfig {
        &self.config
    }

    pub fn validate(&self) -> DagpiResult<()> {
        if self.config.connect_ms == 0 {
            return Err(DagpiError::InvalidConfig(
                "Connect timeout must be greater than 0".to_string(),
            ));
        }

        if self.config.total_ms == 0 {
            return Err(DagpiError::InvalidConfig(
                "Total timeout must be greater than 0".to_string(),
            ));
        }

        if self.config.connect_ms > self.config.total_ms {
            return Err(DagpiError::InvalidConfig(
                "Connect timeout cannot be greater than total timeout".to_string(),
            ));
        }

        if self.config.total_ms > MAX_REASONABLE_TIMEOUT_MS {
            tracing::warn!(
                total_ms = self.config.total_ms,
                "Total timeout is very long, consider reducing it"
            );
        }

        Ok(())
    }
}
