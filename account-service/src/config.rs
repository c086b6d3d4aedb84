//! Configuration for the account service

use std::env;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Number of accounts the in-memory store is pre-sized for
    pub store_capacity: usize,
    /// Log every balance change at info level
    pub operation_logging: bool,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            store_capacity: env::var("ACCOUNT_STORE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64),
            operation_logging: env::var("OPERATION_LOGGING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl AccountServiceConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with custom values
    pub fn new(store_capacity: usize, operation_logging: bool) -> Self {
        Self {
            store_capacity,
            operation_logging,
        }
    }
}
