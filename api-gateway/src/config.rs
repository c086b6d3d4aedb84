//! Application configuration

use std::env;
use std::net::SocketAddr;

use account_service::AccountServiceConfig;
use common::error::{Error, Result};

/// Default listening address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening address
    pub addr: String,
    /// Account service settings
    pub accounts: AccountServiceConfig,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            accounts: AccountServiceConfig::from_env(),
        }
    }

    /// Replace the listening address when one is given
    pub fn with_addr(mut self, addr: Option<String>) -> Self {
        if let Some(addr) = addr {
            self.addr = addr;
        }
        self
    }

    /// Parse the listening address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid address {}: {}", self.addr, e)))
    }
}
