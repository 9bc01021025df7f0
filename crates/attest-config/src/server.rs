//! HTTP server configuration.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind (IP literal).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port. `0` picks a free port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed by CORS. `"*"` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Resolve `host` and `port` into a bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.trim().parse().map_err(|e| {
            ConfigError::invalid("server.host", format!("'{}' is not an IP address: {e}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Whether CORS should accept any origin.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin.trim() == "*")
    }
}
