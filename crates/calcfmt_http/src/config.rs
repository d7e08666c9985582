//! Listen address configuration, read once at startup.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Startup configuration problems. All of them are fatal; the server never
/// falls back to a default address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} missing")]
    Missing(&'static str),
    #[error("{name} invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads `HOST` and `PORT` through the provided
    /// function, so tests can inject values without touching the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let host_raw = get("HOST").ok_or(ConfigError::Missing("HOST"))?;
        let host: IpAddr = host_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            value: host_raw.clone(),
        })?;
        let port_raw = get("PORT").ok_or(ConfigError::Missing("PORT"))?;
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
