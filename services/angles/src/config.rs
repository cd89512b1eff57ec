use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use fingerflex_core::config::{ConfigError, parse_or};

const DEFAULT_PORT: u16 = 8000;

/// Angle service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnglesConfig {
    /// Interface to bind (default `0.0.0.0`). Env var: `ANGLES_HOST`.
    pub host: IpAddr,
    /// TCP port for the HTTP server (default 8000). Env var: `ANGLES_PORT`.
    pub port: u16,
}

impl AnglesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: parse_or(
                "ANGLES_HOST",
                lookup("ANGLES_HOST"),
                IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            )?,
            port: parse_or("ANGLES_PORT", lookup("ANGLES_PORT"), DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
