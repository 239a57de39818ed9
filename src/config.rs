use std::env;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

/// Interface every example listens on.
pub const BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Reads `PORT` from the environment. Call `dotenv::dotenv()` first to
    /// pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok())
    }

    /// Blank values fall back to the default port.
    pub fn from_port_var(value: Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            return Ok(Self::default());
        };

        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort {
                value: raw.clone(),
                source,
            })?;

        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}
