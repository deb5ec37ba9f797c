// Server settings read from the environment (and `.env`, if present)

use std::{
    env,
    net::{IpAddr, SocketAddr},
};

use thiserror::Error;

use crate::observability::LogFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Single origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3333,
        };

        Ok(Self {
            host,
            port,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.is_empty()),
            log_format: lookup("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 3333)));
        assert_eq!(config.cors_allowed_origin, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_port_and_host() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[("PORT", "http")])),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("HOST", "localhost")])),
            Err(ConfigError::InvalidHost("localhost".to_string()))
        );
    }
}
