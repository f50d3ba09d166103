//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BIND_ADDR '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Built frontend (index.html, wasm, css)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: addr.clone(), source })?;

        let static_dir = get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());
        if static_dir.trim().is_empty() {
            return Err(ConfigError::EmptyStaticDir);
        }

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "crates/finflex-web/dist"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("crates/finflex-web/dist"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = ServerConfig::from_vars(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));

        let err = ServerConfig::from_vars(lookup(&[("STATIC_DIR", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStaticDir));
    }
}
