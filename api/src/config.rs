use std::{net::IpAddr, path::PathBuf};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PATH: &str = "database.db";
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or blank variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let host = match var("HOST") {
            Some(raw) => raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "HOST",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.host,
        };

        Ok(Self {
            host,
            port,
            database_path: var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("database.db"));
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_PATH", "/var/lib/radiocalio/database.db"),
            ("STATIC_DIR", "assets"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/radiocalio/database.db")
        );
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn blank_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid PORT value \"eighty\""));
    }
}
