// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::ConfigError;

/// Which storage port the process uses. Chosen once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Whole list as one JSON blob under a fixed key in `data_dir`.
    LocalSnapshot { data_dir: PathBuf },
    /// Rows in an SQLite `conversations` table.
    RemoteQuery { db_path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub backend: StorageBackend,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            backend: StorageBackend::LocalSnapshot {
                data_dir: PathBuf::from("data"),
            },
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `CONVERSAS_*` variables from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(addr) = lookup("CONVERSAS_ADDR") {
            cfg.addr = addr.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CONVERSAS_ADDR",
                value: addr.clone(),
            })?;
        }

        if let Some(workers) = lookup("CONVERSAS_WORKERS") {
            cfg.max_workers = workers
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "CONVERSAS_WORKERS",
                    value: workers.clone(),
                })?;
        }

        let data_dir = lookup("CONVERSAS_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let backend = lookup("CONVERSAS_BACKEND").unwrap_or_else(|| "local".to_string());
        cfg.backend = match backend.trim().to_lowercase().as_str() {
            "local" | "snapshot" => StorageBackend::LocalSnapshot {
                data_dir: PathBuf::from(&data_dir),
            },
            "remote" | "sqlite" => StorageBackend::RemoteQuery {
                db_path: lookup("CONVERSAS_DB_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(&data_dir).join("conversas.sqlite3")),
            },
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "CONVERSAS_BACKEND",
                    value: backend,
                })
            }
        };

        if let Some(filter) = lookup("CONVERSAS_LOG") {
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_local_snapshot() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(
            cfg.backend,
            StorageBackend::LocalSnapshot {
                data_dir: PathBuf::from("data")
            }
        );
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn remote_backend_uses_db_path_or_data_dir() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("CONVERSAS_BACKEND", "remote"),
            ("CONVERSAS_DATA_DIR", "/var/lib/conversas"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.backend,
            StorageBackend::RemoteQuery {
                db_path: PathBuf::from("/var/lib/conversas/conversas.sqlite3")
            }
        );

        let cfg = AppConfig::from_lookup(lookup(&[
            ("CONVERSAS_BACKEND", "Remote"),
            ("CONVERSAS_DB_PATH", "x.db"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.backend,
            StorageBackend::RemoteQuery {
                db_path: PathBuf::from("x.db")
            }
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("CONVERSAS_BACKEND", "cloud")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("CONVERSAS_ADDR", "localhost")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("CONVERSAS_WORKERS", "0")])).is_err());
    }
}
