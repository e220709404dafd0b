// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the feedback service.
//!
//! Values come from environment variables (optionally seeded from a `.env`
//! file by the binary). Anything unset falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Configuration for the feedback service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory holding the frontend assets (default: bundled `frontend/`)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Record storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cross-origin configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Record storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file the store is snapshotted to after every append.
    /// `None` keeps records in memory only.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allow requests from any origin (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/frontend"))
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            storage: StorageConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// - `BIND_ADDR`: full bind address
    /// - `PORT`: port on 0.0.0.0, used only when `BIND_ADDR` is unset
    /// - `STATIC_DIR`: frontend asset directory
    /// - `DATA_FILE`: JSON persistence file
    /// - `CORS_ENABLED`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(addr) = var("BIND_ADDR") {
            config.bind_addr = addr;
        } else if let Some(port) = var("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.bind_addr = format!("0.0.0.0:{port}"),
                Err(_) => warn!(port = %port, "Ignoring invalid PORT"),
            }
        }

        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        config.storage.data_file = var("DATA_FILE").map(PathBuf::from);

        if let Some(flag) = var("CORS_ENABLED") {
            match parse_bool(&flag) {
                Some(enabled) => config.cors.enabled = enabled,
                None => warn!(value = %flag, "Ignoring invalid CORS_ENABLED"),
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.static_dir.ends_with("frontend"));
        assert!(config.storage.data_file.is_none());
        assert!(config.cors.enabled);
    }

    #[test]
    fn test_port_used_without_bind_addr() {
        let config = load(&[("PORT", "8081")]);
        assert_eq!(config.bind_addr, "0.0.0.0:8081");
    }

    #[test]
    fn test_bind_addr_wins_over_port() {
        let config = load(&[("BIND_ADDR", "127.0.0.1:9000"), ("PORT", "8081")]);
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = load(&[("PORT", "not-a-port"), ("CORS_ENABLED", "maybe")]);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.cors.enabled);
    }

    #[test]
    fn test_storage_and_cors_overrides() {
        let config = load(&[
            ("DATA_FILE", "/tmp/feedbacks.json"),
            ("STATIC_DIR", "/srv/www"),
            ("CORS_ENABLED", "off"),
        ]);
        assert_eq!(
            config.storage.data_file.as_deref(),
            Some(std::path::Path::new("/tmp/feedbacks.json"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert!(!config.cors.enabled);
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = load(&[("DATA_FILE", "  "), ("BIND_ADDR", "")]);
        assert!(config.storage.data_file.is_none());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }
}
