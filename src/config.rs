//! Server configuration.
//!
//! Loaded from a YAML file (path in the `CONFIG` environment variable,
//! `config.yaml` by default; a missing file falls back to defaults), then
//! overridden by environment variables:
//!
//! - `LISTEN` → `server.listen_addr`
//! - `DOCUMENT_ROOT` → `static_files.document_root`

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
}

/// File-serving settings, cloned into each worker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory all served paths are resolved under.
    pub document_root: PathBuf,

    /// Deadline for reading a complete request, in seconds. Unset means a
    /// stalled client holds its worker until it disconnects.
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("./www"),
            read_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.static_files.document_root = PathBuf::from(root);
        }

        Ok(cfg)
    }
}
