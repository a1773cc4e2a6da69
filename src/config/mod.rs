//! Configuration loading and management
//!
//! Settings come from a YAML file or from environment variables; env
//! values override file values. The relationship mode is a deployment
//! decision, never a per-request one.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::storage::RelationshipMode;

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// How place↔amenity memberships are represented
    pub relationship_mode: RelationshipMode,

    /// JSON snapshot file; omit for purely in-memory storage
    pub snapshot_path: Option<PathBuf>,
}

/// Complete runtime configuration for the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Defaults overridden by `STAYHUB_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `STAYHUB_HOST`, `STAYHUB_PORT`, `STAYHUB_RELATIONSHIP_MODE`
    /// and `STAYHUB_SNAPSHOT` on top of the current values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("STAYHUB_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("STAYHUB_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("invalid STAYHUB_PORT '{port}'"))?;
        }
        if let Ok(mode) = std::env::var("STAYHUB_RELATIONSHIP_MODE") {
            self.storage.relationship_mode = RelationshipMode::from_str(&mode)?;
        }
        if let Ok(path) = std::env::var("STAYHUB_SNAPSHOT") {
            self.storage.snapshot_path = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
