//! Configuration handling for the TUI

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ADDRESS;

/// Fallback delay for the simulated backend, mirroring the mocked two-second
/// request the product ships with today
const DEFAULT_LATENCY_MS: u64 = 2000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend API address
    pub api_address: Option<String>,
    /// Override for the simulated request delay, in milliseconds
    pub simulated_latency_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "nijouzu", "nijouzu-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Backend address: `NIJOUZU_API_ADDRESS` wins, then the config file,
    /// then the default local backend
    pub fn resolve_api_address(&self) -> String {
        std::env::var("NIJOUZU_API_ADDRESS")
            .ok()
            .or_else(|| self.api_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    /// Delay the simulated client applies to auth calls
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms.unwrap_or(DEFAULT_LATENCY_MS))
    }
}
