//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// Remote inference provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API keys tried in round-robin order on auth/quota failures.
    #[serde(default)]
    pub api_keys: Vec<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Override the API endpoint. Mainly useful for testing.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

/// Scan gating and trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum gap between remote calls for ambient scans.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,

    /// Period of the ambient rescan timer. Zero disables it.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Debounce window for snapshot-change notifications.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_min_interval_ms() -> u64 {
    3000
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_debounce_ms() -> u64 {
    500
}

/// Overlay display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// How long a shown result stays visible.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

fn default_duration_ms() -> u64 {
    1000
}
