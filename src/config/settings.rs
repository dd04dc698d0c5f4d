use crate::search::client::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, MAX_RESULT_SIZE};
use crate::search::ClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint, without the operation segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent as the `v` parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Default page size (`rsz`). Google caps this at 8.
    #[serde(default = "default_result_size")]
    pub result_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Site URL sent as the `Referer` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,

    /// Write debug logs to a file
    #[serde(default)]
    pub debug: bool,

    /// Debug log file or directory (defaults next to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_rotation: Option<DebugLogRotation>,

    /// How many rotated log files to keep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_keep: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            result_size: default_result_size(),
            timeout_secs: default_timeout_secs(),
            referer: None,
            debug: false,
            debug_log_path: None,
            debug_log_rotation: None,
            debug_log_keep: None,
        }
    }
}

impl Config {
    /// Settings for a [`crate::search::SearchClient`]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            result_size: self.result_size,
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}

/// Debug log file rotation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DebugLogRotation {
    /// Single append-only file
    None,
    /// One file per day
    Daily,
    /// One file per process run
    Session,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_result_size() -> u32 {
    MAX_RESULT_SIZE
}

fn default_timeout_secs() -> u64 {
    10
}
