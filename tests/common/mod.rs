//! Common test utilities and fixtures
#![allow(dead_code)]

use gsearch::search::{ClientConfig, SearchClient};
use std::path::PathBuf;
use tempfile::TempDir;

/// Path the mock server serves the API under
pub const API_PATH: &str = "/ajax/services/search";

/// Test fixture for config and log files
pub struct TestFixture {
    /// Temporary directory that gets cleaned up automatically
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a test file with given content
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let filepath = self.path().join(name);
        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&filepath, content).expect("Failed to write test file");
        filepath
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("Failed to read test file")
    }
}

/// Client settings pointing at a mockito server
pub fn mock_config(server: &mockito::ServerGuard) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}{}", server.url(), API_PATH),
        ..ClientConfig::default()
    }
}

/// Client pointing at a mockito server
pub fn mock_client(server: &mockito::ServerGuard) -> SearchClient {
    SearchClient::new(mock_config(server)).expect("Failed to build client")
}

/// Endpoint path for an operation on the mock server
pub fn endpoint(operation: &str) -> String {
    format!("{}/{}", API_PATH, operation)
}

/// Success envelope around `data`
pub fn ok_body(data: serde_json::Value) -> String {
    serde_json::json!({
        "responseStatus": 200,
        "responseDetails": null,
        "responseData": data,
    })
    .to_string()
}
