//! Integration tests for loading and saving the config file

mod common;

use common::TestFixture;
use gsearch::config::{self, Config, DebugLogRotation};

#[test]
fn test_missing_config_is_created_with_defaults() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("nested/config.toml");
    assert!(!path.exists());

    let cfg = config::load_or_create_config_at(&path).unwrap();

    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let written = fixture.read_file("nested/config.toml");
    assert!(written.contains("result_size = 8"));
    assert!(written.contains("api_version = \"1.0\""));
}

#[test]
fn test_existing_config_is_loaded() {
    let fixture = TestFixture::new();
    let path = fixture.create_file(
        "config.toml",
        r#"
base_url = "http://localhost:8080/search"
result_size = 6
referer = "http://example.com/"
debug = true
debug_log_rotation = "none"
"#,
    );

    let cfg = config::load_or_create_config_at(&path).unwrap();

    assert_eq!(cfg.base_url, "http://localhost:8080/search");
    assert_eq!(cfg.result_size, 6);
    assert_eq!(cfg.referer.as_deref(), Some("http://example.com/"));
    assert!(cfg.debug);
    assert_eq!(cfg.debug_log_rotation, Some(DebugLogRotation::None));
    assert_eq!(cfg.timeout_secs, 10);
}

#[test]
fn test_saved_config_loads_back() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("config.toml");
    let cfg = Config {
        result_size: 4,
        referer: Some("http://example.org/app".to_string()),
        debug_log_keep: Some(3),
        ..Config::default()
    };

    config::save_config_at(&cfg, &path).unwrap();
    let loaded = config::load_or_create_config_at(&path).unwrap();

    assert_eq!(loaded, cfg);
}

#[test]
fn test_invalid_config_is_an_error() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("config.toml", "result_size = \"eight\"\n");

    let err = config::load_or_create_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_config_drives_client_settings() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("config.toml", "api_version = \"1.1\"\ntimeout_secs = 30\n");

    let cfg = config::load_or_create_config_at(&path).unwrap();
    let client_config = cfg.client_config();

    assert_eq!(client_config.api_version, "1.1");
    assert_eq!(client_config.timeout, std::time::Duration::from_secs(30));
    assert_eq!(client_config.result_size, 8);
}
