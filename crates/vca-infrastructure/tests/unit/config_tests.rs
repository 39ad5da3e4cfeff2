//! Tests for configuration loading and validation

use std::io::Write;

use vca_infrastructure::config::{AppConfig, ConfigLoader};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn defaults_are_valid() {
    let config = AppConfig::default();
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.chat.model, "llama3-70b-8192");
    assert_eq!(config.chat.max_attempts, 3);
    assert_eq!(config.retrieval.top_k, 3);
    assert!(config.chat.stream);
}

#[test]
fn toml_file_overrides_defaults() {
    let file = write_config(
        r#"
[server]
port = 9100

[chat]
provider = "null"
temperature = 0.5

[embedding]
provider = "null"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.chat.provider, "null");
    assert!((config.chat.temperature - 0.5).abs() < 1e-6);
    // Untouched sections keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.chat.max_tokens, 512);
}

#[test]
fn zero_port_is_rejected() {
    let file = write_config("[server]\nport = 0\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("port"));
}

#[test]
fn zero_attempts_is_rejected() {
    let file = write_config("[chat]\nmax_attempts = 0\n");
    assert!(ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .is_err());
}

#[test]
fn oversized_token_budget_is_rejected() {
    let file = write_config("[chat]\nmax_tokens = 4096\n");
    assert!(ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .is_err());
}

#[test]
fn zero_top_k_is_rejected() {
    let file = write_config("[retrieval]\ntop_k = 0\n");
    assert!(ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = AppConfig::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vca.toml");

    ConfigLoader::new().save_to_file(&config, &path).unwrap();
    let reloaded = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(reloaded.server.port, config.server.port);
    assert_eq!(reloaded.chat.model, config.chat.model);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/vca.toml")
        .load()
        .unwrap();
    assert_eq!(config.server.port, 8000);
}
