use album_registry::config::{AppConfig, LogFormat, ServerConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_listen_on_all_interfaces() {
    let config = AppConfig::default();

    assert_eq!(config.listen_addr().unwrap(), "0.0.0.0:8080");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn blank_host_is_rejected() {
    let config = AppConfig {
        server: ServerConfig {
            host: "  ".into(),
            port: 8080,
        },
        ..Default::default()
    };

    assert!(
        config.listen_addr().is_err(),
        "Expected blank host to fail validation"
    );
}

#[test]
fn file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9100

[logging]
level = ""
format = "json"
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(Some(&path)).expect("config file should be valid");

    assert_eq!(config.listen_addr().unwrap(), "127.0.0.1:9100");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = AppConfig::load_from(Some(&path)).unwrap();
    assert_eq!(config.server.port, 8080);
}
