//! Loading configuration files from disk.

mod support;

use std::path::Path;

use polyfeed::error::{ConfigError, Error};
use polyfeed::infrastructure::config::Config;
use support::config::{local_config, write_temp_config};

fn load(contents: &str) -> Result<Config, Error> {
    let file = write_temp_config(contents);
    Config::load(file.path())
}

#[test]
fn loads_file_with_events_in_order() {
    let config = load(&local_config(
        "http://127.0.0.1:8080",
        "ws://127.0.0.1:8081/ws",
        &["election-night", "nba-finals-g1"],
    ))
    .unwrap();

    let slugs: Vec<_> = config
        .require_events()
        .unwrap()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    assert_eq!(slugs, vec!["election-night", "nba-finals-g1"]);
    assert_eq!(
        config.polymarket.market_ws_url(),
        "ws://127.0.0.1:8081/ws/market"
    );
}

#[test]
fn missing_file_is_read_error() {
    let err = Config::load(Path::new("/nonexistent/polyfeed/config.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))), "got {err}");
}

#[test]
fn stream_and_logging_sections_override_defaults() {
    let mut toml = local_config("https://gamma.example", "wss://stream.example/ws", &["a"]);
    toml.push_str(
        r#"
[polymarket.stream]
initial_dump = false
connect_timeout_ms = 2500
resolve_concurrency = 8

[polymarket.http]
timeout_ms = 1500

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = load(&toml).unwrap();
    let pm = &config.polymarket;
    assert!(!pm.stream.initial_dump);
    assert_eq!(pm.stream.connect_timeout_ms, 2500);
    assert_eq!(pm.stream.resolve_concurrency, 8);
    assert_eq!(pm.http.timeout_ms, 1500);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.is_json());
}

#[test]
fn zero_http_timeout_is_rejected() {
    let mut toml = local_config("https://gamma.example", "wss://stream.example/ws", &["a"]);
    toml.push_str("\n[polymarket.http]\ntimeout_ms = 0\n");

    match load(&toml).unwrap_err() {
        Error::Config(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "http.timeout_ms");
        }
        other => panic!("expected invalid value, got {other}"),
    }
}

#[test]
fn empty_slug_is_rejected() {
    let err = load(&local_config(
        "https://gamma.example",
        "wss://stream.example/ws",
        &[" "],
    ))
    .unwrap_err();
    assert!(err.to_string().contains("slug must not be empty"), "{err}");
}
