//! Configuration loading: files, search, environment overrides.

mod support;

use std::io::Write;

use stargaze::config::{ConfigError, ServiceConfig};
use support::with_scoped_env;
use tempfile::NamedTempFile;

const CLEAR: [(&str, Option<&str>); 5] = [
    ("STARGAZE_CONFIG", None),
    ("HOST", None),
    ("PORT", None),
    ("ALMANAC_BASE_URL", None),
    ("ALMANAC_TIMEOUT_SECS", None),
];

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_env_path() {
    let file = write_config(
        r#"
[server]
port = 9090

[scan]
min_altitude_deg = 15.0
max_days = 30
"#,
    );
    let path = file.path().to_str().unwrap().to_string();

    let mut env = CLEAR.to_vec();
    env[0] = ("STARGAZE_CONFIG", Some(path.as_str()));

    let config = with_scoped_env(&env, ServiceConfig::load).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.scan.min_altitude_deg.value(), 15.0);
    assert_eq!(config.scan.max_days, 30);
    assert_eq!(config.almanac.timeout_secs, 20);
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("[server]\nport = 9090\n");
    let path = file.path().to_str().unwrap().to_string();

    let env = [
        ("STARGAZE_CONFIG", Some(path.as_str())),
        ("HOST", Some("127.0.0.1")),
        ("PORT", Some("3001")),
        ("ALMANAC_BASE_URL", Some("http://localhost:9000")),
        ("ALMANAC_TIMEOUT_SECS", Some("3")),
    ];

    let config = with_scoped_env(&env, ServiceConfig::load).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.almanac.base_url, "http://localhost:9000");
    assert_eq!(config.almanac.timeout().as_secs(), 3);
}

#[test]
fn test_invalid_port_env() {
    let mut env = CLEAR.to_vec();
    env[2] = ("PORT", Some("eighty"));

    let err = with_scoped_env(&env, || ServiceConfig::default().with_env_overrides()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { ref key, .. } if key == "PORT"));
}

#[test]
fn test_missing_env_path_is_error() {
    let mut env = CLEAR.to_vec();
    env[0] = ("STARGAZE_CONFIG", Some("/nonexistent/stargaze.toml"));

    let err = with_scoped_env(&env, ServiceConfig::load).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_invalid_scan_settings_rejected() {
    let file = write_config("[scan]\nstep_minutes = 0.0\n");
    let err = ServiceConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
