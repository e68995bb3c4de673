use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    GatewayConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_yields_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, GatewayConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://localhost:5000");
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 90, connect_secs: 10 });
    assert_eq!(cfg.max_upload_bytes, 50 * 1024 * 1024);
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("VERITAS_BACKEND_URL", "https://verify.example.test/"),
        ("VERITAS_REQUEST_TIMEOUT_SECS", "42"),
        ("VERITAS_CONNECT_TIMEOUT_SECS", "7"),
        ("VERITAS_MAX_UPLOAD_MB", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://verify.example.test");
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(42));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(7));
    assert_eq!(cfg.max_upload_bytes, 5 * 1024 * 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("VERITAS_BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn zero_timeout_is_rejected() {
    let err = config_from(&[("VERITAS_REQUEST_TIMEOUT_SECS", "0")]).unwrap_err();
    assert!(err.to_string().contains("VERITAS_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn backend_url_needs_http_scheme() {
    assert!(config_from(&[("VERITAS_BACKEND_URL", "localhost:5000")]).is_err());
}

#[test]
fn backend_endpoint_joins_paths() {
    let cfg = config_from(&[("VERITAS_BACKEND_URL", "http://127.0.0.1:5000")]).unwrap();
    assert_eq!(cfg.backend_endpoint(wire::VERIFY_PATH), "http://127.0.0.1:5000/api/verify");
    assert_eq!(cfg.listen_addr().port(), 3000);
}
