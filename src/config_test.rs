use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert!(config.assets_dir.ends_with("assets"));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/ichiraku/assets"),
    ]))
    .expect("config");
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.assets_dir, PathBuf::from("/srv/ichiraku/assets"));
}

#[test]
fn blank_values_count_as_unset() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("ASSETS_DIR", "")])).expect("config");
    assert_eq!(config.port, 3000);
    assert!(config.assets_dir.ends_with("assets"));
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["ramen", "0", "70000", "-1"] {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("PORT", raw)])),
            Err(ConfigError::InvalidPort(raw.to_owned())),
            "PORT={raw}"
        );
    }
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).expect_err("bad addr");
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
    assert!(err.to_string().contains("BIND_ADDR"));
}
