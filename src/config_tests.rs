#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use super::*;

fn resolve_with(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::resolve(|key| map.get(key).cloned()).unwrap()
}

#[test]
fn test_env_overrides() {
    let config = resolve_with(&[
        ("SPENDWISE_DB", "/tmp/test.db"),
        ("SPENDWISE_USER", "alice"),
        ("SPENDWISE_CURRENCY", "$"),
        ("RUST_LOG", "spendwise=debug"),
    ]);
    assert_eq!(config.db_path, PathBuf::from("/tmp/test.db"));
    assert_eq!(config.owner, "alice");
    assert_eq!(config.currency_symbol, "$");
    assert_eq!(config.log_filter, "spendwise=debug");
}

#[test]
fn test_owner_falls_back_to_login_user() {
    let config = resolve_with(&[("SPENDWISE_DB", "x.db"), ("USER", "bob")]);
    assert_eq!(config.owner, "bob");
}

#[test]
fn test_defaults() {
    let config = resolve_with(&[("SPENDWISE_DB", "x.db"), ("SPENDWISE_USER", "  ")]);
    assert_eq!(config.owner, DEFAULT_OWNER);
    assert_eq!(config.currency_symbol, DEFAULT_CURRENCY);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn test_empty_currency_symbol_allowed() {
    let config = resolve_with(&[("SPENDWISE_DB", "x.db"), ("SPENDWISE_CURRENCY", "")]);
    assert_eq!(config.currency_symbol, "");
}

#[test]
fn test_with_owner_flag() {
    let config = resolve_with(&[("SPENDWISE_DB", "x.db"), ("SPENDWISE_USER", "alice")]);
    assert_eq!(config.clone().with_owner(Some("carol")).owner, "carol");
    assert_eq!(config.clone().with_owner(Some(" ")).owner, "alice");
    assert_eq!(config.with_owner(None).owner, "alice");
}

#[test]
fn test_ensure_data_dir_creates_parent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("spendwise.db");
    let config = resolve_with(&[("SPENDWISE_DB", db_path.to_str().unwrap())]);
    config.ensure_data_dir().unwrap();
    assert!(dir.path().join("nested").is_dir());
}
