use mhs_domain::config::{ActivitiesConfig, ApiConfig, ServerConfig, StorageConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8000);
    assert!(server.ssl.is_none());

    assert_eq!(StorageConfig::default().static_dir, PathBuf::from("public"));
    assert!(!ActivitiesConfig::default().enforce_capacity, "capacity is advisory by default");
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080 },
        "storage": { "static_dir": "/srv/mergington" },
        "activities": { "enforce_capacity": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, PathBuf::from("/srv/mergington"));
    assert!(cfg.activities.enforce_capacity);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "port": 9000 } })).expect("partial config");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.storage.static_dir, PathBuf::from("public"));
    assert!(!cfg.activities.enforce_capacity);
}

#[test]
fn deref_mut_copies_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 1234;

    assert_eq!(original.server.port, 8000);
    assert_eq!(changed.server.port, 1234);
}
