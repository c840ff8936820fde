use doccat_core::{ConfigError, DocumentStore, MatchMode, StoreConfig, UpsertPolicy};
use std::error::Error;

#[test]
fn default_config_keeps_legacy_behaviour() {
    let config = StoreConfig::default();
    assert_eq!(config.match_mode, MatchMode::Legacy);
    assert_eq!(config.upsert_policy, UpsertPolicy::Append);
    assert_eq!(DocumentStore::new().config(), config);
}

#[test]
fn parses_full_config() {
    let config =
        StoreConfig::from_json_str(r#"{"match_mode": "strict", "upsert_policy": "replace"}"#)
            .unwrap();

    assert_eq!(config.match_mode, MatchMode::Strict);
    assert_eq!(config.upsert_policy, UpsertPolicy::Replace);
}

#[test]
fn missing_fields_use_defaults() {
    let config = StoreConfig::from_json_str(r#"{"upsert_policy": "replace"}"#).unwrap();

    assert_eq!(config.match_mode, MatchMode::Legacy);
    assert_eq!(config.upsert_policy, UpsertPolicy::Replace);
    assert_eq!(StoreConfig::from_json_str("{}").unwrap(), StoreConfig::default());
}

#[test]
fn rejects_unknown_fields_and_variants() {
    let unknown_field = StoreConfig::from_json_str(r#"{"ranking": true}"#).unwrap_err();
    assert!(matches!(unknown_field, ConfigError::Parse(_)));
    assert!(unknown_field.source().is_some());

    let unknown_variant = StoreConfig::from_json_str(r#"{"match_mode": "fuzzy"}"#).unwrap_err();
    assert!(unknown_variant.to_string().contains("invalid store config"));
}

#[test]
fn match_mode_labels_are_stable() {
    assert_eq!(MatchMode::Legacy.as_str(), "legacy");
    assert_eq!(MatchMode::Strict.as_str(), "strict");
}
