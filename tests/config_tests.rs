//! Tests for the audit configuration builder

use font_preload_audit::config::AuditConfig;

#[test]
fn test_builder_defaults() {
    let config = AuditConfig::builder().build().unwrap();

    assert_eq!(config.hint_pattern(), "^(optional)$");
    assert_eq!(config.pass_name(), "defaultPass");
    assert!(!config.exclude_unreused_preloads());
    assert!(config.hint_regex().is_match("optional"));
    assert!(!config.hint_regex().is_match("swap"));
    assert!(!config.hint_regex().is_match("optionally"));
}

#[test]
fn test_default_matches_builder() {
    let default = AuditConfig::default();
    let built = AuditConfig::builder().build().unwrap();
    assert_eq!(default.hint_pattern(), built.hint_pattern());
    assert_eq!(default.pass_name(), built.pass_name());
}

#[test]
fn test_builder_with_all_fields() {
    let config = AuditConfig::builder()
        .hint_pattern("^(optional|fallback)$")
        .pass_name("warmPass")
        .exclude_unreused_preloads(true)
        .build()
        .unwrap();

    assert!(config.hint_regex().is_match("fallback"));
    assert_eq!(config.pass_name(), "warmPass");
    assert!(config.exclude_unreused_preloads());
}

#[test]
fn test_invalid_pattern_rejected() {
    let err = AuditConfig::builder().hint_pattern("^(optional").build().unwrap_err();
    assert!(err.to_string().contains("Invalid font-display hint pattern"));
}

#[test]
fn test_empty_pass_name_rejected() {
    assert!(AuditConfig::builder().pass_name("  ").build().is_err());
}

#[test]
fn test_deserialize_partial_config() {
    let config: AuditConfig =
        serde_json::from_str(r#"{"exclude_unreused_preloads": true}"#).unwrap();
    assert!(config.exclude_unreused_preloads());
    assert_eq!(config.hint_pattern(), "^(optional)$");
    assert!(config.hint_regex().is_match("optional"));
}

#[test]
fn test_deserialize_rejects_bad_pattern() {
    let result = serde_json::from_str::<AuditConfig>(r#"{"hint_pattern": "("}"#);
    assert!(result.is_err());
}

#[test]
fn test_serialize_round_trip() {
    let config = AuditConfig::builder()
        .hint_pattern("^swap$")
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: AuditConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.hint_pattern(), "^swap$");
    assert!(back.hint_regex().is_match("swap"));
}
