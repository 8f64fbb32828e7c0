//! Tests for src/config/mod.rs - AppConfig parsing and scope selection

use kubetab::config::AppConfig;
use kubetab::resources::NamespaceScope;

#[test]
fn test_empty_config_defaults() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert_eq!(config.context, None);
    assert_eq!(config.namespace, None);
    assert!(config.colors);
}

#[test]
fn test_config_parses_all_fields() {
    let config: AppConfig = toml::from_str(
        r#"
context = "staging"
namespace = "batch"
colors = false
"#,
    )
    .unwrap();

    assert_eq!(config.context.as_deref(), Some("staging"));
    assert_eq!(config.namespace.as_deref(), Some("batch"));
    assert!(!config.colors);
}

#[test]
fn test_scope_defaults_to_all_namespaces() {
    let config = AppConfig::default();
    assert_eq!(config.scope(), NamespaceScope::All);
}

#[test]
fn test_scope_uses_configured_namespace() {
    let config: AppConfig = toml::from_str(r#"namespace = "batch""#).unwrap();
    assert_eq!(config.scope(), NamespaceScope::named("batch"));
}
