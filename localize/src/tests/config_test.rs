use crate::config::LocaleConfig;
use crate::tests::common::test_config;

#[test]
fn test_defaults() {
    let config = LocaleConfig::default();

    assert!(config.default_language.is_none());
    assert!(config.available_languages.is_empty());
    assert!(config.patch_requested_url);
    assert!(!config.browser_overwrite_url);
    assert!(!config.patch_only_exact_match);
}

#[test]
fn test_from_toml_keeps_unset_defaults() {
    let config: LocaleConfig = toml::from_str(
        r#"
        default_language = "en"
        available_languages = ["en", "de"]
        browser_overwrite_url = true
        "#,
    )
    .expect("Failed to parse config");

    assert_eq!(config.default_language.as_deref(), Some("en"));
    assert!(config.is_available("de"));
    assert!(config.browser_overwrite_url);
    assert!(config.patch_requested_url, "Unset field should keep its default");
}

#[test]
fn test_membership_is_case_sensitive() {
    let config = test_config(Some("en"), &["en", "de"]);

    assert!(config.is_available("de"));
    assert!(!config.is_available("DE"));
    assert!(!config.is_available("d"));
}

#[test]
fn test_validate_rejects_wide_codes() {
    let config = test_config(Some("en"), &["eng"]);
    assert!(config.validate().is_err());

    let config = test_config(Some("en"), &["en", "de"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_allows_missing_default() {
    // only warns; resolution then reports NoLanguageResolvable per request
    let config = test_config(None, &["en", "de"]);
    assert!(config.validate().is_ok());
}
