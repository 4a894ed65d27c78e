// Common test utilities and helpers

use std::sync::Arc;

use axum::{Extension, Router, middleware, routing::get};

use crate::config::LocaleConfig;
use crate::middleware::{RequestLanguage, locale_middleware};

/// Build a config over the given default and language set.
pub fn test_config(default: Option<&str>, available: &[&str]) -> LocaleConfig {
    LocaleConfig {
        default_language: default.map(str::to_string),
        available_languages: available.iter().map(|code| code.to_string()).collect(),
        ..LocaleConfig::default()
    }
}

/// Router with the locale middleware and a probe handler reporting the
/// resolved language and the URI the router actually saw.
pub fn test_app(config: LocaleConfig) -> Router {
    init_tracing();
    let config = Arc::new(config);

    Router::new()
        .route("/", get(probe))
        .route("/contact", get(probe))
        .route("/page", get(probe))
        .route("/de/x", get(probe))
        .layer(middleware::from_fn_with_state(config, locale_middleware))
}

/// Opt-in log output for debugging test failures (RUST_LOG=localize=debug).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

async fn probe(language: Option<Extension<RequestLanguage>>, uri: axum::http::Uri) -> String {
    let language = language.map_or_else(|| "-".to_string(), |Extension(lang)| lang.0);
    format!("{language} {uri}")
}
