//! Request language resolution middleware for axum.
//!
//! Decides which language governs an incoming request from two signals, a
//! URL path prefix of the shape `/XY/...` and the Accept-Language header,
//! reconciles them under a configurable precedence policy, attaches the
//! decision to the request, and strips the prefix from the path so routes
//! never have to know about it.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use axum::{Extension, Router, middleware, routing::get};
//! use localize::{LocaleConfig, RequestLanguage, locale_middleware};
//!
//! async fn contact(Extension(language): Extension<RequestLanguage>) -> String {
//!     format!("contact page in {}", language.0)
//! }
//!
//! let config = Arc::new(LocaleConfig {
//!     default_language: Some("en".to_string()),
//!     available_languages: ["en", "de"].map(str::to_string).into_iter().collect(),
//!     ..LocaleConfig::default()
//! });
//!
//! // GET /de/contact is routed to /contact with language "de" attached.
//! let app: Router = Router::new()
//!     .route("/contact", get(contact))
//!     .layer(middleware::from_fn_with_state(config, locale_middleware));
//! ```

pub mod config;
pub mod middleware;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::LocaleConfig;
pub use middleware::{RequestLanguage, locale_middleware};
pub use utils::{LocalizeError, Resolution, resolve_and_rewrite};
