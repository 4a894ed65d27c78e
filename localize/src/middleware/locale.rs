//! Locale resolution middleware
//!
//! Resolves the request language from the URL path prefix and the
//! Accept-Language header, attaches it to the request, and strips a
//! detected language prefix from the path before routing.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Uri, header::ACCEPT_LANGUAGE, uri::PathAndQuery},
    middleware::Next,
    response::Response,
};

use crate::config::LocaleConfig;
use crate::utils::{LocalizeError, resolve_and_rewrite};

/// Language decided for the current request.
///
/// Inserted into the request extensions; handlers read it with
/// `Extension<RequestLanguage>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLanguage(pub String);

/// Middleware to resolve the request language and rewrite the path
///
/// Runs before route matching, so a stripped prefix changes which route the
/// request hits. Resolution failures never fail the request; the language
/// extension is simply absent downstream.
pub async fn locale_middleware(
    State(config): State<Arc<LocaleConfig>>,
    mut req: Request,
    next: Next,
) -> Response {
    let accept_language = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let path = req.uri().path().to_owned();

    match resolve_and_rewrite(&path, accept_language.as_deref(), &config) {
        Ok(resolution) => {
            if let Some(new_path) = &resolution.rewritten_path {
                match rewrite_uri(req.uri(), new_path) {
                    Ok(uri) => {
                        tracing::debug!("Rewrote request path {} -> {}", path, new_path);
                        *req.uri_mut() = uri;
                    }
                    Err(err) => {
                        tracing::warn!("Keeping original path {}: {}", path, err);
                    }
                }
            }

            tracing::debug!("Resolved language {} for {}", resolution.language, path);
            req.extensions_mut().insert(RequestLanguage(resolution.language));
        }
        Err(err) => {
            tracing::warn!("Language resolution failed for {}: {}", path, err);
        }
    }

    next.run(req).await
}

/// Rebuild the request URI around a replacement path, keeping the query.
fn rewrite_uri(uri: &Uri, new_path: &str) -> Result<Uri, LocalizeError> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_owned(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(
        path_and_query
            .parse::<PathAndQuery>()
            .map_err(|_| LocalizeError::PathRewrite { path: path_and_query.clone() })?,
    );

    Uri::from_parts(parts).map_err(|_| LocalizeError::PathRewrite { path: new_path.to_owned() })
}
