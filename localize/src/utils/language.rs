//! Language signal extraction and resolution
//!
//! Pure functions over (path, Accept-Language header, configuration). No
//! request state is touched here; the middleware in
//! [`crate::middleware::locale`] applies the outcome to the request.

use crate::config::LocaleConfig;
use crate::utils::error::LocalizeError;

/// Outcome of resolving a request's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The decided language, a member of the available set or the default.
    pub language: String,
    /// Replacement request path, present only when a rewrite is warranted.
    pub rewritten_path: Option<String>,
}

/// Candidate codes from the Accept-Language header, in header order.
///
/// Each comma-separated entry contributes its first two characters; quality
/// weights and region subtags are ignored, so "de-AT;q=0.9" yields "de".
/// A missing header yields no candidates.
pub fn browser_languages(header: Option<&str>) -> Vec<String> {
    let Some(value) = header else {
        return Vec::new();
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.chars().take(2).collect())
        .collect()
}

/// Candidate code from the URL path, if a `/XY/...` prefix is present.
///
/// The check is strictly syntactic: character index 3 must be a separator,
/// so `/en/page` matches while `/eng/page`, `/en` and `en/page` do not.
/// Whether the candidate is a supported language is the resolver's concern.
pub fn url_language(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.first() != Some(&b'/') || bytes.get(3) != Some(&b'/') {
        return None;
    }
    // get() rejects a range that would split a multi-byte character
    path.get(1..3).map(str::to_string)
}

/// Decide the request language from the extracted signals.
///
/// The URL candidate is authoritative unless `browser_overwrite_url` lets
/// the first supported browser candidate take precedence. An unsupported
/// URL candidate falls back to the default, never to later browser entries.
pub fn resolve_language(
    browser: &[String],
    url: Option<&str>,
    config: &LocaleConfig,
) -> Result<String, LocalizeError> {
    let browser_match = browser.iter().find(|code| config.is_available(code));

    let decided = match url {
        None => browser_match.cloned().or_else(|| config.default_language.clone()),
        Some(url_lang) => {
            if config.browser_overwrite_url && browser_match.is_some() {
                browser_match.cloned()
            } else if config.is_available(url_lang) {
                Some(url_lang.to_string())
            } else {
                config.default_language.clone()
            }
        }
    };

    decided.ok_or(LocalizeError::NoLanguageResolvable)
}

/// Replacement path with the language prefix stripped, when rewriting applies.
///
/// Requires `patch_requested_url` and a syntactically detected prefix; the
/// prefix does not have to be a supported language unless
/// `patch_only_exact_match` restricts rewriting to `/<decided>/...` paths.
pub fn rewrite_path(path: &str, decided: &str, config: &LocaleConfig) -> Option<String> {
    if !config.patch_requested_url || url_language(path).is_none() {
        return None;
    }

    if config.patch_only_exact_match && !path.starts_with(&format!("/{decided}/")) {
        return None;
    }

    Some(normalize_remainder(&path[3..]))
}

// An empty remainder or piled-up separators would hand the router a
// malformed path.
fn normalize_remainder(remainder: &str) -> String {
    let trimmed = remainder.trim_start_matches('/');
    if trimmed.is_empty() { "/".to_string() } else { format!("/{trimmed}") }
}

/// Run both extractors and the decision policy for one request.
pub fn resolve_and_rewrite(
    path: &str,
    accept_language: Option<&str>,
    config: &LocaleConfig,
) -> Result<Resolution, LocalizeError> {
    let browser = browser_languages(accept_language);
    let url = url_language(path);
    let language = resolve_language(&browser, url.as_deref(), config)?;
    let rewritten_path = rewrite_path(path, &language, config);

    Ok(Resolution { language, rewritten_path })
}
