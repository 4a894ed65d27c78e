use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Language resolution configuration.
///
/// Set once at construction and shared read-only across requests, typically
/// as `Arc<LocaleConfig>` middleware state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Fallback language when no request signal matches.
    pub default_language: Option<String>,
    /// Accepted two-character language codes. Membership is case-sensitive.
    pub available_languages: HashSet<String>,
    /// Strip a detected language prefix from the request path.
    pub patch_requested_url: bool,
    /// Let the browser preference override a URL-detected language.
    pub browser_overwrite_url: bool,
    /// Only rewrite when the path prefix equals the decided language.
    pub patch_only_exact_match: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: None,
            available_languages: HashSet::new(),
            patch_requested_url: true,
            browser_overwrite_url: false,
            patch_only_exact_match: false,
        }
    }
}

impl LocaleConfig {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from localize.toml file
    /// 2. Override with environment variables (prefixed with APP_LOCALE_)
    /// 3. Validate the final configuration
    pub fn load() -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let mut config = if let Some(config_path) = Self::find_config_file() {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            LocaleConfig::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Case-sensitive membership check against the configured language set.
    pub fn is_available(&self, code: &str) -> bool {
        self.available_languages.contains(code)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_LOCALE_DEFAULT_LANGUAGE: fallback language code
    /// - APP_LOCALE_AVAILABLE_LANGUAGES: comma-separated codes, e.g. "en,de"
    /// - APP_LOCALE_PATCH_REQUESTED_URL: strip the language prefix (true/false)
    /// - APP_LOCALE_BROWSER_OVERWRITE_URL: browser overrides URL (true/false)
    /// - APP_LOCALE_PATCH_ONLY_EXACT_MATCH: restrict rewriting (true/false)
    fn apply_env_overrides(&mut self) {
        if let Ok(default) = std::env::var("APP_LOCALE_DEFAULT_LANGUAGE") {
            self.default_language = Some(default);
            tracing::info!(
                "Override default_language from env: {:?}",
                self.default_language
            );
        }

        if let Ok(languages) = std::env::var("APP_LOCALE_AVAILABLE_LANGUAGES") {
            self.available_languages = languages
                .split(',')
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect();
            tracing::info!(
                "Override available_languages from env: {:?}",
                self.available_languages
            );
        }

        if let Ok(patch) = std::env::var("APP_LOCALE_PATCH_REQUESTED_URL")
            && let Ok(val) = patch.parse()
        {
            self.patch_requested_url = val;
            tracing::info!("Override patch_requested_url from env: {}", self.patch_requested_url);
        }

        if let Ok(overwrite) = std::env::var("APP_LOCALE_BROWSER_OVERWRITE_URL")
            && let Ok(val) = overwrite.parse()
        {
            self.browser_overwrite_url = val;
            tracing::info!(
                "Override browser_overwrite_url from env: {}",
                self.browser_overwrite_url
            );
        }

        if let Ok(exact) = std::env::var("APP_LOCALE_PATCH_ONLY_EXACT_MATCH")
            && let Ok(val) = exact.parse()
        {
            self.patch_only_exact_match = val;
            tracing::info!(
                "Override patch_only_exact_match from env: {}",
                self.patch_only_exact_match
            );
        }
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), anyhow::Error> {
        for code in &self.available_languages {
            if code.chars().count() != 2 {
                anyhow::bail!("available language '{}' is not a two-character code", code);
            }
        }

        match &self.default_language {
            None => {
                tracing::warn!("No default language configured");
                tracing::warn!(
                    "Requests without a matching language signal will pass through unresolved"
                );
            }
            Some(default) if default.chars().count() != 2 => {
                tracing::warn!(
                    "Default language '{}' is not a two-character code; \
                     it will never exact-match a URL prefix",
                    default
                );
            }
            Some(_) => {}
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/localize.toml", "localize.toml", "./conf/localize.toml", "./localize.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: LocaleConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
