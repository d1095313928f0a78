// Configuration resolution
//
// Settings come from the process environment with hard-coded fallbacks;
// absent and empty values are treated the same. Resolution never fails:
// a usable value always comes back (definedness over strictness).

use url::Url;

use crate::error::{Error, Result};

/// Default application-under-test URL.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000/";
/// Default WebDriver endpoint (chromedriver's standalone port).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
/// Default browser kind.
pub const DEFAULT_BROWSER: &str = "chrome";
/// Default test-account username.
pub const DEFAULT_USERNAME: &str = "testuser";
/// Default test-account password.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Looks up `key` in an arbitrary key/value source, falling back to
/// `default` when the key is absent or set to the empty string.
pub fn value_from<F>(source: F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match source(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Looks up `key` in the process environment with the same fallback rules.
pub fn value_or(key: &str, default: &str) -> String {
    value_from(|k| std::env::var(k).ok(), key, default)
}

/// Resolved suite configuration.
///
/// Constructed once at process start and passed by reference to the driver
/// factory and scenario helpers; there is no ambient global lookup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the application under test.
    pub app_url: String,
    /// WebDriver server endpoint the factory connects to.
    pub webdriver_url: String,
    /// Browser kind string, parsed by the driver factory.
    pub browser: String,
    /// Default credentials for the known test account.
    pub username: String,
    pub password: String,
    /// Whether browsers are launched headless.
    pub headless: bool,
}

impl Config {
    /// Resolves configuration from `FLIGHTLINE_*` environment variables.
    ///
    /// Keys are prefixed to avoid colliding with ambient shell variables
    /// (`USERNAME` is commonly set by the OS).
    pub fn from_env() -> Self {
        Self::from_source(|k| std::env::var(k).ok())
    }

    /// Resolves configuration from an arbitrary key/value source.
    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let headless = value_from(&source, "FLIGHTLINE_HEADLESS", "true");
        Self {
            app_url: value_from(&source, "FLIGHTLINE_APP_URL", DEFAULT_APP_URL),
            webdriver_url: value_from(&source, "FLIGHTLINE_WEBDRIVER_URL", DEFAULT_WEBDRIVER_URL),
            browser: value_from(&source, "FLIGHTLINE_BROWSER", DEFAULT_BROWSER),
            username: value_from(&source, "FLIGHTLINE_USERNAME", DEFAULT_USERNAME),
            password: value_from(&source, "FLIGHTLINE_PASSWORD", DEFAULT_PASSWORD),
            headless: matches!(headless.as_str(), "true" | "1" | "yes"),
        }
    }

    /// Parsed base URL of the application under test.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.app_url)
            .map_err(|e| Error::InvalidArgument(format!("app URL '{}': {e}", self.app_url)))
    }

    /// Resolves a path against the base URL (e.g. `"book"`).
    pub fn page_url(&self, path: &str) -> Result<String> {
        let joined = self
            .base_url()?
            .join(path)
            .map_err(|e| Error::InvalidArgument(format!("path '{path}': {e}")))?;
        Ok(joined.into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_key_falls_back_to_default() {
        assert_eq!(value_from(source(&[]), "BaseUrl", "http://fallback"), "http://fallback");
    }

    #[test]
    fn empty_value_treated_as_absent() {
        assert_eq!(
            value_from(source(&[("BaseUrl", "")]), "BaseUrl", "http://fallback"),
            "http://fallback"
        );
    }

    #[test]
    fn set_value_wins() {
        assert_eq!(
            value_from(source(&[("BaseUrl", "http://staging")]), "BaseUrl", "http://fallback"),
            "http://staging"
        );
    }

    #[test]
    fn config_defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.app_url, DEFAULT_APP_URL);
        assert_eq!(config.browser, "chrome");
        assert!(config.headless);
        assert!(config.base_url().is_ok());
    }

    #[test]
    fn config_reads_prefixed_keys() {
        let config = Config::from_source(source(&[
            ("FLIGHTLINE_APP_URL", "http://app.internal:8080/"),
            ("FLIGHTLINE_BROWSER", "Firefox"),
            ("FLIGHTLINE_HEADLESS", "false"),
        ]));
        assert_eq!(config.app_url, "http://app.internal:8080/");
        assert_eq!(config.browser, "Firefox");
        assert!(!config.headless);
        // Untouched keys keep their fallbacks.
        assert_eq!(config.username, DEFAULT_USERNAME);
    }

    #[test]
    fn page_url_joins_against_base() {
        let config = Config::default();
        assert_eq!(config.page_url("book").unwrap(), "http://localhost:3000/book");
    }
}
