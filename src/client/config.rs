//! Environment resolution for the data access layer.
//!
//! The mode and base URL are resolved once at startup and handed to the
//! [`ApiClient`](crate::client::api::ApiClient) as an explicit [`ApiConfig`].

use dioxus_logger::tracing;

/// Global configuration key selecting test or production mode
pub const MODE_KEY: &str = "ENV";
/// Global configuration key for the base URL of live requests
pub const BASE_URL_KEY: &str = "API_BASE";
/// Global configuration key for the fixture directory used in test mode
pub const FIXTURE_ROOT_KEY: &str = "FIXTURE_ROOT";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FIXTURE_ROOT: &str = "test_data";

/// Where the data access layer sources its data from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read static fixture files instead of calling the API
    Test,
    /// Call the live API
    #[default]
    Production,
}

impl Mode {
    /// Resolve the mode from a raw configuration value.
    ///
    /// Unset and unknown values resolve to [`Mode::Production`].
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Mode::Production;
        };

        match raw.to_ascii_lowercase().as_str() {
            "test" => Mode::Test,
            "prod" | "production" => Mode::Production,
            other => {
                tracing::warn!(
                    value = %other,
                    "Unknown {} value, falling back to production mode",
                    MODE_KEY
                );

                Mode::Production
            }
        }
    }
}

/// Configuration for the data access layer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Data source selection, fixed for the lifetime of the page
    pub mode: Mode,
    /// Base URL live requests are sent to, without a trailing slash
    pub base_url: String,
    /// Directory (or URL prefix in the browser) holding fixture files
    pub fixture_root: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Production,
            base_url: DEFAULT_BASE_URL.to_string(),
            fixture_root: DEFAULT_FIXTURE_ROOT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration with the given mode and base URL
    pub fn new(mode: Mode, base_url: impl Into<String>) -> Self {
        Self {
            mode,
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Override the fixture directory
    pub fn with_fixture_root(mut self, fixture_root: impl Into<String>) -> Self {
        self.fixture_root = fixture_root.into();
        self
    }

    /// Resolve the configuration from a key lookup.
    ///
    /// Keys are [`MODE_KEY`], [`BASE_URL_KEY`] and [`FIXTURE_ROOT_KEY`]. Missing or
    /// empty values fall back to the defaults; resolution never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let defaults = Self::default();
        let mode = Mode::resolve(lookup(MODE_KEY).as_deref());
        let base_url = non_empty(BASE_URL_KEY).unwrap_or(defaults.base_url);
        let fixture_root = non_empty(FIXTURE_ROOT_KEY).unwrap_or(defaults.fixture_root);

        Self::new(mode, base_url).with_fixture_root(fixture_root)
    }

    /// Resolve the configuration from `PERMIT_`-prefixed environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(format!("PERMIT_{}", key)).ok())
    }

    /// Build the absolute URL for an endpoint path
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
