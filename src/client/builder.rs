//! Builder for configuring client instances

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::EnkaClient;
use super::fetcher::DEFAULT_BASE_URL;
use crate::assets::AssetConfig;
use crate::cache::CacheConfig;
use crate::hsr::HsrClient;
use crate::types::Language;
use crate::{EnkaError, Result, version};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main entry point for creating clients.
pub struct Enka;

impl Enka {
    /// Create a new builder for configuring the client.
    pub fn builder() -> EnkaBuilder {
        EnkaBuilder::new()
    }
}

/// Builder for configuring client instances.
///
/// ```rust
/// # use enka::{Enka, Language};
/// # use std::time::Duration;
/// let client = Enka::builder()
///     .language(Language::Japanese)
///     .cache_ttl(Duration::from_secs(120))
///     .build()
///     .unwrap();
/// assert!(!client.is_started());
/// ```
#[derive(Debug, Clone)]
pub struct EnkaBuilder {
    language: Language,
    headers: Vec<(String, String)>,
    cache: CacheConfig,
    base_url: String,
    timeout: Duration,
    assets: AssetConfig,
    refresh_on_start: bool,
}

impl EnkaBuilder {
    pub fn new() -> Self {
        Self {
            language: Language::default(),
            headers: Vec::new(),
            cache: CacheConfig::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            assets: AssetConfig::default(),
            refresh_on_start: true,
        }
    }

    /// Language used for every localized display field.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Add a header sent with every request, overriding the default
    /// `User-Agent` when named so.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the response cache bounds.
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Maximum number of cached responses (default: 100).
    pub fn cache_max_size(mut self, n: u64) -> Self {
        self.cache = self.cache.max_entries(n);
        self
    }

    /// Lifetime of a cached response (default: 60 seconds).
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = self.cache.ttl(ttl);
        self
    }

    /// Serve showcases from a different host (mirrors, tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Where assets are stored and refreshed from.
    pub fn assets(mut self, config: AssetConfig) -> Self {
        self.assets = config;
        self
    }

    /// Whether `start` downloads the asset dataset when it does not load
    /// (default: true). Turn off when the caller refreshes explicitly.
    pub fn refresh_on_start(mut self, enabled: bool) -> Self {
        self.refresh_on_start = enabled;
        self
    }

    /// Build the client. The client is not started.
    pub fn build(self) -> Result<EnkaClient> {
        let http = self.http_client()?;
        Ok(EnkaClient::new(
            self.language,
            http,
            self.base_url,
            self.cache,
            self.assets,
            self.refresh_on_start,
        ))
    }

    /// Build a Star Rail client with the same settings. The client is not
    /// started.
    pub fn build_hsr(self) -> Result<HsrClient> {
        let http = self.http_client()?;
        Ok(HsrClient::new(
            self.language,
            http,
            self.base_url,
            self.cache,
            self.assets,
            self.refresh_on_start,
        ))
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        let headers = header_map(&self.headers)?;
        reqwest::Client::builder()
            .user_agent(version::user_agent())
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| EnkaError::Configuration(format!("failed to build HTTP client: {e}")))
    }
}

impl Default for EnkaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| EnkaError::Configuration(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            EnkaError::Configuration(format!("invalid value for header '{name}': {e}"))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}
