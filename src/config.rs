//! Configuration loading.
//!
//! Configuration is loaded from a TOML file with the following resolution
//! order:
//! 1. explicit path (e.g. the CLI's `--config <path>`)
//! 2. `~/.enka/config.toml` (user)
//! 3. built-in defaults
//!
//! ```toml
//! [client]
//! language = "ja"
//! cache_max_size = 200
//! cache_ttl_secs = 120
//!
//! [client.headers]
//! User-Agent = "my-bot/1.0"
//!
//! [assets]
//! dir = "/var/cache/enka"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::assets::AssetConfig;
use crate::client::{DEFAULT_BASE_URL, Enka, EnkaBuilder};
use crate::types::Language;
use crate::{EnkaError, Result};

/// Client configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Session settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Display language (default: `en`).
    #[serde(default)]
    pub language: Language,
    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Maximum number of cached responses (default: 100).
    #[serde(default = "default_cache_max_size")]
    pub cache_max_size: u64,
    /// Lifetime of a cached response in seconds (default: 60).
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Showcase service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            headers: BTreeMap::new(),
            cache_max_size: default_cache_max_size(),
            cache_ttl_secs: default_cache_ttl(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_cache_max_size() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Asset storage settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the asset documents.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Mirror to refresh assets from instead of upstream.
    #[serde(default)]
    pub source_base: Option<String>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the user config is used if
    /// present, otherwise the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EnkaError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            EnkaError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(EnkaError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(dirs::home_dir()
            .map(|home| home.join(".enka").join("config.toml"))
            .filter(|path| path.exists()))
    }

    /// Client builder carrying every configured setting.
    pub fn into_builder(self) -> EnkaBuilder {
        let client = self.client;

        let mut assets = match self.assets.dir {
            Some(dir) => AssetConfig::with_dir(dir),
            None => AssetConfig::default(),
        };
        if let Some(base) = self.assets.source_base {
            assets = assets.source_base(base);
        }

        let mut builder = Enka::builder()
            .language(client.language)
            .cache_max_size(client.cache_max_size)
            .cache_ttl(Duration::from_secs(client.cache_ttl_secs))
            .base_url(client.base_url)
            .timeout(Duration::from_secs(client.timeout_secs))
            .assets(assets);
        for (name, value) in client.headers {
            builder = builder.header(name, value);
        }
        builder
    }
}
