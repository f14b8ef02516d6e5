//! Session client for the showcase service.
//!
//! [`EnkaClient`] owns the HTTP transport, the response cache and the asset
//! store for one session. Nothing is usable before [`EnkaClient::start`] or
//! after [`EnkaClient::close`]; calls outside that window fail with
//! [`EnkaError::NotStarted`](crate::EnkaError::NotStarted).

mod builder;
mod fetcher;

pub use builder::{Enka, EnkaBuilder};
pub use fetcher::{DEFAULT_BASE_URL, GENSHIN_ROUTE, HSR_ROUTE, ShowcaseFetcher};

use std::fmt::Display;

use tracing::{info, warn};

use crate::assets::{AssetConfig, AssetStore, AssetUpdater};
use crate::cache::{CacheConfig, ResponseCache};
use crate::convert;
use crate::enrich::Enricher;
use crate::types::{Language, ShowcaseResponse};
use crate::{EnkaError, Result};

/// State that only exists between `start` and `close`.
struct Session {
    fetcher: ShowcaseFetcher,
    assets: AssetStore,
    updater: AssetUpdater,
}

/// Client for fetching enriched showcases.
///
/// ```rust,no_run
/// # use enka::Enka;
/// # async fn demo() -> enka::Result<()> {
/// let mut client = Enka::builder().build()?;
/// client.start().await?;
/// let showcase = client.fetch_showcase(901211014, false).await?;
/// println!("{}", showcase.player.nickname);
/// client.close()?;
/// # Ok(())
/// # }
/// ```
pub struct EnkaClient {
    language: Language,
    http: reqwest::Client,
    base_url: String,
    cache: CacheConfig,
    assets: AssetConfig,
    refresh_on_start: bool,
    session: Option<Session>,
}

impl EnkaClient {
    pub(crate) fn new(
        language: Language,
        http: reqwest::Client,
        base_url: String,
        cache: CacheConfig,
        assets: AssetConfig,
        refresh_on_start: bool,
    ) -> Self {
        Self {
            language,
            http,
            base_url,
            cache,
            assets,
            refresh_on_start,
            session: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the asset dataset is fully loaded. `false` before `start`.
    pub fn assets_ready(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.assets.is_ready())
    }

    /// Open the session: create the cache and load the asset dataset.
    ///
    /// When the dataset does not load, it is downloaded once and reloaded.
    /// A failed download is returned and the client stays closed. A dataset
    /// that still does not load after a successful download only logs a
    /// warning; showcases then fail with `AssetsNotReady` until
    /// [`update_assets`](Self::update_assets) succeeds.
    ///
    /// With [`refresh_on_start`](super::EnkaBuilder::refresh_on_start)
    /// turned off, nothing is downloaded and an incomplete dataset only logs
    /// a warning.
    ///
    /// Calling `start` on a started client does nothing.
    pub async fn start(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }

        let updater = AssetUpdater::new(self.http.clone(), self.assets.clone());
        let mut assets = AssetStore::new(self.language, &self.assets);
        if !assets.load().await {
            if self.refresh_on_start {
                info!("asset dataset incomplete, downloading");
                updater.update().await?;
                if !assets.load().await {
                    warn!(
                        dir = %self.assets.dir.display(),
                        "asset dataset still incomplete after update"
                    );
                }
            } else {
                warn!(
                    dir = %self.assets.dir.display(),
                    "asset dataset incomplete, refresh on start disabled"
                );
            }
        }

        let fetcher = ShowcaseFetcher::new(
            self.http.clone(),
            self.base_url.clone(),
            ResponseCache::new(&self.cache),
        );
        self.session = Some(Session {
            fetcher,
            assets,
            updater,
        });
        info!(language = %self.language, "session started");
        Ok(())
    }

    /// Close the session and drop every cached response.
    pub fn close(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(EnkaError::NotStarted)?;
        session.fetcher.cache().clear();
        info!("session closed");
        Ok(())
    }

    /// Download the asset dataset and reload it.
    pub async fn update_assets(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(EnkaError::NotStarted)?;
        session.updater.update().await?;
        if session.assets.load().await {
            Ok(())
        } else {
            Err(EnkaError::AssetsNotReady)
        }
    }

    /// Fetch and enrich a showcase.
    ///
    /// With `info_only`, the service omits the character list. The two
    /// variants are cached independently.
    pub async fn fetch_showcase(
        &self,
        uid: impl Display,
        info_only: bool,
    ) -> Result<ShowcaseResponse> {
        let session = self.session.as_ref().ok_or(EnkaError::NotStarted)?;
        let body = session
            .fetcher
            .fetch(&uid.to_string(), info_only)
            .await?;
        let mut showcase = convert::showcase_from_json(&body)?;
        Enricher::new(&session.assets).enrich(&mut showcase)?;
        Ok(showcase)
    }
}
