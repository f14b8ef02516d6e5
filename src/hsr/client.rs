//! Session client for Star Rail showcases.

use std::fmt::Display;

use tracing::{info, warn};

use super::assets::HsrAssetStore;
use super::enrich::HsrEnricher;
use super::types::HsrShowcase;
use super::HsrAssetKind;
use crate::assets::{AssetConfig, AssetUpdater};
use crate::cache::{CacheConfig, ResponseCache};
use crate::client::{HSR_ROUTE, ShowcaseFetcher};
use crate::types::Language;
use crate::{EnkaError, Result};

struct Session {
    fetcher: ShowcaseFetcher,
    assets: HsrAssetStore,
    updater: AssetUpdater,
}

/// Client for fetching enriched Star Rail showcases.
///
/// Built by [`EnkaBuilder::build_hsr`](crate::EnkaBuilder::build_hsr) and
/// driven exactly like [`EnkaClient`](crate::EnkaClient): `start`, fetch,
/// `close`.
///
/// ```rust,no_run
/// # use enka::Enka;
/// # async fn demo() -> enka::Result<()> {
/// let mut client = Enka::builder().build_hsr()?;
/// client.start().await?;
/// let showcase = client.fetch_showcase(800000001).await?;
/// println!("{}", showcase.player.nickname);
/// client.close()?;
/// # Ok(())
/// # }
/// ```
pub struct HsrClient {
    language: Language,
    http: reqwest::Client,
    base_url: String,
    cache: CacheConfig,
    assets: AssetConfig,
    refresh_on_start: bool,
    session: Option<Session>,
}

impl HsrClient {
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

    pub fn assets_ready(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.assets.is_ready())
    }

    /// Open the session. Loads the Star Rail dataset, downloading it once
    /// when it does not load.
    pub async fn start(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }

        let updater = AssetUpdater::new(self.http.clone(), self.assets.clone());
        let mut assets = HsrAssetStore::new(self.language, &self.assets);
        if !assets.load().await {
            if self.refresh_on_start {
                info!("hsr asset dataset incomplete, downloading");
                updater.update_documents(&HsrAssetKind::ALL).await?;
                if !assets.load().await {
                    warn!(
                        dir = %self.assets.dir.display(),
                        "hsr asset dataset still incomplete after update"
                    );
                }
            } else {
                warn!(
                    dir = %self.assets.dir.display(),
                    "hsr asset dataset incomplete, refresh on start disabled"
                );
            }
        }

        let fetcher = ShowcaseFetcher::new(
            self.http.clone(),
            self.base_url.clone(),
            ResponseCache::new(&self.cache),
        )
        .with_route(HSR_ROUTE);
        self.session = Some(Session {
            fetcher,
            assets,
            updater,
        });
        info!(language = %self.language, "hsr session started");
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(EnkaError::NotStarted)?;
        session.fetcher.cache().clear();
        info!("hsr session closed");
        Ok(())
    }

    /// Download the Star Rail dataset and reload it.
    pub async fn update_assets(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(EnkaError::NotStarted)?;
        session.updater.update_documents(&HsrAssetKind::ALL).await?;
        if session.assets.load().await {
            Ok(())
        } else {
            Err(EnkaError::AssetsNotReady)
        }
    }

    /// Fetch and enrich a Star Rail showcase.
    pub async fn fetch_showcase(&self, uid: impl Display) -> Result<HsrShowcase> {
        let session = self.session.as_ref().ok_or(EnkaError::NotStarted)?;
        let body = session.fetcher.fetch(&uid.to_string(), false).await?;
        let mut showcase = HsrShowcase::from_json(&body)?;
        HsrEnricher::new(&session.assets).enrich(&mut showcase)?;
        Ok(showcase)
    }
}
