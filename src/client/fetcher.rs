//! Showcase HTTP fetcher in front of the response cache.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::cache::ResponseCache;
use crate::error::ApiError;
use crate::{EnkaError, Result, telemetry};

/// Default showcase service base URL.
pub const DEFAULT_BASE_URL: &str = "https://enka.network";

/// Path prefix of Genshin Impact showcases.
pub const GENSHIN_ROUTE: &str = "/api/uid";

/// Path prefix of Honkai: Star Rail showcases.
pub const HSR_ROUTE: &str = "/api/hsr/uid";

/// Fetches raw showcase bodies, consulting the cache first.
#[derive(Clone)]
pub struct ShowcaseFetcher {
    http: reqwest::Client,
    base_url: String,
    route: &'static str,
    cache: ResponseCache,
}

impl ShowcaseFetcher {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, cache: ResponseCache) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            route: GENSHIN_ROUTE,
            cache,
        }
    }

    /// Serve showcases from another path prefix on the same service.
    pub fn with_route(mut self, route: &'static str) -> Self {
        self.route = route;
        self
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Request URL for a UID. Doubles as the cache key.
    pub fn showcase_url(&self, uid: &str, info_only: bool) -> String {
        let base = self.base_url.trim_end_matches('/');
        let route = self.route;
        if info_only {
            format!("{base}{route}/{uid}?info")
        } else {
            format!("{base}{route}/{uid}")
        }
    }

    /// Fetch the decoded body for a UID.
    ///
    /// A cached body is returned without touching the network. Otherwise one
    /// GET is issued; any status other than 200 maps to an [`ApiError`] and
    /// is never retried.
    #[instrument(name = "enka.fetch", skip(self))]
    pub async fn fetch(&self, uid: &str, info_only: bool) -> Result<Arc<Value>> {
        let url = self.showcase_url(uid, info_only);
        if let Some(body) = self.cache.get(&url).await {
            debug!(%url, "showcase served from cache");
            return Ok(body);
        }

        let start = Instant::now();
        let result = self.request(&url).await;
        record_request(start, &result);

        let body = Arc::new(result?);
        self.cache.insert(url, body.clone()).await;
        Ok(body)
    }

    async fn request(&self, url: &str) -> Result<Value> {
        debug!(%url, "requesting showcase");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| EnkaError::Http(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::from_status(status.as_u16()).into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| EnkaError::Http(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn record_request(start: Instant, result: &Result<Value>) {
    let status = match result {
        Ok(_) => "ok".to_string(),
        Err(EnkaError::Api(api)) => api.status().to_string(),
        Err(_) => "error".to_string(),
    };
    metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => status).increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
}
