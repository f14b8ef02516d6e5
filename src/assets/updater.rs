//! Download the asset dataset and replace the local copy.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use super::{AssetConfig, AssetDocument, AssetKind};
use crate::{EnkaError, Result};

/// Refreshes every asset document from its source.
///
/// Each document is downloaded in full, validated as JSON and then written
/// over the local file through a temporary sibling and a rename, so a reader
/// never observes a half-written document.
#[derive(Debug, Clone)]
pub struct AssetUpdater {
    http: reqwest::Client,
    config: AssetConfig,
}

impl AssetUpdater {
    pub fn new(http: reqwest::Client, config: AssetConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Download and persist every Genshin document.
    ///
    /// Stops at the first failure. Documents written before the failure stay
    /// on disk; the rest keep their previous contents.
    pub async fn update(&self) -> Result<()> {
        self.update_documents(&AssetKind::ALL).await
    }

    /// Download and persist the given documents, in order.
    pub async fn update_documents<D: AssetDocument>(&self, documents: &[D]) -> Result<()> {
        info!(dir = %self.config.dir.display(), count = documents.len(), "updating assets");
        for document in documents {
            let url = self.config.source_url(*document);
            let body = self.fetch(&url).await?;
            save_document(&self.config.path(*document), &body).await?;
            debug!(table = document.name(), %url, "asset document updated");
        }
        info!("assets updated");
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(|e| {
            EnkaError::AssetSourceUnreachable {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(EnkaError::AssetUpdate {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| EnkaError::AssetSourceUnreachable {
                url: url.to_string(),
                message: format!("failed to read body: {e}"),
            })?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn save_document(path: &Path, document: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            EnkaError::AssetIo(format!(
                "failed to create asset dir {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_vec(document)?;
    tokio::fs::write(&tmp_path, &json).await.map_err(|e| {
        EnkaError::AssetIo(format!("failed to write {}: {e}", tmp_path.display()))
    })?;
    tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
        EnkaError::AssetIo(format!(
            "failed to rename {} to {}: {e}",
            tmp_path.display(),
            path.display()
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_creates_parent_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pfps.json");

        save_document(&path, &json!({"1": {"iconPath": "x"}}))
            .await
            .unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["1"]["iconPath"], "x");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn unreachable_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig::with_dir(dir.path()).source_base("http://127.0.0.1:1");
        let updater = AssetUpdater::new(reqwest::Client::new(), config);

        let err = updater.update().await.unwrap_err();
        assert!(matches!(err, EnkaError::AssetSourceUnreachable { .. }));
    }
}
