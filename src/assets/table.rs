//! A single asset document loaded into a keyed lookup.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::AssetDocument;
use crate::{EnkaError, Result, telemetry};

/// Keyed lookup over one JSON document.
///
/// The table is empty until [`load`](Self::load) succeeds. A load replaces
/// the previous contents wholesale; a failed load leaves the table empty.
#[derive(Debug)]
pub struct AssetTable {
    name: &'static str,
    path: PathBuf,
    /// Top-level key to descend into before indexing (text map language).
    selector: Option<String>,
    data: Option<Map<String, Value>>,
}

impl AssetTable {
    pub fn new(document: impl AssetDocument, path: impl Into<PathBuf>) -> Self {
        Self {
            name: document.name(),
            path: path.into(),
            selector: None,
            data: None,
        }
    }

    /// Index into the sub-mapping under `key` instead of the document root.
    pub fn with_selector(mut self, key: impl Into<String>) -> Self {
        self.selector = Some(key.into());
        self
    }

    /// Table name used in errors, logs and metric labels.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. Returns whether it loaded.
    ///
    /// Never fails past this boundary: a missing file, malformed JSON, a
    /// non-object document or an absent selector key all log a warning and
    /// return `false`.
    pub async fn load(&mut self) -> bool {
        match read_document(&self.path, self.selector.as_deref()).await {
            Ok(data) => {
                debug!(
                    table = self.name,
                    entries = data.len(),
                    "loaded asset table"
                );
                metrics::counter!(
                    telemetry::ASSET_LOADS_TOTAL,
                    "table" => self.name,
                    "status" => "ok"
                )
                .increment(1);
                self.data = Some(data);
                true
            }
            Err(reason) => {
                warn!(
                    table = self.name,
                    path = %self.path.display(),
                    %reason,
                    "failed to load asset table"
                );
                metrics::counter!(
                    telemetry::ASSET_LOADS_TOTAL,
                    "table" => self.name,
                    "status" => "error"
                )
                .increment(1);
                self.data = None;
                false
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Number of entries, `0` when not loaded.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an entry by exact key.
    ///
    /// A missing key, or a table that never loaded, is a `MissingAsset` error.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.data
            .as_ref()
            .and_then(|data| data.get(key))
            .ok_or_else(|| EnkaError::MissingAsset {
                table: self.name,
                key: key.to_string(),
            })
    }

    /// Deserialize the entry under `key`.
    pub fn record<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        T::deserialize(self.get(key)?).map_err(|e| self.malformed(key, e.to_string()))
    }

    /// The string field `field` of the entry under `key`.
    pub fn string_field(&self, key: &str, field: &str) -> Result<&str> {
        let value = self
            .get(key)?
            .get(field)
            .ok_or_else(|| self.malformed(key, format!("no `{field}` field")))?;
        value
            .as_str()
            .ok_or_else(|| self.malformed(key, format!("`{field}` is not a string")))
    }

    /// The entry under `key`, which must itself be a string.
    pub fn string(&self, key: &str) -> Result<&str> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| self.malformed(key, "expected a string".to_string()))
    }

    fn malformed(&self, key: &str, reason: String) -> EnkaError {
        EnkaError::MalformedAsset {
            table: self.name,
            key: key.to_string(),
            reason,
        }
    }
}

async fn read_document(
    path: &Path,
    selector: Option<&str>,
) -> std::result::Result<Map<String, Value>, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("read failed: {e}"))?;
    let document: Value =
        serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}"))?;

    let document = match selector {
        Some(key) => match document {
            Value::Object(mut root) => root
                .remove(key)
                .ok_or_else(|| format!("no '{key}' section"))?,
            _ => return Err("document is not a JSON object".to_string()),
        },
        None => document,
    };

    match document {
        Value::Object(map) => Ok(map),
        _ => Err("document is not a JSON object".to_string()),
    }
}
