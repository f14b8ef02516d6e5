//! Local asset dataset.
//!
//! The showcase payload only carries opaque identifiers. The asset dataset is
//! a fixed set of JSON documents, cached on disk, that maps those identifiers
//! to display data:
//!
//! | Kind | File | Keyed by |
//! |------|------|----------|
//! | [`AssetKind::TextMap`] | `text_map.json` | language, then text-map hash or stat type |
//! | [`AssetKind::Characters`] | `characters.json` | character ID |
//! | [`AssetKind::Namecards`] | `namecards.json` | namecard ID |
//! | [`AssetKind::Consts`] | `consts.json` | constellation ID |
//! | [`AssetKind::Talents`] | `talents.json` | talent ID |
//! | [`AssetKind::Pfps`] | `pfps.json` | profile picture ID |
//!
//! The Star Rail dataset lives in the same directory under its own file
//! names; see [`crate::hsr`]. Both kinds implement [`AssetDocument`], which is
//! all [`AssetTable`], [`AssetConfig`] and [`AssetUpdater`] need.
//!
//! # Lifecycle
//!
//! [`AssetStore::load`] reads every document from [`AssetConfig::dir`].
//! When any of them is missing or unreadable the client runs
//! [`AssetUpdater::update`] to download the whole set again, then reloads
//! once.

mod store;
mod table;
mod updater;

pub use store::{AssetStore, CharacterRecord, SkillRecord};
pub use table::AssetTable;
pub use updater::AssetUpdater;

use std::path::PathBuf;

/// A JSON document of an asset dataset.
pub trait AssetDocument: Copy + Send + Sync + 'static {
    /// Human-readable table name, used in errors, log fields and metric
    /// labels.
    fn name(&self) -> &'static str;

    /// File name under the asset directory.
    fn file_name(&self) -> &'static str;

    /// Upstream URL the document is downloaded from.
    fn default_source(&self) -> &'static str;
}

/// One document of the asset dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    TextMap,
    Characters,
    Namecards,
    Consts,
    Talents,
    Pfps,
}

impl AssetKind {
    pub const ALL: [AssetKind; 6] = [
        AssetKind::TextMap,
        AssetKind::Characters,
        AssetKind::Namecards,
        AssetKind::Consts,
        AssetKind::Talents,
        AssetKind::Pfps,
    ];

    /// Human-readable table name, used in errors and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::TextMap => "text map",
            AssetKind::Characters => "characters",
            AssetKind::Namecards => "namecards",
            AssetKind::Consts => "constellations",
            AssetKind::Talents => "talents",
            AssetKind::Pfps => "profile pictures",
        }
    }

    /// File name under the asset directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKind::TextMap => "text_map.json",
            AssetKind::Characters => "characters.json",
            AssetKind::Namecards => "namecards.json",
            AssetKind::Consts => "consts.json",
            AssetKind::Talents => "talents.json",
            AssetKind::Pfps => "pfps.json",
        }
    }

    /// Upstream URL the document is downloaded from.
    pub fn default_source(&self) -> &'static str {
        match self {
            AssetKind::TextMap => {
                "https://raw.githubusercontent.com/seriaati/enka-py-assets/main/data/text_map.json"
            }
            AssetKind::Characters => {
                "https://raw.githubusercontent.com/seriaati/enka-py-assets/main/data/characters.json"
            }
            AssetKind::Namecards => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/namecards.json"
            }
            AssetKind::Consts => {
                "https://raw.githubusercontent.com/seriaati/enka-py-assets/main/data/consts.json"
            }
            AssetKind::Talents => {
                "https://raw.githubusercontent.com/seriaati/enka-py-assets/main/data/talents.json"
            }
            AssetKind::Pfps => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/pfps.json"
            }
        }
    }
}

impl AssetDocument for AssetKind {
    fn name(&self) -> &'static str {
        AssetKind::name(self)
    }

    fn file_name(&self) -> &'static str {
        AssetKind::file_name(self)
    }

    fn default_source(&self) -> &'static str {
        AssetKind::default_source(self)
    }
}

/// Where the asset dataset lives locally and where it is refreshed from.
///
/// ```rust
/// # use enka::AssetConfig;
/// let config = AssetConfig::default();
/// assert!(config.dir.ends_with("assets"));
/// ```
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Directory holding the asset documents.
    pub dir: PathBuf,
    /// Mirror serving every document as `{source_base}/{file name}`.
    /// `None` uses each document's upstream URL.
    pub source_base: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: default_asset_dir(),
            source_base: None,
        }
    }
}

impl AssetConfig {
    /// Create a config storing assets in `dir`, refreshed from upstream.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            source_base: None,
        }
    }

    /// Refresh from a mirror instead of upstream.
    pub fn source_base(mut self, base: impl Into<String>) -> Self {
        self.source_base = Some(base.into());
        self
    }

    /// Local path of a document.
    pub fn path(&self, document: impl AssetDocument) -> PathBuf {
        self.dir.join(document.file_name())
    }

    /// URL a document is refreshed from.
    pub fn source_url(&self, document: impl AssetDocument) -> String {
        match &self.source_base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), document.file_name()),
            None => document.default_source().to_string(),
        }
    }
}

/// Default asset directory: `~/.cache/enka/assets`.
fn default_asset_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("enka")
        .join("assets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_base_replaces_upstream() {
        let config = AssetConfig::with_dir("/tmp/a").source_base("http://mirror/data/");
        assert_eq!(
            config.source_url(AssetKind::Pfps),
            "http://mirror/data/pfps.json"
        );
        assert_eq!(
            config.path(AssetKind::TextMap),
            PathBuf::from("/tmp/a/text_map.json")
        );
    }

    #[test]
    fn upstream_sources_end_in_file_name() {
        let config = AssetConfig::with_dir("/tmp/a");
        for kind in AssetKind::ALL {
            assert!(config.source_url(kind).ends_with(kind.file_name()));
        }
    }
}
