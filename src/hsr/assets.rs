//! The Star Rail asset dataset and its typed accessors.

use serde::Deserialize;
use tracing::{info, warn};

use super::HsrAssetKind;
use crate::assets::{AssetConfig, AssetTable};
use crate::convert::de;
use crate::types::Language;
use crate::Result;

/// Character entry of the Star Rail character table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsrCharacterRecord {
    pub name_text_map_hash: String,
    pub rarity: u8,
    /// Combat type, e.g. `Thunder`.
    pub element: String,
    /// Path, e.g. `Mage`.
    pub path: String,
}

#[derive(Deserialize)]
struct RawCharacterRecord {
    #[serde(rename = "AvatarName")]
    avatar_name: RawHash,
    #[serde(rename = "Rarity")]
    rarity: u8,
    #[serde(rename = "Element")]
    element: String,
    #[serde(rename = "AvatarBaseType")]
    path: String,
}

#[derive(Deserialize)]
struct RawHash {
    #[serde(rename = "Hash", deserialize_with = "de::string_or_number")]
    hash: String,
}

#[derive(Deserialize)]
struct RawRarity {
    #[serde(rename = "Rarity")]
    rarity: u8,
}

#[derive(Deserialize)]
struct RawRelicRecord {
    #[serde(rename = "Rarity")]
    rarity: u8,
    #[serde(rename = "Icon")]
    icon: String,
}

/// Skill tree entry of a trace point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRecord {
    pub anchor: String,
    /// Icon file name, e.g. `SkillIcon_1102_Normal.png`.
    pub icon: String,
    pub point_type: u32,
    pub max_level: u32,
}

/// Owns one [`AssetTable`] per [`HsrAssetKind`] for a fixed language.
#[derive(Debug)]
pub struct HsrAssetStore {
    language: Language,
    text_map: AssetTable,
    characters: AssetTable,
    light_cones: AssetTable,
    relics: AssetTable,
    skill_tree: AssetTable,
}

impl HsrAssetStore {
    pub fn new(language: Language, config: &AssetConfig) -> Self {
        let table = |kind: HsrAssetKind| AssetTable::new(kind, config.path(kind));
        Self {
            language,
            // Star Rail keys its text map by lowercase language code.
            text_map: table(HsrAssetKind::TextMap)
                .with_selector(language.code().to_ascii_lowercase()),
            characters: table(HsrAssetKind::Characters),
            light_cones: table(HsrAssetKind::LightCones),
            relics: table(HsrAssetKind::Relics),
            skill_tree: table(HsrAssetKind::SkillTree),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Load every table and report whether all of them loaded.
    pub async fn load(&mut self) -> bool {
        let mut ready = true;
        for table in [
            &mut self.text_map,
            &mut self.characters,
            &mut self.light_cones,
            &mut self.relics,
            &mut self.skill_tree,
        ] {
            ready &= table.load().await;
        }
        if ready {
            info!(language = %self.language, "hsr asset dataset loaded");
        } else {
            warn!(language = %self.language, "hsr asset dataset incomplete");
        }
        ready
    }

    pub fn is_ready(&self) -> bool {
        [
            &self.text_map,
            &self.characters,
            &self.light_cones,
            &self.relics,
            &self.skill_tree,
        ]
        .iter()
        .all(|table| table.is_loaded())
    }

    /// Localized text for a text-map hash.
    pub fn text(&self, key: &str) -> Result<&str> {
        self.text_map.string(key)
    }

    pub fn character(&self, id: u32) -> Result<HsrCharacterRecord> {
        let raw: RawCharacterRecord = self.characters.record(&id.to_string())?;
        Ok(HsrCharacterRecord {
            name_text_map_hash: raw.avatar_name.hash,
            rarity: raw.rarity,
            element: raw.element,
            path: raw.path,
        })
    }

    pub fn light_cone_rarity(&self, id: u32) -> Result<u8> {
        let raw: RawRarity = self.light_cones.record(&id.to_string())?;
        Ok(raw.rarity)
    }

    /// Rarity and icon fragment of a relic.
    pub fn relic(&self, id: u32) -> Result<(u8, String)> {
        let raw: RawRelicRecord = self.relics.record(&id.to_string())?;
        Ok((raw.rarity, raw.icon))
    }

    pub fn trace(&self, id: u32) -> Result<TraceRecord> {
        self.skill_tree.record(&id.to_string())
    }
}
