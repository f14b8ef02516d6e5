//! The full asset dataset and its typed accessors.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::{AssetConfig, AssetKind, AssetTable};
use crate::convert::de;
use crate::types::Language;
use crate::{EnkaError, Result};

/// Character entry of the character table.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub name_text_map_hash: String,
    /// Side icon fragment, e.g. `UI_AvatarIcon_Side_Hutao`.
    pub side_icon_name: String,
    /// Costumes as `(costume ID, side icon fragment)`, in document order.
    pub costumes: Vec<(u32, String)>,
    /// Element name, e.g. `Fire`.
    pub element: Option<String>,
    /// Quality tier, e.g. `QUALITY_ORANGE`.
    pub quality_type: Option<String>,
    /// The character's namecard UI path, e.g. `UI_NameCardPic_Hutao_P`.
    pub namecard_icon: Option<String>,
}

impl CharacterRecord {
    /// Star rarity derived from the quality tier.
    pub fn rarity(&self) -> Option<u8> {
        match self.quality_type.as_deref()? {
            "QUALITY_ORANGE" | "QUALITY_ORANGE_SP" => Some(5),
            "QUALITY_PURPLE" => Some(4),
            _ => None,
        }
    }

    /// Side icon fragment of one of the character's costumes.
    pub fn costume_side_icon(&self, costume_id: u32) -> Option<&str> {
        self.costumes
            .iter()
            .find(|(id, _)| *id == costume_id)
            .map(|(_, icon)| icon.as_str())
    }
}

#[derive(Deserialize)]
struct RawCharacterRecord {
    #[serde(rename = "NameTextMapHash", deserialize_with = "de::string_or_number")]
    name_text_map_hash: String,
    #[serde(rename = "SideIconName")]
    side_icon_name: String,
    #[serde(rename = "Costumes", default)]
    costumes: Map<String, Value>,
    #[serde(rename = "Element", default)]
    element: Option<String>,
    #[serde(rename = "QualityType", default)]
    quality_type: Option<String>,
    #[serde(rename = "NamecardIcon", default)]
    namecard_icon: Option<String>,
}

#[derive(Deserialize)]
struct RawCostume {
    #[serde(rename = "sideIconName")]
    side_icon_name: String,
}

/// Constellation or talent entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillRecord {
    #[serde(rename = "nameTextMapHash", deserialize_with = "de::string_or_number")]
    pub name_text_map_hash: String,
    pub icon: String,
}

/// Owns one [`AssetTable`] per [`AssetKind`] for a fixed language.
///
/// The store is ready only when every table loaded; there is no partially
/// ready state. Accessors assume a ready store and report any gap as a
/// lookup error.
#[derive(Debug)]
pub struct AssetStore {
    language: Language,
    text_map: AssetTable,
    characters: AssetTable,
    namecards: AssetTable,
    consts: AssetTable,
    talents: AssetTable,
    pfps: AssetTable,
}

impl AssetStore {
    /// Create an unloaded store reading documents from `config.dir`.
    pub fn new(language: Language, config: &AssetConfig) -> Self {
        let table = |kind: AssetKind| AssetTable::new(kind, config.path(kind));
        Self {
            language,
            text_map: table(AssetKind::TextMap).with_selector(language.code()),
            characters: table(AssetKind::Characters),
            namecards: table(AssetKind::Namecards),
            consts: table(AssetKind::Consts),
            talents: table(AssetKind::Talents),
            pfps: table(AssetKind::Pfps),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Load every table and report whether all of them loaded.
    ///
    /// Every table is attempted even after a failure, so a later successful
    /// reload never keeps stale data around in the tables that did load.
    pub async fn load(&mut self) -> bool {
        let mut ready = true;
        for table in self.tables_mut() {
            ready &= table.load().await;
        }
        if ready {
            info!(language = %self.language, "asset dataset loaded");
        } else {
            warn!(language = %self.language, "asset dataset incomplete");
        }
        ready
    }

    pub fn is_ready(&self) -> bool {
        self.tables().iter().all(|table| table.is_loaded())
    }

    pub fn table(&self, kind: AssetKind) -> &AssetTable {
        match kind {
            AssetKind::TextMap => &self.text_map,
            AssetKind::Characters => &self.characters,
            AssetKind::Namecards => &self.namecards,
            AssetKind::Consts => &self.consts,
            AssetKind::Talents => &self.talents,
            AssetKind::Pfps => &self.pfps,
        }
    }

    fn tables(&self) -> [&AssetTable; 6] {
        [
            &self.text_map,
            &self.characters,
            &self.namecards,
            &self.consts,
            &self.talents,
            &self.pfps,
        ]
    }

    fn tables_mut(&mut self) -> [&mut AssetTable; 6] {
        [
            &mut self.text_map,
            &mut self.characters,
            &mut self.namecards,
            &mut self.consts,
            &mut self.talents,
            &mut self.pfps,
        ]
    }

    /// Localized text for a text-map hash or stat type key.
    pub fn text(&self, key: &str) -> Result<&str> {
        self.text_map.string(key)
    }

    /// Character record by character ID.
    pub fn character(&self, id: u32) -> Result<CharacterRecord> {
        let key = id.to_string();
        let raw: RawCharacterRecord = self.characters.record(&key)?;

        let costumes = raw
            .costumes
            .into_iter()
            .map(|(costume_id, data)| -> Result<(u32, String)> {
                let malformed = |reason: String| EnkaError::MalformedAsset {
                    table: self.characters.name(),
                    key: key.clone(),
                    reason,
                };
                let id = costume_id
                    .parse::<u32>()
                    .map_err(|e| malformed(format!("costume ID '{costume_id}': {e}")))?;
                let costume = RawCostume::deserialize(&data)
                    .map_err(|e| malformed(format!("costume {costume_id}: {e}")))?;
                Ok((id, costume.side_icon_name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CharacterRecord {
            name_text_map_hash: raw.name_text_map_hash,
            side_icon_name: raw.side_icon_name,
            costumes,
            element: raw.element,
            quality_type: raw.quality_type,
            namecard_icon: raw.namecard_icon,
        })
    }

    /// Namecard icon fragment by namecard ID.
    pub fn namecard_icon(&self, id: u32) -> Result<&str> {
        self.namecards.string_field(&id.to_string(), "icon")
    }

    /// Icon fragment for a newer-format profile picture ID.
    pub fn profile_picture_icon(&self, id: u32) -> Result<&str> {
        self.pfps.string_field(&id.to_string(), "iconPath")
    }

    /// Constellation record by constellation ID.
    pub fn constellation(&self, id: u32) -> Result<SkillRecord> {
        self.consts.record(&id.to_string())
    }

    /// Talent record by talent ID.
    pub fn talent(&self, id: u32) -> Result<SkillRecord> {
        self.talents.record(&id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn write(dir: &Path, kind: AssetKind, value: Value) {
        std::fs::write(dir.join(kind.file_name()), value.to_string()).unwrap();
    }

    fn write_all(dir: &Path) {
        write(
            dir,
            AssetKind::TextMap,
            json!({"en": {"1940919": "Hu Tao", "FIGHT_PROP_HP": "HP"}}),
        );
        write(
            dir,
            AssetKind::Characters,
            json!({"10000046": {
                "NameTextMapHash": 1940919,
                "SideIconName": "UI_AvatarIcon_Side_Hutao",
                "QualityType": "QUALITY_ORANGE",
                "Element": "Fire",
                "Costumes": {
                    "204602": {"sideIconName": "UI_AvatarIcon_Side_HutaoCostumeB"},
                    "204601": {"sideIconName": "UI_AvatarIcon_Side_HutaoCostumeA"}
                }
            }}),
        );
        write(dir, AssetKind::Namecards, json!({"210001": {"icon": "UI_NameCardPic_0_P"}}));
        write(
            dir,
            AssetKind::Consts,
            json!({"661": {"nameTextMapHash": 1, "icon": "UI_Talent_S_Hutao_01"}}),
        );
        write(
            dir,
            AssetKind::Talents,
            json!({"10461": {"nameTextMapHash": "2", "icon": "Skill_A_02"}}),
        );
        write(dir, AssetKind::Pfps, json!({"1": {"iconPath": "UI_AvatarIcon_PlayerBoy_Circle"}}));
    }

    #[tokio::test]
    async fn typed_accessors() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let mut store = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
        assert!(store.load().await);

        assert_eq!(store.text("1940919").unwrap(), "Hu Tao");
        assert_eq!(store.text("FIGHT_PROP_HP").unwrap(), "HP");
        assert_eq!(store.namecard_icon(210001).unwrap(), "UI_NameCardPic_0_P");
        assert_eq!(
            store.profile_picture_icon(1).unwrap(),
            "UI_AvatarIcon_PlayerBoy_Circle"
        );
        assert_eq!(store.constellation(661).unwrap().name_text_map_hash, "1");
        assert_eq!(store.talent(10461).unwrap().icon, "Skill_A_02");

        let hutao = store.character(10000046).unwrap();
        assert_eq!(hutao.name_text_map_hash, "1940919");
        assert_eq!(hutao.rarity(), Some(5));
        assert_eq!(hutao.element.as_deref(), Some("Fire"));
    }

    #[tokio::test]
    async fn costumes_keep_document_order() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let mut store = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
        assert!(store.load().await);

        let ids: Vec<u32> = store
            .character(10000046)
            .unwrap()
            .costumes
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(ids, vec![204602, 204601]);
    }

    #[tokio::test]
    async fn malformed_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        write(dir.path(), AssetKind::Characters, json!({"1": {"SideIconName": 5}}));
        let mut store = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
        assert!(store.load().await);

        assert!(matches!(
            store.character(1),
            Err(EnkaError::MalformedAsset { table: "characters", .. })
        ));
        assert!(matches!(
            store.character(2),
            Err(EnkaError::MissingAsset { table: "characters", .. })
        ));
    }

    #[tokio::test]
    async fn language_without_text_map_section_is_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let mut store = AssetStore::new(Language::Korean, &AssetConfig::with_dir(dir.path()));

        assert!(!store.load().await);
        assert!(!store.is_ready());
        assert!(store.table(AssetKind::Characters).is_loaded());
    }
}
