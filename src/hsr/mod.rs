//! Honkai: Star Rail showcases.
//!
//! The service serves Star Rail showcases from `/api/hsr/uid/{uid}` in a
//! schema of its own. This module mirrors the Genshin side of the crate with
//! its own wire conversion, asset dataset, enrichment pass and session
//! client, while sharing the transport, the response cache and the asset
//! table machinery.
//!
//! | Kind | File | Keyed by |
//! |------|------|----------|
//! | [`HsrAssetKind::TextMap`] | `hsr_text_map.json` | language, then text-map hash |
//! | [`HsrAssetKind::Characters`] | `hsr_characters.json` | character ID |
//! | [`HsrAssetKind::LightCones`] | `hsr_light_cones.json` | light cone ID |
//! | [`HsrAssetKind::Relics`] | `hsr_relics.json` | relic ID |
//! | [`HsrAssetKind::SkillTree`] | `hsr_skill_tree.json` | trace point ID |
//!
//! Computed character stats are not provided; they need the game's stat
//! scaling tables, which the dataset does not carry.

mod assets;
mod client;
mod convert;
mod enrich;
mod types;

pub use assets::{HsrAssetStore, HsrCharacterRecord, TraceRecord};
pub use client::HsrClient;
pub use enrich::HsrEnricher;
pub use types::{
    ASCENSION_TO_MAX_LEVEL, HsrCharacter, HsrPlayer, HsrPlayerStats, HsrShowcase, HsrStat,
    LightCone, Relic, RelicSubAffix, RelicType, Trace, hsr_icon_url,
};

use crate::assets::AssetDocument;

/// One document of the Star Rail asset dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HsrAssetKind {
    TextMap,
    Characters,
    LightCones,
    Relics,
    SkillTree,
}

impl HsrAssetKind {
    pub const ALL: [HsrAssetKind; 5] = [
        HsrAssetKind::TextMap,
        HsrAssetKind::Characters,
        HsrAssetKind::LightCones,
        HsrAssetKind::Relics,
        HsrAssetKind::SkillTree,
    ];
}

impl AssetDocument for HsrAssetKind {
    fn name(&self) -> &'static str {
        match self {
            HsrAssetKind::TextMap => "hsr text map",
            HsrAssetKind::Characters => "hsr characters",
            HsrAssetKind::LightCones => "hsr light cones",
            HsrAssetKind::Relics => "hsr relics",
            HsrAssetKind::SkillTree => "hsr skill tree",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            HsrAssetKind::TextMap => "hsr_text_map.json",
            HsrAssetKind::Characters => "hsr_characters.json",
            HsrAssetKind::LightCones => "hsr_light_cones.json",
            HsrAssetKind::Relics => "hsr_relics.json",
            HsrAssetKind::SkillTree => "hsr_skill_tree.json",
        }
    }

    fn default_source(&self) -> &'static str {
        match self {
            HsrAssetKind::TextMap => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/hsr/hsr.json"
            }
            HsrAssetKind::Characters => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/hsr/honker_characters.json"
            }
            HsrAssetKind::LightCones => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/hsr/honker_weps.json"
            }
            HsrAssetKind::Relics => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/hsr/honker_relics.json"
            }
            HsrAssetKind::SkillTree => {
                "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/hsr/honker_skilltree.json"
            }
        }
    }
}
