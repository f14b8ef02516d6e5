//! Public Star Rail showcase types.

use serde::Serialize;

use crate::types::icon::UI_BASE_URL;

/// Max level for each ascension phase.
pub const ASCENSION_TO_MAX_LEVEL: [u32; 7] = [20, 30, 40, 50, 60, 70, 80];

/// Stat types shown as percentages.
const PERCENT_STAT_TYPES: &[&str] = &[
    "HPAddedRatio",
    "AttackAddedRatio",
    "DefenceAddedRatio",
    "SpeedAddedRatio",
    "CriticalChance",
    "CriticalChanceBase",
    "CriticalDamage",
    "CriticalDamageBase",
    "BreakDamageAddedRatio",
    "BreakDamageAddedRatioBase",
    "HealRatio",
    "HealRatioBase",
    "SPRatio",
    "SPRatioBase",
    "StatusProbability",
    "StatusProbabilityBase",
    "StatusResistance",
    "StatusResistanceBase",
    "PhysicalAddedRatio",
    "FireAddedRatio",
    "IceAddedRatio",
    "ThunderAddedRatio",
    "WindAddedRatio",
    "QuantumAddedRatio",
    "ImaginaryAddedRatio",
];

fn max_level_for(ascension: u32) -> u32 {
    let index = (ascension as usize).min(ASCENSION_TO_MAX_LEVEL.len() - 1);
    ASCENSION_TO_MAX_LEVEL[index]
}

/// Build the URL of a Star Rail UI image, e.g.
/// `SpriteOutput/ItemIcon/RelicIcons/IconRelic_101_1` →
/// `https://enka.network/ui/hsr/SpriteOutput/ItemIcon/RelicIcons/IconRelic_101_1.png`.
pub fn hsr_icon_url(fragment: &str) -> String {
    format!("{UI_BASE_URL}/hsr/{fragment}.png")
}

/// A Star Rail showcase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsrShowcase {
    pub uid: String,
    /// Seconds the service asks clients to wait before refetching.
    pub ttl: u32,
    pub player: HsrPlayer,
    pub characters: Vec<HsrCharacter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsrPlayer {
    pub uid: u64,
    pub nickname: String,
    pub signature: String,
    /// Trailblaze level.
    pub level: u32,
    pub equilibrium_level: u32,
    pub friend_count: u32,
    pub stats: HsrPlayerStats,
    /// Whether the character list is public.
    pub characters_public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HsrPlayerStats {
    pub achievement_count: u32,
    pub light_cone_count: u32,
    pub character_count: u32,
    pub max_simulated_universe_world: u32,
    // Reported since game version 2.2.
    pub book_count: Option<u32>,
    pub relic_count: Option<u32>,
    pub music_count: Option<u32>,
}

/// A showcased Star Rail character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsrCharacter {
    pub id: u32,
    pub level: u32,
    pub ascension: u32,
    pub eidolons_unlocked: u32,
    /// Whether this is the player's support character.
    pub is_assist: bool,
    pub traces: Vec<Trace>,
    pub light_cone: Option<LightCone>,
    pub relics: Vec<Relic>,

    // Display fields, set by enrichment.
    pub name: Option<String>,
    pub rarity: Option<u8>,
    /// Combat type, e.g. `Thunder`.
    pub element: Option<String>,
    /// Path, e.g. `Mage`.
    pub path: Option<String>,
}

impl HsrCharacter {
    pub fn max_level(&self) -> u32 {
        max_level_for(self.ascension)
    }

    pub fn round_icon(&self) -> String {
        hsr_icon_url(&format!("SpriteOutput/AvatarRoundIcon/{}", self.id))
    }

    pub fn gacha_art(&self) -> String {
        hsr_icon_url(&format!("SpriteOutput/AvatarDrawCard/{}", self.id))
    }
}

/// A trace (skill tree point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub id: u32,
    pub level: u32,

    // Display fields, set by enrichment.
    pub anchor: Option<String>,
    pub icon: Option<String>,
    pub point_type: Option<u32>,
    pub max_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCone {
    pub id: u32,
    pub level: u32,
    pub ascension: u32,
    pub superimpose: u32,
    pub name_text_map_hash: String,
    pub stats: Vec<HsrStat>,

    // Display fields, set by enrichment.
    pub name: Option<String>,
    pub rarity: Option<u8>,
}

impl LightCone {
    pub fn max_level(&self) -> u32 {
        max_level_for(self.ascension)
    }

    pub fn icon(&self) -> String {
        hsr_icon_url(&format!("SpriteOutput/LightConeFigures/{}", self.id))
    }
}

/// Relic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelicType {
    Head,
    Hands,
    Body,
    Feet,
    PlanarSphere,
    LinkRope,
}

impl RelicType {
    /// Slot for the wire's numeric relic type (1 to 6).
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            1 => Some(RelicType::Head),
            2 => Some(RelicType::Hands),
            3 => Some(RelicType::Body),
            4 => Some(RelicType::Feet),
            5 => Some(RelicType::PlanarSphere),
            6 => Some(RelicType::LinkRope),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relic {
    pub id: u32,
    pub level: u32,
    pub relic_type: RelicType,
    pub main_affix_id: u32,
    pub set_id: u32,
    pub set_name_text_map_hash: String,
    /// Main stat first, then the sub stats.
    pub stats: Vec<HsrStat>,
    pub sub_affixes: Vec<RelicSubAffix>,

    // Display fields, set by enrichment.
    pub set_name: Option<String>,
    pub icon: Option<String>,
    pub rarity: Option<u8>,
}

impl Relic {
    pub fn main_stat(&self) -> Option<&HsrStat> {
        self.stats.first()
    }

    pub fn sub_stats(&self) -> &[HsrStat] {
        self.stats.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelicSubAffix {
    pub id: u32,
    /// Number of rolls.
    pub count: u32,
    pub step: Option<u32>,
}

/// A stat on a light cone or relic, keyed by its property name
/// (e.g. `HPDelta`, `CriticalChanceBase`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsrStat {
    pub stat_type: String,
    pub value: f64,
}

impl HsrStat {
    pub fn is_percentage(&self) -> bool {
        PERCENT_STAT_TYPES.contains(&self.stat_type.as_str())
    }

    /// Display value, rounded down: `12.3%` for percentages, `134.5` for
    /// speed, `1024` for other flat stats.
    pub fn formatted_value(&self) -> String {
        if self.is_percentage() {
            format!("{:.1}%", round_down(self.value * 100.0, 1))
        } else if matches!(self.stat_type.as_str(), "SpeedDelta" | "BaseSpeed") {
            let text = format!("{:.2}", round_down(self.value, 2));
            let text = text.trim_end_matches('0');
            if text.ends_with('.') {
                format!("{text}0")
            } else {
                text.to_string()
            }
        } else {
            format!("{}", self.value.floor() as i64)
        }
    }
}

fn round_down(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(stat_type: &str, value: f64) -> HsrStat {
        HsrStat {
            stat_type: stat_type.to_string(),
            value,
        }
    }

    #[test]
    fn formatted_values_round_down() {
        assert_eq!(stat("CriticalChanceBase", 0.1296).formatted_value(), "12.9%");
        assert_eq!(stat("HPDelta", 705.6).formatted_value(), "705");
        assert_eq!(stat("SpeedDelta", 25.032).formatted_value(), "25.03");
        assert_eq!(stat("SpeedDelta", 4.0).formatted_value(), "4.0");
        assert_eq!(stat("BaseSpeed", 101.5).formatted_value(), "101.5");
    }

    #[test]
    fn relic_stats_split_main_from_subs() {
        let relic = Relic {
            id: 61011,
            level: 15,
            relic_type: RelicType::Head,
            main_affix_id: 1,
            set_id: 101,
            set_name_text_map_hash: "1".to_string(),
            stats: vec![stat("HPDelta", 705.6), stat("SpeedDelta", 2.0)],
            sub_affixes: Vec::new(),
            set_name: None,
            icon: None,
            rarity: None,
        };
        assert_eq!(relic.main_stat().map(|s| s.stat_type.as_str()), Some("HPDelta"));
        assert_eq!(relic.sub_stats().len(), 1);

        let bare = Relic {
            stats: Vec::new(),
            ..relic
        };
        assert!(bare.main_stat().is_none());
        assert!(bare.sub_stats().is_empty());
    }

    #[test]
    fn relic_type_covers_all_slots() {
        assert_eq!(RelicType::from_wire(1), Some(RelicType::Head));
        assert_eq!(RelicType::from_wire(6), Some(RelicType::LinkRope));
        assert_eq!(RelicType::from_wire(7), None);
    }

    #[test]
    fn max_level_is_capped() {
        let character = HsrCharacter {
            id: 1001,
            level: 80,
            ascension: 9,
            eidolons_unlocked: 0,
            is_assist: false,
            traces: Vec::new(),
            light_cone: None,
            relics: Vec::new(),
            name: None,
            rarity: None,
            element: None,
            path: None,
        };
        assert_eq!(character.max_level(), 80);
        assert_eq!(
            character.round_icon(),
            "https://enka.network/ui/hsr/SpriteOutput/AvatarRoundIcon/1001.png"
        );
    }
}
