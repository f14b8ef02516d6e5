//! Showcased characters and their equipment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::fight_prop::{FightProp, FightPropType};
use super::icon::{self, Namecard};
use super::stat::Stat;

/// Max level for each ascension phase.
pub const ASCENSION_TO_MAX_LEVEL: [u32; 7] = [20, 40, 50, 60, 70, 80, 90];

fn max_level_for(ascension: u32) -> u32 {
    let index = (ascension as usize).min(ASCENSION_TO_MAX_LEVEL.len() - 1);
    ASCENSION_TO_MAX_LEVEL[index]
}

/// A character in the showcase, with equipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: u32,
    pub level: u32,
    pub ascension: u32,
    pub friendship_level: u32,
    pub skill_depot_id: u32,
    pub costume_id: Option<u32>,
    pub weapon: Weapon,
    pub artifacts: Vec<Artifact>,
    pub constellations: Vec<Constellation>,
    pub talents: Vec<Talent>,
    /// Computed combat properties, ordered by fight prop ID.
    pub fight_props: Vec<FightProp>,
    /// Extra talent levels granted by constellations, keyed by proud skill
    /// group ID.
    pub talent_extra_levels: BTreeMap<u32, u32>,

    // Display fields, set by enrichment.
    pub name: Option<String>,
    pub side_icon: Option<String>,
    /// Every costume the character owns, in asset-document order.
    pub costumes: Vec<Costume>,
    /// The costume currently worn.
    pub costume: Option<Costume>,
    pub element: Option<String>,
    pub rarity: Option<u8>,
    /// The character's own namecard. Travelers have none.
    pub namecard: Option<Namecard>,
}

impl Character {
    pub fn max_level(&self) -> u32 {
        max_level_for(self.ascension)
    }

    /// Fight prop of the given type, if reported.
    pub fn fight_prop(&self, prop_type: FightPropType) -> Option<&FightProp> {
        self.fight_props.iter().find(|prop| prop.prop_type == prop_type)
    }

    /// The highest physical or elemental damage bonus. The first one in ID
    /// order wins a tie.
    pub fn highest_dmg_bonus_stat(&self) -> Option<&FightProp> {
        self.fight_props
            .iter()
            .filter(|prop| prop.prop_type.is_dmg_bonus())
            .fold(None, |best: Option<&FightProp>, prop| match best {
                Some(best) if best.value >= prop.value => Some(best),
                _ => Some(prop),
            })
    }

    /// Number of unlocked constellations.
    pub fn constellations_unlocked(&self) -> usize {
        self.constellations.iter().filter(|c| c.unlocked).count()
    }

    /// Front icon URL, once the side icon is resolved.
    pub fn front_icon(&self) -> Option<String> {
        self.side_icon.as_deref().map(icon::front_icon)
    }

    /// Circle icon URL, once the side icon is resolved.
    pub fn circle_icon(&self) -> Option<String> {
        self.side_icon.as_deref().map(icon::circle_icon)
    }

    /// Splash art URL, once the side icon is resolved.
    pub fn gacha_art(&self) -> Option<String> {
        self.side_icon
            .as_deref()
            .map(|side| icon::gacha_art(side, false))
    }
}

/// A character costume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costume {
    pub id: u32,
    pub side_icon: String,
}

impl Costume {
    pub fn gacha_art(&self) -> String {
        icon::gacha_art(&self.side_icon, true)
    }
}

/// A character's weapon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    pub id: u32,
    pub level: u32,
    pub ascension: u32,
    /// Refinement rank, 1 through 5.
    pub refinement: u32,
    pub rarity: u8,
    /// Text-map hash of the name, as sent by the service.
    pub name_text_map_hash: String,
    /// UI icon fragment, as sent by the service.
    pub icon_name: String,
    pub stats: Vec<Stat>,

    // Display fields, set by enrichment.
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl Weapon {
    pub fn max_level(&self) -> u32 {
        max_level_for(self.ascension)
    }
}

/// Artifact slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipType {
    #[serde(rename = "EQUIP_BRACER")]
    Flower,
    #[serde(rename = "EQUIP_NECKLACE")]
    Plume,
    #[serde(rename = "EQUIP_SHOES")]
    Sands,
    #[serde(rename = "EQUIP_RING")]
    Goblet,
    #[serde(rename = "EQUIP_DRESS")]
    Circlet,
}

/// An artifact equipped by a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub id: u32,
    /// Enhancement level, 0 through 20.
    pub level: u32,
    pub equip_type: EquipType,
    pub rarity: u8,
    pub name_text_map_hash: String,
    pub set_name_text_map_hash: String,
    pub icon_name: String,
    pub main_stat: Stat,
    pub sub_stats: Vec<Stat>,

    // Display fields, set by enrichment.
    pub name: Option<String>,
    pub set_name: Option<String>,
    pub icon: Option<String>,
}

/// An unlocked constellation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constellation {
    pub id: u32,
    pub unlocked: bool,
    pub name: Option<String>,
    pub icon: Option<String>,
}

/// A talent and its level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Talent {
    pub id: u32,
    pub level: u32,
    pub name: Option<String>,
    pub icon: Option<String>,
}
