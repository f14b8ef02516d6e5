//! Wire schema of the showcase payload.
//!
//! These structs mirror the JSON exactly and are only used as an input to the
//! conversions in [`super`]; display fields never appear here.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::de;
use crate::types::{EquipType, Owner, StatType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireShowcase {
    #[serde(deserialize_with = "de::string_or_number")]
    pub uid: String,
    #[serde(default)]
    pub ttl: u32,
    pub player_info: WirePlayer,
    #[serde(default)]
    pub avatar_info_list: Option<Vec<WireAvatar>>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePlayer {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub world_level: u32,
    pub name_card_id: u32,
    #[serde(default)]
    pub finish_achievement_num: u32,
    #[serde(default)]
    pub tower_floor_index: u32,
    #[serde(default)]
    pub tower_level_index: u32,
    pub profile_picture: WireProfilePicture,
    #[serde(default)]
    pub show_avatar_info_list: Vec<WireShowAvatar>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireProfilePicture {
    #[serde(default)]
    pub avatar_id: Option<u32>,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub costume_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireShowAvatar {
    pub avatar_id: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub costume_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireAvatar {
    pub avatar_id: u32,
    #[serde(default)]
    pub prop_map: HashMap<String, WireProp>,
    #[serde(default)]
    pub talent_id_list: Vec<u32>,
    #[serde(default)]
    pub fight_prop_map: BTreeMap<u32, f64>,
    #[serde(default)]
    pub skill_depot_id: u32,
    #[serde(default)]
    pub skill_level_map: BTreeMap<u32, u32>,
    #[serde(default)]
    pub proud_skill_extra_level_map: BTreeMap<u32, u32>,
    #[serde(default)]
    pub fetter_info: Option<WireFetter>,
    #[serde(default)]
    pub costume_id: Option<u32>,
    #[serde(default)]
    pub equip_list: Vec<WireEquip>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProp {
    #[serde(default)]
    pub val: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireFetter {
    #[serde(default)]
    pub exp_level: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEquip {
    pub item_id: u32,
    #[serde(default)]
    pub weapon: Option<WireWeaponInfo>,
    #[serde(default)]
    pub reliquary: Option<WireReliquaryInfo>,
    pub flat: WireFlat,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireWeaponInfo {
    #[serde(default = "one")]
    pub level: u32,
    #[serde(default)]
    pub promote_level: u32,
    #[serde(default)]
    pub affix_map: BTreeMap<String, u32>,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireReliquaryInfo {
    #[serde(default = "one")]
    pub level: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireFlat {
    #[serde(deserialize_with = "de::string_or_number")]
    pub name_text_map_hash: String,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub set_name_text_map_hash: Option<String>,
    #[serde(default)]
    pub rank_level: u8,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub equip_type: Option<EquipType>,
    #[serde(default)]
    pub weapon_stats: Vec<WireAppendStat>,
    #[serde(default)]
    pub reliquary_mainstat: Option<WireMainStat>,
    #[serde(default)]
    pub reliquary_substats: Vec<WireAppendStat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireMainStat {
    pub main_prop_id: StatType,
    pub stat_value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireAppendStat {
    pub append_prop_id: StatType,
    pub stat_value: f64,
}
