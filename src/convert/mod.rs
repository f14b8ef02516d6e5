//! Conversion from the showcase wire schema to public types.
//!
//! This module is internal. It validates the payload's structure and derives
//! the values the wire encodes indirectly (levels from the prop map,
//! refinement from the affix map). Display fields are left unset; they are
//! the enrichment pass's job.

pub(crate) mod de;
mod wire;

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

use crate::types::{
    Artifact, Character, Constellation, FightProp, FightPropType, Player, ProfilePicture,
    ShowcaseCharacter, ShowcaseResponse, Stat, Talent, Weapon,
};
use crate::{EnkaError, Result};
use wire::{
    WireAvatar, WireEquip, WireFlat, WirePlayer, WireProfilePicture, WireReliquaryInfo,
    WireShowcase, WireWeaponInfo,
};

/// Prop map key holding a character's level.
const PROP_LEVEL: &str = "4001";
/// Prop map key holding a character's ascension phase.
const PROP_ASCENSION: &str = "1002";

/// Deserialize a decoded showcase body into an un-enriched response.
pub(crate) fn showcase_from_json(body: &Value) -> Result<ShowcaseResponse> {
    let wire = WireShowcase::deserialize(body)?;
    let characters = wire
        .avatar_info_list
        .unwrap_or_default()
        .into_iter()
        .map(character_from_wire)
        .collect::<Result<Vec<_>>>()?;

    Ok(ShowcaseResponse {
        uid: wire.uid,
        ttl: wire.ttl,
        player: player_from_wire(wire.player_info)?,
        characters,
        owner: wire.owner,
    })
}

fn player_from_wire(wire: WirePlayer) -> Result<Player> {
    Ok(Player {
        nickname: wire.nickname,
        level: wire.level,
        signature: wire.signature,
        world_level: wire.world_level,
        namecard_id: wire.name_card_id,
        achievements: wire.finish_achievement_num,
        abyss_floor: wire.tower_floor_index,
        abyss_level: wire.tower_level_index,
        profile_picture: profile_picture_from_wire(wire.profile_picture)?,
        showcase_characters: wire
            .show_avatar_info_list
            .into_iter()
            .map(|entry| ShowcaseCharacter {
                id: entry.avatar_id,
                level: entry.level,
                costume_id: entry.costume_id,
                costume: None,
            })
            .collect(),
        namecard: None,
        profile_picture_icon: None,
    })
}

fn profile_picture_from_wire(wire: WireProfilePicture) -> Result<ProfilePicture> {
    match (wire.avatar_id, wire.id) {
        (Some(avatar_id), _) => Ok(ProfilePicture::Avatar {
            avatar_id,
            costume_id: wire.costume_id,
        }),
        (None, Some(id)) => Ok(ProfilePicture::Picture { id }),
        (None, None) => Err(serde_json::Error::custom(
            "profile picture has neither `avatarId` nor `id`",
        )
        .into()),
    }
}

fn prop_value(avatar: &WireAvatar, key: &str) -> Option<u32> {
    avatar
        .prop_map
        .get(key)
        .and_then(|prop| prop.val.as_deref())
        .and_then(|val| val.parse().ok())
}

fn character_from_wire(wire: WireAvatar) -> Result<Character> {
    let level = prop_value(&wire, PROP_LEVEL).unwrap_or(1);
    let ascension = prop_value(&wire, PROP_ASCENSION).unwrap_or(0);

    let mut weapon = None;
    let mut artifacts = Vec::new();
    for equip in wire.equip_list {
        match equip {
            WireEquip {
                item_id,
                weapon: Some(info),
                flat,
                ..
            } => weapon = Some(weapon_from_wire(item_id, info, flat)),
            WireEquip {
                item_id,
                reliquary: Some(info),
                flat,
                ..
            } => artifacts.push(artifact_from_wire(item_id, info, flat)?),
            _ => return Err(EnkaError::InvalidItemType),
        }
    }
    let weapon = weapon.ok_or_else(|| serde_json::Error::missing_field("weapon"))?;

    Ok(Character {
        id: wire.avatar_id,
        level,
        ascension,
        friendship_level: wire.fetter_info.map(|f| f.exp_level).unwrap_or(1),
        skill_depot_id: wire.skill_depot_id,
        costume_id: wire.costume_id,
        weapon,
        artifacts,
        constellations: wire
            .talent_id_list
            .into_iter()
            .map(|id| Constellation {
                id,
                unlocked: true,
                name: None,
                icon: None,
            })
            .collect(),
        talents: wire
            .skill_level_map
            .into_iter()
            .map(|(id, level)| Talent {
                id,
                level,
                name: None,
                icon: None,
            })
            .collect(),
        fight_props: wire
            .fight_prop_map
            .into_iter()
            .map(|(id, value)| FightProp::new(FightPropType::from_id(id), value))
            .collect(),
        talent_extra_levels: wire.proud_skill_extra_level_map,
        name: None,
        side_icon: None,
        costumes: Vec::new(),
        costume: None,
        element: None,
        rarity: None,
        namecard: None,
    })
}

fn weapon_from_wire(id: u32, info: WireWeaponInfo, flat: WireFlat) -> Weapon {
    let refinement = info.affix_map.values().next().map_or(1, |rank| rank + 1);
    Weapon {
        id,
        level: info.level,
        ascension: info.promote_level,
        refinement,
        rarity: flat.rank_level,
        name_text_map_hash: flat.name_text_map_hash,
        icon_name: flat.icon,
        stats: flat
            .weapon_stats
            .into_iter()
            .map(|s| Stat::new(s.append_prop_id, s.stat_value))
            .collect(),
        name: None,
        icon: None,
    }
}

fn artifact_from_wire(id: u32, info: WireReliquaryInfo, flat: WireFlat) -> Result<Artifact> {
    let main_stat = flat
        .reliquary_mainstat
        .ok_or_else(|| serde_json::Error::missing_field("reliquaryMainstat"))?;
    let equip_type = flat
        .equip_type
        .ok_or_else(|| serde_json::Error::missing_field("equipType"))?;
    let set_name_text_map_hash = flat
        .set_name_text_map_hash
        .ok_or_else(|| serde_json::Error::missing_field("setNameTextMapHash"))?;

    Ok(Artifact {
        id,
        level: info.level.saturating_sub(1),
        equip_type,
        rarity: flat.rank_level,
        name_text_map_hash: flat.name_text_map_hash,
        set_name_text_map_hash,
        icon_name: flat.icon,
        main_stat: Stat::new(main_stat.main_prop_id, main_stat.stat_value),
        sub_stats: flat
            .reliquary_substats
            .into_iter()
            .map(|s| Stat::new(s.append_prop_id, s.stat_value))
            .collect(),
        name: None,
        set_name: None,
        icon: None,
    })
}
