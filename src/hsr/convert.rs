//! Wire schema of the Star Rail payload and its conversion to public types.

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

use super::types::{
    HsrCharacter, HsrPlayer, HsrPlayerStats, HsrShowcase, HsrStat, LightCone, Relic,
    RelicSubAffix, RelicType, Trace,
};
use crate::Result;
use crate::convert::de;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireShowcase {
    #[serde(deserialize_with = "de::string_or_number")]
    uid: String,
    #[serde(default)]
    ttl: u32,
    detail_info: WireDetailInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetailInfo {
    uid: u64,
    #[serde(default)]
    nickname: String,
    #[serde(default)]
    signature: String,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    world_level: u32,
    #[serde(default)]
    friend_count: u32,
    #[serde(default)]
    record_info: WireRecordInfo,
    #[serde(default)]
    is_display_avatar: bool,
    #[serde(default)]
    avatar_detail_list: Vec<WireAvatar>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireRecordInfo {
    achievement_count: u32,
    equipment_count: u32,
    avatar_count: u32,
    max_rogue_challenge_score: u32,
    book_count: Option<u32>,
    relic_count: Option<u32>,
    music_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAvatar {
    avatar_id: u32,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    promotion: u32,
    #[serde(default)]
    rank: u32,
    #[serde(rename = "_assist", default)]
    assist: bool,
    #[serde(default)]
    skill_tree_list: Vec<WireTrace>,
    #[serde(default)]
    equipment: Option<WireLightCone>,
    #[serde(default)]
    relic_list: Vec<WireRelic>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTrace {
    point_id: u32,
    #[serde(default)]
    level: u32,
}

#[derive(Debug, Deserialize)]
struct WireLightCone {
    tid: u32,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    promotion: u32,
    #[serde(default)]
    rank: u32,
    #[serde(rename = "_flat")]
    flat: WireLightConeFlat,
}

#[derive(Debug, Deserialize)]
struct WireLightConeFlat {
    #[serde(deserialize_with = "de::string_or_number")]
    name: String,
    #[serde(default)]
    props: Vec<WireStat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRelic {
    tid: u32,
    #[serde(default)]
    level: u32,
    #[serde(rename = "type")]
    relic_type: u8,
    #[serde(default)]
    main_affix_id: u32,
    #[serde(default)]
    sub_affix_list: Vec<WireSubAffix>,
    #[serde(rename = "_flat")]
    flat: WireRelicFlat,
}

#[derive(Debug, Deserialize)]
struct WireRelicFlat {
    #[serde(rename = "setName", deserialize_with = "de::string_or_number")]
    set_name: String,
    #[serde(rename = "setID")]
    set_id: u32,
    #[serde(default)]
    props: Vec<WireStat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSubAffix {
    affix_id: u32,
    #[serde(default)]
    cnt: u32,
    #[serde(default)]
    step: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct WireStat {
    #[serde(rename = "type")]
    stat_type: String,
    value: f64,
}

impl HsrShowcase {
    /// Deserialize a decoded Star Rail body into an un-enriched showcase.
    pub fn from_json(body: &Value) -> Result<Self> {
        let wire = WireShowcase::deserialize(body)?;
        let info = wire.detail_info;
        let characters = info
            .avatar_detail_list
            .into_iter()
            .map(character_from_wire)
            .collect::<Result<Vec<_>>>()?;

        let record = info.record_info;
        Ok(Self {
            uid: wire.uid,
            ttl: wire.ttl,
            player: HsrPlayer {
                uid: info.uid,
                nickname: info.nickname,
                signature: info.signature,
                level: info.level,
                equilibrium_level: info.world_level,
                friend_count: info.friend_count,
                stats: HsrPlayerStats {
                    achievement_count: record.achievement_count,
                    light_cone_count: record.equipment_count,
                    character_count: record.avatar_count,
                    max_simulated_universe_world: record.max_rogue_challenge_score,
                    book_count: record.book_count,
                    relic_count: record.relic_count,
                    music_count: record.music_count,
                },
                characters_public: info.is_display_avatar,
            },
            characters,
        })
    }
}

fn character_from_wire(wire: WireAvatar) -> Result<HsrCharacter> {
    let relics = wire
        .relic_list
        .into_iter()
        .map(relic_from_wire)
        .collect::<Result<Vec<_>>>()?;

    Ok(HsrCharacter {
        id: wire.avatar_id,
        level: wire.level,
        ascension: wire.promotion,
        eidolons_unlocked: wire.rank,
        is_assist: wire.assist,
        traces: wire
            .skill_tree_list
            .into_iter()
            .map(|trace| Trace {
                id: trace.point_id,
                level: trace.level,
                anchor: None,
                icon: None,
                point_type: None,
                max_level: None,
            })
            .collect(),
        light_cone: wire.equipment.map(|cone| LightCone {
            id: cone.tid,
            level: cone.level,
            ascension: cone.promotion,
            superimpose: cone.rank,
            name_text_map_hash: cone.flat.name,
            stats: stats_from_wire(cone.flat.props),
            name: None,
            rarity: None,
        }),
        relics,
        name: None,
        rarity: None,
        element: None,
        path: None,
    })
}

fn relic_from_wire(wire: WireRelic) -> Result<Relic> {
    let relic_type = RelicType::from_wire(wire.relic_type).ok_or_else(|| {
        serde_json::Error::custom(format!("unknown relic type {}", wire.relic_type))
    })?;

    Ok(Relic {
        id: wire.tid,
        level: wire.level,
        relic_type,
        main_affix_id: wire.main_affix_id,
        set_id: wire.flat.set_id,
        set_name_text_map_hash: wire.flat.set_name,
        stats: stats_from_wire(wire.flat.props),
        sub_affixes: wire
            .sub_affix_list
            .into_iter()
            .map(|affix| RelicSubAffix {
                id: affix.affix_id,
                count: affix.cnt,
                step: affix.step,
            })
            .collect(),
        set_name: None,
        icon: None,
        rarity: None,
    })
}

fn stats_from_wire(props: Vec<WireStat>) -> Vec<HsrStat> {
    props
        .into_iter()
        .map(|prop| HsrStat {
            stat_type: prop.stat_type,
            value: prop.value,
        })
        .collect()
}
