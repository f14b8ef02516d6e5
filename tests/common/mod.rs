//! Shared fixtures: a small but complete asset dataset and showcase payloads
//! that reference it.

#![allow(dead_code)]

pub mod hsr;

use std::path::Path;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use enka::{AssetConfig, AssetKind, Enka, EnkaClient, Language};

pub const HUTAO: u32 = 10000046;
pub const AMBER: u32 = 10000021;
pub const AMBER_COSTUME: u32 = 202101;
pub const NAMECARD: u32 = 210001;

fn text_section(hutao: &str) -> Value {
    json!({
        "1940919": hutao,
        "1966438658": "Amber",
        "1990641987": "Staff of Homa",
        "4144069251": "Witch's Flower of Blaze",
        "1524173875": "Crimson Witch of Flames",
        "3001": "Crimson Bouquet",
        "3002": "Ominous Rainfall",
        "4001": "Secret Spear of Wangsheng",
        "4002": "Guide to Afterlife",
        "FIGHT_PROP_BASE_ATTACK": "Base ATK",
        "FIGHT_PROP_CRITICAL_HURT": "CRIT DMG",
        "FIGHT_PROP_CRITICAL": "CRIT Rate",
        "FIGHT_PROP_HP": "HP",
        "FIGHT_PROP_MAX_HP": "Max HP",
        "FIGHT_PROP_FIRE_ADD_HURT": "Pyro DMG Bonus"
    })
}

/// Every asset document, keyed by kind.
pub fn asset_documents() -> Vec<(AssetKind, Value)> {
    vec![
        (
            AssetKind::TextMap,
            json!({"en": text_section("Hu Tao"), "ja": text_section("胡桃")}),
        ),
        (
            AssetKind::Characters,
            json!({
                "10000046": {
                    "NameTextMapHash": 1940919,
                    "SideIconName": "UI_AvatarIcon_Side_Hutao",
                    "Element": "Fire",
                    "QualityType": "QUALITY_ORANGE",
                    "NamecardIcon": "UI_NameCardPic_Hutao_P"
                },
                "10000021": {
                    "NameTextMapHash": 1966438658,
                    "SideIconName": "UI_AvatarIcon_Side_Ambor",
                    "Element": "Fire",
                    "QualityType": "QUALITY_PURPLE",
                    "Costumes": {
                        "202101": {"sideIconName": "UI_AvatarIcon_Side_AmborCostumeWic"},
                        "202100": {"sideIconName": "UI_AvatarIcon_Side_AmborCostumeDefault"}
                    }
                }
            }),
        ),
        (
            AssetKind::Namecards,
            json!({"210001": {"icon": "UI_NameCardPic_0_P"}}),
        ),
        (
            AssetKind::Consts,
            json!({
                "661": {"nameTextMapHash": 3001, "icon": "UI_Talent_S_Hutao_01"},
                "662": {"nameTextMapHash": 3002, "icon": "UI_Talent_S_Hutao_02"}
            }),
        ),
        (
            AssetKind::Talents,
            json!({
                "10461": {"nameTextMapHash": 4001, "icon": "Skill_A_02"},
                "10462": {"nameTextMapHash": 4002, "icon": "Skill_S_Hutao_01"}
            }),
        ),
        (
            AssetKind::Pfps,
            json!({"1": {"iconPath": "UI_AvatarIcon_PlayerGirl_Circle"}}),
        ),
    ]
}

/// Write the full asset dataset into `dir`.
pub fn write_assets(dir: &Path) {
    for (kind, document) in asset_documents() {
        std::fs::write(dir.join(kind.file_name()), document.to_string()).unwrap();
    }
}

/// Serve the asset dataset under `/assets/{file name}`.
pub async fn mount_assets(server: &MockServer) {
    for (kind, document) in asset_documents() {
        asset_mock(kind, document).mount(server).await;
    }
}

/// Serve the asset dataset, expecting each document to be fetched exactly
/// `times` times.
pub async fn mount_assets_expecting(server: &MockServer, times: u64) {
    for (kind, document) in asset_documents() {
        asset_mock(kind, document).expect(times).mount(server).await;
    }
}

fn asset_mock(kind: AssetKind, document: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{}", kind.file_name())))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
}

/// Asset config reading from `dir` and refreshing from the mock server.
pub fn asset_config(server: &MockServer, dir: &Path) -> AssetConfig {
    AssetConfig::with_dir(dir).source_base(format!("{}/assets", server.uri()))
}

/// An unstarted client pointed at the mock server.
pub fn client(server: &MockServer, dir: &Path) -> EnkaClient {
    Enka::builder()
        .language(Language::English)
        .base_url(server.uri())
        .assets(asset_config(server, dir))
        .build()
        .unwrap()
}

/// A started client with the asset dataset already on disk.
pub async fn started_client(server: &MockServer, dir: &Path) -> EnkaClient {
    write_assets(dir);
    let mut client = client(server, dir);
    client.start().await.unwrap();
    client
}

fn weapon() -> Value {
    json!({
        "itemId": 13501,
        "weapon": {"level": 90, "promoteLevel": 6, "affixMap": {"113501": 0}},
        "flat": {
            "nameTextMapHash": "1990641987",
            "rankLevel": 5,
            "weaponStats": [
                {"appendPropId": "FIGHT_PROP_BASE_ATTACK", "statValue": 608},
                {"appendPropId": "FIGHT_PROP_CRITICAL_HURT", "statValue": 66.2}
            ],
            "itemType": "ITEM_WEAPON",
            "icon": "UI_EquipIcon_Pole_Homa"
        }
    })
}

fn flower() -> Value {
    json!({
        "itemId": 75544,
        "reliquary": {"level": 21, "mainPropId": 14001, "appendPropIdList": [501204, 501224]},
        "flat": {
            "nameTextMapHash": "4144069251",
            "setNameTextMapHash": "1524173875",
            "rankLevel": 5,
            "reliquaryMainstat": {"mainPropId": "FIGHT_PROP_HP", "statValue": 4780},
            "reliquarySubstats": [
                {"appendPropId": "FIGHT_PROP_CRITICAL", "statValue": 3.9},
                {"appendPropId": "FIGHT_PROP_CRITICAL_HURT", "statValue": 21.8}
            ],
            "itemType": "ITEM_RELIQUARY",
            "icon": "UI_RelicIcon_15006_4",
            "equipType": "EQUIP_BRACER"
        }
    })
}

fn hutao() -> Value {
    json!({
        "avatarId": HUTAO,
        "propMap": {
            "4001": {"type": 4001, "ival": "0", "val": "90"},
            "1002": {"type": 1002, "ival": "0", "val": "6"}
        },
        "talentIdList": [661, 662],
        "fightPropMap": {"20": 0.745, "40": 0.466, "1010": 36000.0, "2000": 36000.0},
        "skillDepotId": 4601,
        "skillLevelMap": {"10461": 10, "10462": 9},
        "proudSkillExtraLevelMap": {"4639": 3},
        "fetterInfo": {"expLevel": 10},
        "equipList": [flower(), weapon()]
    })
}

fn amber() -> Value {
    json!({
        "avatarId": AMBER,
        "propMap": {"4001": {"type": 4001, "ival": "0", "val": "80"}},
        "fightPropMap": {"2000": 9000.0},
        "skillDepotId": 2101,
        "fetterInfo": {"expLevel": 4},
        "costumeId": AMBER_COSTUME,
        "equipList": [weapon()]
    })
}

/// A full showcase: Hu Tao with a weapon and one artifact, then Amber
/// wearing a costume.
pub fn showcase_json(uid: &str) -> Value {
    json!({
        "uid": uid,
        "ttl": 60,
        "playerInfo": {
            "nickname": "Traveler",
            "level": 60,
            "signature": "hello",
            "worldLevel": 8,
            "nameCardId": NAMECARD,
            "finishAchievementNum": 912,
            "towerFloorIndex": 12,
            "towerLevelIndex": 3,
            "profilePicture": {"avatarId": HUTAO},
            "showAvatarInfoList": [
                {"avatarId": HUTAO, "level": 90},
                {"avatarId": AMBER, "level": 80, "costumeId": AMBER_COSTUME}
            ]
        },
        "avatarInfoList": [hutao(), amber()],
        "owner": {
            "hash": "4Wjv2e",
            "username": "traveler",
            "profile": {"bio": "", "avatar": null},
            "id": 12345
        }
    })
}

/// A showcase whose owner hides their characters.
pub fn hidden_showcase_json(uid: &str) -> Value {
    let mut body = showcase_json(uid);
    let root = body.as_object_mut().unwrap();
    root.remove("avatarInfoList");
    root.remove("owner");
    root["playerInfo"]
        .as_object_mut()
        .unwrap()
        .remove("showAvatarInfoList");
    body
}

/// Serve `body` for the full (not info-only) showcase of `uid`.
pub fn showcase_mock(uid: &str, body: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/api/uid/{uid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}
