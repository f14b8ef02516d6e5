//! Star Rail fixtures: a minimal asset dataset and a showcase referencing it.

use std::path::Path;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use enka::assets::AssetDocument;
use enka::hsr::HsrAssetKind;
use enka::{Enka, HsrClient, Language};

pub const SEELE: u32 = 1102;
pub const TRAILBLAZER: u32 = 8002;

pub fn asset_documents() -> Vec<(HsrAssetKind, Value)> {
    vec![
        (
            HsrAssetKind::TextMap,
            json!({"en": {
                "1": "Seele",
                "2": "Trailblazer",
                "1432397018": "In the Night",
                "2421340582": "Passerby of Wandering Cloud"
            }}),
        ),
        (
            HsrAssetKind::Characters,
            json!({
                "1102": {
                    "AvatarName": {"Hash": 1},
                    "Rarity": 5,
                    "Element": "Quantum",
                    "AvatarBaseType": "Warrior"
                },
                "8002": {
                    "AvatarName": {"Hash": 2},
                    "Rarity": 5,
                    "Element": "Physical",
                    "AvatarBaseType": "Warrior"
                }
            }),
        ),
        (HsrAssetKind::LightCones, json!({"23001": {"Rarity": 5}})),
        (
            HsrAssetKind::Relics,
            json!({"61011": {
                "Rarity": 5,
                "Icon": "SpriteOutput/ItemIcon/RelicIcons/IconRelic_101_1"
            }}),
        ),
        (
            HsrAssetKind::SkillTree,
            json!({"1102001": {
                "anchor": "Point01",
                "icon": "SkillIcon_1102_Normal.png",
                "pointType": 2,
                "maxLevel": 6
            }}),
        ),
    ]
}

pub fn write_assets(dir: &Path) {
    for (kind, document) in asset_documents() {
        std::fs::write(dir.join(kind.file_name()), document.to_string()).unwrap();
    }
}

/// Serve the Star Rail dataset next to the Genshin one under `/assets/`.
pub async fn mount_assets(server: &MockServer) {
    for (kind, document) in asset_documents() {
        Mock::given(method("GET"))
            .and(path(format!("/assets/{}", kind.file_name())))
            .respond_with(ResponseTemplate::new(200).set_body_json(document))
            .mount(server)
            .await;
    }
}

pub fn client(server: &MockServer, dir: &Path) -> HsrClient {
    Enka::builder()
        .language(Language::English)
        .base_url(server.uri())
        .assets(super::asset_config(server, dir))
        .build_hsr()
        .unwrap()
}

pub async fn started_client(server: &MockServer, dir: &Path) -> HsrClient {
    write_assets(dir);
    let mut client = client(server, dir);
    client.start().await.unwrap();
    client
}

pub fn showcase_json(uid: &str) -> Value {
    json!({
        "uid": uid,
        "ttl": 60,
        "detailInfo": {
            "uid": uid.parse::<u64>().unwrap(),
            "nickname": "Stelle",
            "signature": "hello",
            "level": 70,
            "worldLevel": 6,
            "friendCount": 12,
            "recordInfo": {
                "achievementCount": 400,
                "equipmentCount": 90,
                "avatarCount": 40,
                "maxRogueChallengeScore": 8,
                "relicCount": 1500
            },
            "isDisplayAvatar": true,
            "avatarDetailList": [
                {
                    "avatarId": SEELE,
                    "level": 80,
                    "promotion": 6,
                    "rank": 2,
                    "_assist": true,
                    "skillTreeList": [{"pointId": 1102001, "level": 6}],
                    "equipment": {
                        "tid": 23001,
                        "level": 80,
                        "promotion": 6,
                        "rank": 1,
                        "_flat": {
                            "name": 1432397018,
                            "props": [
                                {"type": "BaseHP", "value": 1058.4},
                                {"type": "BaseAttack", "value": 582.12}
                            ]
                        }
                    },
                    "relicList": [{
                        "tid": 61011,
                        "level": 15,
                        "type": 1,
                        "mainAffixId": 1,
                        "subAffixList": [{"affixId": 8, "cnt": 3, "step": 2}],
                        "_flat": {
                            "setName": 2421340582u64,
                            "setID": 101,
                            "props": [
                                {"type": "HPDelta", "value": 705.6},
                                {"type": "CriticalDamageBase", "value": 0.1749}
                            ]
                        }
                    }]
                },
                {"avatarId": TRAILBLAZER, "level": 1}
            ]
        }
    })
}

pub fn showcase_mock(uid: &str, body: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/api/hsr/uid/{uid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}
