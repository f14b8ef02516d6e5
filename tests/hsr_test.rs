//! End-to-end tests for [`HsrClient`] against a mock showcase service.

mod common;

use enka::hsr::RelicType;
use enka::{ApiError, EnkaError};

use common::hsr;

#[tokio::test]
async fn showcase_is_enriched() {
    let server = wiremock::MockServer::start().await;
    hsr::showcase_mock("800000001", hsr::showcase_json("800000001"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let client = hsr::started_client(&server, dir.path()).await;

    let showcase = client.fetch_showcase(800000001).await.unwrap();

    assert_eq!(showcase.uid, "800000001");
    assert_eq!(showcase.player.nickname, "Stelle");
    assert_eq!(showcase.player.equilibrium_level, 6);
    assert_eq!(showcase.player.stats.relic_count, Some(1500));
    assert_eq!(showcase.player.stats.book_count, None);

    let seele = &showcase.characters[0];
    assert_eq!(seele.name.as_deref(), Some("Seele"));
    assert_eq!(seele.rarity, Some(5));
    assert_eq!(seele.element.as_deref(), Some("Quantum"));
    assert_eq!(seele.path.as_deref(), Some("Warrior"));
    assert_eq!(seele.eidolons_unlocked, 2);
    assert!(seele.is_assist);
    assert_eq!(
        seele.gacha_art(),
        "https://enka.network/ui/hsr/SpriteOutput/AvatarDrawCard/1102.png"
    );

    let cone = seele.light_cone.as_ref().unwrap();
    assert_eq!(cone.name.as_deref(), Some("In the Night"));
    assert_eq!(cone.rarity, Some(5));
    assert_eq!(
        cone.icon(),
        "https://enka.network/ui/hsr/SpriteOutput/LightConeFigures/23001.png"
    );

    let relic = &seele.relics[0];
    assert_eq!(relic.relic_type, RelicType::Head);
    assert_eq!(relic.set_name.as_deref(), Some("Passerby of Wandering Cloud"));
    assert_eq!(relic.rarity, Some(5));
    assert_eq!(
        relic.icon.as_deref(),
        Some("https://enka.network/ui/hsr/SpriteOutput/ItemIcon/RelicIcons/IconRelic_101_1.png")
    );
    assert_eq!(relic.main_stat().unwrap().formatted_value(), "705");
    assert_eq!(relic.sub_stats()[0].formatted_value(), "17.4%");

    let trace = &seele.traces[0];
    assert_eq!(trace.anchor.as_deref(), Some("Point01"));
    assert_eq!(trace.max_level, Some(6));
    assert_eq!(
        trace.icon.as_deref(),
        Some("https://enka.network/ui/hsr/SkillIcon_1102_Normal.png")
    );
}

#[tokio::test]
async fn character_without_equipment_is_enriched() {
    let server = wiremock::MockServer::start().await;
    hsr::showcase_mock("800000001", hsr::showcase_json("800000001"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let client = hsr::started_client(&server, dir.path()).await;

    let showcase = client.fetch_showcase("800000001").await.unwrap();
    let trailblazer = &showcase.characters[1];

    assert_eq!(trailblazer.id, hsr::TRAILBLAZER);
    assert_eq!(trailblazer.name.as_deref(), Some("Trailblazer"));
    assert_eq!(trailblazer.element.as_deref(), Some("Physical"));
    assert!(trailblazer.light_cone.is_none());
    assert_eq!(trailblazer.max_level(), 20);
}

#[tokio::test]
async fn missing_light_cone_asset_fails_the_showcase() {
    let server = wiremock::MockServer::start().await;
    let mut body = hsr::showcase_json("800000001");
    body["detailInfo"]["avatarDetailList"][0]["equipment"]["tid"] = 99999.into();
    hsr::showcase_mock("800000001", body).mount(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let client = hsr::started_client(&server, dir.path()).await;

    assert!(matches!(
        client.fetch_showcase(800000001).await,
        Err(EnkaError::MissingAsset { table: "hsr light cones", .. })
    ));
}

#[tokio::test]
async fn start_downloads_missing_dataset() {
    let server = wiremock::MockServer::start().await;
    hsr::mount_assets(&server).await;
    hsr::showcase_mock("800000001", hsr::showcase_json("800000001"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let mut client = hsr::client(&server, dir.path());

    client.start().await.unwrap();

    assert!(client.assets_ready());
    assert!(dir.path().join("hsr_relics.json").exists());
    // The Genshin dataset is left alone.
    assert!(!dir.path().join("characters.json").exists());
    assert!(client.fetch_showcase(800000001).await.is_ok());
}

#[tokio::test]
async fn service_status_maps_to_api_error() {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/api/hsr/uid/1"))
        .respond_with(wiremock::ResponseTemplate::new(400))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let client = hsr::started_client(&server, dir.path()).await;

    assert!(matches!(
        client.fetch_showcase(1).await,
        Err(EnkaError::Api(ApiError::WrongUidFormat))
    ));
}

#[tokio::test]
async fn responses_are_cached_per_session() {
    let server = wiremock::MockServer::start().await;
    hsr::showcase_mock("800000001", hsr::showcase_json("800000001"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let client = hsr::started_client(&server, dir.path()).await;

    client.fetch_showcase(800000001).await.unwrap();
    client.fetch_showcase(800000001).await.unwrap();
}
