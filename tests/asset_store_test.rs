//! Integration tests for [`AssetStore`] loading and readiness.

mod common;

use enka::{AssetConfig, AssetKind, AssetStore, EnkaError, Language};

async fn loaded_store(language: Language) -> (tempfile::TempDir, AssetStore, bool) {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let mut store = AssetStore::new(language, &AssetConfig::with_dir(dir.path()));
    let ready = store.load().await;
    (dir, store, ready)
}

#[tokio::test]
async fn complete_dataset_is_ready() {
    let (_dir, store, ready) = loaded_store(Language::English).await;
    assert!(ready);
    assert!(store.is_ready());
    for kind in AssetKind::ALL {
        assert!(store.table(kind).is_loaded(), "{} not loaded", kind.name());
    }
}

#[tokio::test]
async fn any_missing_file_means_not_ready() {
    for missing in AssetKind::ALL {
        let dir = tempfile::tempdir().unwrap();
        common::write_assets(dir.path());
        std::fs::remove_file(dir.path().join(missing.file_name())).unwrap();

        let mut store = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
        assert!(!store.load().await, "{} missing but ready", missing.name());
        assert!(!store.is_ready());

        // Every other table still loaded.
        for kind in AssetKind::ALL.into_iter().filter(|k| *k != missing) {
            assert!(store.table(kind).is_loaded());
        }
    }
}

#[tokio::test]
async fn language_selects_text_map_section() {
    let (_dir, english, _) = loaded_store(Language::English).await;
    let (_dir, japanese, _) = loaded_store(Language::Japanese).await;

    assert_eq!(english.text("1940919").unwrap(), "Hu Tao");
    assert_eq!(japanese.text("1940919").unwrap(), "胡桃");
    assert_eq!(japanese.language(), Language::Japanese);
}

#[tokio::test]
async fn reload_after_repair_becomes_ready() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    std::fs::write(dir.path().join("talents.json"), "not json").unwrap();

    let mut store = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
    assert!(!store.load().await);

    common::write_assets(dir.path());
    assert!(store.load().await);
    assert_eq!(store.talent(10461).unwrap().icon, "Skill_A_02");
}

#[tokio::test]
async fn costume_records_resolve() {
    let (_dir, store, _) = loaded_store(Language::English).await;

    let amber = store.character(common::AMBER).unwrap();
    assert_eq!(amber.rarity(), Some(4));
    assert_eq!(
        amber.costume_side_icon(common::AMBER_COSTUME),
        Some("UI_AvatarIcon_Side_AmborCostumeWic")
    );
    assert!(amber.costume_side_icon(1).is_none());

    let hutao = store.character(common::HUTAO).unwrap();
    assert!(hutao.costumes.is_empty());
}

#[tokio::test]
async fn unknown_ids_are_missing_assets() {
    let (_dir, store, _) = loaded_store(Language::English).await;

    assert!(matches!(
        store.namecard_icon(1),
        Err(EnkaError::MissingAsset { table: "namecards", .. })
    ));
    assert!(matches!(
        store.text("0"),
        Err(EnkaError::MissingAsset { table: "text map", .. })
    ));
    assert!(matches!(
        store.constellation(1),
        Err(EnkaError::MissingAsset { table: "constellations", .. })
    ));
}
