//! Display-field enrichment.
//!
//! A deserialized [`ShowcaseResponse`] only carries identifiers and text-map
//! hashes. [`Enricher`] resolves them against a loaded [`AssetStore`] into
//! localized names and icon URLs. It is a pure in-memory pass: no network,
//! no store mutation.
//!
//! Every lookup is by exact key and a miss is a hard error. A showcase is
//! either fully enriched or the call fails. The one exception is fight prop
//! names: many fight props (current energy, current HP) have no text-map
//! entry and stay unnamed.

use crate::assets::{AssetStore, CharacterRecord};
use crate::types::icon::icon_url;
use crate::types::{
    Artifact, Character, Costume, FightProp, Namecard, Player, ProfilePicture, ShowcaseResponse,
    Stat, Weapon,
};
use crate::{EnkaError, Result};

/// Populates display fields from the asset dataset.
pub struct Enricher<'a> {
    assets: &'a AssetStore,
}

impl<'a> Enricher<'a> {
    pub fn new(assets: &'a AssetStore) -> Self {
        Self { assets }
    }

    /// Enrich a showcase in place.
    ///
    /// Runs in a fixed order: the player, then each character with its
    /// weapon, artifacts, constellations and talents. Fails with
    /// `AssetsNotReady` up front when the store is not fully loaded.
    pub fn enrich(&self, showcase: &mut ShowcaseResponse) -> Result<()> {
        if !self.assets.is_ready() {
            return Err(EnkaError::AssetsNotReady);
        }

        self.enrich_player(&mut showcase.player)?;
        for character in &mut showcase.characters {
            self.enrich_character(character)?;
        }
        Ok(())
    }

    fn enrich_player(&self, player: &mut Player) -> Result<()> {
        let namecard = self.assets.namecard_icon(player.namecard_id)?;
        player.namecard = Some(Namecard::new(namecard));
        player.profile_picture_icon = Some(self.profile_picture_icon(&player.profile_picture)?);

        for entry in &mut player.showcase_characters {
            if let Some(costume_id) = entry.costume_id {
                let record = self.assets.character(entry.id)?;
                entry.costume = Some(costume(&record, costume_id, entry.id)?);
            }
        }
        Ok(())
    }

    fn profile_picture_icon(&self, picture: &ProfilePicture) -> Result<String> {
        match *picture {
            ProfilePicture::Avatar {
                avatar_id,
                costume_id,
            } => {
                let record = self.assets.character(avatar_id)?;
                let side = match costume_id {
                    Some(id) => record.costume_side_icon(id).ok_or_else(|| {
                        EnkaError::MissingAsset {
                            table: "costumes",
                            key: format!("{avatar_id}/{id}"),
                        }
                    })?,
                    None => record.side_icon_name.as_str(),
                };
                Ok(icon_url(&side.replace("Side_", "")))
            }
            ProfilePicture::Picture { id } => {
                Ok(icon_url(self.assets.profile_picture_icon(id)?))
            }
        }
    }

    fn enrich_character(&self, character: &mut Character) -> Result<()> {
        let record = self.assets.character(character.id)?;
        character.name = Some(self.text(&record.name_text_map_hash)?);
        character.side_icon = Some(icon_url(&record.side_icon_name));
        character.costumes = record
            .costumes
            .iter()
            .map(|(id, side)| Costume {
                id: *id,
                side_icon: icon_url(side),
            })
            .collect();
        character.costume = match character.costume_id {
            Some(id) => Some(costume(&record, id, character.id)?),
            None => None,
        };
        character.element = record.element.clone();
        character.rarity = record.rarity();
        character.namecard = record.namecard_icon.as_deref().map(Namecard::new);
        for prop in &mut character.fight_props {
            self.name_fight_prop(prop)?;
        }

        self.enrich_weapon(&mut character.weapon)?;
        for artifact in &mut character.artifacts {
            self.enrich_artifact(artifact)?;
        }

        for constellation in &mut character.constellations {
            let skill = self.assets.constellation(constellation.id)?;
            constellation.name = Some(self.text(&skill.name_text_map_hash)?);
            constellation.icon = Some(icon_url(&skill.icon));
        }
        for talent in &mut character.talents {
            let skill = self.assets.talent(talent.id)?;
            talent.name = Some(self.text(&skill.name_text_map_hash)?);
            talent.icon = Some(icon_url(&skill.icon));
        }
        Ok(())
    }

    fn enrich_weapon(&self, weapon: &mut Weapon) -> Result<()> {
        weapon.name = Some(self.text(&weapon.name_text_map_hash)?);
        weapon.icon = Some(icon_url(&weapon.icon_name));
        for stat in &mut weapon.stats {
            self.name_stat(stat)?;
        }
        Ok(())
    }

    fn enrich_artifact(&self, artifact: &mut Artifact) -> Result<()> {
        artifact.name = Some(self.text(&artifact.name_text_map_hash)?);
        artifact.set_name = Some(self.text(&artifact.set_name_text_map_hash)?);
        artifact.icon = Some(icon_url(&artifact.icon_name));
        self.name_stat(&mut artifact.main_stat)?;
        for stat in &mut artifact.sub_stats {
            self.name_stat(stat)?;
        }
        Ok(())
    }

    fn name_stat(&self, stat: &mut Stat) -> Result<()> {
        stat.name = Some(self.text(stat.stat_type.as_str())?);
        Ok(())
    }

    /// Fight props without a text-map entry (current energy, current HP and
    /// the like) keep no name.
    fn name_fight_prop(&self, prop: &mut FightProp) -> Result<()> {
        let Some(key) = prop.prop_type.key() else {
            return Ok(());
        };
        prop.name = match self.assets.text(key) {
            Ok(text) => Some(text.to_string()),
            Err(EnkaError::MissingAsset { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(())
    }

    fn text(&self, key: &str) -> Result<String> {
        self.assets.text(key).map(str::to_string)
    }
}

fn costume(record: &CharacterRecord, costume_id: u32, character_id: u32) -> Result<Costume> {
    let side = record
        .costume_side_icon(costume_id)
        .ok_or_else(|| EnkaError::MissingAsset {
            table: "costumes",
            key: format!("{character_id}/{costume_id}"),
        })?;
    Ok(Costume {
        id: costume_id,
        side_icon: icon_url(side),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetConfig;
    use crate::types::Language;

    #[tokio::test]
    async fn unready_store_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetStore::new(Language::English, &AssetConfig::with_dir(dir.path()));
        assert!(!assets.load().await);

        let body = serde_json::json!({
            "uid": "1",
            "playerInfo": {"nameCardId": 1, "profilePicture": {"id": 1}}
        });
        let mut showcase = crate::convert::showcase_from_json(&body).unwrap();

        assert!(matches!(
            Enricher::new(&assets).enrich(&mut showcase),
            Err(EnkaError::AssetsNotReady)
        ));
        assert!(showcase.player.namecard.is_none());
    }
}
