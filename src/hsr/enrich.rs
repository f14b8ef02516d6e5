//! Display-field enrichment for Star Rail showcases.
//!
//! Same contract as the Genshin [`Enricher`](crate::Enricher): exact-key
//! lookups, any miss fails the whole showcase.

use super::assets::HsrAssetStore;
use super::types::{HsrCharacter, HsrShowcase, LightCone, Relic, Trace, hsr_icon_url};
use crate::{EnkaError, Result};

/// Populates Star Rail display fields from the asset dataset.
pub struct HsrEnricher<'a> {
    assets: &'a HsrAssetStore,
}

impl<'a> HsrEnricher<'a> {
    pub fn new(assets: &'a HsrAssetStore) -> Self {
        Self { assets }
    }

    /// Enrich a showcase in place, character by character.
    pub fn enrich(&self, showcase: &mut HsrShowcase) -> Result<()> {
        if !self.assets.is_ready() {
            return Err(EnkaError::AssetsNotReady);
        }
        for character in &mut showcase.characters {
            self.enrich_character(character)?;
        }
        Ok(())
    }

    fn enrich_character(&self, character: &mut HsrCharacter) -> Result<()> {
        for trace in &mut character.traces {
            self.enrich_trace(trace)?;
        }
        for relic in &mut character.relics {
            self.enrich_relic(relic)?;
        }
        if let Some(light_cone) = &mut character.light_cone {
            self.enrich_light_cone(light_cone)?;
        }

        let record = self.assets.character(character.id)?;
        character.name = Some(self.assets.text(&record.name_text_map_hash)?.to_string());
        character.rarity = Some(record.rarity);
        character.element = Some(record.element);
        character.path = Some(record.path);
        Ok(())
    }

    fn enrich_trace(&self, trace: &mut Trace) -> Result<()> {
        let record = self.assets.trace(trace.id)?;
        trace.icon = Some(hsr_icon_url(record.icon.trim_end_matches(".png")));
        trace.anchor = Some(record.anchor);
        trace.point_type = Some(record.point_type);
        trace.max_level = Some(record.max_level);
        Ok(())
    }

    fn enrich_relic(&self, relic: &mut Relic) -> Result<()> {
        relic.set_name = Some(self.assets.text(&relic.set_name_text_map_hash)?.to_string());
        let (rarity, icon) = self.assets.relic(relic.id)?;
        relic.rarity = Some(rarity);
        relic.icon = Some(hsr_icon_url(&icon));
        Ok(())
    }

    fn enrich_light_cone(&self, light_cone: &mut LightCone) -> Result<()> {
        light_cone.name = Some(self.assets.text(&light_cone.name_text_map_hash)?.to_string());
        light_cone.rarity = Some(self.assets.light_cone_rarity(light_cone.id)?);
        Ok(())
    }
}
