//! Player profile types.

use serde::Serialize;

use super::character::Costume;
use super::icon::Namecard;

/// Player profile from a showcase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub nickname: String,
    /// Adventure rank.
    pub level: u32,
    pub signature: Option<String>,
    pub world_level: u32,
    pub namecard_id: u32,
    /// Completed achievements, `0` when the service omits the field.
    pub achievements: u32,
    pub abyss_floor: u32,
    pub abyss_level: u32,
    pub profile_picture: ProfilePicture,
    pub showcase_characters: Vec<ShowcaseCharacter>,

    // Display fields, set by enrichment.
    pub namecard: Option<Namecard>,
    pub profile_picture_icon: Option<String>,
}

/// Profile picture reference. The service has used two formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ProfilePicture {
    /// Legacy format: a character ID, optionally with a costume.
    Avatar {
        avatar_id: u32,
        costume_id: Option<u32>,
    },
    /// Newer format: an ID into the profile-picture table.
    Picture { id: u32 },
}

/// Entry of the player's showcase line-up (available even in info-only
/// responses).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseCharacter {
    pub id: u32,
    pub level: u32,
    pub costume_id: Option<u32>,
    /// Costume worn in the line-up, set by enrichment.
    pub costume: Option<Costume>,
}
