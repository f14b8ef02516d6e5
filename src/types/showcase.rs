//! Showcase response root.

use serde::{Deserialize, Serialize};

use super::character::Character;
use super::player::Player;

/// A player's showcase as returned by [`EnkaClient::fetch_showcase`](crate::EnkaClient::fetch_showcase).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseResponse {
    pub uid: String,
    /// Seconds until the service refreshes this showcase.
    pub ttl: u32,
    pub player: Player,
    /// Detailed characters; empty when the player hides details or the
    /// request was info-only.
    pub characters: Vec<Character>,
    /// Enka.Network account that claimed this UID, if any.
    pub owner: Option<Owner>,
}

impl ShowcaseResponse {
    /// Parse a raw showcase body. Display fields are left unset; run an
    /// [`Enricher`](crate::Enricher) to populate them.
    pub fn from_json(body: &serde_json::Value) -> crate::Result<Self> {
        crate::convert::showcase_from_json(body)
    }
}

/// Enka.Network account owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub hash: String,
    pub username: String,
    pub profile: OwnerProfile,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerProfile {
    #[serde(default)]
    pub bio: String,
    /// Avatar image URL, `None` when unset.
    #[serde(default)]
    pub avatar: Option<String>,
}
