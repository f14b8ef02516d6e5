//! Public types for the Enka API.

mod character;
mod fight_prop;
pub mod icon;
mod language;
mod player;
mod showcase;
mod stat;

pub use character::{
    ASCENSION_TO_MAX_LEVEL, Artifact, Character, Constellation, Costume, EquipType, Talent,
    Weapon,
};
pub use fight_prop::{FightProp, FightPropType};
pub use icon::Namecard;
pub use language::Language;
pub use player::{Player, ProfilePicture, ShowcaseCharacter};
pub use showcase::{Owner, OwnerProfile, ShowcaseResponse};
pub use stat::{Stat, StatType};
