//! Enka - client for the Enka.Network game showcase API
//!
//! This crate fetches a player's public character showcase by UID and
//! resolves every identifier in it into localized names and icon URLs using
//! a locally cached asset dataset.
//!
//! # Example
//!
//! ```rust,no_run
//! use enka::{Enka, Language};
//!
//! #[tokio::main]
//! async fn main() -> enka::Result<()> {
//!     let mut client = Enka::builder()
//!         .language(Language::English)
//!         .build()?;
//!     client.start().await?;
//!
//!     let showcase = client.fetch_showcase(901211014, false).await?;
//!     println!("{} (AR {})", showcase.player.nickname, showcase.player.level);
//!     for character in &showcase.characters {
//!         println!(
//!             "{} Lv.{}/{}",
//!             character.name.as_deref().unwrap_or("?"),
//!             character.level,
//!             character.max_level()
//!         );
//!     }
//!
//!     client.close()?;
//!     Ok(())
//! }
//! ```
//!
//! # Assets
//!
//! On [`EnkaClient::start`] the asset dataset is read from disk
//! ([`AssetConfig::dir`]). A missing or unreadable dataset is downloaded
//! once and reloaded. [`EnkaClient::update_assets`] forces a refresh.
//!
//! # Star Rail
//!
//! [`EnkaBuilder::build_hsr`] builds an [`HsrClient`] for Honkai: Star Rail
//! showcases; see [`hsr`].

pub mod assets;
pub mod cache;
pub mod client;
pub mod config;
mod convert;
pub mod enrich;
pub mod error;
pub mod hsr;
pub mod telemetry;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use assets::{AssetConfig, AssetKind, AssetStore, AssetUpdater};
pub use cache::{CacheConfig, ResponseCache};
pub use client::{Enka, EnkaBuilder, EnkaClient};
pub use config::Config;
pub use enrich::Enricher;
pub use error::{ApiError, EnkaError, Result};
pub use hsr::{HsrClient, HsrShowcase};

pub use types::{
    Artifact, Character, Constellation, Costume, EquipType, FightProp, FightPropType, Language,
    Namecard, Owner, OwnerProfile, Player, ProfilePicture, ShowcaseCharacter, ShowcaseResponse,
    Stat, StatType, Talent, Weapon,
};
