//! Icon URL construction.
//!
//! Icons are never fetched or validated; a URL is built by wrapping an
//! asset-provided path fragment in a fixed template.

use serde::Serialize;

/// Base URL for UI images.
pub const UI_BASE_URL: &str = "https://enka.network/ui";

/// Build the URL of a UI image, e.g. `UI_AvatarIcon_Side_Hutao` →
/// `https://enka.network/ui/UI_AvatarIcon_Side_Hutao.png`.
pub fn icon_url(fragment: &str) -> String {
    format!("{UI_BASE_URL}/{fragment}.png")
}

/// Front icon URL derived from a side icon URL.
pub fn front_icon(side_icon: &str) -> String {
    side_icon.replace("Side_", "")
}

/// Circle icon URL derived from a side icon URL.
pub fn circle_icon(side_icon: &str) -> String {
    front_icon(side_icon).replace(".png", "_Circle.png")
}

/// Gacha splash art URL derived from a side icon URL.
///
/// Costume side icons map to the costume art instead.
pub fn gacha_art(side_icon: &str, is_costume: bool) -> String {
    let replacement = if is_costume {
        "Costume"
    } else {
        "Gacha_AvatarImg"
    };
    side_icon.replace("AvatarIcon_Side", replacement)
}

/// Small namecard icon URL derived from a namecard UI path, e.g.
/// `UI_NameCardPic_0_P` → `https://enka.network/ui/UI_NameCardIcon_0.png`.
pub fn namecard_icon(ui_path: &str) -> String {
    icon_url(&ui_path.replace("NameCardPic", "NameCardIcon").replace("_P", ""))
}

/// A namecard, identified by its UI path (e.g. `UI_NameCardPic_0_P`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namecard {
    pub ui_path: String,
}

impl Namecard {
    pub fn new(ui_path: impl Into<String>) -> Self {
        Self {
            ui_path: ui_path.into(),
        }
    }

    /// Small icon, as shown in the friends list.
    pub fn icon(&self) -> String {
        namecard_icon(&self.ui_path)
    }

    /// Full namecard banner.
    pub fn full(&self) -> String {
        icon_url(&self.ui_path)
    }
}
