//! Text map languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EnkaError;

/// Language selecting the text-map sub-table used for display names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "tr")]
    Turkish,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::English,
        Language::Russian,
        Language::Vietnamese,
        Language::Thai,
        Language::Portuguese,
        Language::Korean,
        Language::Japanese,
        Language::Indonesian,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::TraditionalChinese,
        Language::SimplifiedChinese,
        Language::Italian,
        Language::Turkish,
    ];

    /// Key of this language's sub-table in the text map document.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Vietnamese => "vi",
            Language::Thai => "th",
            Language::Portuguese => "pt",
            Language::Korean => "ko",
            Language::Japanese => "ja",
            Language::Indonesian => "id",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::TraditionalChinese => "zh-TW",
            Language::SimplifiedChinese => "zh-CN",
            Language::Italian => "it",
            Language::Turkish => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = EnkaError;

    /// Parse a language code, ignoring ASCII case (`"EN"`, `"zh-cn"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| EnkaError::Configuration(format!("unknown language '{s}'")))
    }
}
