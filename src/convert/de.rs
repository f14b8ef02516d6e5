//! Serde helpers for identifiers that arrive either as strings or numbers.
//!
//! Text-map hashes are numbers in the asset documents and strings in the
//! showcase payload; both are normalized to the decimal string used as the
//! text-map key.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Key {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Text(s) => s,
            Key::Unsigned(n) => n.to_string(),
            Key::Signed(n) => n.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Key::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Key>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Keyed {
        #[serde(deserialize_with = "string_or_number")]
        hash: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        other: Option<String>,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let a: Keyed = serde_json::from_str(r#"{"hash": "1940919"}"#).unwrap();
        let b: Keyed = serde_json::from_str(r#"{"hash": 1940919, "other": -5}"#).unwrap();
        assert_eq!(a.hash, "1940919");
        assert_eq!(b.hash, "1940919");
        assert_eq!(a.other, None);
        assert_eq!(b.other.as_deref(), Some("-5"));
    }
}
