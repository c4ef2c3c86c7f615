//! Catalog record types returned by the mock REST API.
//!
//! DESIGN
//! ======
//! Records are immutable values that live for one response. They derive serde
//! both ways because SSR resources serialize their resolved values into the
//! streamed HTML.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A purchasable course listed on the course page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Record identifier, unique within one listing.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Course title shown on the card.
    pub title: String,
    /// Price in baht.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

/// A user profile shown on the user listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Record identifier, unique within one listing.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short biography line.
    pub bio: String,
}

/// Accept ids encoded as JSON strings or integers and normalize to `String`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
