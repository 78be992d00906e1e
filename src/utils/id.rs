// src/utils/id.rs

use serde::{Deserialize, Deserializer, de};

use crate::error::AppError;

/// Parses an entity id taken from the request path.
///
/// Malformed ids are rejected up front with 400 instead of being looked up.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
}

/// An id as clients send it in a JSON body: either a number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Serde helper for optional id fields in request bodies.
///
/// `null`, an absent field and `""` all yield `None` so the handler can report
/// the field as missing. Non-numeric strings fail deserialization.
///
/// Use together with `#[serde(default)]`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => Ok(Some(n)),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("Invalid id: {}", s))),
    }
}
