//! Tolerant field decoders for caller-supplied profile documents.
//!
//! Profiles come straight out of a schemaless document store, so any field can
//! hold the wrong JSON type. A malformed field decodes as absent instead of
//! failing the whole request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::domain::SportEntry;

/// Decode a string field, treating every non-string value as absent.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Decode an identifier. Numeric ids are rendered as strings.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Decode the sports list, skipping entries that are not objects with a
/// string `sport` field.
pub fn sports<'de, D>(deserializer: D) -> Result<Vec<SportEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let entry = item.as_object()?;
            let sport = entry.get("sport")?.as_str()?.to_string();
            let skill_level = entry
                .get("skillLevel")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(SportEntry { sport, skill_level })
        })
        .collect())
}

/// Decode the day -> slots mapping. Days whose value is not a list are
/// dropped, and non-string slot tokens are skipped.
pub fn availability<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(days) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(days
        .into_iter()
        .filter_map(|(day, slots)| match slots {
            Value::Array(tokens) => {
                let tokens = tokens
                    .into_iter()
                    .filter_map(|t| match t {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                Some((day, tokens))
            }
            _ => None,
        })
        .collect())
}
