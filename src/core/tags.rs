//! Tag map conversion.
//!
//! Tags arrive as a loose JSON object (any value, `null` for absent) and are
//! sent to the service as a strict string-to-string map.

use serde_json::Value;
use tracing::trace;

use crate::core::types::{LooseTagMap, TagMap};
use crate::error::{Result, TagError};

/// Stateless converter between loose and strict tag maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagCodec;

impl TagCodec {
    /// Convert loose tags into a strict [`TagMap`].
    ///
    /// `None` stays `None`, so "no tags supplied" is distinct from an empty
    /// tag set. `null` values become empty strings; that coercion is one-way.
    ///
    /// # Errors
    ///
    /// Returns `TagError::InvalidKey` for a blank key and
    /// `TagError::InvalidValue` for a present non-string value.
    pub fn to_strict_map(&self, loose: Option<&LooseTagMap>) -> Result<Option<TagMap>> {
        let Some(loose) = loose else {
            return Ok(None);
        };

        let mut strict = TagMap::new();
        for (key, value) in loose {
            if key.trim().is_empty() {
                return Err(TagError::InvalidKey(key.clone()).into());
            }
            let value = match value {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                _ => return Err(TagError::InvalidValue { key: key.clone() }.into()),
            };
            strict.insert(key.clone(), value);
        }

        trace!(count = strict.len(), "tags normalized");
        Ok(Some(strict))
    }

    /// Convert a strict [`TagMap`] back into the loose form. Never yields
    /// `null` values.
    pub fn to_loose_map(&self, strict: Option<&TagMap>) -> Option<LooseTagMap> {
        strict.map(|tags| {
            tags.iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect()
        })
    }

    /// Parse a `--tags` argument (a JSON object) into the loose form.
    ///
    /// # Errors
    ///
    /// Returns `TagError::Malformed` if the text is not a JSON object.
    pub fn parse_loose(&self, raw: &str) -> Result<LooseTagMap> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(TagError::Malformed(format!("got {}", kind(&other))).into()),
            Err(e) => Err(TagError::Malformed(e.to_string()).into()),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
