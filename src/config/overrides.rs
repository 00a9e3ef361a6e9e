//! `key=value` override parsing
//!
//! Values are parsed as YAML literals, so `10`, `true`, `null`,
//! `[1, 2]` and `{name: Adam}` arrive as typed values rather than strings.

use serde_yaml::Value;

use super::error::ConfigError;

/// Separator between the segments of a nested override key.
pub const PATH_DELIMITER: char = '.';

/// Caller-supplied overrides, applied in the order given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideSpec {
    entries: Vec<(String, Value)>,
}

impl OverrideSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every raw `key=value` string, failing on the first malformed one.
    pub fn parse<I, S>(raw: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::new();
        for item in raw {
            let (key, value) = parse_override(item.as_ref())?;
            spec.push(key, value);
        }
        Ok(spec)
    }

    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for OverrideSpec {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parse a single `key=value` override.
///
/// The string is split on its first `=`; anything after it, including
/// further `=` characters, belongs to the value.
pub fn parse_override(raw: &str) -> Result<(String, Value), ConfigError> {
    let trimmed = raw.trim();
    let malformed = |reason: &str| ConfigError::MalformedOverride {
        raw: raw.to_string(),
        reason: reason.to_string(),
    };

    let (key, literal) = trimmed
        .split_once('=')
        .ok_or_else(|| malformed("expected key=value"))?;
    let key = key.trim();

    if key.is_empty() {
        return Err(malformed("empty key"));
    }
    if key.split(PATH_DELIMITER).any(|segment| segment.is_empty()) {
        return Err(malformed("empty path segment"));
    }

    let value = if literal.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(literal).map_err(|source| ConfigError::Parse {
            context: format!("value of override '{}'", key),
            source,
        })?
    };

    Ok((key.to_string(), value))
}
