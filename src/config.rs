//! Policy configuration and whitelist-based overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while parsing policy overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown policy option: {0}")]
    UnknownKey(String),
    #[error("Policy overrides must be a JSON object")]
    NotAnObject,
    #[error("Invalid policy overrides: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Thresholds driving the password policy.
///
/// Fields are independent: no cross-field validation is performed, so e.g.
/// a `min_phrase_length` below `min_length` is accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Exempt long inputs from the optional checks.
    pub allow_passphrases: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Length at or above which an input counts as a passphrase.
    pub min_phrase_length: usize,
    /// Optional checks a non-passphrase must pass to be strong.
    pub min_optional_tests_to_pass: usize,
}

impl PolicyConfig {
    /// Option keys accepted by [`PolicyOverrides::from_json`] and friends.
    pub const FIELDS: [&'static str; 5] = [
        "allowPassphrases",
        "minLength",
        "maxLength",
        "minPhraseLength",
        "minOptionalTestsToPass",
    ];

    /// Writes every field set in `overrides`, leaving the rest untouched.
    pub fn merge(&mut self, overrides: &PolicyOverrides) {
        if let Some(v) = overrides.allow_passphrases {
            self.allow_passphrases = v;
        }
        if let Some(v) = overrides.min_length {
            self.min_length = v;
        }
        if let Some(v) = overrides.max_length {
            self.max_length = v;
        }
        if let Some(v) = overrides.min_phrase_length {
            self.min_phrase_length = v;
        }
        if let Some(v) = overrides.min_optional_tests_to_pass {
            self.min_optional_tests_to_pass = v;
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allow_passphrases: true,
            min_length: 10,
            max_length: 128,
            min_phrase_length: 20,
            min_optional_tests_to_pass: 4,
        }
    }
}

/// A partial [`PolicyConfig`]. `None` fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_passphrases: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_phrase_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_optional_tests_to_pass: Option<usize>,
}

impl PolicyOverrides {
    /// Sets `allow_passphrases`.
    pub fn allow_passphrases(mut self, value: bool) -> Self {
        self.allow_passphrases = Some(value);
        self
    }

    /// Sets `min_length`.
    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    /// Sets `max_length`.
    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Sets `min_phrase_length`.
    pub fn min_phrase_length(mut self, value: usize) -> Self {
        self.min_phrase_length = Some(value);
        self
    }

    /// Sets `min_optional_tests_to_pass`.
    pub fn min_optional_tests_to_pass(mut self, value: usize) -> Self {
        self.min_optional_tests_to_pass = Some(value);
        self
    }

    /// Parses overrides from a JSON object, silently dropping unknown keys.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The input is not valid JSON
    /// - The input is not a JSON object
    /// - A known key carries a value of the wrong type
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(input)?)
    }

    /// Like [`PolicyOverrides::from_json`], but rejects unknown keys with
    /// [`ConfigError::UnknownKey`].
    pub fn from_json_strict(input: &str) -> Result<Self, ConfigError> {
        Self::from_value_strict(serde_json::from_str(input)?)
    }

    /// Builds overrides from already parsed JSON, silently dropping unknown keys.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `value` is not a JSON object
    /// - A known key carries a value of the wrong type
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let map = whitelist(value, false)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Like [`PolicyOverrides::from_value`], but rejects unknown keys with
    /// [`ConfigError::UnknownKey`].
    pub fn from_value_strict(value: Value) -> Result<Self, ConfigError> {
        let map = whitelist(value, true)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

/// Keeps only the keys listed in [`PolicyConfig::FIELDS`].
fn whitelist(value: Value, strict: bool) -> Result<Map<String, Value>, ConfigError> {
    let Value::Object(map) = value else {
        return Err(ConfigError::NotAnObject);
    };

    let mut kept = Map::new();
    for (key, value) in map {
        if PolicyConfig::FIELDS.contains(&key.as_str()) {
            kept.insert(key, value);
        } else if strict {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejecting unknown policy option: {}", key);
            return Err(ConfigError::UnknownKey(key));
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("Ignoring unknown policy option: {}", key);
        }
    }
    Ok(kept)
}
