//! Filter option handling.
//!
//! Provides the separator configuration consumed by the parser and compiler,
//! with support for `jsonsieve.toml` files, environment variables, and
//! runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (values set on the struct directly)
//! 2. Environment variables (`JSONSIEVE_*`)
//! 3. Configuration file (`jsonsieve.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{Error, Result};

/// Separator configuration for the filter grammar.
///
/// Every token is configurable so the filter string can be adapted to
/// whatever characters survive the caller's transport (e.g. URL query
/// strings). Invalid overrides never make a filter unusable: [`sanitized`]
/// falls back to the default for each empty separator.
///
/// [`sanitized`]: FilterOptions::sanitized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Maximum number of composed-key segments accepted in a filter key.
    /// `0` means unbounded. Limits traversal work on deeply nested records.
    pub max_depth: usize,
    /// Token separating key from values for an equality condition.
    pub equal_separator: String,
    /// Token separating key from values for a not-equal condition.
    pub not_equal_separator: String,
    /// Token separating key from value for a greater-than condition.
    pub greater_than_separator: String,
    /// Token separating key from value for a lower-than condition.
    pub lower_than_separator: String,
    /// Token separating the values of one condition.
    pub value_separator: String,
    /// Token separating the conditions of a filter string.
    pub keys_separator: String,
    /// Token separating the segments of a composed key.
    pub composed_key_separator: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_depth: 0,
            equal_separator: "=".to_string(),
            not_equal_separator: "!=".to_string(),
            greater_than_separator: ">".to_string(),
            lower_than_separator: "<".to_string(),
            value_separator: ",".to_string(),
            keys_separator: ":".to_string(),
            composed_key_separator: ".".to_string(),
        }
    }
}

impl FilterOptions {
    /// Loads options from default sources.
    ///
    /// Priority: defaults < `jsonsieve.toml` < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse.
    pub fn load() -> Result<Self> {
        Self::load_from_path("jsonsieve.toml")
    }

    /// Loads options from a specific file path, merged with environment
    /// variables prefixed `JSONSIEVE_`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("JSONSIEVE_"));

        figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Creates options from a TOML string, merged over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes the options to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Validates the options without modifying them.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty separator.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.separators() {
            if value.is_empty() {
                return Err(Error::Config(format!("{key} can't be empty")));
            }
        }
        Ok(())
    }

    /// Returns a copy with every invalid field replaced by its default.
    ///
    /// Each substitution is reported with a warning, so an overridden
    /// configuration is never silently half-invalid.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut sane = self.clone();

        if sane.equal_separator.is_empty() {
            warn!(default = %defaults.equal_separator, "equal_separator can't be empty, default used");
            sane.equal_separator = defaults.equal_separator.clone();
        }
        if sane.not_equal_separator.is_empty() {
            warn!(default = %defaults.not_equal_separator, "not_equal_separator can't be empty, default used");
            sane.not_equal_separator = defaults.not_equal_separator.clone();
        }
        if sane.greater_than_separator.is_empty() {
            warn!(default = %defaults.greater_than_separator, "greater_than_separator can't be empty, default used");
            sane.greater_than_separator = defaults.greater_than_separator.clone();
        }
        if sane.lower_than_separator.is_empty() {
            warn!(default = %defaults.lower_than_separator, "lower_than_separator can't be empty, default used");
            sane.lower_than_separator = defaults.lower_than_separator.clone();
        }
        if sane.value_separator.is_empty() {
            warn!(default = %defaults.value_separator, "value_separator can't be empty, default used");
            sane.value_separator = defaults.value_separator.clone();
        }
        if sane.keys_separator.is_empty() {
            warn!(default = %defaults.keys_separator, "keys_separator can't be empty, default used");
            sane.keys_separator = defaults.keys_separator.clone();
        }
        if sane.composed_key_separator.is_empty() {
            warn!(default = %defaults.composed_key_separator, "composed_key_separator can't be empty, default used");
            sane.composed_key_separator = defaults.composed_key_separator;
        }

        sane
    }

    /// Separator fields with their names, for validation and diagnostics.
    fn separators(&self) -> [(&'static str, &str); 7] {
        [
            ("equal_separator", &self.equal_separator),
            ("not_equal_separator", &self.not_equal_separator),
            ("greater_than_separator", &self.greater_than_separator),
            ("lower_than_separator", &self.lower_than_separator),
            ("value_separator", &self.value_separator),
            ("keys_separator", &self.keys_separator),
            ("composed_key_separator", &self.composed_key_separator),
        ]
    }
}
