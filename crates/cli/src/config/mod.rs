// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles replacewith.toml discovery, parsing with version validation, and
//! unknown key warnings.

mod discover;
mod suggest;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::layout::{Layout, Literal, Property};
use crate::pattern::SearchSpec;
use suggest::{KNOWN_KEYS, KNOWN_REPLACE_KEYS, KNOWN_RULE_KEYS, warn_unknown_key};

pub use discover::discover;
pub use suggest::suggest_key;

/// Default config file name, discovered from the working directory upward.
pub const CONFIG_FILE: &str = "replacewith.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Replacement rules, applied in file order.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

/// One `[[rule]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    /// Name used in diagnostics.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub search: SearchSpec,

    /// What matches are replaced with.
    pub replace_with: ReplaceWith,
}

impl RuleConfig {
    /// Name for diagnostics: the configured name, else the 1-based position.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", index + 1),
        }
    }
}

/// Replacement source for a rule.
///
/// ```toml
/// replace_with = "***"                  # literal text
/// replace_with = { property = "source" } # event property
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReplaceWith {
    Text(String),
    Property { property: String },
}

impl ReplaceWith {
    /// Build the layout rendered once per event.
    pub fn layout(&self) -> Box<dyn Layout> {
        match self {
            ReplaceWith::Text(text) => Box::new(Literal::new(text.as_str())),
            ReplaceWith::Property { property } => Box::new(Property::new(property.as_str())),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade replacewith to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    // Parse full config
    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
///
/// Warnings come first, so a misspelled key is reported even when it also
/// makes the rule fail to parse.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    for key in unknown_keys(&table) {
        let known = if key.starts_with("rule.replace_with.") {
            KNOWN_REPLACE_KEYS
        } else if key.starts_with("rule.") {
            KNOWN_RULE_KEYS
        } else {
            KNOWN_KEYS
        };
        warn_unknown_key(path, &key, known);
    }

    parse(content, path)
}

/// Collect unrecognized keys as dotted paths: `rule.<key>` for rule tables and
/// `rule.replace_with.<key>` for inline replacement tables.
///
/// Each unknown rule key is reported once even when it repeats across rules.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = std::collections::BTreeSet::new();

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.insert(key.clone());
        }
    }

    if let Some(toml::Value::Array(rules)) = table.get("rule") {
        for rule in rules.iter().filter_map(toml::Value::as_table) {
            for key in rule.keys() {
                if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
                    unknown.insert(format!("rule.{}", key));
                }
            }
            if let Some(toml::Value::Table(replace_with)) = rule.get("replace_with") {
                for key in replace_with.keys() {
                    if !KNOWN_REPLACE_KEYS.contains(&key.as_str()) {
                        unknown.insert(format!("rule.replace_with.{}", key));
                    }
                }
            }
        }
    }

    unknown.into_iter().collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
