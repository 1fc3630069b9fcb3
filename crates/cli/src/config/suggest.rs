// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use std::path::Path;

/// Known top-level keys.
pub(super) const KNOWN_KEYS: &[&str] = &["version", "rule"];

/// Known keys inside a `[[rule]]` table.
pub(super) const KNOWN_RULE_KEYS: &[&str] = &[
    "name",
    "search_for",
    "is_regex",
    "ignore_case",
    "whole_words",
    "replace_with",
];

/// Known keys inside an inline `replace_with = { .. }` table.
pub(super) const KNOWN_REPLACE_KEYS: &[&str] = &["property"];

/// Suggest a key name for a typo, looking only at `known`.
pub fn suggest_key(unknown: &str, known: &[&'static str]) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let normalized = unknown.to_ascii_lowercase().replace('-', "_");

    // Common spellings borrowed from other tools
    let suggestion = match normalized.as_str() {
        "rules" | "replace_rule" | "replacement_rule" => Some("rule"),
        "search" | "pattern" | "find" | "searchfor" | "match" => Some("search_for"),
        "regex" | "isregex" | "use_regex" | "regexp" => Some("is_regex"),
        "ignorecase" | "case_insensitive" | "nocase" | "icase" => Some("ignore_case"),
        "whole_word" | "wholewords" | "wholeword" | "word" | "words" => Some("whole_words"),
        "replace" | "replacement" | "replacewith" | "with" => Some("replace_with"),
        "label" | "id" => Some("name"),
        "field" | "prop" | "properties" | "var" => Some("property"),
        _ => None,
    };

    if let Some(name) = suggestion.filter(|s| known.contains(s)) {
        return Some(name);
    }

    // Same key with different separators
    if let Some(&name) = known.iter().find(|k| **k == normalized) {
        return Some(name);
    }

    // Try prefix matching (require at least 3 chars to avoid false positives)
    if normalized.len() >= 3 {
        for &name in known {
            if name.starts_with(&normalized) || normalized.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about an unknown key with a suggestion when one exists.
pub fn warn_unknown_key(path: &Path, key: &str, known: &[&'static str]) {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    match suggest_key(leaf, known) {
        Some(suggested) => eprintln!(
            "replacewith: warning: {}: unrecognized field `{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "replacewith: warning: {}: unrecognized field `{}` (ignored)\n  Valid fields: {}",
            path.display(),
            key,
            known.join(", ")
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
