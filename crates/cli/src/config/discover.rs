// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating replacewith.toml.

use std::path::{Path, PathBuf};

use super::CONFIG_FILE;
use crate::error::{Error, Result};

/// Pick the rules file for a run started in `cwd`.
///
/// An explicit path (from `-C` or `REPLACEWITH_CONFIG`) must exist; a
/// directory stands for the replacewith.toml inside it. Without one, each
/// ancestor of `cwd` is searched, stopping at the git root. `Ok(None)` means
/// there are no configured rules.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        let found = search_upward(cwd);
        tracing::debug!(found = ?found, "searched for {}", CONFIG_FILE);
        return Ok(found);
    };

    let path = cwd.join(explicit);
    let path = if path.is_dir() { path.join(CONFIG_FILE) } else { path };
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", explicit.display()),
            path: Some(path),
        });
    }
    Ok(Some(path))
}

fn search_upward(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
