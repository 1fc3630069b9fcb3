// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pattern::SearchSpec;

/// Find and replace text in log output, one line per event
#[derive(Parser)]
#[command(name = "replacewith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "REPLACEWITH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite input lines through the configured rules
    Apply(ApplyArgs),
    /// Validate the config and compile every rule
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct ApplyArgs {
    /// Input files (reads stdin when empty or "-")
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Ad-hoc search text, applied after configured rules
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Replacement for --search matches
    #[arg(short, long, value_name = "TEXT", requires = "search")]
    pub replace: Option<String>,

    /// Treat --search as a regular expression
    #[arg(long, requires = "search")]
    pub regex: bool,

    /// Match --search regardless of case
    #[arg(short = 'i', long, requires = "search")]
    pub ignore_case: bool,

    /// Match --search only as a whole word
    #[arg(short = 'w', long, requires = "search")]
    pub whole_words: bool,

    /// Print the number of replacements to stderr
    #[arg(long)]
    pub count: bool,

    /// Ignore any discovered config file
    #[arg(long)]
    pub no_config: bool,
}

impl ApplyArgs {
    /// Replacement text for the ad-hoc rule (empty by default).
    pub fn replacement(&self) -> &str {
        self.replace.as_deref().unwrap_or_default()
    }

    /// Search built from the ad-hoc flags, if `--search` was given.
    pub fn search_spec(&self) -> Option<SearchSpec> {
        self.search.as_ref().map(|search_for| SearchSpec {
            search_for: search_for.clone(),
            is_regex: self.regex,
            ignore_case: self.ignore_case,
            whole_words: self.whole_words,
        })
    }
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Print nothing on success
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
