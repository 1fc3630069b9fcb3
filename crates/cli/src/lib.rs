// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find-and-replace layout renderer.
//!
//! A [`SearchSpec`] is compiled once into a [`CompiledMatcher`] and then
//! applied to every rendered log line. [`ReplaceWithLayout`] hosts the
//! matcher behind a minimal [`Layout`] trait, and [`RuleChain`] applies
//! several configured rules in order.

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod pattern;

pub use chain::{Rule, RuleChain};
pub use cli::{ApplyArgs, CheckArgs, Cli, Command};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use layout::{Layout, Literal, LogEvent, Message, Property, ReplaceWithLayout};
pub use pattern::{CompiledMatcher, PatternError, SearchSpec};
