// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search-and-replace core.
//!
//! A [`SearchSpec`] is compiled once into a [`CompiledMatcher`], which is then
//! applied to any number of inputs:
//! - Case-sensitive literal text: memchr::memmem
//! - Everything else (regex, ignore-case, whole words): regex crate

pub mod matcher;

pub use matcher::{
    CompiledMatcher, LiteralMatcher, PatternError, PatternMatch, RegexMatcher, Replaced,
    SearchSpec,
};
