// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wrapper layout that finds a pattern in its inner layout's output and
//! replaces it with another rendered layout.

use std::borrow::Cow;
use std::fmt;

use super::{Layout, LogEvent};
use crate::pattern::{CompiledMatcher, PatternError, Replaced, SearchSpec};

/// Renders `inner`, then replaces every match of the search with the output
/// of `replace_with` rendered against the same event.
///
/// The search is compiled once in [`ReplaceWithLayout::new`]; rendering never
/// recompiles it.
pub struct ReplaceWithLayout {
    inner: Box<dyn Layout>,
    spec: SearchSpec,
    matcher: CompiledMatcher,
    replace_with: Box<dyn Layout>,
}

impl ReplaceWithLayout {
    /// Bind the renderer, compiling the search.
    ///
    /// Fails when the search is an invalid regular expression; the host
    /// should treat that as a configuration error.
    pub fn new(
        inner: Box<dyn Layout>,
        spec: SearchSpec,
        replace_with: Box<dyn Layout>,
    ) -> Result<Self, PatternError> {
        let matcher = spec.compile()?;
        Ok(Self {
            inner,
            spec,
            matcher,
            replace_with,
        })
    }

    pub fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    /// Replace matches in already-rendered `text`.
    pub fn transform<'a>(&self, text: &'a str, event: &LogEvent) -> Cow<'a, str> {
        self.transform_counted(text, event).text
    }

    /// Like [`transform`](Self::transform), also reporting the replacement count.
    pub fn transform_counted<'a>(&self, text: &'a str, event: &LogEvent) -> Replaced<'a> {
        let replacement = self.replace_with.render(event);
        let replaced = self.matcher.replace(text, &replacement);
        tracing::trace!(
            pattern = %self.spec.search_for,
            count = replaced.count,
            "replaced matches"
        );
        replaced
    }

    /// Render the inner layout and transform it, reporting the replacement count.
    pub fn render_counted(&self, event: &LogEvent) -> (String, usize) {
        let text = self.inner.render(event);
        let (rewritten, count) = match self.transform_counted(&text, event) {
            Replaced {
                text: Cow::Owned(out),
                count,
            } => (Some(out), count),
            Replaced { count, .. } => (None, count),
        };
        (rewritten.unwrap_or(text), count)
    }
}

impl Layout for ReplaceWithLayout {
    fn render(&self, event: &LogEvent) -> String {
        self.render_counted(event).0
    }
}

impl fmt::Debug for ReplaceWithLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplaceWithLayout")
            .field("spec", &self.spec)
            .field("matcher", &self.matcher.tier())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
