// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers with automatic optimization.

use std::borrow::Cow;

use memchr::memmem::Finder;
use regex::{Captures, Regex, RegexBuilder};
use serde::Deserialize;

/// What to search for, and how.
///
/// Compile it once with [`SearchSpec::compile`] and reuse the resulting
/// [`CompiledMatcher`] for every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchSpec {
    /// Literal text, or a regular expression when `is_regex` is set.
    pub search_for: String,

    /// Treat `search_for` as a regular expression.
    #[serde(default)]
    pub is_regex: bool,

    /// Match regardless of letter case.
    #[serde(default)]
    pub ignore_case: bool,

    /// Only match standalone words.
    #[serde(default)]
    pub whole_words: bool,
}

impl SearchSpec {
    /// Search for literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            search_for: text.into(),
            ..Self::default()
        }
    }

    /// Search for a regular expression.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            search_for: pattern.into(),
            is_regex: true,
            ..Self::default()
        }
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn whole_words(mut self) -> Self {
        self.whole_words = true;
        self
    }

    /// The search as a regular expression, before word boundaries.
    ///
    /// Literal text is escaped; a regex is returned as written.
    pub fn base_pattern(&self) -> Cow<'_, str> {
        if self.is_regex {
            Cow::Borrowed(self.search_for.as_str())
        } else {
            Cow::Owned(regex::escape(&self.search_for))
        }
    }

    /// The pattern as shown in diagnostics: the base pattern, wrapped in
    /// `\b(?:..)\b` for whole words. Case sensitivity is a builder flag and
    /// does not appear here.
    pub fn effective_pattern(&self) -> String {
        if self.whole_words {
            format!(r"\b(?:{})\b", self.base_pattern())
        } else {
            self.base_pattern().into_owned()
        }
    }

    /// Compile into a reusable matcher.
    pub fn compile(&self) -> Result<CompiledMatcher, PatternError> {
        CompiledMatcher::compile(self)
    }
}

/// A compiled search, optimized for its structure.
///
/// Immutable after construction and safe to share across threads.
///
/// Matching runs in time linear in the input for every pattern; the regex
/// engine has no backtracking. Very large patterns are rejected when
/// compiled instead of exhausting memory at match time.
#[derive(Debug, Clone)]
pub enum CompiledMatcher {
    /// Case-sensitive literal text (SIMD substring search).
    Literal(LiteralMatcher),
    /// Everything else.
    Regex(RegexMatcher),
}

/// Matcher for plain literal text using memchr's substring finder.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    finder: Finder<'static>,
}

/// Matcher backed by the regex crate.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// Output of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced<'a> {
    /// The rewritten text, borrowed from the input when nothing matched.
    pub text: Cow<'a, str>,
    /// Number of matches that were replaced.
    pub count: usize,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Rejected by the parser before word boundaries were added.
    #[error("invalid pattern `{pattern}`: {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: Box<regex_syntax::Error>,
    },
}

impl CompiledMatcher {
    /// Compile a search into a matcher.
    ///
    /// Fails only when `is_regex` is set and `search_for` is not a valid
    /// regular expression (or is too large to compile).
    pub fn compile(spec: &SearchSpec) -> Result<Self, PatternError> {
        let matcher = if is_plain_literal(spec) {
            CompiledMatcher::Literal(LiteralMatcher::new(&spec.search_for))
        } else if spec.whole_words {
            CompiledMatcher::Regex(RegexMatcher::whole_words(
                &spec.base_pattern(),
                spec.ignore_case,
            )?)
        } else {
            CompiledMatcher::Regex(RegexMatcher::new(&spec.base_pattern(), spec.ignore_case)?)
        };

        tracing::debug!(
            tier = matcher.tier(),
            pattern = %spec.effective_pattern(),
            ignore_case = spec.ignore_case,
            "compiled search pattern"
        );

        Ok(matcher)
    }

    /// Short name of the matching engine in use.
    pub fn tier(&self) -> &'static str {
        match self {
            CompiledMatcher::Literal(_) => "literal",
            CompiledMatcher::Regex(_) => "regex",
        }
    }

    /// Replace every non-overlapping match with `replacement`, left to right.
    ///
    /// `replacement` is inserted verbatim; `$1`-style group references are not
    /// expanded. Returns the input unchanged when nothing matches.
    pub fn apply<'a>(&self, input: &'a str, replacement: &str) -> Cow<'a, str> {
        self.replace(input, replacement).text
    }

    /// Like [`apply`](Self::apply), also reporting how many matches were replaced.
    pub fn replace<'a>(&self, input: &'a str, replacement: &str) -> Replaced<'a> {
        match self {
            CompiledMatcher::Literal(m) => m.replace(input, replacement),
            CompiledMatcher::Regex(m) => m.replace(input, replacement),
        }
    }

    /// Find all matches in content.
    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        match self {
            CompiledMatcher::Literal(m) => m.find_all(content),
            CompiledMatcher::Regex(m) => m.find_all(content),
        }
    }

    pub fn is_match(&self, content: &str) -> bool {
        match self {
            CompiledMatcher::Literal(m) => m.finder.find(content.as_bytes()).is_some(),
            CompiledMatcher::Regex(m) => m.regex.is_match(content),
        }
    }
}

/// Whether the substring finder gives the same answer as the regex engine.
///
/// The empty needle is excluded: memchr reports empty matches at every byte,
/// the regex engine only at char boundaries.
fn is_plain_literal(spec: &SearchSpec) -> bool {
    !spec.is_regex && !spec.ignore_case && !spec.whole_words && !spec.search_for.is_empty()
}

impl LiteralMatcher {
    pub fn new(text: &str) -> Self {
        Self {
            finder: Finder::new(text.as_bytes()).into_owned(),
        }
    }

    fn needle_len(&self) -> usize {
        self.finder.needle().len()
    }

    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        self.finder
            .find_iter(content.as_bytes())
            .map(|pos| PatternMatch {
                start: pos,
                end: pos + self.needle_len(),
            })
            .collect()
    }

    pub fn replace<'a>(&self, input: &'a str, replacement: &str) -> Replaced<'a> {
        // Needle and haystack are both UTF-8, so every match sits on char boundaries.
        let mut matches = self.finder.find_iter(input.as_bytes()).peekable();
        if matches.peek().is_none() {
            return Replaced {
                text: Cow::Borrowed(input),
                count: 0,
            };
        }

        let mut out = String::with_capacity(input.len());
        let mut last = 0;
        let mut count = 0;
        for start in matches {
            out.push_str(&input[last..start]);
            out.push_str(replacement);
            last = start + self.needle_len();
            count += 1;
        }
        out.push_str(&input[last..]);

        Replaced {
            text: Cow::Owned(out),
            count,
        }
    }
}

impl RegexMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, PatternError> {
        Self::build(pattern, ignore_case, pattern)
    }

    /// Match `pattern` only where it starts and ends on a word boundary.
    ///
    /// The pattern is parsed on its own first, so errors point at what the
    /// user wrote. The boundaries then wrap the printed syntax tree, which has
    /// no comments or inline flags that could swallow or rebind them. Case
    /// folding is resolved by the parser, so the final build is case-sensitive.
    pub fn whole_words(pattern: &str, ignore_case: bool) -> Result<Self, PatternError> {
        let hir = regex_syntax::ParserBuilder::new()
            .case_insensitive(ignore_case)
            .build()
            .parse(pattern)
            .map_err(|source| PatternError::Syntax {
                pattern: pattern.to_string(),
                source: Box::new(source),
            })?;
        Self::build(&format!(r"\b(?:{})\b", hir), false, pattern)
    }

    fn build(regex: &str, ignore_case: bool, pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(regex)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|source| PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        self.regex
            .find_iter(content)
            .map(|m| PatternMatch {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    pub fn replace<'a>(&self, input: &'a str, replacement: &str) -> Replaced<'a> {
        let mut count = 0;
        // A closure replacer inserts its output verbatim, without `$name` expansion.
        let text = self.regex.replace_all(input, |_: &Captures<'_>| {
            count += 1;
            replacement
        });
        Replaced { text, count }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
