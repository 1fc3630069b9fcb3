// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal layout abstraction for hosting the replace renderer.
//!
//! A [`Layout`] turns a [`LogEvent`] into text. The host owns event creation
//! and output; this module only provides the pieces a replacement rule needs:
//! fixed text, the event message, an event property, or any closure.

mod replace;

use std::collections::BTreeMap;

pub use replace::ReplaceWithLayout;

/// Event context handed to layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: tracing::Level,
    pub message: String,
    pub properties: BTreeMap<String, String>,
}

impl LogEvent {
    /// Create an `INFO` event with no properties.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: tracing::Level::INFO,
            message: message.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// Renders an event into text.
///
/// Layouts are shared by every caller once built, so they must be
/// `Send + Sync` and must not mutate themselves while rendering.
pub trait Layout: Send + Sync {
    fn render(&self, event: &LogEvent) -> String;
}

/// Fixed text, independent of the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literal(pub String);

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Layout for Literal {
    fn render(&self, _event: &LogEvent) -> String {
        self.0.clone()
    }
}

/// The event message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Message;

impl Layout for Message {
    fn render(&self, event: &LogEvent) -> String {
        event.message.clone()
    }
}

/// A named event property; empty when the event does not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property(pub String);

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Layout for Property {
    fn render(&self, event: &LogEvent) -> String {
        event.property(&self.0).unwrap_or_default().to_string()
    }
}

impl<F> Layout for F
where
    F: Fn(&LogEvent) -> String + Send + Sync,
{
    fn render(&self, event: &LogEvent) -> String {
        self(event)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
