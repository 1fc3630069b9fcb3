// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered chain of replacement rules.
//!
//! Every rule is compiled when it is added. Once built, the chain is only
//! read, so one chain serves any number of threads.

use std::borrow::Cow;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::layout::{Layout, LogEvent, Message, ReplaceWithLayout};
use crate::pattern::{Replaced, SearchSpec};

/// A compiled rule and its diagnostic label.
#[derive(Debug)]
pub struct Rule {
    pub label: String,
    pub layout: ReplaceWithLayout,
}

/// Rules applied one after another to an event's message.
#[derive(Debug, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every configured rule, in file order.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut chain = Self::new();
        for (index, rule) in config.rules.iter().enumerate() {
            chain.push(
                rule.label(index),
                rule.search.clone(),
                rule.replace_with.layout(),
            )?;
        }
        Ok(chain)
    }

    /// Compile and append a rule.
    pub fn push(
        &mut self,
        label: impl Into<String>,
        spec: SearchSpec,
        replace_with: Box<dyn Layout>,
    ) -> Result<()> {
        let label = label.into();
        let layout = ReplaceWithLayout::new(Box::new(Message), spec, replace_with).map_err(
            |source| Error::Pattern {
                rule: label.clone(),
                source,
            },
        )?;
        tracing::debug!(rule = %label, tier = layout.matcher().tier(), "bound rule");
        self.rules.push(Rule { label, layout });
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run `text` through every rule, reporting the total replacement count.
    pub fn transform_counted<'a>(&self, text: &'a str, event: &LogEvent) -> (Cow<'a, str>, usize) {
        let mut current = Cow::Borrowed(text);
        let mut total = 0;

        for rule in &self.rules {
            let (rewritten, count) = match rule.layout.transform_counted(&current, event) {
                Replaced {
                    text: Cow::Owned(out),
                    count,
                } => (Some(out), count),
                Replaced { count, .. } => (None, count),
            };
            if let Some(out) = rewritten {
                current = Cow::Owned(out);
            }
            total += count;
        }

        (current, total)
    }

    /// Render the event message through every rule.
    pub fn render_counted(&self, event: &LogEvent) -> (String, usize) {
        let (text, count) = self.transform_counted(&event.message, event);
        (text.into_owned(), count)
    }
}

impl Layout for RuleChain {
    fn render(&self, event: &LogEvent) -> String {
        self.render_counted(event).0
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
