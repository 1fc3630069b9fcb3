// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Apply command implementation.
//!
//! Every input line becomes one log event. The rule chain is built and
//! frozen before any line is read, then shared across rayon workers.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use replacewith::chain::RuleChain;
use replacewith::cli::{ApplyArgs, Cli};
use replacewith::config;
use replacewith::error::{Error, ExitCode, Result};
use replacewith::layout::{Literal, LogEvent};

/// Label used for stdin in the `source` property.
const STDIN: &str = "-";

/// Run the apply command.
pub fn run(cli: &Cli, args: &ApplyArgs) -> anyhow::Result<ExitCode> {
    let chain = build_chain(cli, args)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let mut total = 0;

    for source in sources(&args.paths) {
        let content = read_source(&source)?;
        let (rendered, count) = transform(&chain, &content, &source_label(&source));
        out.write_all(rendered.as_bytes())?;
        total += count;
    }
    out.flush()?;

    if args.count {
        eprintln!("replacewith: {} replacement(s)", total);
    }

    Ok(ExitCode::Success)
}

/// Configured rules first, then the ad-hoc `--search` rule.
fn build_chain(cli: &Cli, args: &ApplyArgs) -> Result<RuleChain> {
    let mut chain = if args.no_config {
        RuleChain::new()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::Io {
            path: PathBuf::from("."),
            source: e,
        })?;
        match config::discover(cli.config.as_deref(), &cwd)? {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                RuleChain::from_config(&config::load_with_warnings(&path)?)?
            }
            None => {
                tracing::debug!("no config found");
                RuleChain::new()
            }
        }
    };

    if let Some(spec) = args.search_spec() {
        chain.push("--search", spec, Box::new(Literal::new(args.replacement())))?;
    }

    if chain.is_empty() {
        return Err(Error::Argument(format!(
            "no rules to apply: add [[rule]] tables to {} or pass --search",
            config::CONFIG_FILE
        )));
    }

    Ok(chain)
}

/// Input sources, in order; `None` is stdin.
fn sources(paths: &[PathBuf]) -> Vec<Option<PathBuf>> {
    if paths.is_empty() {
        return vec![None];
    }
    paths
        .iter()
        .map(|p| (p.as_os_str() != STDIN).then(|| p.clone()))
        .collect()
}

fn source_label(source: &Option<PathBuf>) -> String {
    match source {
        Some(path) => path.display().to_string(),
        None => STDIN.to_string(),
    }
}

fn read_source(source: &Option<PathBuf>) -> Result<String> {
    let bytes = match source {
        Some(path) => std::fs::read(path).map_err(|e| io_error(path, e))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| io_error(Path::new(STDIN), e))?;
            buf
        }
    };
    Ok(decode(bytes, &source_label(source)))
}

/// Invalid UTF-8 sequences become U+FFFD; the rest of the input is kept.
fn decode(bytes: Vec<u8>, label: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "replacewith: warning: {}: invalid UTF-8 replaced with U+FFFD",
                label
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Rewrite every line of `content`, keeping line terminators as they were.
fn transform(chain: &RuleChain, content: &str, source: &str) -> (String, usize) {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let rendered: Vec<(String, usize)> = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| {
            let (body, ending) = split_line_ending(line);
            let event = LogEvent::new(body)
                .with_property("line", (index + 1).to_string())
                .with_property("source", source);
            let (mut text, count) = chain.render_counted(&event);
            text.push_str(ending);
            (text, count)
        })
        .collect();

    let total: usize = rendered.iter().map(|(_, count)| count).sum();
    tracing::debug!(source, lines = lines.len(), replacements = total, "processed input");

    let mut out = String::with_capacity(content.len());
    for (text, _) in &rendered {
        out.push_str(text);
    }
    (out, total)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_at(body.len())
}
