// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use replacewith::chain::RuleChain;
use replacewith::cli::{CheckArgs, Cli};
use replacewith::config::{self, CONFIG_FILE};
use replacewith::error::{Error, ExitCode};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let Some(path) = config::discover(cli.config.as_deref(), &cwd)? else {
        return Err(Error::Config {
            message: format!("no {} found (use -C to name one)", CONFIG_FILE),
            path: None,
        }
        .into());
    };

    tracing::debug!("loading config from {}", path.display());
    let config = config::load_with_warnings(&path)?;
    let chain = RuleChain::from_config(&config)?;

    if !args.quiet {
        for rule in chain.rules() {
            let spec = rule.layout.spec();
            let case = if spec.ignore_case { " (ignore case)" } else { "" };
            println!(
                "{}: {} {}{}",
                rule.label,
                rule.layout.matcher().tier(),
                spec.effective_pattern(),
                case
            );
        }
        println!("{}: {} rule(s) ok", path.display(), chain.len());
    }

    Ok(ExitCode::Success)
}
