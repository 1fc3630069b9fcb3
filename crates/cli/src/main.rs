// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! replacewith CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use replacewith::cli::{Cli, Command};
use replacewith::error::ExitCode;

mod cmd_apply;
mod cmd_check;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("REPLACEWITH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("replacewith: {}", e);
            match e.downcast_ref::<replacewith::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Apply(args)) => cmd_apply::run(&cli, args),
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
    }
}
