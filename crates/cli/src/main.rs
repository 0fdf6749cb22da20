// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! oc - administrative console for a remote data warehouse

mod color;
mod command;
mod commands;
mod config;
mod context;
mod env;
mod error;
mod exec;
mod exit_error;
mod grammar;
mod help;
mod interactive;
mod logging;
mod output;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use oc_adapters::LineReader;
use oc_core::{SessionContext, SessionFlags};
use oc_engine::Interrupt;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::Config;
use crate::context::{Console, ConsoleOptions};
use crate::error::{exit_code, format_error, ConsoleError};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "oc",
    version,
    about = "Administrative console for a remote data warehouse"
)]
struct Cli {
    /// Run the given statements and exit
    #[arg(short = 'e', long = "execute", conflicts_with = "file")]
    execute: Option<String>,

    /// Run the statements in a script file and exit
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Initial project
    #[arg(long)]
    project: Option<String>,

    /// Service endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Config file (default: ~/.config/oc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Return as soon as a job is submitted
    #[arg(long = "async")]
    async_mode: bool,

    /// Print job configurations instead of submitting them
    #[arg(long)]
    dry_run: bool,

    /// Machine-readable output (implies JSON)
    #[arg(short = 'M', long = "machine-readable")]
    machine_readable: bool,

    /// Attempts per statement on remote failures
    #[arg(long = "retry", value_name = "N")]
    retry: Option<u32>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    let _log_guard = match logging::setup_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e}");
            None
        }
    };

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(cli)));

    if let Err(e) = result {
        let code = exit_code(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {msg}");
        }
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let script = match (&cli.execute, &cli.file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let mut session = SessionContext::new();
    config.apply_to(&mut session);
    if let Some(project) = cli.project {
        session.init_project(Some(project));
    }
    if let Some(endpoint) = cli.endpoint {
        session.endpoint = Some(endpoint);
    }
    if let Some(retry) = cli.retry {
        session.retry_count = retry.max(1);
    }
    session.flags = SessionFlags {
        async_mode: cli.async_mode,
        dry_run: cli.dry_run,
        machine_readable: cli.machine_readable,
        interactive: script.is_none() && std::io::stdin().is_terminal(),
        assume_yes: cli.yes,
    };
    tracing::info!(
        project = ?session.project(),
        endpoint = ?session.endpoint,
        batch = script.is_some(),
        "console starting"
    );

    let options = ConsoleOptions {
        runner: config.runner_config(),
        format: cli.output,
        colorize: color::should_colorize(),
        top_interval: config.top_interval(),
    };
    let interrupt = Interrupt::new();
    let _ctrl_c = interrupt.listen_ctrl_c();
    let input = LineReader::stdin();
    let mut console = Console::live(
        session,
        config.logview_template.clone(),
        input.clone(),
        interrupt,
        options,
    );

    match script {
        Some(text) => {
            let composite =
                grammar::resolve_script(&text, &console.session).map_err(ConsoleError::from)?;
            composite.run(&mut console).await?;
            Ok(())
        }
        None => interactive::run(&mut console, &input).await,
    }
}
