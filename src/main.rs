//! sitetask - build, preview and deploy a static site
//!
//! Usage: sitetask [COMMAND]
//!
//! Commands:
//!   build    Run the site builder
//!   rebuild  Run the site builder with its force flag
//!   clean    Delete the output directory
//!   deploy   Clean, build, then sync the output to the remote
//!   serve    Run the preview server
//!   watch    Run the file watcher
//!   list     Show every operation and its commands
//!   init     Write a starter sitetask.toml

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

mod commands;
mod ui;

use commands::Session;
use sitetask::config::{OutputConfig, Verbosity};
use sitetask::presentation::{Cli, Commands};
use sitetask::TaskError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            let code = error_exit_code(&err);
            report_error(&cli, &err, code);
            to_exit_code(code)
        }
    }
}

type LogHandle = reload::Handle<EnvFilter, Registry>;

fn run(cli: &Cli) -> Result<i32> {
    // Installed before config loads so env override fallbacks are logged
    let log = init_tracing(cli.verbose);
    let command = cli.command_or_default();

    if let Commands::Init { force } = command {
        let root = commands::init_root(cli)?;
        let ui = ui::context::UiContext::new(cli.json, cli.color, &OutputConfig::default());
        return commands::init::cmd_init(&root, force, &ui);
    }

    let session = Session::open(cli)?;
    if let Some(handle) = &log {
        set_log_level(handle, cli.verbose, session.config().output.verbosity);
    }

    match command.operation() {
        Some(operation) => commands::run::cmd_run(&session, operation, cli.dry_run),
        None => commands::list::cmd_list(&session),
    }
}

/// `-v` flags win over the config's verbosity
fn log_level(verbose: u8, configured: Verbosity) -> LevelFilter {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        },
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` adds directives on top of the default level
fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn init_tracing(verbose: u8) -> Option<LogHandle> {
    let (filter, handle) = reload::Layer::new(env_filter(log_level(verbose, Verbosity::Normal)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok()
        .map(|()| handle)
}

fn set_log_level(handle: &LogHandle, verbose: u8, configured: Verbosity) {
    let _ = handle.reload(env_filter(log_level(verbose, configured)));
}

fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TaskError>()
        .map(TaskError::exit_code)
        .unwrap_or(1)
}

fn report_error(cli: &Cli, err: &anyhow::Error, code: i32) {
    let message = format!("{:#}", err);

    if cli.json {
        let command = command_name(&cli.command_or_default());
        let _ = ui::json::emit(ui::json::error_event(command, &message, code));
        return;
    }

    let ui = ui::context::UiContext::new(false, cli.color, &OutputConfig::default());
    ui::output::print_error(&message, &ui);
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List => "list",
        Commands::Init { .. } => "init",
        other => other.operation().map(|op| op.name()).unwrap_or("sitetask"),
    }
}

fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
