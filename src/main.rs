mod cli;

use std::io;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::Cli;
use plunge::SyncConfig;
use plunge::error::Error;
use plunge::input::read_relative_paths;
use plunge::sync::SyncEngine;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SyncConfig::from(&cli);
    tracing::debug!(?config, source = %cli.source.display(), dest = %cli.dest.display(), "starting");

    let rel_paths = read_relative_paths(io::stdin().lock())
        .context("Failed to read the list of files from standard input")?;

    let mut out = io::stdout().lock();
    if let Err(e) = SyncEngine::new(config).run(&cli.source, &cli.dest, &rel_paths, &mut out) {
        if matches!(e, Error::PathTooLong { .. }) {
            print_usage();
        }
        return Err(e).context("Sync operation failed");
    }

    Ok(())
}

fn print_usage() {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
    eprintln!("Try '{} --help' for more information.", cmd.get_name());
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
