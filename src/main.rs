mod cli;
mod command_handlers;

use anyhow::{Context, Result};
use clap::Parser;
use coreswitch::events::TracingSink;
use coreswitch::{PlatformRoots, SwitchOptions, Switcher};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("CORESWITCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let roots = PlatformRoots::detect()?;
    let cwd = std::env::current_dir().context("reading current directory")?;
    let sink = TracingSink;
    let switcher = Switcher::new(roots, cwd, &sink);
    let opts = SwitchOptions::new(cli.global, cli.force);
    command_handlers::dispatch::dispatch(cli.command, &switcher, opts)?;
    Ok(())
}
