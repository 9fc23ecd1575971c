//! termbo demo driver.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Logs go to stderr so they never land inside the region drawn on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stop = commands::interrupt_flag()?;
    match &cli.command {
        Commands::Progress(args) => commands::progress::handle_progress(args, &stop),
        Commands::Spin(args) => commands::spin::handle_spin(args, &stop),
    }
}
