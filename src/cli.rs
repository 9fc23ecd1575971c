//! Command-line interface for the termbo demo driver.

use clap::{Args, Parser, Subcommand};

/// Demo driver for in-place terminal frame rendering.
#[derive(Debug, Parser)]
#[command(name = "termbo", version, about = "Redraw a terminal region in place", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Animate stacked progress bars that fill up over the run
    Progress(ProgressArgs),
    /// Animate a one-character spinner
    Spin(LoopArgs),
}

/// Options shared by every animation.
#[derive(Debug, Clone, Args)]
pub struct LoopArgs {
    /// Number of frames to render
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 10)]
    pub interval_ms: u64,

    /// Blank the region before finishing
    #[arg(long)]
    pub clear: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ProgressArgs {
    /// Arrows in a full bar
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u16).range(1..))]
    pub arrows: u16,

    /// Maximum number of bars shown at once
    #[arg(long, default_value_t = 4)]
    pub height: usize,

    /// Region width (defaults to a full bar plus its brackets)
    #[arg(long)]
    pub width: Option<usize>,

    #[command(flatten)]
    pub run: LoopArgs,
}
