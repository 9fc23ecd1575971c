//! Stacked progress bar demo.
//!
//! Each step fills one more arrow; once a bar is full a new one starts below it,
//! so long runs stack up until the region's height clips the oldest overflow.

use std::io::{self, Write};
use std::sync::atomic::AtomicBool;

use anyhow::Result;
use termbo::FrameRenderer;

use super::{animate, color_enabled, summary, terminal_width};
use crate::cli::ProgressArgs;

/// Build one bar: `arrows` slots with the first `filled` shown as `>`.
///
/// # Arguments
/// * `arrows` - Total slots between the brackets
/// * `filled` - Completed slots, clamped to `arrows`
pub fn build_bar(arrows: usize, filled: usize) -> String {
    let filled = filled.min(arrows);
    let mut bar = String::with_capacity(arrows + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('>').take(filled));
    bar.extend(std::iter::repeat('-').take(arrows - filled));
    bar.push(']');
    bar
}

/// Build the frame for `step`: one full bar per completed chunk of `arrows`,
/// then the partially filled bar holding the remainder.
///
/// A step that lands exactly on a chunk boundary ends with a full bar rather than
/// an empty one.
pub fn build_progress_frame(arrows: usize, step: usize) -> Vec<String> {
    let mut bars = Vec::new();
    if arrows == 0 {
        return bars;
    }
    let mut remaining = step;
    while remaining > arrows {
        bars.push(build_bar(arrows, arrows));
        remaining -= arrows;
    }
    bars.push(build_bar(arrows, remaining));
    bars
}

/// Run the progress demo on stdout.
pub fn handle_progress(args: &ProgressArgs, stop: &AtomicBool) -> Result<()> {
    let arrows = usize::from(args.arrows);
    let width = args.width.unwrap_or(arrows + 2);
    let columns = terminal_width();
    if columns < width {
        tracing::warn!(width, columns, "region is wider than the terminal");
    }

    let renderer = FrameRenderer::new(width, args.height)?;
    let mut stdout = io::stdout();
    let outcome = animate(&mut stdout, renderer, &args.run, stop, |step| {
        build_progress_frame(arrows, step)
    })?;

    writeln!(stdout, "{}", summary("progress", outcome, color_enabled()))?;
    Ok(())
}
