//! Single-character spinner demo.

use std::io::{self, Write};
use std::sync::atomic::AtomicBool;

use anyhow::Result;
use termbo::FrameRenderer;

use super::{animate, color_enabled, summary};
use crate::cli::LoopArgs;

/// Spinner glyphs in rotation order.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "\\", "-", "/"];

/// Glyph shown at `step`.
pub fn spinner_frame(step: usize) -> &'static str {
    SPINNER_FRAMES[step % SPINNER_FRAMES.len()]
}

/// Run the spinner demo on stdout.
pub fn handle_spin(args: &LoopArgs, stop: &AtomicBool) -> Result<()> {
    let renderer = FrameRenderer::new(1, 1)?;
    let mut stdout = io::stdout();
    let outcome = animate(&mut stdout, renderer, args, stop, |step| {
        vec![spinner_frame(step).to_string()]
    })?;

    writeln!(stdout, "{}", summary("spin", outcome, color_enabled()))?;
    Ok(())
}
