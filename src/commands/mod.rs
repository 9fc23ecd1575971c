//! Demo command handlers.
//!
//! Each command decides what to draw per step and hands the frames to
//! [`animate`], which owns the render loop.

pub mod progress;
pub mod spin;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, execute};
use termbo::{Color, FrameRenderer, Style};

use crate::cli::LoopArgs;

/// Fallback when the terminal width can't be detected (e.g. output is piped).
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Width of the controlling terminal in columns.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Set a flag on Ctrl-C instead of killing the process, so the renderer can still
/// move the cursor below its region.
pub fn interrupt_flag() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;
    Ok(stop)
}

/// Summary of a finished animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub frames: usize,
    pub interrupted: bool,
}

/// Render `frame_for(1..=steps)` into `renderer`, then end it.
///
/// The cursor is hidden for the duration and shown again even when a frame fails
/// to write. Stops early once `stop` is set.
pub fn animate<W, F>(
    out: &mut W,
    mut renderer: FrameRenderer,
    args: &LoopArgs,
    stop: &AtomicBool,
    frame_for: F,
) -> Result<Outcome>
where
    W: Write,
    F: FnMut(usize) -> Vec<String>,
{
    execute!(out, cursor::Hide).context("Failed to hide cursor")?;
    let drawn = run_steps(out, &mut renderer, args, stop, frame_for);
    let shown = execute!(out, cursor::Show).context("Failed to show cursor");

    let outcome = drawn?;
    renderer.end(out)?;
    shown?;
    Ok(outcome)
}

fn run_steps<W, F>(
    out: &mut W,
    renderer: &mut FrameRenderer,
    args: &LoopArgs,
    stop: &AtomicBool,
    mut frame_for: F,
) -> termbo::Result<Outcome>
where
    W: Write,
    F: FnMut(usize) -> Vec<String>,
{
    let interval = Duration::from_millis(args.interval_ms);
    let mut outcome = Outcome {
        frames: 0,
        interrupted: false,
    };

    for step in 1..=args.steps {
        if stop.load(Ordering::SeqCst) {
            tracing::info!(step, "animation interrupted");
            outcome.interrupted = true;
            break;
        }
        renderer.render_to(out, &frame_for(step))?;
        outcome.frames += 1;
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    if args.clear {
        renderer.clear(out)?;
    }
    Ok(outcome)
}

/// One-line report printed after the region has been released.
pub fn summary(label: &str, outcome: Outcome, color: bool) -> String {
    let text = if outcome.interrupted {
        format!("{} interrupted after {} frames", label, outcome.frames)
    } else {
        format!("{} finished: {} frames", label, outcome.frames)
    };
    if !color {
        return text;
    }
    let style = if outcome.interrupted {
        Style::fg(Color::Yellow)
    } else {
        Style::fg(Color::Green)
    };
    style.paint(&text)
}

/// Colors are on unless `NO_COLOR` is set.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
