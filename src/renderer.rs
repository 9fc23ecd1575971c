//! In-place frame rendering.
//!
//! A [`FrameRenderer`] owns a fixed `width x height` region. Each frame is written
//! line by line and followed by a cursor-up sequence that returns the cursor to the
//! top of the region, so the next frame overwrites the previous one. When drawing is
//! finished, [`FrameRenderer::end`] moves the cursor below the last visible frame.
//!
//! Line widths are measured with [`crate::width`].

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::escape::EscapeSequence;
use crate::sink::OutputSink;
use crate::width::clip_line;

/// Redraws frames into a fixed terminal region.
///
/// The renderer only tracks how many lines it has drawn; it never owns the output.
/// Calls must be serialized: a renderer is not meant to be shared between threads
/// without external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRenderer {
    width: usize,
    height: usize,
    /// Lines written by the draw that has not been rewound yet.
    current_frame_lines: usize,
    /// Lines of the frame currently visible on screen.
    previous_frame_lines: usize,
}

impl FrameRenderer {
    /// Create a renderer for a `width x height` region.
    ///
    /// Fails with [`Error::InvalidBounds`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBounds { width, height });
        }
        tracing::debug!(width, height, "created frame renderer");
        Ok(Self {
            width,
            height,
            current_frame_lines: 0,
            previous_frame_lines: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Lines drawn since the last rewind.
    pub fn current_frame_lines(&self) -> usize {
        self.current_frame_lines
    }

    /// Line count of the frame left on screen by the last render.
    pub fn previous_frame_lines(&self) -> usize {
        self.previous_frame_lines
    }

    /// Write the lines of `frame`, without moving the cursor back.
    ///
    /// At most `height` lines are written; the rest are dropped. Lines wider than the
    /// region are clipped with [`clip_line`]. Every written line ends with `\n`.
    /// Must be followed by [`rewind`](Self::rewind) before the next draw.
    pub fn draw<S: AsRef<str>>(&mut self, frame: &[S]) -> String {
        self.current_frame_lines = 0;
        let mut out = String::new();
        let mut clipped = 0;

        for line in frame.iter().take(self.height) {
            let line = line.as_ref();
            self.current_frame_lines += 1;
            let emitted = clip_line(line, self.width);
            if let Cow::Owned(kept) = &emitted {
                clipped += 1;
                tracing::trace!(
                    row = self.current_frame_lines - 1,
                    width = self.width,
                    kept = kept.len(),
                    len = line.len(),
                    "clipped line"
                );
            }
            out.push_str(&emitted);
            out.push('\n');
        }

        tracing::debug!(
            lines = self.current_frame_lines,
            dropped = frame.len().saturating_sub(self.height),
            clipped,
            "drew frame"
        );
        out
    }

    /// Move the cursor back to the top of the frame just drawn.
    ///
    /// The drawn frame becomes the visible one.
    pub fn rewind(&mut self) -> String {
        self.previous_frame_lines = self.current_frame_lines;
        let out = EscapeSequence::CursorUp(self.current_frame_lines).to_string();
        self.current_frame_lines = 0;
        out
    }

    /// Draw `frame` and rewind, returning the full output for one redraw.
    pub fn render<S: AsRef<str>>(&mut self, frame: &[S]) -> String {
        let mut out = self.draw(frame);
        out.push_str(&self.rewind());
        out
    }

    /// Render `frame` and write it to `sink`.
    ///
    /// On a write failure the counters already reflect the new frame; the terminal
    /// state is unknown at that point.
    pub fn render_to<W, S>(&mut self, sink: &mut W, frame: &[S]) -> Result<()>
    where
        W: OutputSink + ?Sized,
        S: AsRef<str>,
    {
        let out = self.render(frame);
        emit(sink, &out)
    }

    /// Output that blanks the whole region: `height` lines of `width` spaces.
    pub fn clear_frame(&mut self) -> String {
        let blank = " ".repeat(self.width);
        let frame = vec![blank; self.height];
        self.render(&frame)
    }

    /// Blank the region on `sink`.
    pub fn clear<W: OutputSink + ?Sized>(&mut self, sink: &mut W) -> Result<()> {
        let out = self.clear_frame();
        emit(sink, &out)
    }

    /// Cursor movement that leaves the cursor just below the visible frame.
    pub fn end_sequence(&self) -> String {
        EscapeSequence::CursorDown(self.previous_frame_lines).to_string()
    }

    /// Finish rendering: move the cursor past the visible frame so later output
    /// appears below it. Consumes the renderer.
    pub fn end<W: OutputSink + ?Sized>(self, sink: &mut W) -> Result<()> {
        tracing::debug!(lines = self.previous_frame_lines, "ending frame renderer");
        emit(sink, &self.end_sequence())
    }
}

fn emit<W: OutputSink + ?Sized>(sink: &mut W, out: &str) -> Result<()> {
    sink.emit(out.as_bytes()).map_err(|e| {
        tracing::warn!(error = %e, bytes = out.len(), "frame write failed");
        Error::Write(e)
    })
}
