//! Termbo - redraw a fixed terminal region in place.
//!
//! Renders successive frames (ordered lines of text) into a bounded region of the
//! terminal, moving the cursor back to the top of the region after every frame so
//! the next one overwrites it. Meant for progress bars, spinners and status lines
//! that should not need a full-screen terminal library.
//!
//! ```no_run
//! use termbo::FrameRenderer;
//!
//! # fn main() -> termbo::Result<()> {
//! let mut stdout = std::io::stdout();
//! let mut renderer = FrameRenderer::new(20, 1)?;
//! for i in 0..=10 {
//!     let bar = format!("[{}{}]", "#".repeat(i), " ".repeat(10 - i));
//!     renderer.render_to(&mut stdout, &[bar])?;
//! }
//! renderer.end(&mut stdout)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod escape;
pub mod renderer;
pub mod sink;
pub mod style;
pub mod width;

pub use error::{Error, Result};
pub use escape::EscapeSequence;
pub use renderer::FrameRenderer;
pub use sink::OutputSink;
pub use style::{Attribute, Color, Style};
pub use width::{clip_line, display_width};
