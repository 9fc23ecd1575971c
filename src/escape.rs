//! ANSI/VT100 escape sequence encoding.
//!
//! Maps semantic terminal commands to the exact control sequence a terminal
//! expects. Encoding never fails and has no side effects.

use std::fmt;

/// Control sequence introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// A single terminal control command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EscapeSequence {
    /// Move the cursor to `(row, col)`, both 1-based.
    SetCursor(usize, usize),
    CursorUp(usize),
    CursorDown(usize),
    CursorForward(usize),
    CursorBackward(usize),
    SaveCursor,
    RestoreCursor,
    /// Clear the whole screen.
    EraseDisplay,
    /// Clear from the cursor to the end of the line.
    EraseLine,
    /// Select graphic rendition. An empty list resets all attributes.
    GraphicsMode(Vec<u16>),
    SetScreenMode(u16),
    ResetScreenMode(u16),
    /// Remap keys: each `(code, value)` pair is emitted as `code;value`.
    SetKeyboardString(Vec<(u16, String)>),
}

impl EscapeSequence {
    /// SGR reset (`ESC[m`).
    pub fn graphics_off() -> Self {
        Self::GraphicsMode(Vec::new())
    }

    /// Keyboard remapping with a single mapping.
    pub fn keyboard_string(code: u16, value: impl Into<String>) -> Self {
        Self::SetKeyboardString(vec![(code, value.into())])
    }

    /// Append the encoded sequence to `buf`.
    pub fn write_to(&self, buf: &mut String) {
        buf.push_str(CSI);
        match self {
            Self::SetCursor(row, col) => {
                buf.push_str(&row.to_string());
                buf.push(';');
                buf.push_str(&col.to_string());
                buf.push('H');
            }
            Self::CursorUp(n) => push_count(buf, *n, 'A'),
            Self::CursorDown(n) => push_count(buf, *n, 'B'),
            Self::CursorForward(n) => push_count(buf, *n, 'C'),
            Self::CursorBackward(n) => push_count(buf, *n, 'D'),
            Self::SaveCursor => buf.push('s'),
            Self::RestoreCursor => buf.push('u'),
            Self::EraseDisplay => buf.push_str("2J"),
            Self::EraseLine => buf.push('K'),
            Self::GraphicsMode(codes) => {
                push_joined(buf, codes.iter().map(|c| c.to_string()));
                buf.push('m');
            }
            Self::SetScreenMode(n) => {
                buf.push('=');
                push_count(buf, usize::from(*n), 'h');
            }
            Self::ResetScreenMode(n) => {
                buf.push('=');
                push_count(buf, usize::from(*n), 'l');
            }
            Self::SetKeyboardString(mappings) => {
                push_joined(
                    buf,
                    mappings
                        .iter()
                        .map(|(code, value)| format!("{};{}", code, value)),
                );
                buf.push('p');
            }
        }
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(8);
        self.write_to(&mut buf);
        f.write_str(&buf)
    }
}

fn push_count(buf: &mut String, n: usize, final_byte: char) {
    buf.push_str(&n.to_string());
    buf.push(final_byte);
}

fn push_joined(buf: &mut String, parts: impl Iterator<Item = String>) {
    for (i, part) in parts.enumerate() {
        if i > 0 {
            buf.push(';');
        }
        buf.push_str(&part);
    }
}
