//! Display width measurement and clipping.
//!
//! Widths are counted in terminal columns: each `char` counts as its
//! `unicode-width`, and control or zero-width characters count as 0. Escape
//! sequences embedded in a line (CSI `ESC [` ... final byte, or a two-character
//! `ESC x`) take no columns and are never cut apart. Grapheme clusters are not
//! segmented.

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

const ESC: u8 = 0x1B;

/// A piece of a line: either a printable char or a whole escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Char(char),
    Escape(&'a str),
}

struct Segments<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.line[self.pos..];
        let c = rest.chars().next()?;
        if c == '\x1b' {
            let len = escape_len(rest.as_bytes());
            self.pos += len;
            Some(Segment::Escape(&rest[..len]))
        } else {
            self.pos += c.len_utf8();
            Some(Segment::Char(c))
        }
    }
}

fn segments(line: &str) -> Segments<'_> {
    Segments { line, pos: 0 }
}

/// Byte length of the escape sequence at the start of `bytes` (which holds ESC).
///
/// Stops before any non-ASCII byte, so the length always ends on a char boundary.
fn escape_len(bytes: &[u8]) -> usize {
    debug_assert_eq!(bytes.first(), Some(&ESC));
    match bytes.get(1) {
        Some(b'[') => skip_csi(bytes, 2),
        Some(b) if b.is_ascii() && *b != ESC => 2,
        _ => 1,
    }
}

/// Index just past a CSI sequence whose parameters start at `pos`.
///
/// Parameter and intermediate bytes run until a final byte in 0x40-0x7E. An
/// invalid byte ends the sequence early without being consumed; an unterminated
/// sequence runs to the end of the line.
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    for (i, &b) in bytes.iter().enumerate().skip(pos) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
    }
    bytes.len()
}

/// Display width of `line` in terminal columns.
pub fn display_width(line: &str) -> usize {
    segments(line)
        .map(|seg| match seg {
            Segment::Char(c) => c.width().unwrap_or(0),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Clip a line that overflows a region of `width` columns.
///
/// A line that fits is returned whole and borrowed. An overflowing line keeps the
/// longest run of characters that is at most `width - 1` columns wide, so `"cdef"`
/// in a 3-column region becomes `"cd"`. Escape sequences past the cut are kept, so
/// a trailing attribute reset still reaches the terminal.
pub fn clip_line(line: &str, width: usize) -> Cow<'_, str> {
    if display_width(line) <= width {
        return Cow::Borrowed(line);
    }

    let limit = width.saturating_sub(1);
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut full = false;
    for seg in segments(line) {
        match seg {
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Char(c) => {
                let w = c.width().unwrap_or(0);
                if full || used + w > limit {
                    full = true;
                    continue;
                }
                used += w;
                out.push(c);
            }
        }
    }
    Cow::Owned(out)
}
