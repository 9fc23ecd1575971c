//! SGR color and attribute helpers.
//!
//! Builds the code list of a [`EscapeSequence::GraphicsMode`] from typed colors and
//! attributes. Only produces sequences; nothing here tracks what the terminal
//! currently has enabled.

use crate::escape::EscapeSequence;

/// Terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Leave the terminal's color untouched.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index.
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// `(is_bright, offset)` within the 8-color palette, `None` for the rest.
    fn palette_offset(self) -> Option<(bool, u16)> {
        let entry = match self {
            Self::Black => (false, 0),
            Self::Red => (false, 1),
            Self::Green => (false, 2),
            Self::Yellow => (false, 3),
            Self::Blue => (false, 4),
            Self::Magenta => (false, 5),
            Self::Cyan => (false, 6),
            Self::White => (false, 7),
            Self::BrightBlack => (true, 0),
            Self::BrightRed => (true, 1),
            Self::BrightGreen => (true, 2),
            Self::BrightYellow => (true, 3),
            Self::BrightBlue => (true, 4),
            Self::BrightMagenta => (true, 5),
            Self::BrightCyan => (true, 6),
            Self::BrightWhite => (true, 7),
            Self::Default | Self::Indexed(_) | Self::Rgb(..) => return None,
        };
        Some(entry)
    }

    fn push_codes(self, background: bool, codes: &mut Vec<u16>) {
        let (base, bright_base, extended) = if background {
            (40, 100, 48)
        } else {
            (30, 90, 38)
        };
        match self {
            Self::Default => {}
            Self::Indexed(n) => codes.extend([extended, 5, u16::from(n)]),
            Self::Rgb(r, g, b) => {
                codes.extend([extended, 2, u16::from(r), u16::from(g), u16::from(b)])
            }
            named => {
                if let Some((bright, offset)) = named.palette_offset() {
                    let start = if bright { bright_base } else { base };
                    codes.push(start + offset);
                }
            }
        }
    }
}

/// Text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    Reverse,
}

impl Attribute {
    pub fn code(self) -> u16 {
        match self {
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Reverse => 7,
        }
    }
}

/// A combination of colors and attributes for a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Vec<Attribute>,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    /// SGR codes in emission order: attributes, then foreground, then background.
    pub fn codes(&self) -> Vec<u16> {
        let mut codes: Vec<u16> = self.attrs.iter().map(|a| a.code()).collect();
        self.fg.push_codes(false, &mut codes);
        self.bg.push_codes(true, &mut codes);
        codes
    }

    pub fn sequence(&self) -> EscapeSequence {
        EscapeSequence::GraphicsMode(self.codes())
    }

    /// Wrap `text` in this style followed by a reset.
    ///
    /// A default style returns the text unchanged.
    pub fn paint(&self, text: &str) -> String {
        let codes = self.codes();
        if codes.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + 16);
        EscapeSequence::GraphicsMode(codes).write_to(&mut out);
        out.push_str(text);
        EscapeSequence::graphics_off().write_to(&mut out);
        out
    }
}
