use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse(hex: &str) -> Result<Color, ColorParseError> {
        let s = hex.trim_start_matches('#');
        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            8 => Ok(Color::rgba(
                digit(0..2)?,
                digit(2..4)?,
                digit(4..6)?,
                digit(6..8)?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    /// Infallible convenience: malformed input falls back to opaque black.
    pub fn from_hex(hex: &str) -> Self {
        Color::parse(hex).unwrap_or(Color::BLACK)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}
