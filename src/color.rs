use egui::Color32;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when reading a packed color from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("invalid packed color {0:?}: expected up to four hex digits")]
    InvalidHex(String),
}

/// A 16-bit packed 5-6-5 color as used by the display hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);

    /// Raw packed value
    pub fn packed(self) -> u16 {
        self.0
    }

    /// Expand the 5/6/5 bit channels to 8 bits each.
    ///
    /// Uses the integer expansion `(c5 * 527 + 23) >> 6` and `(c6 * 259 + 33) >> 6`,
    /// which maps 0 to 0 and full scale to 255.
    pub fn decode(self) -> (u8, u8, u8) {
        let r = u32::from((self.0 >> 11) & 0x1F);
        let g = u32::from((self.0 >> 5) & 0x3F);
        let b = u32::from(self.0 & 0x1F);

        let r8 = (r * 527 + 23) >> 6;
        let g8 = (g * 259 + 33) >> 6;
        let b8 = (b * 527 + 23) >> 6;

        (r8 as u8, g8 as u8, b8 as u8)
    }

    /// Decoded color for drawing on a preview surface
    pub fn to_color32(self) -> Color32 {
        let (r, g, b) = self.decode();
        Color32::from_rgb(r, g, b)
    }

    /// CSS style `#rrggbb` string of the decoded color
    pub fn to_hex_rgb(self) -> String {
        let (r, g, b) = self.decode();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Bright colors get a dark label when shown as a swatch.
    pub fn prefers_dark_text(self) -> bool {
        self.0 > 0x7FFF
    }

    /// Parse `0xF800`, `0XF800` or `F800`.
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 4 {
            return Err(ColorParseError::InvalidHex(trimmed.to_string()));
        }
        u16::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorParseError::InvalidHex(trimmed.to_string()))
    }

    /// Parse, falling back to black on malformed input.
    ///
    /// A corrupt color must never stop rendering, so the failure is only logged.
    pub fn parse_lossy(text: &str) -> Self {
        match Self::parse(text) {
            Ok(color) => color,
            Err(err) => {
                warn!("Falling back to black: {}", err);
                Self::BLACK
            }
        }
    }
}

impl fmt::Display for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

impl From<u16> for Rgb565 {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for Rgb565 {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rgb565> for String {
    fn from(value: Rgb565) -> Self {
        value.to_string()
    }
}

/// Decode text straight to 8-bit channels, black if the text is malformed.
pub fn decode_str(text: &str) -> (u8, u8, u8) {
    Rgb565::parse_lossy(text).decode()
}

/// A palette entry offered by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub color: Rgb565,
}

impl NamedColor {
    pub fn new(name: &str, color: Rgb565) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

/// The eight colors the editor offers out of the box
pub fn default_palette() -> Vec<NamedColor> {
    vec![
        NamedColor::new("Black", Rgb565::BLACK),
        NamedColor::new("White", Rgb565::WHITE),
        NamedColor::new("Red", Rgb565::RED),
        NamedColor::new("Green", Rgb565::GREEN),
        NamedColor::new("Blue", Rgb565::BLUE),
        NamedColor::new("Yellow", Rgb565::YELLOW),
        NamedColor::new("Cyan", Rgb565::CYAN),
        NamedColor::new("Magenta", Rgb565::MAGENTA),
    ]
}
