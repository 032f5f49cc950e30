use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or the `#RGB` shorthand, case-insensitive.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: input.to_owned(),
        };

        let digits = input.trim().strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}

/// Drops alpha; the canvas has no transparency.
impl From<egui::Color32> for Color {
    fn from(color: egui::Color32) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

/// A palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

pub const DEFAULT_PALETTE: [(&str, Color); 16] = [
    ("Black", Color::rgb(0x00, 0x00, 0x00)),
    ("White", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("Red", Color::rgb(0xFF, 0x00, 0x00)),
    ("Lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("Blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("Yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("Magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("Cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("Orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("Purple", Color::rgb(0x80, 0x00, 0x80)),
    ("Green", Color::rgb(0x00, 0x80, 0x00)),
    ("Maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("Navy", Color::rgb(0x00, 0x00, 0x80)),
    ("Gray", Color::rgb(0x80, 0x80, 0x80)),
    ("Silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("Pink", Color::rgb(0xFF, 0xC0, 0xCB)),
];

pub fn default_palette() -> Vec<NamedColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|(name, color)| NamedColor::new(*name, *color))
        .collect()
}
