//! RGBA colours, written as `#rrggbb` or `#rrggbbaa` in snapshots and config.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SceneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(literal: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(literal.to_string());

        let digits = literal.trim().trim_start_matches('#');
        let all_hex = digits.chars().all(|c| c.is_ascii_hexdigit());
        if !all_hex || !(digits.len() == 6 || digits.len() == 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = SceneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
