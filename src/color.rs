//! Simple RGBA colors for window borders
use crate::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A simple RGBA color, stored as `0xRRGGBBAA`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Construct from a packed `0xRRGGBBAA` value.
    pub const fn new_from_hex(rgba: u32) -> Self {
        Self(rgba)
    }

    /// The packed `0xRRGGBBAA` representation of this color.
    pub fn rgba_u32(&self) -> u32 {
        self.0
    }

    /// The `0xRRGGBB` representation of this color, dropping the alpha
    /// channel. This is the form expected by most border color requests.
    pub fn rgb_u32(&self) -> u32 {
        self.0 >> 8
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Self(rgba)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    /// Parse `#RRGGBB` or `#RRGGBBAA` hex strings. Missing alpha is taken
    /// as fully opaque.
    fn try_from(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidHexColor { hex: s.to_owned() };

        match hex.len() {
            6 => {
                let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Self((rgb << 8) | 0xFF))
            }
            8 => {
                let rgba = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Self(rgba))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
