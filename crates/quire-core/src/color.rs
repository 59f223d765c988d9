//! Color handling for document objects.
//!
//! Colors are stored as packed 32-bit ARGB values. Literal spellings accepted
//! by [`Color::parse`]:
//!
//! - `#rrggbb` / `#aarrggbb`
//! - `0xrrggbb` / `0xaarrggbb`
//! - an unsigned decimal ARGB value
//! - any CSS color understood by the `color` crate (`"red"`, `"DarkBlue"`,
//!   `"rgb(0 128 255)"`, ...)
//!
//! Six-digit hexadecimal forms are opaque.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use thiserror::Error;

const OPAQUE: u32 = 0xFF00_0000;

/// Error returned when a color literal cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`")]
pub struct ColorError(String);

impl ColorError {
    /// The literal that failed to parse.
    pub fn literal(&self) -> &str {
        &self.0
    }
}

/// A packed ARGB color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    argb: u32,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Creates an opaque color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(OPAQUE | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn argb(&self) -> u32 {
        self.argb
    }

    pub fn alpha(&self) -> u8 {
        (self.argb >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.argb >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.argb >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.argb as u8
    }

    /// Resolves a literal color spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use quire_core::color::Color;
    ///
    /// assert_eq!(Color::parse("#ff0000").unwrap(), Color::from_rgb(255, 0, 0));
    /// assert_eq!(Color::parse("0x80ff0000").unwrap().alpha(), 0x80);
    /// assert_eq!(Color::parse("Blue").unwrap(), Color::from_rgb(0, 0, 255));
    /// assert!(Color::parse("no-such-color").is_err());
    /// ```
    pub fn parse(literal: &str) -> Result<Self, ColorError> {
        let trimmed = literal.trim();
        let invalid = || ColorError(literal.to_string());

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"));
        if let Some(digits) = hex {
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            return match digits.len() {
                1..=6 => Ok(Self::from_argb(OPAQUE | value)),
                7 | 8 => Ok(Self::from_argb(value)),
                _ => Err(invalid()),
            };
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .map(Self::from_argb)
                .map_err(|_| invalid());
        }

        let css = DynamicColor::from_str(&trimmed.to_ascii_lowercase()).map_err(|_| invalid())?;
        let rgba = css.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::from_argb(
            (rgba.a as u32) << 24 | (rgba.r as u32) << 16 | (rgba.g as u32) << 8 | rgba.b as u32,
        ))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.argb)
    }
}
