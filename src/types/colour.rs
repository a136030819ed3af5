//! Tile background colours.
//!
//! Colours are written either as hex (`#RGB`, `#RGBA`, `#RRGGBB`,
//! `#RRGGBBAA`) or as CSS colour names (`gray`, `yellow`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{GridError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS `gray`, the background of the default marker tile.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// CSS `yellow`.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Parse a colour written either as hex or as a CSS colour name.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.starts_with('#') {
            if let Some(colour) = Self::from_name(s) {
                return Ok(colour);
            }
        }
        Self::from_hex(s).map_err(|_| GridError::Parse {
            message: format!("Invalid colour: {}", s),
            help: Some(
                "Use a CSS colour name (e.g. gray) or #RGB, #RGBA, #RRGGBB, #RRGGBBAA".to_string(),
            ),
        })
    }

    /// Look up a CSS colour name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let named = palette::named::from_str(&name.to_ascii_lowercase())?;
        Some(Self::rgb(named.red, named.green, named.blue))
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(GridError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: None,
            });
        }

        match hex.len() {
            3 | 4 => {
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let expand = |d: u8| d << 4 | d;
                let a = digits.get(3).copied().map_or(255, expand);
                Ok(Self::new(
                    expand(digits[0]),
                    expand(digits[1]),
                    expand(digits[2]),
                    a,
                ))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(GridError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| GridError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| GridError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
