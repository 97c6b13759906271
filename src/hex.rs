//! Parsing and formatting of `#RRGGBB` hex strings.

use std::{fmt, str::FromStr};

use crate::{Error, Result, Rgb};

/// Parse a `#RRGGBB` string. Digits are accepted in either case.
pub fn parse(input: &str) -> Result<Rgb> {
    let digits = input
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::invalid_hex(input))?;

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::invalid_hex(input))
    };

    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Format a color as `#RRGGBB` with uppercase digits.
pub fn format(rgb: &Rgb) -> String {
    rgb.to_string()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Rgb {
    /// Parse a color from a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        parse(hex)
    }

    /// Format this color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format(self)
    }
}
