//! RGB colors, hex parsing, and color interpolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, Tween2dError};

/// An opaque color with 8 bits per channel.
///
/// Serialized as a `#rrggbb` string so configuration files stay readable and
/// malformed colors are rejected when the file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Encode as a lower-case `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Renders as a CSS functional color, e.g. `rgb(128, 128, 128)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Tween2dError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_color(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Tween2dError;

    fn try_from(s: String) -> Result<Self> {
        parse_hex_color(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// Parse a `#rrggbb` color. Hex digits are case-insensitive.
pub fn parse_hex_color(s: &str) -> Result<Rgb> {
    let invalid = || Tween2dError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Linearly interpolate between two colors.
///
/// Each channel is `a + (b - a) * t` rounded to the nearest integer. `t` is
/// not clamped: values outside `[0.0, 1.0]` extrapolate, saturating at the
/// channel bounds.
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |from: u8, to: u8| {
        let from = f64::from(from);
        (from + (f64::from(to) - from) * t).round() as u8
    };
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
