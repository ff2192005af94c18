use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::SceneError;
use crate::math::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const BLACK: ColorRgb = ColorRgb::new(0, 0, 0);
    pub const RED: ColorRgb = ColorRgb::from_hex(0xff0000);
    pub const GREEN: ColorRgb = ColorRgb::from_hex(0x00ff00);
    pub const BLUE: ColorRgb = ColorRgb::from_hex(0x0000ff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Linear-space channels for an sRGB render target.
    pub fn to_linear(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|channel| srgb_to_linear(channel as f32 / 255.0))
    }
}

fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for ColorRgb {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidColor(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(ColorRgb::from_hex)
            .map_err(|_| SceneError::InvalidColor(s.to_string()))
    }
}

fn channel(normalized: f32) -> u8 {
    // Truncates toward zero on purpose, 0.999 * 255 stays 254.
    (normalized * 255.0) as u8
}

/// Derives a point color from its position inside `range`.
///
/// Red follows z, green follows x and blue follows y. Coordinates outside the
/// range clamp to the nearest bound, and a degenerate range yields 0 for every
/// channel.
pub fn map_coordinate_to_color(point: Vec3, range: &Range) -> ColorRgb {
    ColorRgb {
        r: channel(range.normalize(point.z)),
        g: channel(range.normalize(point.x)),
        b: channel(range.normalize(point.y)),
    }
}
