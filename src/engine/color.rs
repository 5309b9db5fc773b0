//! Hex color parsing and the translucent colors built from it.

use std::fmt;

/// Opaque color triple parsed from a `#RRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// An [`Rgb`] plus an alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// CSS `rgba(...)` form consumed by the canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Parse a 6-digit hex color, with or without a leading `#`.
///
/// Anything that does not match the pattern falls back to opaque white.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::WHITE)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Single-entry memo over [`hex_to_rgb`].
///
/// The base color is read once per particle per frame but only changes when
/// the user picks a new one, so remembering the last parse is enough.
#[derive(Clone, Debug)]
pub struct ColorCache {
    hex: String,
    rgb: Rgb,
}

impl ColorCache {
    pub fn new(hex: &str) -> Self {
        Self {
            hex: hex.to_owned(),
            rgb: hex_to_rgb(hex),
        }
    }

    pub fn rgb(&mut self, hex: &str) -> Rgb {
        if self.hex != hex {
            self.hex.clear();
            self.hex.push_str(hex);
            self.rgb = hex_to_rgb(hex);
        }
        self.rgb
    }
}
