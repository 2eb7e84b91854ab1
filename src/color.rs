//! Colors.
//!
//! The core passes colors through as opaque hex strings; this is a helper for backends that
//! need actual channel values.

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Parses a hex color string.
    ///
    /// Accepts an optional leading `#` followed by `RGB` (12-bit), `RRGGBB`, or `AARRGGBB`.
    /// Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;

        let (a, r, g, b) = match digits.len() {
            3 => (
                255,
                ((value >> 8) & 0xf) * 17,
                ((value >> 4) & 0xf) * 17,
                (value & 0xf) * 17,
            ),
            6 => (255, value >> 16, (value >> 8) & 0xff, value & 0xff),
            8 => (
                value >> 24,
                (value >> 16) & 0xff,
                (value >> 8) & 0xff,
                value & 0xff,
            ),
            _ => return None,
        };

        Some(Color {
            r: r as f64 / 255.,
            g: g as f64 / 255.,
            b: b as f64 / 255.,
            a: a as f64 / 255.,
        })
    }
}
