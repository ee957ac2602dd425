//! Seed hue helpers: brand color to hue, hue names and the built-in presets.

use serde::Serialize;

use crate::colorspace::Rgb;

/// Hue used when a brand color is a gray and has no meaningful hue.
pub const NEUTRAL_HUE: u16 = 250;

/// A named seed hue shipped with Shift CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub hue: u16,
    pub description: &'static str,
}

/// The built-in seed hue presets.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Plasma",
        hue: 260,
        description: "Electric Blue - High-tech default",
    },
    Preset {
        name: "Laser",
        hue: 320,
        description: "Cyber-Pink - Neon futurism",
    },
    Preset {
        name: "Acid",
        hue: 140,
        description: "Toxic Green - Engineering edge",
    },
    Preset {
        name: "Void",
        hue: 0,
        description: "Monochrome - Industrial minimal",
    },
];

/// Looks up a preset by name, ignoring case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Returns `true` if the value looks like a 3- or 6-digit hex color.
pub fn is_hex_color(value: &str) -> bool {
    Rgb::parse_hex(value).is_ok()
}

/// Derives a seed hue (whole degrees) from a brand hex color.
///
/// This is the HSL hue of the color, not its OKLCH hue: `#ff0000` seeds 0.
/// Only exact grays (all channels equal) fall back to [`NEUTRAL_HUE`], so a
/// near-gray like `#808081` still yields its blue-ish hue. Returns `None` for
/// malformed input.
pub fn hex_to_hue(hex: &str) -> Option<u16> {
    let Rgb(r, g, b) = Rgb::parse_hex(hex).ok()?;
    let (r, g, b) = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return Some(NEUTRAL_HUE);
    }

    // `%` keeps the sign of the dividend, so magenta lands at -1 sextant
    let sextant = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    // half-up rounding, then wrap negatives onto the wheel
    let degrees = (sextant * 60.0 + 0.5).floor().rem_euclid(360.0);
    Some(degrees as u16)
}

/// Human-readable name for a hue, in 30° buckets centred on the named colors.
pub fn color_name(hue: f64) -> &'static str {
    let h = hue.rem_euclid(360.0);
    match h {
        h if h < 15.0 => "Red",
        h if h < 45.0 => "Orange",
        h if h < 75.0 => "Yellow",
        h if h < 105.0 => "Lime",
        h if h < 135.0 => "Green",
        h if h < 165.0 => "Teal",
        h if h < 195.0 => "Cyan",
        h if h < 225.0 => "Sky",
        h if h < 255.0 => "Blue",
        h if h < 285.0 => "Indigo",
        h if h < 315.0 => "Purple",
        h if h < 345.0 => "Pink",
        _ => "Red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(preset("plasma").map(|p| p.hue), Some(260));
        assert_eq!(preset("LASER").map(|p| p.hue), Some(320));
        assert!(preset("unknown").is_none());
    }

    #[test]
    fn hex_detection() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("a1b2c3"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("blue"));
    }

    #[test]
    fn hue_from_brand_color() {
        assert_eq!(hex_to_hue("#ff0000"), Some(0));
        assert_eq!(hex_to_hue("#00ff00"), Some(120));
        assert_eq!(hex_to_hue("#0000ff"), Some(240));
        assert_eq!(hex_to_hue("#ff00ff"), Some(300));
        assert_eq!(hex_to_hue("#6366f1"), Some(239));
    }

    #[test]
    fn gray_gets_neutral_hue() {
        assert_eq!(hex_to_hue("#777"), Some(NEUTRAL_HUE));
        assert_eq!(hex_to_hue("#808080"), Some(NEUTRAL_HUE));
    }

    #[test]
    fn near_gray_keeps_its_hue() {
        // one step off gray on a single channel is still chromatic
        assert_eq!(hex_to_hue("#808081"), Some(240));
        assert_eq!(hex_to_hue("#818080"), Some(0));
        assert_eq!(hex_to_hue("#808180"), Some(120));
    }

    #[test]
    fn malformed_hex_has_no_hue() {
        assert_eq!(hex_to_hue("#12"), None);
    }

    #[test]
    fn names_cover_the_wheel() {
        assert_eq!(color_name(0.0), "Red");
        assert_eq!(color_name(30.0), "Orange");
        assert_eq!(color_name(260.0), "Indigo");
        assert_eq!(color_name(350.0), "Red");
        assert_eq!(color_name(-40.0), "Pink");
        assert_eq!(color_name(720.0 + 140.0), "Teal");
    }
}
