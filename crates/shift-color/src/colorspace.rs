//! sRGB to OKLCH conversion.
//!
//! # Pipeline
//!
//! Design tokens are authored in OKLCH because it is **perceptually uniform**:
//! equal steps in lightness look like equal steps to the eye, whatever the hue.
//! Brand colors, however, arrive as sRGB hex codes. This module converts them
//! one way, sRGB → OKLCH, through the standard chain:
//!
//! | Stage | Operation |
//! |-------|-----------|
//! | 1 | hex → 0–255 → 0.0–1.0 |
//! | 2 | sRGB transfer curve removed (linear light) |
//! | 3 | linear RGB → CIE XYZ (D65 matrix) |
//! | 4 | XYZ → LMS, cube root, LMS' → Oklab |
//! | 5 | Oklab `(L, a, b)` → OKLCH `(L, C, H)` |
//!
//! The matrix constants are the published Oklab ones, so results line up with
//! reference implementations (colorjs.io, culori) to the printed precision.
//!
//! # Achromatic colors
//!
//! Grays carry a tiny residual chroma from floating point noise, and the hue of
//! such a color is meaningless. Below [`ACHROMATIC_THRESHOLD`] the hue is
//! dropped and printed as the CSS keyword `none`.
//!
//! # Example
//!
//! ```rust
//! use shift_color::colorspace::hex_to_oklch;
//!
//! let red = hex_to_oklch("#ff0000").unwrap();
//! assert_eq!(red.to_string(), "oklch(62.8% 0.258 29)");
//!
//! let gray = hex_to_oklch("#808080").unwrap();
//! assert_eq!(gray.to_string(), "oklch(60.0% 0.000 none)");
//!
//! assert!(hex_to_oklch("#12345").is_none());
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::ColorError;

/// Chroma below which a color is treated as a gray and loses its hue.
pub const ACHROMATIC_THRESHOLD: f64 = 0.005;

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An 8-bit sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a hex color code.
    ///
    /// The leading `#` is optional. Both the 6-digit form (`#ff6b35`) and the
    /// 3-digit shorthand (`#f0f` → `#ff00ff`) are accepted.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(input.to_string()))
        };

        match hex.len() {
            3 => Ok(Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(ColorError::InvalidHexLength {
                value: input.to_string(),
                len: hex.len(),
            }),
        }
    }

    /// Returns the canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Converts this color to OKLCH.
    pub fn to_oklch(self) -> Oklch {
        let linear = [
            srgb_to_linear(self.0),
            srgb_to_linear(self.1),
            srgb_to_linear(self.2),
        ];
        let xyz = linear_rgb_to_xyz(linear);
        let oklab = xyz_to_oklab(xyz);
        oklab.to_oklch()
    }
}

// ─── Transfer curve & matrices ──────────────────────────────────────────────

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
pub fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear sRGB → CIE XYZ (D65 illuminant).
pub fn linear_rgb_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    [
        0.4124564 * r + 0.3575761 * g + 0.1804375 * b,
        0.2126729 * r + 0.7151522 * g + 0.0721750 * b,
        0.0193339 * r + 0.1191920 * g + 0.9503041 * b,
    ]
}

/// CIE XYZ → Oklab.
///
/// Two chained matrices with a cube root in between: XYZ → LMS cone response,
/// then the non-linear LMS' → `(L, a, b)`.
pub fn xyz_to_oklab([x, y, z]: [f64; 3]) -> Oklab {
    let l_ = (0.8189330101 * x + 0.3618667424 * y - 0.1288597137 * z).cbrt();
    let m_ = (0.0329845436 * x + 0.9293118715 * y + 0.0361456387 * z).cbrt();
    let s_ = (0.0482003018 * x + 0.2643662691 * y + 0.6338517070 * z).cbrt();

    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

// ─── Oklab ──────────────────────────────────────────────────────────────────

/// A color in the Oklab space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness, 0.0–1.0 for in-gamut colors.
    pub l: f64,
    /// Green–red axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
}

impl Oklab {
    /// Converts rectangular `(a, b)` to polar chroma and hue.
    pub fn to_oklch(self) -> Oklch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let mut h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        if h >= 360.0 {
            h -= 360.0;
        }

        Oklch {
            // sRGB input is in gamut; this only trims drift at the white point
            l: self.l.clamp(0.0, 1.0),
            c,
            h,
        }
    }
}

// ─── OKLCH ──────────────────────────────────────────────────────────────────

/// A color in the cylindrical OKLCH space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    /// Lightness, 0.0–1.0.
    pub l: f64,
    /// Chroma, ≥ 0.
    pub c: f64,
    /// Hue in degrees, `[0, 360)`. Meaningless when [`is_achromatic`](Self::is_achromatic).
    pub h: f64,
}

impl Oklch {
    /// Returns `true` when the chroma is too low for the hue to mean anything.
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_THRESHOLD
    }

    /// The hue, or `None` for achromatic colors.
    pub fn hue(&self) -> Option<f64> {
        if self.is_achromatic() {
            None
        } else {
            Some(self.h)
        }
    }
}

impl std::fmt::Display for Oklch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hue = match self.hue() {
            Some(h) => format_hue(h),
            None => "none".to_string(),
        };
        write!(
            f,
            "oklch({} {} {})",
            format_lightness(self.l),
            format_chroma(self.c),
            hue
        )
    }
}

/// Formats a 0.0–1.0 lightness as a percentage with one decimal: `0.6478` → `64.8%`.
pub fn format_lightness(l: f64) -> String {
    format!("{:.1}%", l * 100.0)
}

/// Formats a chroma with three decimals: `0.1472` → `0.147`.
pub fn format_chroma(c: f64) -> String {
    format!("{:.3}", c)
}

/// Formats a hue as whole degrees. A hue that rounds up to 360 wraps to 0.
pub fn format_hue(h: f64) -> String {
    let degrees = h.round() as i64;
    degrees.rem_euclid(360).to_string()
}

/// Converts a hex color to OKLCH.
///
/// Returns `None` for anything that is not a 3- or 6-digit hex code; callers
/// that need to report why should use [`Rgb::parse_hex`].
pub fn hex_to_oklch(hex: &str) -> Option<Oklch> {
    Rgb::parse_hex(hex).ok().map(Rgb::to_oklch)
}

static HEX_IN_TEXT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").ok());

/// Rewrites every `#rgb` / `#rrggbb` color in a CSS or inline-style string to
/// its `oklch(...)` form.
///
/// Used to post-process syntax highlighter output so code samples share the
/// documentation's perceptual color space.
pub fn rewrite_hex_colors(text: &str) -> String {
    let Some(re) = HEX_IN_TEXT.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| match hex_to_oklch(&caps[1]) {
        Some(oklch) => oklch.to_string(),
        None => caps[0].to_string(),
    })
    .into_owned()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Hex parsing
    // =====================================================================

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Rgb::parse_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::parse_hex("00ff00").unwrap(), Rgb(0, 255, 0));
    }

    #[test]
    fn parse_shorthand_expands() {
        assert_eq!(Rgb::parse_hex("#f0f").unwrap(), Rgb(255, 0, 255));
        assert_eq!(Rgb::parse_hex("#abc").unwrap(), Rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!(matches!(
            Rgb::parse_hex("#12345"),
            Err(ColorError::InvalidHexLength { len: 5, .. })
        ));
        assert!(Rgb::parse_hex("").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(matches!(
            Rgb::parse_hex("#gg0000"),
            Err(ColorError::InvalidHex(_))
        ));
        // from_str_radix alone would accept a sign
        assert!(Rgb::parse_hex("+f+f+f").is_err());
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Rgb(255, 107, 53).to_hex(), "#ff6b35");
    }

    // =====================================================================
    // Known OKLCH values
    // =====================================================================

    #[test]
    fn white_is_full_lightness_and_achromatic() {
        let white = hex_to_oklch("#ffffff").unwrap();
        assert!((white.l - 1.0).abs() < 1e-4, "got {}", white.l);
        assert!(white.is_achromatic());
        assert_eq!(white.to_string(), "oklch(100.0% 0.000 none)");
    }

    #[test]
    fn black_is_zero() {
        let black = hex_to_oklch("#000").unwrap();
        assert_eq!(black.l, 0.0);
        assert_eq!(black.c, 0.0);
        assert_eq!(black.to_string(), "oklch(0.0% 0.000 none)");
    }

    #[test]
    fn pure_red() {
        let red = hex_to_oklch("#ff0000").unwrap();
        assert!((red.l - 0.628).abs() < 0.001, "L = {}", red.l);
        assert!((red.c - 0.2577).abs() < 0.001, "C = {}", red.c);
        assert!((red.h - 29.23).abs() < 0.1, "H = {}", red.h);
    }

    #[test]
    fn pure_blue() {
        let blue = hex_to_oklch("#0000ff").unwrap();
        assert!((blue.l - 0.452).abs() < 0.001, "L = {}", blue.l);
        assert!((blue.c - 0.313).abs() < 0.001, "C = {}", blue.c);
        assert!((blue.h - 264.05).abs() < 0.1, "H = {}", blue.h);
    }

    #[test]
    fn mid_gray_has_no_hue() {
        let gray = hex_to_oklch("#808080").unwrap();
        assert!(gray.hue().is_none());
        assert!(gray.to_string().ends_with(" none)"));
    }

    #[test]
    fn invalid_hex_is_none() {
        assert!(hex_to_oklch("#zzzzzz").is_none());
        assert!(hex_to_oklch("#1234").is_none());
    }

    // =====================================================================
    // Formatting
    // =====================================================================

    #[test]
    fn lightness_and_chroma_rounding() {
        assert_eq!(format_lightness(0.6478), "64.8%");
        assert_eq!(format_chroma(0.1472), "0.147");
    }

    #[test]
    fn hue_wraps_at_360() {
        assert_eq!(format_hue(359.7), "0");
        assert_eq!(format_hue(359.4), "359");
        assert_eq!(format_hue(0.0), "0");
    }

    #[test]
    fn srgb_linearization_threshold() {
        // 10/255 ≈ 0.0392 sits below the 0.04045 knee
        assert!((srgb_to_linear(10) - (10.0 / 255.0) / 12.92).abs() < 1e-12);
        assert_eq!(srgb_to_linear(255), 1.0);
    }

    // =====================================================================
    // Text rewriting
    // =====================================================================

    #[test]
    fn rewrite_replaces_all_hex_colors() {
        let out = rewrite_hex_colors("color:#ff0000;background-color:#000");
        assert_eq!(
            out,
            "color:oklch(62.8% 0.258 29);background-color:oklch(0.0% 0.000 none)"
        );
    }

    #[test]
    fn rewrite_leaves_other_text_alone() {
        let input = "--shiki-dark:var(--x); width: 10px";
        assert_eq!(rewrite_hex_colors(input), input);
    }

    #[test]
    fn rewrite_ignores_four_digit_runs() {
        // neither a 3- nor 6-digit code ends at a word boundary here
        assert_eq!(rewrite_hex_colors("#abcd"), "#abcd");
    }
}
