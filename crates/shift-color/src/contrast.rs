//! WCAG-style contrast evaluation from OKLCH lightness.
//!
//! Exact WCAG relative luminance needs the full channel-weighted sRGB
//! computation. Token scales only know their lightness, so luminance is
//! approximated as `L^2.4`. The approximation holds as long as hue and chroma
//! do not move luminance much, which is the case for the low-chroma neutrals
//! used for text and surfaces. Threshold checks in the test suite are
//! calibrated against this approximation, not the exact formula.
//!
//! ```rust
//! use shift_color::contrast::{lightness_contrast, WcagLevel};
//!
//! // neutral-50 text on neutral-900 background
//! let ratio = lightness_contrast(0.9778, 0.32);
//! assert_eq!(WcagLevel::classify(ratio), WcagLevel::Aaa);
//! ```

use serde::Serialize;

/// Minimum ratio for normal text at level AA.
pub const WCAG_AA: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const WCAG_AAA: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Approximates relative luminance from OKLCH lightness (0.0–1.0).
pub fn relative_luminance(lightness: f64) -> f64 {
    lightness.powf(2.4)
}

/// Contrast ratio between two relative luminances.
///
/// Order-independent and never below 1.
pub fn contrast_ratio(lum_a: f64, lum_b: f64) -> f64 {
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two OKLCH lightness values.
pub fn lightness_contrast(l_a: f64, l_b: f64) -> f64 {
    contrast_ratio(relative_luminance(l_a), relative_luminance(l_b))
}

/// Normal text, level AA (4.5:1).
pub fn meets_wcag_aa(ratio: f64) -> bool {
    ratio >= WCAG_AA
}

/// Normal text, level AAA (7:1).
pub fn meets_wcag_aaa(ratio: f64) -> bool {
    ratio >= WCAG_AAA
}

/// Large text, level AA (3:1).
pub fn meets_wcag_aa_large(ratio: f64) -> bool {
    ratio >= WCAG_AA_LARGE
}

/// The highest WCAG level a contrast ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// Large text only.
    AaLarge,
    /// Normal text.
    Aa,
    /// Enhanced contrast.
    Aaa,
}

impl WcagLevel {
    /// Classifies a ratio against the AAA, AA and AA-large thresholds.
    pub fn classify(ratio: f64) -> Self {
        if meets_wcag_aaa(ratio) {
            WcagLevel::Aaa
        } else if meets_wcag_aa(ratio) {
            WcagLevel::Aa
        } else if meets_wcag_aa_large(ratio) {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    /// Short label as used in design docs.
    pub fn label(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "fail",
            WcagLevel::AaLarge => "AA large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

/// Two lightness values to compare, e.g. a text color and its background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastPair {
    pub foreground: f64,
    pub background: f64,
}

impl ContrastPair {
    pub fn new(foreground: f64, background: f64) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub fn ratio(&self) -> f64 {
        lightness_contrast(self.foreground, self.background)
    }

    pub fn level(&self) -> WcagLevel {
        WcagLevel::classify(self.ratio())
    }
}
