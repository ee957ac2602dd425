//! # Shift Color - OKLCH math for the Shift CSS design system
//!
//! `shift-color` holds the numeric core of the token pipeline:
//!
//! - [`colorspace`]: sRGB hex → linear RGB → XYZ → Oklab → OKLCH, with the
//!   output formatting used throughout the generated CSS
//! - [`contrast`]: WCAG-style contrast ratios approximated from OKLCH lightness
//! - [`hue`]: seed hue helpers and the built-in presets
//!
//! Every function is pure; nothing here touches the filesystem.
//!
//! ## Quick Start
//!
//! ```rust
//! use shift_color::{hex_to_oklch, lightness_contrast, meets_wcag_aa};
//!
//! let brand = hex_to_oklch("#6366f1").unwrap();
//! println!("{}", brand); // oklch(58.5% 0.204 277)
//!
//! assert!(meets_wcag_aa(lightness_contrast(0.9778, 0.3944)));
//! ```

pub mod colorspace;
pub mod contrast;
mod error;
pub mod hue;

pub use colorspace::{
    format_chroma, format_hue, format_lightness, hex_to_oklch, rewrite_hex_colors, Oklab, Oklch,
    Rgb, ACHROMATIC_THRESHOLD,
};
pub use contrast::{
    contrast_ratio, lightness_contrast, meets_wcag_aa, meets_wcag_aa_large, meets_wcag_aaa,
    relative_luminance, ContrastPair, WcagLevel, WCAG_AA, WCAG_AAA, WCAG_AA_LARGE,
};
pub use error::{ColorError, Result};
pub use hue::{color_name, hex_to_hue, is_hex_color, preset, Preset, NEUTRAL_HUE, PRESETS};
