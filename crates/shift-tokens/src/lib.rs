//! # Shift Tokens - design token pipeline for Shift CSS
//!
//! Turns the JSON token documents (`colors.json`, `semantic.json`,
//! `spacing.json`) into a single `@layer shift.tokens` stylesheet:
//!
//! - seed hue custom properties (`--shift-hue-primary: 260;`)
//! - one OKLCH ramp per scale, bound to its seed hue variable
//! - semantic tokens resolved through `light-dark()`
//! - spacing, radius, typography, motion and shadow scales
//!
//! ```rust
//! use shift_tokens::{generate_tokens_css, TokenSet};
//!
//! let tokens = TokenSet::builtin().unwrap();
//! let css = generate_tokens_css(&tokens).unwrap();
//! assert!(css.contains(
//!     "--color-primary-500: oklch(64.8% 0.147 var(--shift-hue-primary));"
//! ));
//! ```

mod error;
pub mod generator;
mod loader;
pub mod model;
pub mod util;

pub use error::{Result, TokenError};
pub use generator::{
    count_variables, generate_tokens_css, ColorScale, Generator, ScaleStep, NEUTRAL_SCALE,
    VIVID_SCALES,
};
pub use loader::TOKEN_FILES;
pub use model::{SemanticToken, Token, TokenSet};
pub use util::{camel_to_kebab, resolve_token_reference};
