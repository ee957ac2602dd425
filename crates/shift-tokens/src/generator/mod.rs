//! CSS generation from a [`TokenSet`].
//!
//! The whole document is assembled in memory; callers write it out only once
//! generation succeeded.

mod scale;
mod semantic;
mod statics;

pub use scale::{ColorScale, ScaleStep};

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::{Token, TokenSet};

/// Scales rendered with the vivid chroma table, in output order.
pub const VIVID_SCALES: [&str; 6] = [
    "primary",
    "secondary",
    "accent",
    "success",
    "warning",
    "danger",
];

/// The scale rendered with the neutral chroma table.
pub const NEUTRAL_SCALE: &str = "neutral";

const HEADER: &[&str] = &[
    "/**",
    " * Shift CSS - Design Tokens",
    " * Auto-generated from tokens/*.json",
    " * DO NOT EDIT DIRECTLY",
    " */",
    "",
    "@layer shift.tokens {",
    "  :root {",
    "    color-scheme: light dark;",
    "",
];

const FOOTER: &[&str] = &["  }", "}", ""];

/// Builds the `shift.tokens` layer from a token set.
///
/// ```rust
/// use shift_tokens::{Generator, TokenSet};
///
/// let tokens = TokenSet::builtin().unwrap();
/// let css = Generator::new(&tokens).with_seed_hue("primary", 140).generate().unwrap();
/// assert!(css.contains("--shift-hue-primary: 140;"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    tokens: &'a TokenSet,
    seed_overrides: IndexMap<String, String>,
}

impl<'a> Generator<'a> {
    pub fn new(tokens: &'a TokenSet) -> Self {
        Self {
            tokens,
            seed_overrides: IndexMap::new(),
        }
    }

    /// Replaces the value of a seed hue, e.g. from the project config.
    pub fn with_seed_hue(mut self, name: impl Into<String>, hue: impl ToString) -> Self {
        self.seed_overrides.insert(name.into(), hue.to_string());
        self
    }

    /// Seed hue values after overrides, in declaration order.
    pub fn seed_hues(&self) -> Result<IndexMap<String, String>> {
        let seeds = &self.tokens.colors.color.seed;
        let mut out = IndexMap::with_capacity(seeds.len());

        for (name, token) in seeds {
            let value = match self.seed_overrides.get(name) {
                Some(value) => {
                    log::info!("seed hue {}: {} -> {}", name, token.value, value);
                    value.clone()
                }
                None => token.value.clone(),
            };
            scale::parse_number(
                &format!("color.seed.{}", name),
                &Token::new(value.as_str()),
                0.0,
                360.0,
            )?;
            out.insert(name.clone(), value);
        }

        for name in self.seed_overrides.keys() {
            if !seeds.contains_key(name) {
                log::warn!("ignoring hue override for unknown seed '{}'", name);
            }
        }
        Ok(out)
    }

    /// All color scales in output order: the vivid ones, then neutral.
    pub fn scales(&self) -> Result<Vec<ColorScale>> {
        let color = &self.tokens.colors.color;
        let mut scales = VIVID_SCALES
            .iter()
            .map(|name| ColorScale::build(name, &color.lightness, &color.chroma.vivid))
            .collect::<Result<Vec<_>>>()?;
        scales.push(ColorScale::build(
            NEUTRAL_SCALE,
            &color.lightness,
            &color.chroma.neutral,
        )?);
        Ok(scales)
    }

    /// Renders the complete token stylesheet.
    pub fn generate(&self) -> Result<String> {
        let mut lines: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();

        lines.push("    /* SEED HUE CUSTOMIZATION POINTS */".to_string());
        for (name, value) in self.seed_hues()? {
            lines.push(format!("    --shift-hue-{}: {};", name, value));
        }

        for scale in self.scales()? {
            lines.extend(scale.css_lines());
        }

        lines.extend(semantic::css_lines(&self.tokens.semantic));
        lines.extend(statics::spacing_lines(&self.tokens.spacing));

        for block in [statics::TYPOGRAPHY, statics::TRANSITIONS, statics::SHADOWS] {
            lines.extend(block.iter().map(|s| s.to_string()));
        }
        lines.extend(FOOTER.iter().map(|s| s.to_string()));

        Ok(lines.join("\n"))
    }
}

/// Generates the stylesheet for a token set with its own seed hues.
pub fn generate_tokens_css(tokens: &TokenSet) -> Result<String> {
    Generator::new(tokens).generate()
}

/// Number of custom property declarations in a generated stylesheet.
pub fn count_variables(css: &str) -> usize {
    css.lines()
        .filter(|line| line.trim_start().starts_with("--"))
        .count()
}
