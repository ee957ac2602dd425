//! Color scales: one OKLCH ramp per seed hue.

use serde::Serialize;
use shift_color::{format_chroma, format_lightness};

use crate::error::{Result, TokenError};
use crate::model::{Token, TokenMap};
use crate::util::{css_var, oklch_color};

/// One step of a scale, with its numeric lightness and chroma.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleStep {
    pub step: String,
    pub lightness: f64,
    pub chroma: f64,
}

/// A named ramp of steps sharing one seed hue variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    pub name: String,
    pub steps: Vec<ScaleStep>,
}

pub(crate) fn parse_number(name: &str, token: &Token, min: f64, max: f64) -> Result<f64> {
    let value: f64 = token
        .value
        .trim()
        .parse()
        .map_err(|_| TokenError::NotANumber {
            token: name.to_string(),
            value: token.value.clone(),
        })?;
    if value.is_nan() || value < min || value > max {
        return Err(TokenError::OutOfRange {
            token: name.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(value)
}

impl ColorScale {
    /// Pairs the lightness table with a chroma table, in lightness order.
    ///
    /// Steps missing from the chroma table are skipped. Lightness has to
    /// strictly decrease from step to step; a chroma curve that does not rise
    /// to a single peak and fall again is only reported as a warning.
    pub fn build(name: &str, lightness: &TokenMap, chroma: &TokenMap) -> Result<Self> {
        let mut steps: Vec<ScaleStep> = Vec::with_capacity(lightness.len());

        for (step, l_token) in lightness {
            let Some(c_token) = chroma.get(step) else {
                log::debug!("scale {}: no chroma for step {}, skipping", name, step);
                continue;
            };
            let l = parse_number(&format!("color.lightness.{}", step), l_token, 0.0, 1.0)?;
            let c = parse_number(&format!("color.chroma.{}", step), c_token, 0.0, 0.5)?;

            if let Some(prev) = steps.last() {
                if l >= prev.lightness {
                    return Err(TokenError::NonMonotonicLightness {
                        previous_step: prev.step.clone(),
                        previous: prev.lightness,
                        step: step.clone(),
                        lightness: l,
                    });
                }
            }

            steps.push(ScaleStep {
                step: step.clone(),
                lightness: l,
                chroma: c,
            });
        }

        let scale = Self {
            name: name.to_string(),
            steps,
        };
        if !scale.has_single_chroma_peak() {
            log::warn!(
                "scale {}: chroma does not rise to a single peak and fall again",
                name
            );
        }
        Ok(scale)
    }

    /// `var(--shift-hue-{name})`
    pub fn hue_var(&self) -> String {
        format!("var(--shift-hue-{})", self.name)
    }

    /// The step with the highest chroma. Ties go to the earliest step.
    pub fn peak(&self) -> Option<&ScaleStep> {
        self.steps.iter().fold(None, |best: Option<&ScaleStep>, s| match best {
            Some(b) if b.chroma >= s.chroma => Some(b),
            _ => Some(s),
        })
    }

    pub fn has_single_chroma_peak(&self) -> bool {
        let chroma: Vec<f64> = self.steps.iter().map(|s| s.chroma).collect();
        let Some(peak) = chroma
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &c)| match best {
                Some((_, b)) if b >= c => best,
                _ => Some((i, c)),
            })
            .map(|(i, _)| i)
        else {
            return true;
        };
        let rising = chroma[..=peak].windows(2).all(|w| w[0] <= w[1]);
        let falling = chroma[peak..].windows(2).all(|w| w[0] >= w[1]);
        rising && falling
    }

    /// The scale's CSS block, including its leading blank line and title.
    pub fn css_lines(&self) -> Vec<String> {
        let hue_var = self.hue_var();
        let mut lines = vec![
            String::new(),
            format!("    /* {} SCALE */", self.name.to_uppercase()),
        ];
        for s in &self.steps {
            let value = oklch_color(
                &format_lightness(s.lightness),
                &format_chroma(s.chroma),
                &hue_var,
            );
            lines.push(css_var(&format!("color-{}-{}", self.name, s.step), &value));
        }
        lines
    }
}
