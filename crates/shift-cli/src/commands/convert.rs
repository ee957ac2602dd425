//! `shift-css convert`

use serde::Serialize;
use shift_color::{color_name, format_chroma, format_lightness, Rgb};

use standout_dispatch::{HandlerResult, Output};

use crate::cli::ConvertArgs;

#[derive(Debug, Serialize)]
pub struct Conversion {
    pub input: String,
    pub hex: Option<String>,
    pub oklch: Option<String>,
    pub lightness: Option<String>,
    pub chroma: Option<String>,
    pub hue: Option<f64>,
    pub hue_name: Option<&'static str>,
    pub error: Option<String>,
}

impl Conversion {
    fn of(input: &str) -> Self {
        match Rgb::parse_hex(input) {
            Ok(rgb) => {
                let oklch = rgb.to_oklch();
                Self {
                    input: input.to_string(),
                    hex: Some(rgb.to_hex()),
                    oklch: Some(oklch.to_string()),
                    lightness: Some(format_lightness(oklch.l)),
                    chroma: Some(format_chroma(oklch.c)),
                    hue: oklch.hue(),
                    hue_name: oklch.hue().map(color_name),
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("{}", e);
                Self {
                    input: input.to_string(),
                    hex: None,
                    oklch: None,
                    lightness: None,
                    chroma: None,
                    hue: None,
                    hue_name: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub colors: Vec<Conversion>,
    pub failed: usize,
}

/// Converts every argument; malformed ones are reported, not fatal.
pub fn run(args: &ConvertArgs) -> HandlerResult<ConvertReport> {
    let colors: Vec<Conversion> = args.colors.iter().map(|c| Conversion::of(c)).collect();
    let failed = colors.iter().filter(|c| c.error.is_some()).count();
    Ok(Output::Render(ConvertReport { colors, failed }))
}
