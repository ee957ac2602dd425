//! `shift-css contrast`

use serde::Serialize;
use shift_color::{
    format_lightness, meets_wcag_aa, meets_wcag_aa_large, meets_wcag_aaa, ContrastPair, WcagLevel,
};

use standout_dispatch::{HandlerResult, Output};

use crate::cli::ContrastArgs;

#[derive(Debug, Serialize)]
pub struct ContrastReport {
    pub first: String,
    pub second: String,
    pub ratio: f64,
    pub ratio_text: String,
    pub level: WcagLevel,
    pub level_label: &'static str,
    pub aa: bool,
    pub aaa: bool,
    pub aa_large: bool,
}

pub fn run(args: &ContrastArgs) -> HandlerResult<ContrastReport> {
    let pair = ContrastPair::new(args.first, args.second);
    let ratio = pair.ratio();
    let level = pair.level();
    Ok(Output::Render(ContrastReport {
        first: format_lightness(args.first),
        second: format_lightness(args.second),
        ratio,
        ratio_text: format!("{:.2}:1", ratio),
        level,
        level_label: level.label(),
        aa: meets_wcag_aa(ratio),
        aaa: meets_wcag_aaa(ratio),
        aa_large: meets_wcag_aa_large(ratio),
    }))
}
