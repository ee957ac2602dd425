//! `shift-css init`

use anyhow::{bail, Context};
use serde::Serialize;
use shift_color::{color_name, hex_to_hue, preset, PRESETS};
use shift_project::detector::Confidence;
use shift_project::{plan_init, Hues, InitOptions, CONFIG_FILE};
use standout_dispatch::{HandlerResult, Output};

use crate::cli::InitArgs;
use crate::project::Project;

#[derive(Debug, Serialize)]
pub struct DetectedSummary {
    pub name: &'static str,
    pub icon: &'static str,
    pub path: String,
    pub confidence: Confidence,
}

#[derive(Debug, Serialize)]
pub struct InitReport {
    pub dry_run: bool,
    pub mode: &'static str,
    pub hues: Hues,
    pub hue_name: &'static str,
    pub hue_source: String,
    pub config_path: String,
    pub stylesheet_path: String,
    pub stylesheet: String,
    pub detected: Vec<DetectedSummary>,
    pub entry_point: Option<String>,
}

/// Primary hue from `--hue`, `--preset` or `--hex`, with where it came from.
fn primary_hue(args: &InitArgs) -> anyhow::Result<Option<(u16, String)>> {
    if let Some(hue) = args.hue {
        return Ok(Some((hue, format!("--hue {}", hue))));
    }
    if let Some(name) = &args.preset {
        let Some(p) = preset(name) else {
            let names: Vec<_> = PRESETS.iter().map(|p| p.name.to_lowercase()).collect();
            bail!(
                "unknown preset '{}' (available: {})",
                name,
                names.join(", ")
            );
        };
        return Ok(Some((p.hue, format!("preset {}", p.name))));
    }
    if let Some(hex) = &args.hex {
        let Some(hue) = hex_to_hue(hex) else {
            bail!("'{}' is not a hex color (expected #rgb or #rrggbb)", hex);
        };
        return Ok(Some((hue, format!("brand color {}", hex))));
    }
    Ok(None)
}

pub fn run(args: &InitArgs, project: &Project) -> HandlerResult<InitReport> {
    let hue = primary_hue(args)?;
    let options = InitOptions {
        mode: args.mode.map(Into::into),
        primary_hue: hue.as_ref().map(|(h, _)| *h),
        stylesheet: args.stylesheet.clone(),
    };
    let plan = plan_init(&project.root, &options)
        .with_context(|| format!("could not plan init in {}", project.root.display()))?;

    if !args.force && !args.dry_run {
        if plan.config_exists {
            bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
        }
        if plan.stylesheet_exists {
            bail!(
                "{} already exists (use --force to overwrite)",
                plan.stylesheet_path
            );
        }
    }

    if args.dry_run {
        log::info!("dry run, nothing written");
    } else {
        let outcome = plan.apply(&project.root).context("could not write project files")?;
        log::info!(
            "wrote {} and {}",
            outcome.config_path.display(),
            outcome.stylesheet_path.display()
        );
    }

    let hues = plan.config.hues;
    Ok(Output::Render(InitReport {
        dry_run: args.dry_run,
        mode: plan.config.mode.as_str(),
        hue_name: color_name(f64::from(hues.primary)),
        hue_source: hue.map(|(_, s)| s).unwrap_or_else(|| "default".to_string()),
        hues,
        config_path: CONFIG_FILE.to_string(),
        stylesheet_path: plan.stylesheet_path.clone(),
        stylesheet: plan.stylesheet.clone(),
        detected: plan
            .detected
            .iter()
            .map(|d| DetectedSummary {
                name: d.display_name,
                icon: d.icon,
                path: d.file.relative_path.clone(),
                confidence: d.confidence,
            })
            .collect(),
        entry_point: plan.entry_point.as_ref().map(|f| f.relative_path.clone()),
    }))
}
