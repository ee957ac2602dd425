//! `shift-css init`: layer order, the entry stylesheet and the init plan.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment};
use serde::Serialize;

use crate::config::{Hues, Mode, ShiftConfig};
use crate::detector::{detect_frameworks, DetectedFramework};
use crate::error::{ProjectError, Result};
use crate::scanner::{find_entry_point, scan_css_files, CssFile};

/// Shift CSS's own layers, lowest priority first.
pub const SHIFT_LAYERS: &str = "shift.tokens, shift.base, shift.components, shift.utilities";

/// Stylesheets imported from the core package.
pub const CORE_IMPORTS: [&str; 4] = [
    "@shift-css/core/tokens",
    "@shift-css/core/base",
    "@shift-css/core/components",
    "@shift-css/core/utilities",
];

const STYLESHEET_TEMPLATE: &str = include_str!("templates/stylesheet.css.jinja");

/// The `@layer` order statement for a mode.
pub fn layer_order(mode: Mode) -> String {
    match mode {
        Mode::Hybrid => format!("@layer legacy, {};", SHIFT_LAYERS),
        Mode::Greenfield => format!("@layer {};", SHIFT_LAYERS),
    }
}

fn layer_docs(mode: Mode) -> Vec<String> {
    let mut layers = Vec::new();
    if mode == Mode::Hybrid {
        layers.push(("legacy", "Your existing frameworks"));
    }
    layers.extend([
        ("shift.tokens", "Design tokens (colors, spacing, typography)"),
        ("shift.base", "Reset and base styles"),
        ("shift.components", "UI components"),
        ("shift.utilities", "Utility classes"),
        ("(unlayered)", "Your custom overrides (highest specificity)"),
    ]);
    layers
        .iter()
        .enumerate()
        .map(|(i, (name, desc))| format!("{}. {:<16} - {}", i + 1, name, desc))
        .collect()
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("stylesheet.css", STYLESHEET_TEMPLATE)?;
    Ok(env)
}

/// Renders the entry stylesheet. In hybrid mode the detected framework files
/// are listed as commented-out imports inside `@layer legacy`.
pub fn render_stylesheet(mode: Mode, detected: &[DetectedFramework]) -> Result<String> {
    let env = environment()?;
    let legacy_imports: Vec<&str> = detected
        .iter()
        .map(|d| d.file.relative_path.as_str())
        .collect();
    let rendered = env.get_template("stylesheet.css")?.render(context! {
        layer_docs => layer_docs(mode),
        layer_order => layer_order(mode),
        core_imports => CORE_IMPORTS,
        hybrid => mode == Mode::Hybrid,
        legacy_imports => legacy_imports,
    })?;
    Ok(rendered)
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_stylesheet(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ProjectError::io(parent, e))?;
    }
    fs::write(&path, content).map_err(|e| ProjectError::io(&path, e))?;
    Ok(path)
}

/// Choices for `init`. Anything left `None` gets its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub mode: Option<Mode>,
    pub primary_hue: Option<u16>,
    pub stylesheet: Option<String>,
}

/// Everything `init` would write, computed without touching the disk.
#[derive(Debug, Clone, Serialize)]
pub struct InitPlan {
    pub config: ShiftConfig,
    pub stylesheet_path: String,
    pub stylesheet: String,
    pub detected: Vec<DetectedFramework>,
    pub entry_point: Option<CssFile>,
    pub config_exists: bool,
    pub stylesheet_exists: bool,
}

/// Paths written by [`InitPlan::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitOutcome {
    pub config_path: PathBuf,
    pub stylesheet_path: PathBuf,
}

/// Scans `root` and works out the config and stylesheet to create.
///
/// Without an explicit mode, detected frameworks select hybrid mode.
pub fn plan_init(root: &Path, options: &InitOptions) -> Result<InitPlan> {
    let files = scan_css_files(root);
    let detected = detect_frameworks(&files);
    let entry_point = find_entry_point(&files).cloned();

    let mode = options.mode.unwrap_or(if detected.is_empty() {
        Mode::Greenfield
    } else {
        Mode::Hybrid
    });
    log::info!(
        "init: {} frameworks detected, {} mode",
        detected.len(),
        mode.as_str()
    );

    let mut config = ShiftConfig {
        mode,
        ..ShiftConfig::default()
    };
    if let Some(hue) = options.primary_hue {
        config.hues = Hues::with_primary(hue);
    }
    if let Some(path) = &options.stylesheet {
        config.paths.stylesheet = path.clone();
    }

    let legacy: &[DetectedFramework] = if mode == Mode::Hybrid { &detected } else { &[] };
    let stylesheet = render_stylesheet(mode, legacy)?;
    let stylesheet_path = config.paths.stylesheet.clone();

    Ok(InitPlan {
        config_exists: ShiftConfig::exists(root),
        stylesheet_exists: root.join(&stylesheet_path).is_file(),
        config,
        stylesheet_path,
        stylesheet,
        detected,
        entry_point,
    })
}

impl InitPlan {
    pub fn apply(&self, root: &Path) -> Result<InitOutcome> {
        let config_path = self.config.write(root)?;
        let stylesheet_path = write_stylesheet(root, &self.stylesheet_path, &self.stylesheet)?;
        Ok(InitOutcome {
            config_path,
            stylesheet_path,
        })
    }
}
