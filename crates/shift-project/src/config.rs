//! `shift.config.json`: seed hues, architecture mode, paths and `add` settings.
//!
//! Every field has its own default, so partial files load cleanly:
//!
//! ```rust
//! use shift_project::config::{Mode, ShiftConfig};
//!
//! let config: ShiftConfig = serde_json::from_str(r#"{"hues": {"primary": 140}}"#).unwrap();
//! assert_eq!(config.hues.primary, 140);
//! assert_eq!(config.hues.secondary, 320);
//! assert_eq!(config.mode, Mode::Greenfield);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProjectError, Result};

/// Name of the config file at the project root.
pub const CONFIG_FILE: &str = "shift.config.json";

/// How Shift CSS coexists with the project's existing CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Shift CSS only.
    #[default]
    Greenfield,
    /// Existing frameworks kept in a `legacy` layer below Shift CSS.
    Hybrid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Greenfield => "greenfield",
            Mode::Hybrid => "hybrid",
        }
    }
}

/// OKLCH seed hues in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hues {
    pub primary: u16,
    pub secondary: u16,
    pub accent: u16,
    pub neutral: u16,
}

impl Default for Hues {
    fn default() -> Self {
        Self {
            primary: 260,
            secondary: 320,
            accent: 45,
            neutral: 260,
        }
    }
}

impl Hues {
    /// Uses `hue` for the primary color and tints the neutrals to match.
    pub fn with_primary(hue: u16) -> Self {
        Self {
            primary: hue,
            neutral: hue,
            ..Self::default()
        }
    }

    /// `(seed name, hue)` pairs in config order.
    pub fn seeds(&self) -> [(&'static str, u16); 4] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("neutral", self.neutral),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Entry stylesheet, relative to the project root.
    pub stylesheet: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            stylesheet: "src/styles/shift.css".to_string(),
        }
    }
}

/// Where `shift-css add` puts ejected files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddConfig {
    pub styles_dir: String,
    pub components_dir: String,
    pub layer: String,
    /// Template framework. Kept as a string so an unsupported value can be
    /// reported instead of rejecting the whole file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl Default for AddConfig {
    fn default() -> Self {
        Self {
            styles_dir: "src/styles/components".to_string(),
            components_dir: "src/components/ui".to_string(),
            layer: "components".to_string(),
            framework: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    pub hues: Hues,
    pub mode: Mode,
    pub paths: Paths,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<AddConfig>,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            hues: Hues::default(),
            mode: Mode::default(),
            paths: Paths::default(),
            version: 1,
            add: None,
        }
    }
}

impl ShiftConfig {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    /// Reads the config from `root`. A missing file is `Ok(None)`.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = Self::path(root);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProjectError::io(path, e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ProjectError::Json { path, source })
    }

    /// Reads the config, falling back to defaults when it is missing or broken.
    pub fn load_or_default(root: &Path) -> Self {
        match Self::load(root) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Settings for `add`, with defaults for anything not configured.
    pub fn add_config(&self) -> AddConfig {
        self.add.clone().unwrap_or_default()
    }

    /// Serializes with tab indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|source| ProjectError::Json {
                path: PathBuf::from(CONFIG_FILE),
                source,
            })?;
        let mut out = String::from_utf8_lossy(&buf).into_owned();
        out.push('\n');
        Ok(out)
    }

    /// Writes `shift.config.json` into `root` and returns its path.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let path = Self::path(root);
        let content = self.to_json()?;
        fs::write(&path, content).map_err(|e| ProjectError::io(&path, e))?;
        Ok(path)
    }
}
