//! Loading token documents from disk or from the copies built into the crate.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, TokenError};
use crate::model::TokenSet;

/// File names read from a tokens directory.
pub const TOKEN_FILES: [&str; 3] = ["colors.json", "semantic.json", "spacing.json"];

const BUILTIN_COLORS: &str = include_str!("../tokens/colors.json");
const BUILTIN_SEMANTIC: &str = include_str!("../tokens/semantic.json");
const BUILTIN_SPACING: &str = include_str!("../tokens/spacing.json");

fn parse<T: DeserializeOwned>(name: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| TokenError::Parse {
        name: name.to_string(),
        source,
    })
}

fn read(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    log::debug!("reading token file {}", path.display());
    fs::read_to_string(&path).map_err(|source| TokenError::Io { path, source })
}

impl TokenSet {
    /// Parses the three documents from strings.
    pub fn from_json(colors: &str, semantic: &str, spacing: &str) -> Result<Self> {
        Ok(Self {
            colors: parse(TOKEN_FILES[0], colors)?,
            semantic: parse(TOKEN_FILES[1], semantic)?,
            spacing: parse(TOKEN_FILES[2], spacing)?,
        })
    }

    /// Loads `colors.json`, `semantic.json` and `spacing.json` from `dir`.
    ///
    /// Any missing or malformed file fails the whole load.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let colors = read(dir, TOKEN_FILES[0])?;
        let semantic = read(dir, TOKEN_FILES[1])?;
        let spacing = read(dir, TOKEN_FILES[2])?;
        Self::from_json(&colors, &semantic, &spacing)
    }

    /// The token set shipped with Shift CSS.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_COLORS, BUILTIN_SEMANTIC, BUILTIN_SPACING)
    }
}
