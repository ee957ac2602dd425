//! Token document types, deserialized straight from the JSON files.
//!
//! Maps are [`IndexMap`]s so the generated CSS follows the order in which
//! tokens are declared.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single token value as authored in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: None,
            description: None,
        }
    }
}

/// Named tokens in declaration order.
pub type TokenMap = IndexMap<String, Token>;

/// `colors.json`: seed hues plus the shared lightness and chroma tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub color: ColorSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSection {
    pub seed: TokenMap,
    pub lightness: TokenMap,
    pub chroma: ChromaTables,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromaTables {
    pub vivid: TokenMap,
    pub neutral: TokenMap,
}

/// A token with separate light and dark mode values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticToken {
    pub light: Token,
    pub dark: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `semantic.json`: categories of light/dark token pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticTokens {
    pub semantic: IndexMap<String, IndexMap<String, SemanticToken>>,
}

/// `spacing.json`: spacing scale and border radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub spacing: TokenMap,
    pub radius: TokenMap,
}

/// The three token documents the generator consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    pub colors: ColorTokens,
    pub semantic: SemanticTokens,
    pub spacing: SpacingTokens,
}
