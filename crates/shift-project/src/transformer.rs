//! Rewrites component CSS so ejected files live in a cascade layer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CssError;

static LEADING_COMMENTS: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?:/\*[\s\S]*?\*/\s*)*").ok());

static LAYER_BLOCK: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^@layer\s+([a-zA-Z_-][a-zA-Z0-9_-]*)\s*\{").ok());

static IMPORT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"@import\s+(?:url\([^)]+\)|"[^"]+"|'[^']+')[^;]*;"#).ok());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Target layer name.
    pub layer: String,
    /// Prepend the "created by shift add" comment.
    pub add_header: bool,
    /// Component named in the header.
    pub component_name: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            layer: "components".to_string(),
            add_header: true,
            component_name: "component".to_string(),
        }
    }
}

impl TransformOptions {
    pub fn new(layer: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
            component_name: component_name.into(),
            ..Self::default()
        }
    }
}

/// The comment placed at the top of an ejected component file.
pub fn component_header(name: &str) -> String {
    format!(
        "/**\n * Shift CSS - {name} Component\n *\n * This file was created from @shift-css/core using `shift add {name}`.\n * You can customize the CSS custom properties below.\n *\n * @see https://getshiftcss.com/components/{name}\n */\n\n"
    )
}

fn split_leading_comments(css: &str) -> (&str, &str) {
    let end = LEADING_COMMENTS
        .as_ref()
        .and_then(|re| re.find(css))
        .map_or(0, |m| m.end());
    css.split_at(end)
}

/// Name of the layer a stylesheet is wrapped in, if it starts with one.
pub fn existing_layer_name(css: &str) -> Option<&str> {
    let re = LAYER_BLOCK.as_ref()?;
    re.captures(css)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Puts `css` inside `@layer {layer}`.
///
/// Content already in the target layer is kept as is. Content wrapped in a
/// different layer has that layer renamed. Anything else is wrapped, with
/// every non-blank line indented by a tab.
pub fn wrap_in_layer(css: &str, options: &TransformOptions) -> String {
    let header = if options.add_header {
        component_header(&options.component_name)
    } else {
        String::new()
    };
    let (_, content) = split_leading_comments(css);
    let body = content.trim_start();

    match existing_layer_name(body) {
        Some(existing) if existing == options.layer => format!("{}{}", header, css),
        Some(existing) => {
            let rest = body
                .strip_prefix("@layer")
                .map(str::trim_start)
                .and_then(|r| r.strip_prefix(existing))
                .unwrap_or(body);
            format!("{}@layer {}{}", header, options.layer, rest)
        }
        None => {
            let indented = content
                .trim()
                .lines()
                .map(|line| {
                    if line.trim().is_empty() {
                        line.to_string()
                    } else {
                        format!("\t{}", line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}@layer {} {{\n{}\n}}\n", header, options.layer, indented)
        }
    }
}

/// `@import` rules pulled out of a stylesheet, and what remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImports {
    pub imports: Vec<String>,
    pub content: String,
}

/// Removes `@import` rules, which are not allowed inside a layer block.
pub fn extract_imports(css: &str) -> ExtractedImports {
    let Some(re) = IMPORT.as_ref() else {
        return ExtractedImports {
            imports: Vec::new(),
            content: css.trim().to_string(),
        };
    };
    ExtractedImports {
        imports: re.find_iter(css).map(|m| m.as_str().to_string()).collect(),
        content: re.replace_all(css, "").trim().to_string(),
    }
}

/// Prepares registry CSS for writing into a project: imports first, then the
/// layered content with its header.
pub fn transform_for_ejection(css: &str, layer: &str, component_name: &str) -> String {
    let ExtractedImports { imports, content } = extract_imports(css);
    let wrapped = wrap_in_layer(&content, &TransformOptions::new(layer, component_name));
    if imports.is_empty() {
        wrapped
    } else {
        format!("{}\n\n{}", imports.join("\n"), wrapped)
    }
}

/// Checks that braces outside string literals balance.
pub fn validate_css(css: &str) -> Result<(), CssError> {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for (i, ch) in css.char_indices() {
        if (ch == '"' || ch == '\'') && prev != Some('\\') {
            match quote {
                None => quote = Some(ch),
                Some(q) if q == ch => quote = None,
                Some(_) => {}
            }
        }
        if quote.is_none() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(CssError::UnexpectedClosingBrace(i))?;
                }
                _ => {}
            }
        }
        prev = Some(ch);
    }

    match depth {
        0 => Ok(()),
        open => Err(CssError::UnbalancedBraces(open)),
    }
}
