//! String helpers shared by the CSS emitters.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").ok());

/// Converts `camelCase` to `kebab-case`.
///
/// Only a lowercase letter followed by an uppercase one starts a new word,
/// so runs of capitals stay together: `getHTTPResponse` → `get-httpresponse`.
pub fn camel_to_kebab(s: &str) -> String {
    match CAMEL_BOUNDARY.as_ref() {
        Some(re) => re.replace_all(s, "$1-$2").to_lowercase(),
        None => s.to_lowercase(),
    }
}

/// Resolves a `{path.to.token}` reference to `var(--path-to-token)`.
///
/// Anything that is not a whole-string reference is returned unchanged.
/// The target is not checked for existence.
pub fn resolve_token_reference(value: &str) -> String {
    match value
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(path) if !path.is_empty() => format!("var(--{})", path.replace('.', "-")),
        _ => value.to_string(),
    }
}

/// A custom property declaration at the `:root` indentation level.
pub fn css_var(name: &str, value: &str) -> String {
    format!("    --{}: {};", name, value)
}

pub fn oklch_color(lightness: &str, chroma: &str, hue_var: &str) -> String {
    format!("oklch({} {} {})", lightness, chroma, hue_var)
}

pub fn light_dark(light: &str, dark: &str) -> String {
    format!("light-dark({}, {})", light, dark)
}

fn in_range(value: &str, min: f64, max: f64) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| !n.is_nan() && n >= min && n <= max)
        .unwrap_or(false)
}

/// OKLCH lightness, 0 to 1.
pub fn is_valid_lightness(value: &str) -> bool {
    in_range(value, 0.0, 1.0)
}

/// OKLCH chroma, 0 to 0.5.
pub fn is_valid_chroma(value: &str) -> bool {
    in_range(value, 0.0, 0.5)
}

/// Hue angle, 0 to 360 inclusive.
pub fn is_valid_hue(value: &str) -> bool {
    in_range(value, 0.0, 360.0)
}
