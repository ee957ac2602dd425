//! TypeScript declarations for Shift CSS's HTML attributes.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frameworks the declarations can augment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypesFramework {
    React,
    Vue,
    Svelte,
}

impl TypesFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypesFramework::React => "react",
            TypesFramework::Vue => "vue",
            TypesFramework::Svelte => "svelte",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TypesFramework::React => "React",
            TypesFramework::Vue => "Vue",
            TypesFramework::Svelte => "Svelte",
        }
    }

    /// Entry for `compilerOptions.types` when using the published typings.
    pub fn published_types(&self) -> Option<&'static str> {
        match self {
            TypesFramework::React => Some("@shift-css/core/types/react"),
            TypesFramework::Vue => Some("@shift-css/core/types/vue"),
            TypesFramework::Svelte => None,
        }
    }
}

/// What an attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue {
    /// Presence-only.
    Flag,
    /// Free text.
    Text,
    /// One of the listed values.
    OneOf(&'static [&'static str]),
    /// One of the listed values, or presence-only.
    OneOfOrFlag(&'static [&'static str]),
}

impl AttrValue {
    /// The TypeScript type for this value.
    pub fn ts_type(&self) -> String {
        let union = |values: &[&str]| {
            values
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        match self {
            AttrValue::Flag => "boolean".to_string(),
            AttrValue::Text => "string".to_string(),
            AttrValue::OneOf(values) => union(values),
            AttrValue::OneOfOrFlag(values) => format!("{} | boolean", union(values)),
        }
    }
}

const SIZES: &[&str] = &["sm", "lg", "xl", "full"];
const OVERFLOW: &[&str] = &["auto", "hidden", "scroll", "visible"];

/// Every Shift CSS attribute with its accepted values.
pub const ATTRIBUTES: &[(&str, AttrValue)] = &[
    // components
    (
        "s-btn",
        AttrValue::OneOfOrFlag(&[
            "primary", "secondary", "ghost", "link", "outline", "danger", "success", "warning",
        ]),
    ),
    (
        "s-badge",
        AttrValue::OneOfOrFlag(&[
            "primary",
            "secondary",
            "accent",
            "success",
            "warning",
            "danger",
            "outline",
            "outline-primary",
            "outline-secondary",
            "outline-success",
            "outline-warning",
            "outline-danger",
        ]),
    ),
    ("s-surface", AttrValue::OneOfOrFlag(&["raised", "sunken", "overlay"])),
    (
        "s-modal",
        AttrValue::OneOfOrFlag(&["center", "top", "bottom", "left", "right", "fullscreen"]),
    ),
    ("s-tooltip", AttrValue::Text),
    ("s-tooltip-pos", AttrValue::OneOf(&["top", "bottom", "left", "right"])),
    ("s-prose", AttrValue::OneOfOrFlag(&["sm", "lg"])),
    ("s-input", AttrValue::OneOfOrFlag(&["error", "success"])),
    ("s-card", AttrValue::Flag),
    ("s-skip-link", AttrValue::Flag),
    ("s-size", AttrValue::OneOf(SIZES)),
    // layout
    (
        "s-flex",
        AttrValue::OneOfOrFlag(&[
            "row", "col", "row-reverse", "col-reverse", "center", "stack", "between", "end",
            "wrap", "nowrap",
        ]),
    ),
    (
        "s-grid",
        AttrValue::OneOfOrFlag(&["1", "2", "3", "4", "5", "6", "12", "auto-fit", "auto-fill"]),
    ),
    ("s-grid-rows", AttrValue::OneOf(&["1", "2", "3", "4"])),
    ("s-col-span", AttrValue::OneOf(&["1", "2", "3", "4", "6", "12", "full"])),
    ("s-row-span", AttrValue::OneOf(&["1", "2", "3", "full"])),
    ("s-gap", AttrValue::OneOfOrFlag(&["xs", "sm", "md", "lg", "xl", "none"])),
    (
        "s-container",
        AttrValue::OneOfOrFlag(&["sm", "md", "lg", "xl", "full", "prose"]),
    ),
    (
        "s-justify",
        AttrValue::OneOf(&["start", "end", "center", "between", "around", "evenly"]),
    ),
    (
        "s-items",
        AttrValue::OneOf(&["start", "end", "center", "baseline", "stretch"]),
    ),
    (
        "s-content",
        AttrValue::OneOf(&["start", "end", "center", "between", "around"]),
    ),
    (
        "s-position",
        AttrValue::OneOf(&["static", "relative", "absolute", "fixed", "sticky"]),
    ),
    ("s-inset", AttrValue::OneOf(&["0", "auto"])),
    (
        "s-display",
        AttrValue::OneOf(&[
            "block",
            "inline",
            "inline-block",
            "contents",
            "inline-flex",
            "inline-grid",
        ]),
    ),
    // visibility
    ("s-hide-on", AttrValue::OneOf(&["sm", "md", "lg", "xl"])),
    ("s-overflow", AttrValue::OneOf(OVERFLOW)),
    ("s-overflow-x", AttrValue::OneOf(OVERFLOW)),
    ("s-overflow-y", AttrValue::OneOf(OVERFLOW)),
    ("s-pointer", AttrValue::OneOf(&["none", "auto"])),
    ("s-select", AttrValue::OneOf(&["none", "text", "all", "auto"])),
    // presence-only
    ("s-block", AttrValue::Flag),
    ("s-bordered", AttrValue::Flag),
    ("s-btn-group", AttrValue::Flag),
    ("s-card-body", AttrValue::Flag),
    ("s-card-footer", AttrValue::Flag),
    ("s-card-header", AttrValue::Flag),
    ("s-card-media", AttrValue::Flag),
    ("s-card-title", AttrValue::Flag),
    ("s-card-subtitle", AttrValue::Flag),
    ("s-card-icon", AttrValue::Flag),
    ("s-card-grid", AttrValue::Flag),
    ("s-card-stack", AttrValue::Flag),
    ("s-checkbox", AttrValue::Flag),
    ("s-collapse", AttrValue::Flag),
    ("s-dot", AttrValue::Flag),
    ("s-field", AttrValue::Flag),
    ("s-field-label", AttrValue::Flag),
    ("s-field-hint", AttrValue::Flag),
    ("s-field-error", AttrValue::Flag),
    ("s-hidden", AttrValue::Flag),
    ("s-horizontal", AttrValue::Flag),
    ("s-icon", AttrValue::Flag),
    ("s-input-group", AttrValue::Flag),
    ("s-input-addon", AttrValue::Flag),
    ("s-interactive", AttrValue::Flag),
    ("s-invisible", AttrValue::Flag),
    ("s-isolate", AttrValue::Flag),
    ("s-link", AttrValue::Flag),
    ("s-loading", AttrValue::Flag),
    ("s-modal-body", AttrValue::Flag),
    ("s-modal-close", AttrValue::Flag),
    ("s-modal-footer", AttrValue::Flag),
    ("s-modal-header", AttrValue::Flag),
    ("s-not-sr-only", AttrValue::Flag),
    ("s-pill", AttrValue::Flag),
    ("s-radio", AttrValue::Flag),
    ("s-skip-link-group", AttrValue::Flag),
    ("s-sr-only", AttrValue::Flag),
    ("s-toggle", AttrValue::Flag),
    ("s-truncate", AttrValue::Flag),
    ("s-visible", AttrValue::Flag),
];

/// Picks the framework from `package.json` dependencies, checking React,
/// then Vue, then Svelte.
pub fn detect_types_framework(root: &Path) -> Option<TypesFramework> {
    let content = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("ignoring unparsable package.json: {}", e);
            return None;
        }
    };
    let has = |dep: &str| {
        ["dependencies", "devDependencies", "peerDependencies"]
            .iter()
            .any(|section| manifest.get(section).and_then(|deps| deps.get(dep)).is_some())
    };

    [
        (TypesFramework::React, "react"),
        (TypesFramework::Vue, "vue"),
        (TypesFramework::Svelte, "svelte"),
    ]
    .into_iter()
    .find(|(_, dep)| has(dep))
    .map(|(fw, _)| fw)
}

/// Renders the `.d.ts` file, with a module augmentation when a framework is given.
pub fn generate_typings(framework: Option<TypesFramework>) -> String {
    let mut out = String::from(
        "/**\n * Shift CSS - Attribute Types\n * Generated by shift-css types\n */\n\nexport interface ShiftAttributes {\n",
    );
    for (name, value) in ATTRIBUTES {
        let _ = writeln!(out, "\t'{}'?: {};", name, value.ts_type());
    }
    out.push_str("}\n");

    let augmentation = match framework {
        Some(TypesFramework::React) => {
            "\ndeclare module 'react' {\n\tinterface HTMLAttributes<T> extends ShiftAttributes {}\n}\n"
        }
        Some(TypesFramework::Vue) => {
            "\ndeclare module 'vue' {\n\tinterface ComponentCustomProps extends ShiftAttributes {}\n}\n\ndeclare module '@vue/runtime-dom' {\n\tinterface HTMLAttributes extends ShiftAttributes {}\n}\n"
        }
        Some(TypesFramework::Svelte) => {
            "\ndeclare global {\n\tnamespace svelteHTML {\n\t\tinterface HTMLAttributes<T> extends ShiftAttributes {}\n\t}\n}\n"
        }
        None => "",
    };
    out.push_str(augmentation);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_types() {
        assert_eq!(AttrValue::Flag.ts_type(), "boolean");
        assert_eq!(AttrValue::Text.ts_type(), "string");
        assert_eq!(AttrValue::OneOf(&["0", "auto"]).ts_type(), "'0' | 'auto'");
        assert_eq!(
            AttrValue::OneOfOrFlag(&["sm", "lg"]).ts_type(),
            "'sm' | 'lg' | boolean"
        );
    }

    #[test]
    fn attribute_names_are_unique() {
        let mut names: Vec<&str> = ATTRIBUTES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ATTRIBUTES.len());
    }

    #[test]
    fn plain_declarations() {
        let dts = generate_typings(None);
        assert!(dts.contains("export interface ShiftAttributes {\n"));
        assert!(dts.contains("\t's-card'?: boolean;\n"));
        assert!(dts.contains("\t's-tooltip'?: string;\n"));
        assert!(!dts.contains("declare module"));
    }

    #[test]
    fn framework_augmentations() {
        assert!(generate_typings(Some(TypesFramework::React)).contains("declare module 'react'"));
        assert!(generate_typings(Some(TypesFramework::Vue)).contains("'@vue/runtime-dom'"));
        assert!(generate_typings(Some(TypesFramework::Svelte)).contains("namespace svelteHTML"));
    }

    #[test]
    fn detects_framework_from_package_json() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_types_framework(dir.path()), None);

        fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies": {"svelte": "^4"}, "dependencies": {"vue": "^3"}}"#,
        )
        .unwrap();
        assert_eq!(detect_types_framework(dir.path()), Some(TypesFramework::Vue));

        fs::write(dir.path().join("package.json"), "not json").unwrap();
        assert_eq!(detect_types_framework(dir.path()), None);
    }
}
