//! Recognizes existing CSS frameworks among scanned files.
//!
//! Three passes run per file, and the first that matches wins:
//!
//! 1. **filename**: a signature's filename pattern (high confidence)
//! 2. **content**: for files over 5 KiB, at least two of a signature's content
//!    patterns in the first 50 KiB (medium confidence)
//! 3. **size**: files over 10 KiB named like an app entry stylesheet are
//!    reported as `generic-large` (low confidence)

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::scanner::CssFile;

/// Content analysis only runs on files larger than this.
pub const CONTENT_SCAN_MIN_SIZE: u64 = 5 * 1024;
/// How much of a file content analysis reads.
pub const CONTENT_SCAN_LIMIT: u64 = 50 * 1024;
/// Entry-named files above this size count as `generic-large`.
pub const GENERIC_LARGE_MIN_SIZE: u64 = 10 * 1024;

const GENERIC_ENTRY_NAMES: &[&str] = &["app.css", "main.css", "styles.css", "style.css", "global.css"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkType {
    Bootstrap,
    Tailwind,
    Bulma,
    Foundation,
    GenericLarge,
}

impl FrameworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkType::Bootstrap => "bootstrap",
            FrameworkType::Tailwind => "tailwind",
            FrameworkType::Bulma => "bulma",
            FrameworkType::Foundation => "foundation",
            FrameworkType::GenericLarge => "generic-large",
        }
    }

    pub fn signature(&self) -> Option<&'static FrameworkSignature> {
        SIGNATURES.iter().find(|s| s.name == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedBy {
    Filename,
    Content,
    Size,
}

/// How to recognize one framework.
#[derive(Debug)]
pub struct FrameworkSignature {
    pub name: FrameworkType,
    pub file_patterns: Vec<Regex>,
    pub content_patterns: Vec<Regex>,
    pub priority: u8,
    pub min_size: Option<u64>,
    pub icon: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedFramework {
    #[serde(rename = "type")]
    pub kind: FrameworkType,
    pub file: CssFile,
    pub confidence: Confidence,
    pub matched_by: MatchedBy,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl DetectedFramework {
    fn new(kind: FrameworkType, file: &CssFile, confidence: Confidence, matched_by: MatchedBy) -> Self {
        let (display_name, icon) = kind
            .signature()
            .map(|s| (s.display_name, s.icon))
            .unwrap_or((kind.as_str(), ""));
        Self {
            kind,
            file: file.clone(),
            confidence,
            matched_by,
            display_name,
            icon,
        }
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("bad detector pattern {}: {}", p, e);
                None
            }
        })
        .collect()
}

/// Known framework signatures, most specific first.
pub static SIGNATURES: Lazy<Vec<FrameworkSignature>> = Lazy::new(|| {
    vec![
        FrameworkSignature {
            name: FrameworkType::Bootstrap,
            file_patterns: compile(&[
                r"(?i)bootstrap\.css$",
                r"(?i)bootstrap\.min\.css$",
                r"(?i)bootstrap[\d.-]+\.css$",
                r"(?i)bootstrap[\d.-]+\.min\.css$",
            ]),
            content_patterns: compile(&[
                r"\.btn-primary\s*\{",
                r"\.container-fluid\s*\{",
                r"\.navbar-",
                r"--bs-",
            ]),
            priority: 10,
            min_size: None,
            icon: "🅱️",
            display_name: "Bootstrap",
        },
        FrameworkSignature {
            name: FrameworkType::Tailwind,
            file_patterns: compile(&[
                r"(?i)tailwind\.css$",
                r"(?i)tailwind\.min\.css$",
                r"(?i)tailwind\.output\.css$",
                r"(?i)tailwind-output\.css$",
            ]),
            content_patterns: compile(&[
                r"--tw-",
                r"\.hover\\:",
                r"\.focus\\:",
                r"@tailwind\s+(base|components|utilities)",
                r"\.-?m[trblxy]?-\[",
            ]),
            priority: 10,
            min_size: None,
            icon: "🌊",
            display_name: "Tailwind CSS",
        },
        FrameworkSignature {
            name: FrameworkType::Bulma,
            file_patterns: compile(&[r"(?i)bulma\.css$", r"(?i)bulma\.min\.css$"]),
            content_patterns: compile(&[r"\.is-primary\s*\{", r"\.columns\s*\{", r"\.navbar-burger"]),
            priority: 10,
            min_size: None,
            icon: "🎨",
            display_name: "Bulma",
        },
        FrameworkSignature {
            name: FrameworkType::Foundation,
            file_patterns: compile(&[r"(?i)foundation\.css$", r"(?i)foundation\.min\.css$"]),
            content_patterns: compile(&[r"\.callout\s*\{", r"\.top-bar\s*\{", r"\.orbit"]),
            priority: 10,
            min_size: None,
            icon: "🏛️",
            display_name: "Foundation",
        },
        FrameworkSignature {
            name: FrameworkType::GenericLarge,
            file_patterns: Vec::new(),
            content_patterns: Vec::new(),
            priority: 1,
            min_size: Some(GENERIC_LARGE_MIN_SIZE),
            icon: "📄",
            display_name: "Large CSS File",
        },
    ]
});

fn match_filename(basename: &str) -> Option<FrameworkType> {
    SIGNATURES
        .iter()
        .find(|sig| sig.file_patterns.iter().any(|re| re.is_match(basename)))
        .map(|sig| sig.name)
}

/// The first signature with at least two content pattern hits.
pub fn match_content(content: &str) -> Option<FrameworkType> {
    SIGNATURES
        .iter()
        .filter(|sig| !sig.content_patterns.is_empty())
        .find(|sig| {
            sig.content_patterns
                .iter()
                .filter(|re| re.is_match(content))
                .count()
                >= 2
        })
        .map(|sig| sig.name)
}

fn read_head(path: &Path, limit: u64) -> std::io::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?.take(limit).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Classifies scanned files, largest first. Each file is reported at most once.
pub fn detect_frameworks(files: &[CssFile]) -> Vec<DetectedFramework> {
    let mut detected = Vec::new();
    let mut seen: HashSet<&Path> = HashSet::new();

    for file in files {
        if !seen.insert(file.path.as_path()) {
            continue;
        }

        if let Some(kind) = match_filename(&file.basename) {
            detected.push(DetectedFramework::new(kind, file, Confidence::High, MatchedBy::Filename));
            continue;
        }

        if file.size > CONTENT_SCAN_MIN_SIZE {
            match read_head(&file.path, CONTENT_SCAN_LIMIT) {
                Ok(content) => {
                    if let Some(kind) = match_content(&content) {
                        detected.push(DetectedFramework::new(
                            kind,
                            file,
                            Confidence::Medium,
                            MatchedBy::Content,
                        ));
                        continue;
                    }
                }
                Err(e) => {
                    log::debug!("skipping {}: {}", file.path.display(), e);
                    continue;
                }
            }
        }

        if file.size > GENERIC_LARGE_MIN_SIZE
            && GENERIC_ENTRY_NAMES.contains(&file.basename.to_lowercase().as_str())
        {
            detected.push(DetectedFramework::new(
                FrameworkType::GenericLarge,
                file,
                Confidence::Low,
                MatchedBy::Size,
            ));
        }
    }

    detected.sort_by(|a, b| b.file.size.cmp(&a.file.size));
    detected
}

/// Whether a stylesheet already declares cascade layers.
pub fn has_layer_declarations(path: &Path) -> bool {
    static LAYER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"@layer\s+").ok());
    match (fs::read_to_string(path), LAYER.as_ref()) {
        (Ok(content), Some(re)) => re.is_match(&content),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn named(name: &str, size: u64) -> CssFile {
        CssFile {
            path: PathBuf::from(format!("/p/{}", name)),
            relative_path: name.to_string(),
            basename: name.to_string(),
            size,
        }
    }

    #[test]
    fn all_patterns_compile() {
        let counts: Vec<(usize, usize)> = SIGNATURES
            .iter()
            .map(|s| (s.file_patterns.len(), s.content_patterns.len()))
            .collect();
        assert_eq!(counts, [(4, 4), (4, 5), (2, 3), (2, 3), (0, 0)]);
    }

    #[test]
    fn filename_matches_are_case_insensitive() {
        assert_eq!(match_filename("Bootstrap.min.css"), Some(FrameworkType::Bootstrap));
        assert_eq!(match_filename("bootstrap-5.3.2.css"), Some(FrameworkType::Bootstrap));
        assert_eq!(match_filename("tailwind-output.css"), Some(FrameworkType::Tailwind));
        assert_eq!(match_filename("bulma.css"), Some(FrameworkType::Bulma));
        assert_eq!(match_filename("foundation.min.css"), Some(FrameworkType::Foundation));
        assert_eq!(match_filename("site.css"), None);
    }

    #[test]
    fn content_needs_two_hits() {
        assert_eq!(match_content(".navbar-brand { }"), None);
        assert_eq!(
            match_content(":root { --bs-blue: #0d6efd; } .navbar-brand {}"),
            Some(FrameworkType::Bootstrap)
        );
        assert_eq!(
            match_content("@tailwind base; .hover\\:bg-red:hover { --tw-ring: 0 }"),
            Some(FrameworkType::Tailwind)
        );
    }

    #[test]
    fn filename_pass_needs_no_file_access() {
        let found = detect_frameworks(&[named("bootstrap.css", 10)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].confidence, Confidence::High);
        assert_eq!(found[0].matched_by, MatchedBy::Filename);
        assert_eq!(found[0].display_name, "Bootstrap");
    }

    #[test]
    fn unreadable_large_file_is_skipped() {
        assert!(detect_frameworks(&[named("main.css", 20_000)]).is_empty());
    }

    #[test]
    fn duplicate_paths_are_reported_once() {
        let file = named("tailwind.css", 1);
        assert_eq!(detect_frameworks(&[file.clone(), file]).len(), 1);
    }

    #[test]
    fn serializes_type_in_kebab_case() {
        let json = serde_json::to_value(FrameworkType::GenericLarge).unwrap();
        assert_eq!(json, "generic-large");
    }
}
