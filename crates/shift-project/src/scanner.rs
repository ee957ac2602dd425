//! Discovery of CSS files in a project tree.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    ".output",
    ".vercel",
    ".shift-backup",
];

/// Entry stylesheet names, most likely first.
pub const ENTRY_POINT_NAMES: &[&str] = &[
    "main.css",
    "styles.css",
    "style.css",
    "index.css",
    "app.css",
    "global.css",
    "globals.css",
];

/// Directories searched for an entry stylesheet, in order. `""` is the root.
pub const ENTRY_POINT_DIRS: &[&str] = &["src", "styles", "css", "assets/css", "public/css", ""];

/// A CSS file found under the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssFile {
    pub path: PathBuf,
    /// Relative to the project root, always `/`-separated.
    pub relative_path: String,
    pub basename: String,
    pub size: u64,
}

impl CssFile {
    pub fn new(root: &Path, path: PathBuf, size: u64) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            relative_path,
            basename,
            size,
        }
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

/// Recursively collects `*.css` files under `root`, largest first.
///
/// Entries that cannot be read are skipped.
pub fn scan_css_files(root: &Path) -> Vec<CssFile> {
    let mut files: Vec<CssFile> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && e.file_name().to_string_lossy().ends_with(".css"))
        .filter_map(|e| match e.metadata() {
            Ok(meta) => Some(CssFile::new(root, e.into_path(), meta.len())),
            Err(err) => {
                log::debug!("skipping {}: {}", e.path().display(), err);
                None
            }
        })
        .collect();

    files.sort_by(|a, b| b.size.cmp(&a.size));
    log::info!("found {} CSS files under {}", files.len(), root.display());
    files
}

/// The most likely entry stylesheet: a known name in a known directory,
/// or failing that any file with a known name.
pub fn find_entry_point(files: &[CssFile]) -> Option<&CssFile> {
    for dir in ENTRY_POINT_DIRS {
        for name in ENTRY_POINT_NAMES {
            let target = if dir.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", dir, name)
            };
            if let Some(file) = files.iter().find(|f| f.relative_path == target) {
                return Some(file);
            }
        }
    }

    ENTRY_POINT_NAMES
        .iter()
        .find_map(|name| files.iter().find(|f| f.basename == *name))
}

/// Files worth offering as the entry stylesheet.
///
/// Every file with a known entry name comes first, then up to five other
/// files over 1 KiB that are not vendored.
pub fn entry_point_candidates(files: &[CssFile]) -> Vec<&CssFile> {
    let mut candidates: Vec<&CssFile> = Vec::new();

    for name in ENTRY_POINT_NAMES {
        for file in files.iter().filter(|f| f.basename == *name) {
            if !candidates.iter().any(|c| c.path == file.path) {
                candidates.push(file);
            }
        }
    }

    let large: Vec<&CssFile> = files
        .iter()
        .filter(|f| {
            f.size > 1024
                && !f.relative_path.contains("vendor")
                && !candidates.iter().any(|c| c.path == f.path)
        })
        .take(5)
        .collect();
    candidates.extend(large);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn file(rel: &str, size: u64) -> CssFile {
        CssFile::new(Path::new("/p"), Path::new("/p").join(rel), size)
    }

    #[test]
    fn relative_path_uses_forward_slashes() {
        let f = file("assets/css/app.css", 10);
        assert_eq!(f.relative_path, "assets/css/app.css");
        assert_eq!(f.basename, "app.css");
    }

    #[test]
    fn scan_skips_ignored_dirs_and_sorts_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/styles")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("src/styles/main.css"), "a{}").unwrap();
        fs::write(root.join("src/big.css"), "x".repeat(4096)).unwrap();
        fs::write(root.join("src/readme.md"), "not css").unwrap();
        fs::write(root.join("node_modules/pkg/lib.css"), "a{}").unwrap();
        fs::write(root.join("dist/out.css"), "a{}").unwrap();

        let files = scan_css_files(root);
        let rel: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(rel, ["src/big.css", "src/styles/main.css"]);
        assert_eq!(files[0].size, 4096);
    }

    #[test]
    fn scan_of_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_css_files(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn entry_point_prefers_known_dirs() {
        let files = vec![
            file("app.css", 100),
            file("lib/main.css", 100),
            file("src/styles.css", 100),
        ];
        assert_eq!(
            find_entry_point(&files).map(|f| f.relative_path.as_str()),
            Some("src/styles.css")
        );
    }

    #[test]
    fn entry_point_falls_back_to_any_known_name() {
        let files = vec![file("lib/theme.css", 100), file("lib/deep/index.css", 100)];
        assert_eq!(
            find_entry_point(&files).map(|f| f.relative_path.as_str()),
            Some("lib/deep/index.css")
        );
        assert!(find_entry_point(&[file("a.css", 1)]).is_none());
    }

    #[test]
    fn candidates_named_first_then_large() {
        let mut files = vec![file("vendor/huge.css", 90_000)];
        for i in 0..7 {
            files.push(file(&format!("big{}.css", i), 5000 - i));
        }
        files.push(file("src/main.css", 10));
        files.push(file("tiny.css", 10));

        let candidates = entry_point_candidates(&files);
        let names: Vec<&str> = candidates.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names[0], "src/main.css");
        assert_eq!(names.len(), 6);
        assert!(!names.contains(&"vendor/huge.css"));
        assert!(!names.contains(&"tiny.css"));
    }
}
