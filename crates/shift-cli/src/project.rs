//! The project a command runs against.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Project root for a command. Defaults to the working directory, set by
/// `--cwd`.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The working directory, or `dir` relative to it. Must be a directory.
    pub fn locate(dir: Option<&Path>) -> anyhow::Result<Self> {
        let current = std::env::current_dir().context("could not read the working directory")?;
        let root = match dir {
            Some(dir) => current.join(dir),
            None => current,
        };
        if !root.is_dir() {
            anyhow::bail!("{} is not a directory", root.display());
        }
        Ok(Self { root })
    }

    /// Resolves a user-supplied path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Project-relative display form of a path under the root, with `/`
    /// separators.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_to_root() {
        let project = Project::new("/project");
        assert_eq!(
            project.resolve(Path::new("src/shift.d.ts")),
            PathBuf::from("/project/src/shift.d.ts")
        );
        assert_eq!(project.resolve(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn display_uses_slashes() {
        let project = Project::new("/p");
        let path = project.root.join("src").join("styles").join("a.css");
        assert_eq!(project.display(&path), "src/styles/a.css");
    }

    #[test]
    fn locate_rejects_missing_dir() {
        let err = Project::locate(Some(Path::new("/no/such/dir"))).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
