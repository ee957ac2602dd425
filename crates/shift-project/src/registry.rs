//! The component registry shipped inside `@shift-css/core`.
//!
//! `registry/registry.json` lists every component with its CSS file, the
//! components it builds on and optional framework templates. Dependency
//! resolution walks `registryDependencies` with a visited set, so cycles in
//! the manifest cannot loop forever.

use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectError, Result};

/// Environment variable pointing at a core package checkout.
pub const CORE_PATH_ENV: &str = "SHIFT_CORE_PATH";

/// Frameworks with component templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentFramework {
    Astro,
    React,
    Vue,
}

impl ComponentFramework {
    pub const ALL: [ComponentFramework; 3] = [Self::Astro, Self::React, Self::Vue];

    /// File extension of the framework's template files.
    pub fn extension(&self) -> &'static str {
        match self {
            ComponentFramework::Astro => "astro",
            ComponentFramework::React => "tsx",
            ComponentFramework::Vue => "vue",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentFramework::Astro => "astro",
            ComponentFramework::React => "react",
            ComponentFramework::Vue => "vue",
        }
    }
}

impl fmt::Display for ComponentFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentFramework {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fw| fw.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported framework '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFiles {
    pub css: String,
}

/// One component entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryComponent {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub files: ComponentFiles,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub customization_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

/// Template paths for a component, relative to the core package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub astro: Option<String>,
    pub react: Option<String>,
    pub vue: Option<String>,
}

impl TemplateSet {
    pub fn get(&self, framework: ComponentFramework) -> Option<&str> {
        match framework {
            ComponentFramework::Astro => self.astro.as_deref(),
            ComponentFramework::React => self.react.as_deref(),
            ComponentFramework::Vue => self.vue.as_deref(),
        }
    }
}

/// A component with its CSS loaded and, when available, its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub component: RegistryComponent,
    pub css_path: PathBuf,
    pub css_content: String,
    pub template_path: Option<PathBuf>,
    pub template_content: Option<String>,
}

/// The parsed manifest plus the core package it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub version: u32,
    pub components: IndexMap<String, RegistryComponent>,
    #[serde(default)]
    pub templates: IndexMap<String, TemplateSet>,
    #[serde(skip)]
    core_path: PathBuf,
}

fn has_package_json(dir: &Path) -> bool {
    dir.join("package.json").is_file()
}

/// Finds the `@shift-css/core` package for a project.
///
/// Checks `SHIFT_CORE_PATH`, then a sibling `core` checkout, `packages/core`
/// below `cwd`, and finally `node_modules/@shift-css/core`.
pub fn locate_core(cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = env::var_os(CORE_PATH_ENV).filter(|v| !v.is_empty()) {
        log::debug!("core package from {}", CORE_PATH_ENV);
        return Ok(PathBuf::from(path));
    }

    let candidates = [
        cwd.join("..").join("core"),
        cwd.join("packages").join("core"),
        cwd.join("node_modules").join("@shift-css").join("core"),
    ];
    candidates
        .into_iter()
        .find(|dir| has_package_json(dir))
        .inspect(|dir| log::debug!("core package at {}", dir.display()))
        .ok_or(ProjectError::CoreNotFound)
}

impl Registry {
    /// Parses `registry/registry.json` from a core package directory.
    pub fn load(core_path: &Path) -> Result<Self> {
        let path = core_path.join("registry").join("registry.json");
        let content = fs::read_to_string(&path).map_err(|e| ProjectError::Registry {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let mut registry: Registry =
            serde_json::from_str(&content).map_err(|e| ProjectError::Registry {
                path: path.clone(),
                message: e.to_string(),
            })?;
        registry.core_path = core_path.to_path_buf();
        log::debug!(
            "loaded {} components from {}",
            registry.components.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Locates the core package from `cwd` and loads its registry.
    pub fn discover(cwd: &Path) -> Result<Self> {
        Self::load(&locate_core(cwd)?)
    }

    pub fn core_path(&self) -> &Path {
        &self.core_path
    }

    /// Component names, sorted.
    pub fn available_components(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn component(&self, name: &str) -> Option<&RegistryComponent> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Fails with every name the registry does not know.
    pub fn ensure_known<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        let unknown: Vec<String> = names
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|name| !self.contains(name))
            .map(String::from)
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        Err(ProjectError::UnknownComponents {
            names: unknown,
            available: self
                .available_components()
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }

    /// Transitive registry dependencies of `name`, deepest first.
    ///
    /// Names already in `visited` are not expanded again. Unknown components
    /// have no dependencies.
    pub fn resolve_dependencies(&self, name: &str, visited: &mut HashSet<String>) -> Vec<String> {
        if visited.contains(name) {
            return Vec::new();
        }
        let Some(component) = self.component(name) else {
            return Vec::new();
        };
        visited.insert(name.to_string());

        let mut deps = Vec::new();
        for dep in &component.registry_dependencies {
            if !visited.contains(dep) {
                deps.extend(self.resolve_dependencies(dep, visited));
                deps.push(dep.clone());
            }
        }
        deps
    }

    /// Requested components with their dependencies, dependencies first and
    /// every name listed once.
    pub fn components_with_dependencies<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut ordered: Vec<String> = Vec::new();
        let mut added: HashSet<String> = HashSet::new();

        for name in names.iter().map(AsRef::as_ref) {
            let mut visited = added.clone();
            for dep in self.resolve_dependencies(name, &mut visited) {
                if added.insert(dep.clone()) {
                    ordered.push(dep);
                }
            }
            if added.insert(name.to_string()) {
                ordered.push(name.to_string());
            }
        }
        ordered
    }

    /// Loads a component's CSS and, if requested and present, its template.
    ///
    /// Returns `Ok(None)` for unknown components. Missing CSS is an error; a
    /// missing template is not.
    pub fn resolve_component(
        &self,
        name: &str,
        framework: Option<ComponentFramework>,
    ) -> Result<Option<ResolvedComponent>> {
        let Some(component) = self.component(name) else {
            return Ok(None);
        };

        let css_path = self.core_path.join("src").join(&component.files.css);
        let css_content =
            fs::read_to_string(&css_path).map_err(|_| ProjectError::ComponentCss {
                name: name.to_string(),
                path: css_path.clone(),
            })?;

        let template = framework
            .and_then(|fw| self.templates.get(name).and_then(|t| t.get(fw)))
            .map(|rel| self.core_path.join(rel))
            .and_then(|path| match fs::read_to_string(&path) {
                Ok(content) => Some((path, content)),
                Err(e) => {
                    log::debug!("no template at {}: {}", path.display(), e);
                    None
                }
            });
        let (template_path, template_content) = match template {
            Some((path, content)) => (Some(path), Some(content)),
            None => (None, None),
        };

        Ok(Some(ResolvedComponent {
            component: component.clone(),
            css_path,
            css_content,
            template_path,
            template_content,
        }))
    }

    /// Components grouped by category; uncategorized ones go under `other`.
    pub fn components_by_category(&self) -> BTreeMap<String, Vec<&RegistryComponent>> {
        let mut groups: BTreeMap<String, Vec<&RegistryComponent>> = BTreeMap::new();
        for component in self.components.values() {
            let category = component.category.as_deref().unwrap_or("other");
            groups.entry(category.to_string()).or_default().push(component);
        }
        groups
    }
}

/// `button` → `Button`
pub fn component_file_stem(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
