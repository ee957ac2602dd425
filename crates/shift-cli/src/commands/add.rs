//! `shift-css add`: copy registry components into the project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Serialize;
use shift_project::registry::component_file_stem;
use shift_project::{transform_for_ejection, ComponentFramework, Registry, ShiftConfig};
use standout_dispatch::{HandlerResult, Output};

use crate::cli::AddArgs;
use crate::project::Project;

#[derive(Debug, Serialize)]
pub struct ComponentEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct Category {
    pub name: String,
    pub components: Vec<ComponentEntry>,
}

/// `add --list`
#[derive(Debug, Serialize)]
pub struct ComponentList {
    pub categories: Vec<Category>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct AddReport {
    pub requested: Vec<String>,
    pub dependencies: Vec<String>,
    pub created: Vec<String>,
    pub framework: Option<&'static str>,
    pub missing_templates: Vec<String>,
    pub warnings: Vec<String>,
    pub customization_points: Vec<String>,
    pub styles_dir: String,
    pub layer: String,
}

fn registry(project: &Project) -> anyhow::Result<Registry> {
    Registry::discover(&project.root).context("could not load the component registry")
}

pub fn list(project: &Project) -> HandlerResult<ComponentList> {
    let registry = registry(project)?;
    let categories: Vec<Category> = registry
        .components_by_category()
        .into_iter()
        .map(|(name, components)| Category {
            name,
            components: components
                .into_iter()
                .map(|c| ComponentEntry {
                    name: c.name.clone(),
                    description: c.description.clone(),
                })
                .collect(),
        })
        .collect();
    Ok(Output::Render(ComponentList {
        total: registry.components.len(),
        categories,
    }))
}

/// Framework from the flag, else from the config. An unsupported configured
/// value becomes a warning.
fn pick_framework(
    flag: Option<ComponentFramework>,
    configured: Option<&str>,
    warnings: &mut Vec<String>,
) -> Option<ComponentFramework> {
    if flag.is_some() {
        return flag;
    }
    let value = configured?;
    match value.parse::<ComponentFramework>() {
        Ok(fw) => Some(fw),
        Err(e) => {
            log::warn!("add.framework in config: {}", e);
            warnings.push(format!(
                "framework '{}' in config is not supported (astro, react, vue); copying CSS only",
                value
            ));
            None
        }
    }
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("could not write {}", path.display()))
}

pub fn run(args: &AddArgs, project: &Project) -> HandlerResult<AddReport> {
    let registry = registry(project)?;
    let config = ShiftConfig::load_or_default(&project.root).add_config();
    let mut warnings = Vec::new();
    let framework = pick_framework(
        args.framework.map(Into::into),
        config.framework.as_deref(),
        &mut warnings,
    );

    let requested: Vec<String> = if args.all {
        registry
            .available_components()
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        args.components.clone()
    };
    if requested.is_empty() {
        bail!("no components given (pass names, --all, or --list to see what is available)");
    }

    registry.ensure_known(&requested)?;

    let all = registry.components_with_dependencies(&requested);
    let dependencies: Vec<String> = all
        .iter()
        .filter(|name| !requested.contains(name))
        .cloned()
        .collect();
    if !dependencies.is_empty() {
        log::info!("including dependencies: {}", dependencies.join(", "));
    }

    let styles_dir = project.root.join(&config.styles_dir);
    let components_dir = project.root.join(&config.components_dir);
    let css_target = |name: &str| styles_dir.join(format!("{}.css", name));
    let template_target = |name: &str, fw: ComponentFramework| -> PathBuf {
        components_dir.join(format!("{}.{}", component_file_stem(name), fw.extension()))
    };

    if !args.force {
        let mut existing: Vec<String> = Vec::new();
        for name in &all {
            let mut targets = vec![css_target(name)];
            if let Some(fw) = framework {
                targets.push(template_target(name, fw));
            }
            existing.extend(
                targets
                    .iter()
                    .filter(|p| p.exists())
                    .map(|p| project.display(p)),
            );
        }
        if !existing.is_empty() {
            bail!(
                "these files already exist: {} (use --force to overwrite)",
                existing.join(", ")
            );
        }
    }

    let mut created = Vec::new();
    let mut missing_templates = Vec::new();
    let mut customization_points = Vec::new();
    for name in &all {
        let Some(resolved) = registry.resolve_component(name, framework)? else {
            log::warn!("{} vanished from the registry", name);
            continue;
        };

        let css = transform_for_ejection(&resolved.css_content, &config.layer, name);
        let target = css_target(name);
        write_file(&target, &css)?;
        created.push(project.display(&target));

        if let Some(fw) = framework {
            match &resolved.template_content {
                Some(template) => {
                    let target = template_target(name, fw);
                    write_file(&target, template)?;
                    created.push(project.display(&target));
                }
                None => missing_templates.push(name.clone()),
            }
        }

        if requested.contains(name) {
            customization_points.extend(resolved.component.customization_points.iter().cloned());
        }
    }

    if let Some(fw) = framework {
        if !missing_templates.is_empty() {
            warnings.push(format!(
                "no {} template for: {}",
                fw.as_str(),
                missing_templates.join(", ")
            ));
        }
    }

    Ok(Output::Render(AddReport {
        requested,
        dependencies,
        created,
        framework: framework.map(|fw| fw.as_str()),
        missing_templates,
        warnings,
        customization_points,
        styles_dir: config.styles_dir,
        layer: config.layer,
    }))
}
