//! `shift-css tokens`: regenerate the `shift.tokens` layer.

use anyhow::Context;
use serde::Serialize;
use shift_project::ShiftConfig;
use shift_tokens::{count_variables, Generator, TokenSet};
use standout_dispatch::{HandlerResult, Output, OutputDestination};

use crate::cli::TokensArgs;
use crate::project::Project;

#[derive(Debug, Serialize)]
pub struct SeedHue {
    pub name: String,
    pub hue: String,
}

#[derive(Debug, Serialize)]
pub struct TokensReport {
    pub file: String,
    pub variables: usize,
    pub scales: usize,
    pub seeds: Vec<SeedHue>,
    pub from_config: bool,
}

fn load_tokens(args: &TokensArgs, project: &Project) -> anyhow::Result<TokenSet> {
    match &args.tokens_dir {
        Some(dir) => {
            let dir = project.resolve(dir);
            TokenSet::load_dir(&dir)
                .with_context(|| format!("could not load tokens from {}", dir.display()))
        }
        None => TokenSet::builtin().context("built-in tokens are invalid"),
    }
}

/// Without `--file` the stylesheet itself is the output.
pub fn run(args: &TokensArgs, project: &Project) -> HandlerResult<TokensReport> {
    let tokens = load_tokens(args, project)?;

    let config = if args.no_config {
        None
    } else {
        ShiftConfig::load(&project.root).context("could not read project config")?
    };
    let mut generator = Generator::new(&tokens);
    if let Some(config) = &config {
        for (name, hue) in config.hues.seeds() {
            generator = generator.with_seed_hue(name, hue);
        }
    }

    let css = generator.generate().context("token generation failed")?;

    let Some(file) = &args.file else {
        return Ok(Output::Binary {
            data: css.into_bytes(),
            filename: "shift-tokens.css".to_string(),
        });
    };
    let path = project.resolve(file);
    OutputDestination::File(path.clone())
        .write_text(&css)
        .with_context(|| format!("could not write {}", path.display()))?;

    let seeds = generator
        .seed_hues()?
        .into_iter()
        .map(|(name, hue)| SeedHue { name, hue })
        .collect();
    Ok(Output::Render(TokensReport {
        file: file.display().to_string(),
        variables: count_variables(&css),
        scales: generator.scales()?.len(),
        seeds,
        from_config: config.is_some(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{artifact, rendered};
    use std::path::PathBuf;

    fn project(dir: &tempfile::TempDir) -> Project {
        Project::new(dir.path())
    }

    #[test]
    fn prints_builtin_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let css = artifact(run(&TokensArgs::default(), &project(&dir)).unwrap());
        assert!(css.starts_with("/**"));
        assert!(css.contains("--shift-hue-primary: 260;"));
        assert!(css.contains(
            "--color-primary-500: oklch(64.8% 0.147 var(--shift-hue-primary));"
        ));
    }

    #[test]
    fn config_hues_apply() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("shift.config.json"),
            r#"{"hues": {"primary": 140, "neutral": 140}}"#,
        )
        .unwrap();

        let css = artifact(run(&TokensArgs::default(), &project(&dir)).unwrap());
        assert!(css.contains("--shift-hue-primary: 140;"));
        assert!(css.contains("--shift-hue-neutral: 140;"));
        assert!(css.contains("--shift-hue-secondary: 320;"));

        let args = TokensArgs {
            no_config: true,
            ..TokensArgs::default()
        };
        let css = artifact(run(&args, &project(&dir)).unwrap());
        assert!(css.contains("--shift-hue-primary: 260;"));
    }

    #[test]
    fn writes_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let args = TokensArgs {
            file: Some(PathBuf::from("tokens.css")),
            ..TokensArgs::default()
        };
        let report = rendered(run(&args, &project(&dir)).unwrap());
        assert_eq!(report.scales, 7);
        assert!(!report.from_config);
        assert_eq!(report.seeds.len(), 7);

        let css = std::fs::read_to_string(dir.path().join("tokens.css")).unwrap();
        assert_eq!(report.variables, count_variables(&css));
        assert!(report.variables > 100);
    }

    #[test]
    fn broken_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shift.config.json"), "{ nope").unwrap();
        let err = run(&TokensArgs::default(), &project(&dir)).unwrap_err();
        assert!(err.to_string().contains("could not read project config"));
    }

    #[test]
    fn missing_tokens_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = TokensArgs {
            tokens_dir: Some(PathBuf::from("design/tokens")),
            ..TokensArgs::default()
        };
        let err = run(&args, &project(&dir)).unwrap_err();
        assert!(err.to_string().contains("could not load tokens"));
    }
}
