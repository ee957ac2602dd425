//! Runs a parsed command and renders what its handler returns.

use anyhow::Context;
use clap::CommandFactory;
use serde::Serialize;
use standout_dispatch::{serialize_structured, Output, OutputMode, RunResult};

use crate::cli::{Cli, Command, OutputArg};
use crate::commands;
use crate::project::Project;
use crate::render;

/// Turns handler output into the result to print.
///
/// Structured modes serialize the data. Text modes render `template` and
/// process its style tags. Artifacts such as generated CSS pass through in
/// every mode.
pub fn render_output<T: Serialize>(
    output: Output<T>,
    template: &str,
    mode: OutputArg,
) -> anyhow::Result<RunResult> {
    match output {
        Output::Render(data) => {
            let structured = OutputMode::from(mode);
            if structured.is_structured() {
                let text = serialize_structured(&data, structured)
                    .context("could not serialize output")?;
                return Ok(RunResult::Handled(text));
            }
            let text = render::renderer(mode.into())
                .context("could not load output templates")?
                .render(template, &data)
                .with_context(|| format!("could not render the {} template", template))?;
            Ok(RunResult::Handled(text.trim().to_string()))
        }
        Output::Silent => Ok(RunResult::Silent),
        Output::Binary { data, filename } => Ok(RunResult::Binary(data, filename)),
    }
}

/// Runs the selected subcommand. Without one, returns the help text.
pub fn run(cli: &Cli) -> anyhow::Result<RunResult> {
    let Some(command) = &cli.command else {
        return Ok(RunResult::Handled(Cli::command().render_help().to_string()));
    };

    let project = Project::locate(cli.cwd.as_deref())?;
    log::debug!("{} in {}", command.name(), project.root.display());

    let mode = cli.output;
    match command {
        Command::Init(args) => render_output(commands::init::run(args, &project)?, "init", mode),
        Command::Add(args) if args.list => {
            render_output(commands::add::list(&project)?, "list", mode)
        }
        Command::Add(args) => render_output(commands::add::run(args, &project)?, "add", mode),
        Command::Types(args) => {
            render_output(commands::types::run(args, &project)?, "types", mode)
        }
        Command::Tokens(args) => {
            render_output(commands::tokens::run(args, &project)?, "tokens", mode)
        }
        Command::Convert(args) => render_output(commands::convert::run(args)?, "convert", mode),
        Command::Contrast(args) => {
            render_output(commands::contrast::run(args)?, "contrast", mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> anyhow::Result<RunResult> {
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli)
    }

    fn text(args: &[&str]) -> String {
        run_args(args).unwrap().output().unwrap().to_string()
    }

    #[test]
    fn no_command_prints_help() {
        let out = text(&["shift-css"]);
        assert!(out.contains("Usage"));
        assert!(out.contains("tokens"));
    }

    #[test]
    fn json_output_skips_templates() {
        let out = text(&["shift-css", "contrast", "1", "0", "--output", "json"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["level"], "aaa");
        assert_eq!(value["aa"], true);
    }

    #[test]
    fn yaml_output() {
        let out = text(&["shift-css", "contrast", "1", "0", "--output", "yaml"]);
        assert!(out.contains("level: aaa"), "{}", out);
        assert!(out.contains("aa_large: true"), "{}", out);
    }

    #[test]
    fn text_output_has_no_tags() {
        let out = text(&["shift-css", "convert", "#fff", "#nope", "--output", "text"]);
        assert!(out.contains("#ffffff"));
        assert!(out.contains("#nope"));
        assert!(!out.contains("[ok]"));
        assert!(!out.contains("\u{1b}["));
    }

    #[test]
    fn artifacts_pass_through_in_json_mode() {
        let result = run_args(&["shift-css", "tokens", "--no-config", "--output", "json"]).unwrap();
        let (data, filename) = result.binary().unwrap();
        assert_eq!(filename, "shift-tokens.css");
        let css = std::str::from_utf8(data).unwrap();
        assert!(css.contains("--shift-hue-primary: 260;"));
    }

    #[test]
    fn silent_output() {
        let result = render_output::<()>(Output::Silent, "tokens", OutputArg::Text).unwrap();
        assert!(result.is_silent());
    }

    #[test]
    fn missing_cwd_is_an_error() {
        let err = run_args(&["shift-css", "convert", "#fff", "--cwd", "/no/such/dir"]).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
