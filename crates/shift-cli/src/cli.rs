//! The `shift-css` command tree.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use shift_project::{ComponentFramework, Mode, TypesFramework};
use standout_render::OutputMode;

#[derive(Debug, Parser)]
#[command(
    name = "shift-css",
    version,
    about = "Shift CSS: OKLCH design tokens and cascade-layer components",
    propagate_version = true
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputArg::Auto)]
    pub output: OutputArg,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run as if started in DIR
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create shift.config.json and the entry stylesheet
    Init(InitArgs),
    /// Copy components into the project for customization
    Add(AddArgs),
    /// Generate TypeScript declarations for the s-* attributes
    Types(TypesArgs),
    /// Generate the design token stylesheet
    Tokens(TokensArgs),
    /// Convert hex colors to OKLCH
    Convert(ConvertArgs),
    /// Contrast ratio between two OKLCH lightness values
    Contrast(ContrastArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init(_) => "init",
            Command::Add(_) => "add",
            Command::Types(_) => "types",
            Command::Tokens(_) => "tokens",
            Command::Convert(_) => "convert",
            Command::Contrast(_) => "contrast",
        }
    }
}

/// Values of `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Styled on a terminal, plain otherwise
    Auto,
    /// Always styled
    Term,
    /// Plain text
    Text,
    /// Style tags left visible
    TermDebug,
    Json,
    Yaml,
    Xml,
    Csv,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::TermDebug => OutputMode::TermDebug,
            OutputArg::Json => OutputMode::Json,
            OutputArg::Yaml => OutputMode::Yaml,
            OutputArg::Xml => OutputMode::Xml,
            OutputArg::Csv => OutputMode::Csv,
        }
    }
}

impl From<OutputArg> for standout_dispatch::OutputMode {
    fn from(arg: OutputArg) -> Self {
        use standout_dispatch::OutputMode as Dispatch;
        match arg {
            OutputArg::Auto => Dispatch::Auto,
            OutputArg::Term => Dispatch::Term,
            OutputArg::Text => Dispatch::Text,
            OutputArg::TermDebug => Dispatch::TermDebug,
            OutputArg::Json => Dispatch::Json,
            OutputArg::Yaml => Dispatch::Yaml,
            OutputArg::Xml => Dispatch::Xml,
            OutputArg::Csv => Dispatch::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// New project, Shift CSS owns the cascade
    Greenfield,
    /// Existing framework CSS kept in a `legacy` layer
    Hybrid,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Greenfield => Mode::Greenfield,
            ModeArg::Hybrid => Mode::Hybrid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrameworkArg {
    Astro,
    React,
    Vue,
}

impl From<FrameworkArg> for ComponentFramework {
    fn from(fw: FrameworkArg) -> Self {
        match fw {
            FrameworkArg::Astro => ComponentFramework::Astro,
            FrameworkArg::React => ComponentFramework::React,
            FrameworkArg::Vue => ComponentFramework::Vue,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Greenfield or hybrid; detected frameworks imply hybrid
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Primary seed hue in degrees
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..360), conflicts_with_all = ["preset", "hex"])]
    pub hue: Option<u16>,

    /// Named hue preset (plasma, laser, acid, void)
    #[arg(long, conflicts_with = "hex")]
    pub preset: Option<String>,

    /// Brand color to take the primary hue from
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Entry stylesheet path, relative to the project root
    #[arg(long, value_name = "PATH")]
    pub stylesheet: Option<String>,

    /// Overwrite an existing config or stylesheet
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// Components to add
    pub components: Vec<String>,

    /// Add every available component
    #[arg(short, long, conflicts_with = "components")]
    pub all: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Also copy the component template for this framework
    #[arg(long, value_enum)]
    pub framework: Option<FrameworkArg>,

    /// List available components
    #[arg(short, long)]
    pub list: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TypesArgs {
    /// Augment React's HTMLAttributes
    #[arg(long, conflicts_with_all = ["vue", "svelte"])]
    pub react: bool,

    /// Augment Vue's HTMLAttributes
    #[arg(long, conflicts_with = "svelte")]
    pub vue: bool,

    /// Augment svelteHTML.HTMLAttributes
    #[arg(long)]
    pub svelte: bool,

    /// Write the declarations to FILE instead of stdout
    #[arg(short = 'o', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl TypesArgs {
    /// The framework chosen by flag, if any.
    pub fn framework(&self) -> Option<TypesFramework> {
        if self.react {
            Some(TypesFramework::React)
        } else if self.vue {
            Some(TypesFramework::Vue)
        } else if self.svelte {
            Some(TypesFramework::Svelte)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TokensArgs {
    /// Directory with colors.json, semantic.json and spacing.json
    #[arg(long, value_name = "DIR")]
    pub tokens_dir: Option<PathBuf>,

    /// Write the stylesheet to FILE instead of stdout
    #[arg(short = 'o', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Ignore the seed hues in shift.config.json
    #[arg(long)]
    pub no_config: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Colors as #rgb or #rrggbb
    #[arg(required = true, value_name = "HEX")]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// First lightness, 0-1 or a percentage
    #[arg(value_parser = parse_lightness, allow_hyphen_values = true)]
    pub first: f64,

    /// Second lightness, 0-1 or a percentage
    #[arg(value_parser = parse_lightness, allow_hyphen_values = true)]
    pub second: f64,
}

/// Parses `0.648` or `64.8%` into a 0-1 lightness.
pub fn parse_lightness(value: &str) -> Result<f64, String> {
    let (number, scale) = match value.strip_suffix('%') {
        Some(number) => (number, 100.0),
        None => (value, 1.0),
    };
    let parsed: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    let lightness = parsed / scale;
    if !(0.0..=1.0).contains(&lightness) {
        return Err(format!("lightness {} is outside 0-1 (0%-100%)", value));
    }
    Ok(lightness)
}
