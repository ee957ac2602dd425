//! The `shift-css` command line.
//!
//! Parsing lives in [`cli`], the work of each subcommand in [`commands`], and
//! [`dispatch`] connects the two: it runs a handler and turns its
//! [`Output`](standout_dispatch::Output) into text with a template, or into
//! JSON, YAML, XML or CSV.
//!
//! ```rust
//! use clap::Parser;
//! use shift_cli::{cli::Cli, dispatch};
//!
//! let cli = Cli::parse_from(["shift-css", "convert", "#6366f1", "--output", "text"]);
//! let result = dispatch::run(&cli).unwrap();
//! assert!(result.output().unwrap().contains("oklch(58.5% 0.204 277)"));
//! ```

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod logging;
pub mod project;
pub mod render;
