use std::process::ExitCode;

use clap::Parser;
use shift_cli::cli::Cli;
use shift_cli::{dispatch, logging};
use standout_dispatch::{OutputDestination, RunResult};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(cli.verbose);

    let written = match dispatch::run(&cli) {
        Ok(RunResult::Handled(text)) => OutputDestination::Stdout.write_text(&text),
        Ok(RunResult::Binary(data, filename)) => {
            log::debug!("writing {} to stdout", filename);
            OutputDestination::Stdout.write_binary(&data)
        }
        Ok(RunResult::Silent) | Ok(RunResult::NoMatch(_)) => Ok(()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = written {
        log::debug!("stdout closed: {}", e);
    }
    ExitCode::SUCCESS
}
