//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use clap::error::ErrorKind;
use prediction_cli::CliError;

fn main() {
    if let Err(err) = prediction_cli::run() {
        if let CliError::ArgumentParsing(parse_err) = &err
            && matches!(
                parse_err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            )
        {
            parse_err.exit();
        }
        eprintln!("pure-prediction: {err}");
        std::process::exit(1);
    }
}
