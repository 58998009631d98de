use std::process::ExitCode;

use clap::Parser;
use tscheck::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = tscheck::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match tscheck::cli::run_cli(args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
