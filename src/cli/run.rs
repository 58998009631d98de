//! Command dispatch for the tscheck CLI.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{CommandResult, CommandSummary, InitSummary};
use super::commands::{check::check, query::query, stats::stats};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Query(cmd)) => query(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                issues: Vec::new(),
                warnings: Vec::new(),
                files_checked: 0,
            })
        }
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
