//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tscheck
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, vanished, duplicates, ...)
//! - `stats`: Show per-language completion statistics
//! - `query`: Resolve one (context, source) key against a catalog
//! - `init`: Initialize tscheck configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Query(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Languages directory containing *.ts catalogs (overrides config file)
    #[arg(long)]
    pub languages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check rules that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Vanished,
    Duplicate,
    Placeholder,
    Empty,
}

impl CheckRule {
    /// All rules, in report order. Used when no rule is given explicitly.
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Vanished,
            CheckRule::Duplicate,
            CheckRule::Placeholder,
            CheckRule::Empty,
        ]
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    /// Check a single language instead of the whole directory
    #[arg(short, long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Show a single language instead of the whole directory
    #[arg(short, long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context name, e.g. "CheatDialog"
    pub context: String,

    /// Source string to resolve
    pub source: String,

    /// Disambiguating comment, if the message carries one
    #[arg(long)]
    pub comment: Option<String>,

    /// Language catalog to query
    #[arg(short, long)]
    pub language: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (unfinished, vanished, duplicates, placeholder mismatches)
    Check(CheckCommand),
    /// Show completion statistics per language
    Stats(StatsCommand),
    /// Resolve a (context, source) key against one language catalog
    Query(QueryCommand),
    /// Initialize a new .tscheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
