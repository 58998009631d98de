//! The `check` command: load catalogs and run the selected rules.

use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, load_catalogs};
use crate::cli::args::{CheckCommand, CheckRule};
use crate::issues::Issue;
use crate::rules::{
    duplicate::check_duplicates, empty::check_empty, placeholder::check_placeholders,
    unfinished::check_unfinished, vanished::check_vanished,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let loaded = load_catalogs(&cmd.common, cmd.language.as_deref())?;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        let mut rules = cmd.rules;
        rules.dedup();
        rules
    };

    let mut issues: Vec<Issue> = Vec::new();
    for rule in rules {
        match rule {
            CheckRule::Unfinished => {
                issues.extend(check_unfinished(&loaded.catalogs).into_iter().map(Issue::from));
            }
            CheckRule::Vanished => {
                issues.extend(check_vanished(&loaded.catalogs).into_iter().map(Issue::from));
            }
            CheckRule::Duplicate => {
                issues.extend(check_duplicates(&loaded.catalogs).into_iter().map(Issue::from));
            }
            CheckRule::Placeholder => {
                issues.extend(check_placeholders(&loaded.catalogs).into_iter().map(Issue::from));
            }
            CheckRule::Empty => {
                issues.extend(check_empty(&loaded.catalogs).into_iter().map(Issue::from));
            }
        }
    }

    let languages = loaded
        .catalogs
        .iter()
        .map(|catalog| catalog.language())
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary { languages }),
        issues,
        files_checked: loaded.catalogs.len(),
        warnings: loaded.warnings,
    })
}
