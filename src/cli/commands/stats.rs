//! The `stats` command: per-language completion statistics.

use anyhow::Result;

use super::{CommandResult, CommandSummary, LanguageStats, StatsSummary, load_catalogs};
use crate::catalog::scan::LoadedCatalog;
use crate::cli::args::StatsCommand;

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let loaded = load_catalogs(&cmd.common, cmd.language.as_deref())?;

    let mut rows: Vec<LanguageStats> = loaded.catalogs.iter().map(language_stats).collect();
    rows.sort_by(|a, b| a.language.cmp(&b.language));

    Ok(CommandResult {
        summary: CommandSummary::Stats(StatsSummary { rows }),
        issues: Vec::new(),
        files_checked: loaded.catalogs.len(),
        warnings: loaded.warnings,
    })
}

pub(crate) fn language_stats(catalog: &LoadedCatalog) -> LanguageStats {
    let mut stats = LanguageStats {
        language: catalog.language(),
        file_path: catalog.file_path.clone(),
        finished: 0,
        unfinished: 0,
        vanished: 0,
    };

    for context in &catalog.unit.contexts {
        for message in &context.messages {
            let status = message.translation.status;
            if status.is_vanished() {
                stats.vanished += 1;
            } else if status.is_finished() {
                stats.finished += 1;
            } else {
                stats.unfinished += 1;
            }
        }
    }
    stats
}
