//! The `query` command: resolve one key the way a UI shell would at
//! display time.
//!
//! Query never fails on a missing key; like the lookup contract itself it
//! resolves to the source text and reports whether a translation was found.

use anyhow::Result;

use super::{CommandResult, CommandSummary, QuerySummary, load_catalogs};
use crate::catalog::Catalog;
use crate::cli::args::QueryCommand;

pub fn query(cmd: QueryCommand) -> Result<CommandResult> {
    let loaded = load_catalogs(&cmd.common, Some(&cmd.language))?;
    // load_catalogs with a language always yields exactly one catalog.
    let files_checked = loaded.catalogs.len();
    let catalog = loaded
        .catalogs
        .first()
        .map(|c| Catalog::from_unit(&c.unit))
        .unwrap_or_default();

    let found = catalog.contains(&cmd.context, &cmd.source, cmd.comment.as_deref());
    let resolved = catalog
        .lookup_with_comment(&cmd.context, &cmd.source, cmd.comment.as_deref())
        .to_string();

    Ok(CommandResult {
        summary: CommandSummary::Query(QuerySummary {
            language: cmd.language,
            context: cmd.context,
            source: cmd.source,
            resolved,
            found,
        }),
        issues: Vec::new(),
        files_checked,
        warnings: loaded.warnings,
    })
}
