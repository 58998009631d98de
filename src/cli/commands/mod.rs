pub mod check;
mod command_result;
pub mod query;
pub mod stats;

pub use command_result::*;

use std::env;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::catalog::scan::{LoadedCatalog, ScanResult, find_language_file, scan_languages_dir};
use crate::catalog::parse_ts_file;
use crate::cli::args::CommonArgs;
use crate::config::load_config;

/// Resolve the languages root from CLI args or the config file and load the
/// catalogs, optionally narrowed to one language.
pub(crate) fn load_catalogs(common: &CommonArgs, language: Option<&str>) -> Result<ScanResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd)?.config;

    let root: PathBuf = match &common.languages_root {
        Some(root) => root.clone(),
        None => cwd.join(&config.languages_root),
    };

    match language {
        Some(language) => {
            let path = find_language_file(&root, language)?;
            let outcome = parse_ts_file(&path)?;
            Ok(ScanResult {
                catalogs: vec![LoadedCatalog {
                    file_path: path.to_string_lossy().to_string(),
                    unit: outcome.unit,
                }],
                warnings: outcome.warnings,
            })
        }
        None => scan_languages_dir(&root, &config.ignore_patterns()?),
    }
}
