//! Languages-directory scanning.
//!
//! Finds every `*.ts` catalog under a languages root and parses them in
//! parallel. A file that fails to parse becomes a warning in the result, not
//! an error: one corrupt language must not take down the rest.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::parser::{ParseWarning, parse_ts_file};
use crate::catalog::TranslationUnit;

/// One parsed catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub file_path: String,
    pub unit: TranslationUnit,
}

impl LoadedCatalog {
    /// Language tag from the file, falling back to the file stem
    /// (`ro_RO.ts` -> `ro_RO`) for files that do not declare one.
    pub fn language(&self) -> String {
        if let Some(language) = &self.unit.language {
            return language.clone();
        }
        Path::new(&self.file_path)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// All catalogs under a languages root, plus everything that was skipped.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub catalogs: Vec<LoadedCatalog>,
    pub warnings: Vec<ParseWarning>,
}

/// Scan `root` for `*.ts` catalogs, skipping paths matched by `ignores`,
/// and parse them in parallel. Files are visited in path order so results
/// are deterministic.
pub fn scan_languages_dir(root: &Path, ignores: &[Pattern]) -> Result<ScanResult> {
    if !root.is_dir() {
        bail!("Languages directory not found: {}", root.display());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ts"))
        .filter(|path| !ignores.iter().any(|pattern| pattern.matches_path(path)))
        .collect();
    paths.sort();

    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| (path, parse_ts_file(path)))
        .collect();

    let mut result = ScanResult::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(outcome) => {
                result.warnings.extend(outcome.warnings);
                result.catalogs.push(LoadedCatalog {
                    file_path: path.to_string_lossy().to_string(),
                    unit: outcome.unit,
                });
            }
            Err(err) => result.warnings.push(ParseWarning {
                file_path: path.to_string_lossy().to_string(),
                detail: format!("{:#}", err),
            }),
        }
    }
    Ok(result)
}

/// Find the catalog file for one language under a languages root.
///
/// Matches either the declared language tag or the file stem, so both
/// `--language ro_RO` and `--language ro` work against `ro_RO.ts` files
/// that declare `language="ro_RO"`.
pub fn find_language_file(root: &Path, language: &str) -> Result<PathBuf> {
    let direct = root.join(format!("{}.ts", language));
    if direct.is_file() {
        return Ok(direct);
    }

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            && (stem == language || stem.split('_').next() == Some(language))
        {
            return Ok(path.to_path_buf());
        }
    }
    bail!(
        "No catalog for language \"{}\" under {}",
        language,
        root.display()
    )
}
