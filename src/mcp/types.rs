use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

/// Parameters for scan_overview
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Project root directory (the directory holding .tscheckrc.json)
    pub project_root_path: String,
}

/// Parameters for scan_unfinished
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnfinishedParams {
    /// Project root directory (the directory holding .tscheckrc.json)
    pub project_root_path: String,
    /// Restrict the scan to one language (e.g. "ro_RO")
    pub language: Option<String>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

/// Parameters for lookup_string
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupStringParams {
    /// Project root directory (the directory holding .tscheckrc.json)
    pub project_root_path: String,
    /// Language catalog to resolve against (e.g. "ro_RO")
    pub language: String,
    /// Context name (usually the class that owns the string)
    pub context: String,
    /// Source string to resolve
    pub source: String,
    /// Disambiguating comment, if the message carries one
    pub comment: Option<String>,
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub languages: Vec<LanguageOverview>,
    /// Number of catalog files loaded
    pub file_count: usize,
    /// Entries or files skipped while loading
    pub skipped_count: usize,
}

/// Completion statistics for one language catalog
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOverview {
    pub language: String,
    pub file_path: String,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub percent_finished: f64,
}

// ============================================================
// Unfinished Scan Types (scan_unfinished)
// ============================================================

/// Result of scan_unfinished operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedScanResult {
    pub total_count: usize,
    pub items: Vec<UnfinishedItem>,
    pub pagination: Pagination,
}

/// A message whose translation is not finished yet
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedItem {
    pub language: String,
    pub context: String,
    pub source: String,
    pub file_path: String,
    pub line: usize,
}

// ============================================================
// Lookup Types (lookup_string)
// ============================================================

/// Result of lookup_string operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub language: String,
    pub context: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The display text: the translation, or the source text as fallback
    pub resolved: String,
    /// False when the lookup fell back to the source text
    pub found: bool,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
