use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::catalog::scan::{LoadedCatalog, ScanResult, find_language_file, scan_languages_dir};
use crate::catalog::{Catalog, parse_ts_file};
use crate::cli::commands::stats::language_stats;
use crate::config::load_config;
use crate::rules::unfinished::check_unfinished;

use super::types::{
    LanguageOverview, LookupResult, LookupStringParams, Pagination, ScanOverviewParams,
    ScanOverviewResult, ScanUnfinishedParams, UnfinishedItem, UnfinishedScanResult,
};

#[derive(Clone)]
pub struct TsCheckMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TsCheckMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get per-language completion statistics
    #[tool(
        description = "Get completion statistics for every language catalog (finished, unfinished, vanished counts). Use this first to understand the overall state before diving into details."
    )]
    async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let loaded = load_catalogs_at(&params.0.project_root_path, None)?;

        let mut languages: Vec<LanguageOverview> = loaded
            .catalogs
            .iter()
            .map(|catalog| {
                let stats = language_stats(catalog);
                LanguageOverview {
                    percent_finished: stats.percent_finished(),
                    language: stats.language,
                    file_path: stats.file_path,
                    finished: stats.finished,
                    unfinished: stats.unfinished,
                    vanished: stats.vanished,
                }
            })
            .collect();
        languages.sort_by(|a, b| a.language.cmp(&b.language));

        let overview = ScanOverviewResult {
            file_count: loaded.catalogs.len(),
            skipped_count: loaded.warnings.len(),
            languages,
        };

        to_json_result(&overview)
    }

    /// Scan for messages without a finished translation
    #[tool(
        description = "Scan catalogs for messages whose translation is not finished yet (these display the source text at runtime). Returns paginated list."
    )]
    async fn scan_unfinished(
        &self,
        params: Parameters<ScanUnfinishedParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let loaded = load_catalogs_at(&params.0.project_root_path, params.0.language.as_deref())?;

        let all_items: Vec<UnfinishedItem> = check_unfinished(&loaded.catalogs)
            .into_iter()
            .map(|issue| UnfinishedItem {
                language: issue.message.language,
                context: issue.message.context,
                source: issue.message.source,
                file_path: issue.message.file_path,
                line: issue.message.line,
            })
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<UnfinishedItem> =
            all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = UnfinishedScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&scan_result)
    }

    /// Resolve a (context, source) key against one language catalog
    #[tool(
        description = "Resolve a (context, source, comment) key against one language catalog, the way the application would at display time. Never fails: falls back to the source text when no finished translation exists."
    )]
    async fn lookup_string(
        &self,
        params: Parameters<LookupStringParams>,
    ) -> Result<CallToolResult, McpError> {
        let LookupStringParams {
            project_root_path,
            language,
            context,
            source,
            comment,
        } = params.0;

        let loaded = load_catalogs_at(&project_root_path, Some(&language))?;
        let catalog = loaded
            .catalogs
            .first()
            .map(|c| Catalog::from_unit(&c.unit))
            .unwrap_or_default();

        let found = catalog.contains(&context, &source, comment.as_deref());
        let resolved = catalog
            .lookup_with_comment(&context, &source, comment.as_deref())
            .to_string();

        let result = LookupResult {
            language,
            context,
            source,
            comment,
            resolved,
            found,
        };

        to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for TsCheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscheck MCP helps AI agents work on Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. scan_overview - Get per-language completion statistics (finished, unfinished, vanished)\n\
                 2. scan_unfinished - Get messages without a finished translation (paginated)\n\
                 3. lookup_string - Resolve a (context, source, comment) key against one catalog\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to find the least complete languages\n\
                 2. Use scan_unfinished to list the strings that still display source text\n\
                 3. Use lookup_string to verify how a specific string resolves after edits"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsCheckMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

fn load_catalogs_at(project_root: &str, language: Option<&str>) -> Result<ScanResult, McpError> {
    let project_root = Path::new(project_root);
    let config = load_config(project_root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
        .config;
    let root = project_root.join(&config.languages_root);

    match language {
        Some(language) => {
            let path = find_language_file(&root, language)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            let outcome = parse_ts_file(&path)
                .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;
            Ok(ScanResult {
                catalogs: vec![LoadedCatalog {
                    file_path: path.to_string_lossy().to_string(),
                    unit: outcome.unit,
                }],
                warnings: outcome.warnings,
            })
        }
        None => {
            let ignores = config
                .ignore_patterns()
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            scan_languages_dir(&root, &ignores)
                .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))
        }
    }
}

fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
