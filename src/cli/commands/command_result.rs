use crate::catalog::ParseWarning;
use crate::issues::Issue;

/// What a command produced, for the report layer and the exit-code policy.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found. Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Entries or files that were skipped while loading.
    pub warnings: Vec<ParseWarning>,
    /// Number of catalog files that were loaded.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == crate::issues::Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Stats(StatsSummary),
    Query(QuerySummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Languages that were checked, in report order.
    pub languages: Vec<String>,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<LanguageStats>,
}

/// Completion statistics for one language catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub file_path: String,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}

impl LanguageStats {
    pub fn total(&self) -> usize {
        self.finished + self.unfinished + self.vanished
    }

    /// Finished share of the live (non-vanished) messages, in percent.
    pub fn percent_finished(&self) -> f64 {
        let live = self.finished + self.unfinished;
        if live == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / live as f64
        }
    }
}

#[derive(Debug)]
pub struct QuerySummary {
    pub language: String,
    pub context: String,
    pub source: String,
    pub resolved: String,
    /// False when the lookup fell back to the source text.
    pub found: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
