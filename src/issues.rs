//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Exit-code policy: severity decides whether `check` fails the build

use enum_dispatch::enum_dispatch;

use crate::catalog::Status;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    Vanished,
    DuplicateMessage,
    PlaceholderMismatch,
    EmptyTranslation,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message reference
// ============================================================

/// Where a message lives: catalog file, line of its `<message>` element,
/// context name, and the source string that keys it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub file_path: String,
    pub line: usize,
    pub language: String,
    pub context: String,
    pub source: String,
}

impl MessageRef {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        language: impl Into<String>,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            language: language.into(),
            context: context.into(),
            source: source.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Message whose translation is not finished yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub message: MessageRef,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message whose source string no longer exists in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub message: MessageRef,
    /// `Vanished` or the legacy `Obsolete`.
    pub status: Status,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Repeated (source, comment) key within one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    /// The winning (last) occurrence.
    pub message: MessageRef,
    pub comment: Option<String>,
    /// How many times the key appears in the context.
    pub occurrences: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Finished translation whose `%1`/`%n` placeholders differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub message: MessageRef,
    /// Placeholders in the source but not the translation.
    pub missing: Vec<String>,
    /// Placeholders in the translation but not the source.
    pub extra: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Message marked finished but carrying no translation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub message: MessageRef,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Catalog file could not be parsed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    DuplicateMessage(DuplicateMessageIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    EmptyTranslation(EmptyTranslationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Vanished(_) => VanishedIssue::severity(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Vanished(_) => VanishedIssue::rule(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog file.
    Message(&'a MessageRef),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for zero-cost dispatch on the
/// `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source string, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "no usable {} translation; lookup falls back to the source text",
            self.message.language
        ))
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked \"{}\": the source string no longer exists in the application",
            self.status
        ))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let comment = match &self.comment {
            Some(comment) => format!(" (comment \"{}\")", comment),
            None => String::new(),
        };
        Some(format!(
            "{} occurrences in context \"{}\"{}; the last one wins",
            self.occurrences, self.message.context, comment
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("translation is missing {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("translation adds {}", self.extra.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("marked finished but the translation text is empty".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
